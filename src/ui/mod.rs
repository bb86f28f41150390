//! Terminal UI: a cursor-driven 5x5 board that forwards cell selections to
//! a [`crate::session::Session`] and redraws from its state.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
