//! # Tigers and Goats
//!
//! A Bagh-Chal style hunt game on a 5x5 grid: four tigers start in the
//! corners, twenty goats are placed one at a time and then move. Tigers win
//! after five captures, goats win once no tiger can move. Features a
//! terminal UI built with Ratatui and a greedy computer tiger.
//!
//! ## Modules
//!
//! - [`game`]: rules engine (board, sides, selection state machine, terminal checks)
//! - [`ai`]: agent trait, greedy tiger bot, seeded random agent
//! - [`session`]: one game plus the deferred bot reply
//! - [`ui`]: terminal UI: board widget, game view, event loop
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
