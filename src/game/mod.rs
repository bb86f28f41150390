//! Core Tigers and Goats rules: board geometry, sides, and the game state
//! machine driven by cell selections or validated agent moves.

mod board;
mod player;
mod state;

pub use board::{
    coords, index, is_adjacent, jump_midpoint, jump_path, neighbors, offset, Board, Cell,
    Direction, CELLS, CORNERS, DIRECTIONS, SIZE,
};
pub use player::{Mode, Side};
pub use state::{GameState, Move, MoveError, Outcome, Phase, CAPTURES_TO_WIN, TOTAL_GOATS};
