use crate::game::{neighbors, Board, Cell, GameState, Mode, Move, Side, DIRECTIONS};

use super::agent::{play_agent_move, Agent};

/// Tiger bot with no lookahead: take the first capture found, otherwise
/// the first step. Tigers are scanned by ascending cell index and each
/// tiger's directions in up/down/left/right order, so the choice is fully
/// determined by the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyTiger;

impl GreedyTiger {
    pub fn new() -> Self {
        GreedyTiger
    }

    /// The move this bot makes on `board`.
    pub fn choose(board: &Board) -> Option<Move> {
        first_capture(board).or_else(|| first_step(board))
    }
}

fn first_capture(board: &Board) -> Option<Move> {
    board.positions(Cell::Tiger).find_map(|from| {
        DIRECTIONS.into_iter().find_map(|dir| {
            board
                .capture_in(from, dir)
                .map(|(over, to)| Move::Jump { from, over, to })
        })
    })
}

fn first_step(board: &Board) -> Option<Move> {
    board.positions(Cell::Tiger).find_map(|from| {
        neighbors(from)
            .find(|&to| board.is_empty(to))
            .map(|to| Move::Step { from, to })
    })
}

impl Agent for GreedyTiger {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        if state.is_terminal() || state.turn() != Side::Tiger {
            return None;
        }
        Self::choose(state.board())
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

/// Let the greedy bot play the tigers' turn in a vs-computer game.
///
/// Does nothing unless the mode is [`Mode::VsBot`], tigers are to move and
/// the game is still running. The caller runs the terminal check afterwards.
pub fn bot_move_tiger(state: &mut GameState) -> Option<Move> {
    if state.mode() != Mode::VsBot {
        return None;
    }
    play_agent_move(state, &mut GreedyTiger)
}
