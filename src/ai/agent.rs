use crate::game::{GameState, Move};

/// Universal interface for computer players.
pub trait Agent {
    /// Select a move for the side to move, or `None` if it has none (or it
    /// is not a side this agent plays).
    fn select_move(&mut self, state: &GameState) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Ask `agent` for a move and apply it. A rejected move is logged and the
/// state is left unchanged. The terminal check is left to the caller.
pub fn play_agent_move(state: &mut GameState, agent: &mut dyn Agent) -> Option<Move> {
    let mv = agent.select_move(state)?;
    match state.apply_move(mv) {
        Ok(()) => Some(mv),
        Err(err) => {
            log::warn!("{} agent produced rejected move {:?}: {:?}", agent.name(), mv, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Mode;

    /// Always tries to place a goat on the tiger in the corner.
    struct Stubborn;

    impl Agent for Stubborn {
        fn select_move(&mut self, _state: &GameState) -> Option<Move> {
            Some(Move::Place { to: 0 })
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    /// Places on the first empty cell.
    struct FirstEmpty;

    impl Agent for FirstEmpty {
        fn select_move(&mut self, state: &GameState) -> Option<Move> {
            state.legal_moves().first().copied()
        }

        fn name(&self) -> &str {
            "FirstEmpty"
        }
    }

    #[test]
    fn test_rejected_agent_move_leaves_state() {
        let mut state = GameState::new(Mode::TwoPlayer);
        let before = state;
        assert_eq!(play_agent_move(&mut state, &mut Stubborn), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_agent_move_is_applied() {
        let mut state = GameState::new(Mode::TwoPlayer);
        assert_eq!(play_agent_move(&mut state, &mut FirstEmpty), Some(Move::Place { to: 1 }));
        assert_eq!(state.goats_placed(), 1);
        assert_eq!(state.turn(), crate::game::Side::Tiger);
    }
}
