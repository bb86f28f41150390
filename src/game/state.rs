use super::board::{is_adjacent, jump_midpoint, neighbors, offset, Board, Cell, CELLS, DIRECTIONS};
use super::player::{Mode, Side};
use crate::error::PositionError;

/// Goats available to the goat side over a whole game.
pub const TOTAL_GOATS: u8 = 20;

/// Captures that end the game in the tigers' favour.
pub const CAPTURES_TO_WIN: u8 = 5;

/// Derived from `goats_placed`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placing,
    Moving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TigersWin,
    GoatsWin,
}

impl Outcome {
    /// Status line shown once the game is over.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::TigersWin => "Tigers win (5 goats captured).",
            Outcome::GoatsWin => "Goats win (all tigers blocked).",
        }
    }

    pub fn winner(self) -> Side {
        match self {
            Outcome::TigersWin => Side::Tiger,
            Outcome::GoatsWin => Side::Goat,
        }
    }
}

/// A completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Goat enters the board (placing phase).
    Place { to: usize },
    /// Any piece moves to an empty orthogonal neighbour.
    Step { from: usize, to: usize },
    /// Tiger jumps over the goat on `over` and removes it.
    Jump { from: usize, over: usize, to: usize },
}

impl Move {
    pub fn destination(self) -> usize {
        match self {
            Move::Place { to } | Move::Step { to, .. } | Move::Jump { to, .. } => to,
        }
    }

    pub fn is_capture(self) -> bool {
        matches!(self, Move::Jump { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    OutOfBounds,
    WrongTurn,
    WrongPhase,
    Illegal,
}

/// Meaning of a cell selection, keyed by (turn, phase, mode, selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Frozen,
    PlaceGoat,
    PickGoat,
    MoveGoat { from: usize },
    BotTurn,
    PickTiger,
    MoveTiger { from: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Side,
    goats_placed: u8,
    goats_captured: u8,
    selected: Option<usize>,
    outcome: Option<Outcome>,
    mode: Mode,
}

impl GameState {
    /// Fresh game: tigers in the corners, goats to move
    pub fn new(mode: Mode) -> Self {
        log::info!("new game ({})", mode.label());
        GameState {
            board: Board::starting(),
            turn: Side::Goat,
            goats_placed: 0,
            goats_captured: 0,
            selected: None,
            outcome: None,
            mode,
        }
    }

    /// Build a mid-game position. The outcome is left unset; call
    /// [`GameState::check_terminal`] to evaluate it.
    pub fn from_position(
        board: Board,
        turn: Side,
        goats_placed: u8,
        goats_captured: u8,
        mode: Mode,
    ) -> Result<Self, PositionError> {
        let tigers = board.count(Cell::Tiger);
        if tigers != 4 {
            return Err(PositionError::TigerCount(tigers));
        }
        if goats_placed > TOTAL_GOATS {
            return Err(PositionError::TooManyGoats(goats_placed));
        }
        if goats_captured > CAPTURES_TO_WIN {
            return Err(PositionError::TooManyCaptures(goats_captured));
        }
        if goats_captured > goats_placed {
            return Err(PositionError::CapturesExceedPlaced {
                captured: goats_captured,
                placed: goats_placed,
            });
        }
        let on_board = board.count(Cell::Goat);
        let expected = usize::from(goats_placed - goats_captured);
        if on_board != expected {
            return Err(PositionError::GoatCountMismatch { on_board, expected });
        }

        Ok(GameState {
            board,
            turn,
            goats_placed,
            goats_captured,
            selected: None,
            outcome: None,
            mode,
        })
    }

    /// Start over in the same mode
    pub fn reset(&mut self) {
        *self = GameState::new(self.mode);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn goats_placed(&self) -> u8 {
        self.goats_placed
    }

    pub fn goats_captured(&self) -> u8 {
        self.goats_captured
    }

    pub fn goats_on_board(&self) -> u8 {
        self.goats_placed - self.goats_captured
    }

    /// Piece picked up and waiting for a destination
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Terminal status text, `None` while the game is running
    pub fn status(&self) -> Option<&'static str> {
        self.outcome.map(Outcome::message)
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.goats_placed < TOTAL_GOATS {
            Phase::Placing
        } else {
            Phase::Moving
        }
    }

    /// "Placing (k/20)" or "Moving"
    pub fn phase_label(&self) -> String {
        match self.phase() {
            Phase::Placing => format!("Placing ({}/{})", self.goats_placed, TOTAL_GOATS),
            Phase::Moving => "Moving".to_string(),
        }
    }

    fn selection_step(&self) -> Selection {
        if self.outcome.is_some() {
            return Selection::Frozen;
        }
        match (self.turn, self.phase(), self.mode, self.selected) {
            (Side::Goat, Phase::Placing, _, _) => Selection::PlaceGoat,
            (Side::Goat, Phase::Moving, _, None) => Selection::PickGoat,
            (Side::Goat, Phase::Moving, _, Some(from)) => Selection::MoveGoat { from },
            (Side::Tiger, _, Mode::VsBot, _) => Selection::BotTurn,
            (Side::Tiger, _, Mode::TwoPlayer, None) => Selection::PickTiger,
            (Side::Tiger, _, Mode::TwoPlayer, Some(from)) => Selection::MoveTiger { from },
        }
    }

    /// Interpret a click on `index` for the side to move.
    ///
    /// Illegal selections leave the state untouched, apart from moving the
    /// selection to another of the mover's own pieces. Returns `true` when a
    /// full move was made; the terminal check runs right after it.
    pub fn select_cell(&mut self, index: usize) -> bool {
        if index >= CELLS {
            return false;
        }
        let target = self.board.get(index);

        let mv = match self.selection_step() {
            Selection::Frozen | Selection::BotTurn => return false,
            Selection::PlaceGoat => {
                if target != Cell::Empty {
                    return false;
                }
                Move::Place { to: index }
            }
            Selection::PickGoat => {
                if target == Cell::Goat {
                    self.selected = Some(index);
                }
                return false;
            }
            Selection::MoveGoat { from } => {
                if target == Cell::Empty && is_adjacent(from, index) {
                    Move::Step { from, to: index }
                } else {
                    if target == Cell::Goat {
                        self.selected = Some(index);
                    }
                    return false;
                }
            }
            Selection::PickTiger => {
                if target == Cell::Tiger {
                    self.selected = Some(index);
                }
                return false;
            }
            Selection::MoveTiger { from } => match self.tiger_move(from, index) {
                Some(mv) => mv,
                None => {
                    if target == Cell::Tiger {
                        self.selected = Some(index);
                    }
                    return false;
                }
            },
        };

        self.commit(mv);
        self.check_terminal();
        true
    }

    /// Validate a tiger going from `from` to `to`: a step onto an empty
    /// neighbour or a straight jump over a goat onto an empty cell.
    pub fn tiger_move(&self, from: usize, to: usize) -> Option<Move> {
        if from >= CELLS || to >= CELLS || self.board.get(from) != Cell::Tiger {
            return None;
        }
        if !self.board.is_empty(to) {
            return None;
        }
        if is_adjacent(from, to) {
            return Some(Move::Step { from, to });
        }
        let over = jump_midpoint(from, to)?;
        (self.board.get(over) == Cell::Goat).then_some(Move::Jump { from, over, to })
    }

    /// Apply a move chosen by an agent. Nothing changes on error. The
    /// terminal check is left to the caller.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.validate(mv)?;
        self.commit(mv);
        Ok(())
    }

    fn validate(&self, mv: Move) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match mv {
            Move::Place { to } => {
                if to >= CELLS {
                    return Err(MoveError::OutOfBounds);
                }
                if self.turn != Side::Goat {
                    return Err(MoveError::WrongTurn);
                }
                if self.phase() != Phase::Placing {
                    return Err(MoveError::WrongPhase);
                }
                if !self.board.is_empty(to) {
                    return Err(MoveError::Illegal);
                }
            }
            Move::Step { from, to } => {
                if from >= CELLS || to >= CELLS {
                    return Err(MoveError::OutOfBounds);
                }
                match self.board.get(from) {
                    Cell::Empty => return Err(MoveError::Illegal),
                    piece if piece != self.turn.to_cell() => return Err(MoveError::WrongTurn),
                    _ => {}
                }
                if self.turn == Side::Goat && self.phase() == Phase::Placing {
                    return Err(MoveError::WrongPhase);
                }
                if !is_adjacent(from, to) || !self.board.is_empty(to) {
                    return Err(MoveError::Illegal);
                }
            }
            Move::Jump { from, over, to } => {
                if from >= CELLS || over >= CELLS || to >= CELLS {
                    return Err(MoveError::OutOfBounds);
                }
                if self.turn != Side::Tiger {
                    return Err(MoveError::WrongTurn);
                }
                if self.tiger_move(from, to) != Some(mv) {
                    return Err(MoveError::Illegal);
                }
            }
        }
        Ok(())
    }

    /// Mutate the board for an already validated move and pass the turn.
    fn commit(&mut self, mv: Move) {
        match mv {
            Move::Place { to } => {
                self.board.set(to, Cell::Goat);
                self.goats_placed += 1;
            }
            Move::Step { from, to } => {
                let piece = self.board.get(from);
                self.board.set(from, Cell::Empty);
                self.board.set(to, piece);
            }
            Move::Jump { from, over, to } => {
                self.board.set(from, Cell::Empty);
                self.board.set(over, Cell::Empty);
                self.board.set(to, Cell::Tiger);
                self.goats_captured += 1;
            }
        }
        log::debug!("{} played {:?}", self.turn.name(), mv);
        self.selected = None;
        self.turn = self.turn.other();
    }

    /// All legal moves for the side to move, in scan order: cells
    /// ascending, then up/down/left/right for each piece.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let board = &self.board;
        match (self.turn, self.phase()) {
            (Side::Goat, Phase::Placing) => (0..CELLS)
                .filter(|&to| board.is_empty(to))
                .map(|to| Move::Place { to })
                .collect(),
            (Side::Goat, Phase::Moving) => board
                .positions(Cell::Goat)
                .flat_map(|from| {
                    neighbors(from)
                        .filter(|&to| board.is_empty(to))
                        .map(move |to| Move::Step { from, to })
                })
                .collect(),
            (Side::Tiger, _) => {
                let mut moves = Vec::new();
                for from in board.positions(Cell::Tiger) {
                    for dir in DIRECTIONS {
                        if let Some(to) = offset(from, dir, 1).filter(|&to| board.is_empty(to)) {
                            moves.push(Move::Step { from, to });
                        }
                        if let Some((over, to)) = board.capture_in(from, dir) {
                            moves.push(Move::Jump { from, over, to });
                        }
                    }
                }
                moves
            }
        }
    }

    /// True if some tiger can step to an empty neighbour or capture.
    pub fn tiger_has_legal_move(&self) -> bool {
        self.board.positions(Cell::Tiger).any(|tiger| {
            self.board.has_empty_neighbor(tiger)
                || DIRECTIONS
                    .into_iter()
                    .any(|dir| self.board.capture_in(tiger, dir).is_some())
        })
    }

    /// Set the outcome if the game just ended. Five captures are checked
    /// before blocked tigers, so a move that does both is a tiger win.
    pub fn check_terminal(&mut self) -> Option<Outcome> {
        if self.outcome.is_none() {
            self.outcome = if self.goats_captured >= CAPTURES_TO_WIN {
                Some(Outcome::TigersWin)
            } else if !self.tiger_has_legal_move() {
                Some(Outcome::GoatsWin)
            } else {
                None
            };
            if let Some(outcome) = self.outcome {
                log::info!("{}", outcome.message());
            }
        }
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(layout: &str, turn: Side, placed: u8, captured: u8, mode: Mode) -> GameState {
        let board: Board = layout.parse().unwrap();
        GameState::from_position(board, turn, placed, captured, mode).unwrap()
    }

    /// All goats placed, moving phase, four captured.
    fn moving_position() -> GameState {
        position(
            "
            T.G.T
            GGGGG
            G.G.G
            GGGGG
            TG.GT",
            Side::Goat,
            20,
            4,
            Mode::TwoPlayer,
        )
    }

    /// Tiger on 2 next to a goat on 3 with 4 empty.
    fn capture_position() -> GameState {
        position(
            "
            ..TG.
            .....
            T....
            ..G..
            T.G.T",
            Side::Tiger,
            3,
            0,
            Mode::TwoPlayer,
        )
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(Mode::TwoPlayer);
        assert_eq!(state.turn(), Side::Goat);
        assert_eq!(state.goats_placed(), 0);
        assert_eq!(state.goats_captured(), 0);
        assert_eq!(state.selected(), None);
        assert_eq!(state.status(), None);
        assert_eq!(state.phase(), Phase::Placing);
        assert_eq!(state.phase_label(), "Placing (0/20)");
        assert_eq!(*state.board(), Board::starting());
    }

    #[test]
    fn test_placement_on_every_cell() {
        for i in 0..CELLS {
            let mut state = GameState::new(Mode::TwoPlayer);
            let before = state;
            let moved = state.select_cell(i);
            if [0, 4, 20, 24].contains(&i) {
                assert!(!moved);
                assert_eq!(state, before, "placing on tiger cell {} must be a no-op", i);
            } else {
                assert!(moved);
                assert_eq!(state.board().get(i), Cell::Goat);
                assert_eq!(state.goats_placed(), 1);
                assert_eq!(state.turn(), Side::Tiger);
            }
        }
    }

    #[test]
    fn test_out_of_range_selection_is_noop() {
        let mut state = GameState::new(Mode::TwoPlayer);
        let before = state;
        assert!(!state.select_cell(25));
        assert!(!state.select_cell(usize::MAX));
        assert_eq!(state, before);
    }

    #[test]
    fn test_placing_on_occupied_cell_is_noop() {
        let mut state = GameState::new(Mode::TwoPlayer);
        state.select_cell(12);
        state.select_cell(0);
        state.select_cell(1); // tiger 0 -> 1
        let before = state;
        assert!(!state.select_cell(12));
        assert!(!state.select_cell(1));
        assert_eq!(state, before);
    }

    #[test]
    fn test_twentieth_placement_enters_moving_phase() {
        let mut state = position(
            "
            TGGGT
            GGGGG
            G.GGG
            GGGGG
            T.GGT",
            Side::Goat,
            19,
            0,
            Mode::TwoPlayer,
        );
        assert_eq!(state.phase_label(), "Placing (19/20)");
        assert!(state.select_cell(11));
        assert_eq!(state.goats_placed(), 20);
        assert_eq!(state.phase(), Phase::Moving);
        assert_eq!(state.phase_label(), "Moving");

        state.select_cell(20);
        assert!(state.select_cell(21));
        assert_eq!(state.turn(), Side::Goat);

        // A 21st placement is not possible: the only empty cell stays empty.
        let before = state;
        assert!(!state.select_cell(20));
        assert_eq!(state, before);

        // Clicking a goat picks it up instead.
        assert!(!state.select_cell(15));
        assert_eq!(state.selected(), Some(15));
        assert!(state.select_cell(20));
        assert_eq!(state.board().get(20), Cell::Goat);
        assert_eq!(state.board().get(15), Cell::Empty);
        assert_eq!(state.goats_placed(), 20);
        // That step also boxed in every tiger.
        assert_eq!(state.outcome(), Some(Outcome::GoatsWin));
    }

    #[test]
    fn test_goat_moves_to_empty_orthogonal_neighbor() {
        let mut state = moving_position();
        assert!(!state.select_cell(6));
        assert_eq!(state.selected(), Some(6));

        assert!(state.select_cell(11));
        assert_eq!(state.board().get(11), Cell::Goat);
        assert_eq!(state.board().get(6), Cell::Empty);
        assert_eq!(state.selected(), None);
        assert_eq!(state.turn(), Side::Tiger);
    }

    #[test]
    fn test_goat_rejects_diagonal_and_distant_targets() {
        let mut state = moving_position();
        state.select_cell(7);
        let before = state;
        // 1, 3, 11 and 13 are the empty diagonals of 7; 22 is far away.
        for target in [1, 3, 11, 13, 22] {
            assert!(!state.select_cell(target), "target {}", target);
            assert_eq!(state, before, "target {}", target);
        }
        // A tiger is not a destination either.
        assert!(!state.select_cell(0));
        assert_eq!(state, before);
    }

    #[test]
    fn test_goat_reselect_switches_piece() {
        let mut state = moving_position();
        state.select_cell(6);
        assert!(!state.select_cell(8));
        assert_eq!(state.selected(), Some(8));
        assert!(state.select_cell(13));
        assert_eq!(state.board().get(13), Cell::Goat);
        assert_eq!(state.board().get(8), Cell::Empty);
        assert_eq!(state.board().get(6), Cell::Goat);
    }

    #[test]
    fn test_picking_empty_or_tiger_without_selection_is_noop() {
        let mut state = moving_position();
        let before = state;
        assert!(!state.select_cell(1));
        assert!(!state.select_cell(0));
        assert_eq!(state, before);
    }

    #[test]
    fn test_tiger_simple_step() {
        let mut state = GameState::new(Mode::TwoPlayer);
        state.select_cell(12);

        let before = state;
        assert!(!state.select_cell(12)); // not a tiger
        assert_eq!(state, before);

        assert!(!state.select_cell(0));
        assert_eq!(state.selected(), Some(0));
        let picked = state;
        for target in [3, 6, 10, 12] {
            assert!(!state.select_cell(target), "target {}", target);
            assert_eq!(state, picked, "target {}", target);
        }

        assert!(state.select_cell(5));
        assert_eq!(state.board().get(5), Cell::Tiger);
        assert_eq!(state.board().get(0), Cell::Empty);
        assert_eq!(state.turn(), Side::Goat);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_tiger_reselect_to_other_tiger() {
        let mut state = GameState::new(Mode::TwoPlayer);
        state.select_cell(12);
        state.select_cell(0);
        assert!(!state.select_cell(4));
        assert_eq!(state.selected(), Some(4));
        assert!(state.select_cell(3));
        assert_eq!(state.board().get(3), Cell::Tiger);
        assert_eq!(state.board().get(0), Cell::Tiger);
    }

    #[test]
    fn test_jump_capture() {
        let mut state = capture_position();
        state.select_cell(2);
        assert!(state.select_cell(4));
        assert_eq!(state.board().get(2), Cell::Empty);
        assert_eq!(state.board().get(3), Cell::Empty);
        assert_eq!(state.board().get(4), Cell::Tiger);
        assert_eq!(state.goats_captured(), 1);
        assert_eq!(state.goats_on_board(), 2);
        assert_eq!(state.turn(), Side::Goat);
        assert_eq!(state.status(), None);
    }

    #[test]
    fn test_jump_over_empty_midpoint_fails() {
        let mut state = capture_position();
        state.select_cell(2);
        let before = state;
        assert!(!state.select_cell(12)); // over empty 7
        assert_eq!(state, before);

        let mut state = capture_position();
        state.select_cell(24);
        let before = state;
        assert!(!state.select_cell(14)); // over empty 19
        assert!(!state.select_cell(22)); // lands on a goat
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_over_tiger_fails() {
        let mut state = position(
            "
            TT...
            G....
            .....
            .....
            T...T",
            Side::Tiger,
            1,
            0,
            Mode::TwoPlayer,
        );
        assert_eq!(state.tiger_move(0, 2), None);
        assert_eq!(state.tiger_move(0, 10), Some(Move::Jump { from: 0, over: 5, to: 10 }));

        state.select_cell(0);
        let before = state;
        assert!(!state.select_cell(2));
        assert_eq!(state, before);
    }

    #[test]
    fn test_fifth_capture_wins_for_tigers() {
        let mut state = position(
            "
            ..TG.
            ...G.
            T.GG.
            ..G..
            TG..T",
            Side::Tiger,
            10,
            4,
            Mode::TwoPlayer,
        );
        state.select_cell(2);
        assert!(state.select_cell(4));
        assert_eq!(state.goats_captured(), 5);
        assert_eq!(state.outcome(), Some(Outcome::TigersWin));
        assert_eq!(state.status(), Some("Tigers win (5 goats captured)."));

        let frozen = state;
        for i in 0..CELLS {
            assert!(!state.select_cell(i));
        }
        assert_eq!(state, frozen);
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.apply_move(Move::Step { from: 8, to: 9 }), Err(MoveError::GameOver));
    }

    #[test]
    fn test_blocked_tigers_win_for_goats() {
        let mut state = position(
            "
            TG.GT
            GGGGG
            GGGGG
            GGGGG
            TGGGT",
            Side::Goat,
            20,
            0,
            Mode::TwoPlayer,
        );
        // The tiger on 0 can still capture over 1 into 2.
        assert!(state.tiger_has_legal_move());
        assert_eq!(state.check_terminal(), None);

        state.select_cell(7);
        assert!(state.select_cell(2));
        assert!(!state.tiger_has_legal_move());
        assert_eq!(state.outcome(), Some(Outcome::GoatsWin));
        assert_eq!(state.status(), Some("Goats win (all tigers blocked)."));
        assert_eq!(state.goats_captured(), 0);

        let frozen = state;
        state.select_cell(12);
        state.select_cell(7);
        assert_eq!(state, frozen);
    }

    /// Tigers huddled in the top-left corner with every exit covered.
    const HUDDLE: &str = "
        TTGG.
        TTGG.
        GGGGG
        GGGGG
        G....";

    #[test]
    fn test_capture_count_checked_before_blocked_tigers() {
        let mut state = position(HUDDLE, Side::Goat, 20, 5, Mode::TwoPlayer);
        assert!(!state.tiger_has_legal_move());
        assert_eq!(state.check_terminal(), Some(Outcome::TigersWin));

        let layout = HUDDLE.replace("G....", "GG...");
        let mut state = position(&layout, Side::Goat, 20, 4, Mode::TwoPlayer);
        assert_eq!(state.check_terminal(), Some(Outcome::GoatsWin));
    }

    #[test]
    fn test_check_terminal_keeps_first_outcome() {
        let mut state = position(HUDDLE, Side::Goat, 20, 5, Mode::TwoPlayer);
        state.check_terminal();
        let frozen = state;
        assert_eq!(state.check_terminal(), Some(Outcome::TigersWin));
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_bot_mode_ignores_tiger_clicks() {
        let mut state = GameState::new(Mode::VsBot);
        state.select_cell(12);
        assert_eq!(state.turn(), Side::Tiger);
        let before = state;
        assert!(!state.select_cell(0));
        assert!(!state.select_cell(1));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_move_validation() {
        let mut state = GameState::new(Mode::TwoPlayer);
        let before = state;
        assert_eq!(state.apply_move(Move::Place { to: 0 }), Err(MoveError::Illegal));
        assert_eq!(state.apply_move(Move::Place { to: 30 }), Err(MoveError::OutOfBounds));
        assert_eq!(state.apply_move(Move::Step { from: 0, to: 1 }), Err(MoveError::WrongTurn));
        assert_eq!(
            state.apply_move(Move::Jump { from: 0, over: 1, to: 2 }),
            Err(MoveError::WrongTurn)
        );
        assert_eq!(state.apply_move(Move::Step { from: 6, to: 7 }), Err(MoveError::Illegal));
        assert_eq!(state, before);

        state.apply_move(Move::Place { to: 1 }).unwrap();
        assert_eq!(state.apply_move(Move::Place { to: 2 }), Err(MoveError::WrongTurn));
        assert_eq!(state.apply_move(Move::Step { from: 1, to: 2 }), Err(MoveError::WrongTurn));
        assert_eq!(
            state.apply_move(Move::Jump { from: 0, over: 1, to: 3 }),
            Err(MoveError::Illegal)
        );
        state.apply_move(Move::Jump { from: 0, over: 1, to: 2 }).unwrap();
        assert_eq!(state.goats_captured(), 1);
        assert_eq!(state.turn(), Side::Goat);
    }

    #[test]
    fn test_goat_step_rejected_while_placing() {
        let mut state = GameState::new(Mode::TwoPlayer);
        state.apply_move(Move::Place { to: 12 }).unwrap();
        state.apply_move(Move::Step { from: 0, to: 1 }).unwrap();
        assert_eq!(
            state.apply_move(Move::Step { from: 12, to: 13 }),
            Err(MoveError::WrongPhase)
        );
    }

    #[test]
    fn test_legal_moves_initial() {
        let state = GameState::new(Mode::TwoPlayer);
        let moves = state.legal_moves();
        assert_eq!(moves.len(), 21);
        assert_eq!(moves[0], Move::Place { to: 1 });
    }

    #[test]
    fn test_legal_tiger_moves_in_scan_order() {
        let state = capture_position();
        let moves = state.legal_moves();
        // Tiger 2: down to 7, left to 1, right is a capture over 3.
        assert_eq!(
            &moves[..3],
            &[
                Move::Step { from: 2, to: 7 },
                Move::Step { from: 2, to: 1 },
                Move::Jump { from: 2, over: 3, to: 4 },
            ]
        );
        for mv in &moves {
            let mut copy = state;
            copy.apply_move(*mv).unwrap();
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = capture_position();
        state.select_cell(2);
        state.select_cell(4);
        state.reset();
        assert_eq!(state, GameState::new(Mode::TwoPlayer));
    }

    #[test]
    fn test_from_position_rejects_inconsistent_counts() {
        let board = Board::starting();
        assert_eq!(
            GameState::from_position(board, Side::Goat, 3, 0, Mode::TwoPlayer),
            Err(PositionError::GoatCountMismatch { on_board: 0, expected: 3 })
        );
        assert_eq!(
            GameState::from_position(board, Side::Goat, 21, 0, Mode::TwoPlayer),
            Err(PositionError::TooManyGoats(21))
        );
        assert_eq!(
            GameState::from_position(board, Side::Goat, 2, 3, Mode::TwoPlayer),
            Err(PositionError::CapturesExceedPlaced { captured: 3, placed: 2 })
        );
        assert_eq!(
            GameState::from_position(board, Side::Goat, 20, 6, Mode::TwoPlayer),
            Err(PositionError::TooManyCaptures(6))
        );
        assert_eq!(
            GameState::from_position(Board::new(), Side::Goat, 0, 0, Mode::TwoPlayer),
            Err(PositionError::TigerCount(0))
        );
    }
}
