use super::board::Cell;

/// The two sides. Also the type of `turn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Goat,
    Tiger,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Goat => Side::Tiger,
            Side::Tiger => Side::Goat,
        }
    }

    /// Convert side to the cell its pieces occupy
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Goat => Cell::Goat,
            Side::Tiger => Cell::Tiger,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::Goat => "Goat",
            Side::Tiger => "Tiger",
        }
    }
}

/// Who drives the tigers. Fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays goats, the computer plays tigers.
    VsBot,
}

impl Mode {
    /// Parse the handoff value: `"bot"` selects the computer opponent,
    /// anything else (including garbage) means two players.
    pub fn from_param(s: &str) -> Mode {
        if s == "bot" {
            Mode::VsBot
        } else {
            Mode::TwoPlayer
        }
    }

    /// Handoff value, the inverse of [`Mode::from_param`].
    pub fn as_param(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "two",
            Mode::VsBot => "bot",
        }
    }

    /// Human-readable label shown next to the player name.
    pub fn label(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "2 Players (Friends)",
            Mode::VsBot => "Vs Computer (Tigers)",
        }
    }
}

impl From<String> for Mode {
    fn from(s: String) -> Self {
        Mode::from_param(&s)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_param().to_string()
    }
}
