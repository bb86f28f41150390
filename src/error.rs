use std::path::PathBuf;

/// Errors that can occur when building a position by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("unknown cell symbol '{0}' (expected T, G or .)")]
    BadSymbol(char),

    #[error("layout has {0} cells, expected 25")]
    BadLength(usize),

    #[error("position has {0} tigers, expected 4")]
    TigerCount(usize),

    #[error("{0} goats placed, at most 20 exist")]
    TooManyGoats(u8),

    #[error("{0} goats captured, the game ends at 5")]
    TooManyCaptures(u8),

    #[error("{captured} goats captured but only {placed} placed")]
    CapturesExceedPlaced { captured: u8, placed: u8 },

    #[error("{on_board} goats on the board, counters imply {expected}")]
    GoatCountMismatch { on_board: usize, expected: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
