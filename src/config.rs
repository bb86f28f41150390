use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::game::Mode;
use crate::session::{display_name, DEFAULT_NAME};

/// Upper bound on the bot delay, so a typo cannot stall the game.
pub const MAX_BOT_DELAY_MS: u64 = 5_000;

/// Who is playing and against whom.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub mode: Mode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            name: DEFAULT_NAME.to_string(),
            mode: Mode::TwoPlayer,
        }
    }
}

impl PlayerConfig {
    /// Name as shown in the UI: trimmed, blank falls back to "Player".
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

/// Computer opponent settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Pause before the bot replies, in milliseconds
    pub delay_ms: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig { delay_ms: 200 }
    }
}

impl BotConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub player: PlayerConfig,
    pub bot: BotConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.delay_ms > MAX_BOT_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "bot.delay_ms must be <= {}",
                MAX_BOT_DELAY_MS
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
