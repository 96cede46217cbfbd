use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(consts::APP_DIR_NAME).join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the path at which the high score should be stored: the file
    /// given in the configuration or, if that is not set, a file in the local
    /// data directory.  Returns `None` if saving is disabled or no path could
    /// be determined.
    pub(crate) fn high_score_file(&self) -> Option<PathBuf> {
        if !self.files.save_high_score {
            return None;
        }
        self.files
            .high_score_file
            .clone()
            .or_else(|| data_file("highscore.json"))
    }

    /// Return the path to write log messages to
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.files
            .log_file
            .clone()
            .or_else(|| data_file("gridsnake.log"))
    }
}

fn data_file(name: &str) -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join(consts::APP_DIR_NAME).join(name))
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Time between movements of the snake
    pub(crate) tick_period: Duration,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            tick_period: consts::TICK_PERIOD,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    tick_millis: u64,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            tick_millis: consts::TICK_MILLIS,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, ConfigError> {
        if value.tick_millis == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(GameConfig {
            tick_period: Duration::from_millis(value.tick_millis),
        })
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score at all
    save_high_score: bool,

    /// Path to the log file
    log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("game.tick-millis must be greater than zero")]
    ZeroTick,
}
