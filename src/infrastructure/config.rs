//! Configuration management

use crate::error::{MoodlogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "moodlog.toml";
pub const DATA_ENV: &str = "MOODLOG_DATA";
const DEFAULT_DATA_FILE: &str = "data/journal.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: default_data_file(),
        }
    }
}

impl Config {
    /// Load moodlog.toml from `dir` (defaults if absent), then apply MOODLOG_DATA
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut config = Self::read_file(dir)?;

        if let Ok(data) = std::env::var(DATA_ENV) {
            config.data_file = PathBuf::from(data);
        }

        if config.data_file.as_os_str().is_empty() {
            return Err(MoodlogError::Config(
                "data_file must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    fn read_file(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(MoodlogError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Data file path, resolved against `dir` when relative
    pub fn data_path(&self, dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            dir.join(&self.data_file)
        }
    }
}
