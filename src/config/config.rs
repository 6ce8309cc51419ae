use std::env;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, DATA_DIR_ENV};
use crate::store::FileStorage;

/// Where the settings blob lives.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
        }
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_dir.clone())
    }
}

pub fn load_config() -> Config {
    // First check environment variable
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Config::with_data_dir(dir);
        }
    }

    Config::default()
}

fn default_data_dir() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(APP_DIR_NAME),
        None => PathBuf::from(format!(".{}", APP_DIR_NAME)),
    }
}
