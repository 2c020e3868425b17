use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::log::LogConfig;

pub mod data;
pub mod log;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            data: DataConfig::new(),
            log: LogConfig::new(),
        }
    }
}
