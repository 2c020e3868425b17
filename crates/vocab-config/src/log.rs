use std::env;

use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    false
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit logs as JSON lines
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: default_json(),
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        let level = env::var("VOCAB_LOG").unwrap_or_else(|_| default_level());

        let json = env::var("VOCAB_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_json());

        Self { level, json }
    }
}
