use std::env;

use serde::{Deserialize, Serialize};

/// Where word books are read from
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Overrides the base directory; `books` is still appended
    pub data_dir: Option<String>,
    /// Extraction directory of a packaged build
    pub bundle_dir: Option<String>,
}

impl DataConfig {
    pub fn new() -> Self {
        let data_dir = env::var("VOCAB_DATA_DIR").ok().filter(|v| !v.is_empty());
        let bundle_dir = env::var("VOCAB_BUNDLE_DIR").ok().filter(|v| !v.is_empty());

        Self {
            data_dir,
            bundle_dir,
        }
    }
}
