use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use vocab_config::Config;

/// Config from a JSON file, or from the environment when no file is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    let file = File::open(path)
        .with_context(|| format!("failed to open config file {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}
