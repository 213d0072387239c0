//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use roomrelay_core::error::{RelayError, Result};

pub use schema::{RelayConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<RelayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RelayError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RelayConfig> {
    let cfg: RelayConfig = serde_yaml::from_str(s)
        .map_err(|e| RelayError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load config from `path`, falling back to built-in defaults when the file
/// does not exist. A present-but-invalid file is still an error.
pub fn load_or_default(path: &str) -> Result<RelayConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        tracing::info!(%path, "config file not found, using defaults");
        Ok(RelayConfig::default())
    }
}
