//! Console config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use metriq_core::error::{MetriqError, Result};

pub use schema::{ApiSection, ConsoleConfig, ViewSection};

pub fn load_from_file(path: &str) -> Result<ConsoleConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MetriqError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ConsoleConfig> {
    let cfg: ConsoleConfig = serde_yaml::from_str(s)
        .map_err(|e| MetriqError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the config file when present, fall back to defaults otherwise.
/// A present-but-invalid file is still an error.
pub fn load_or_default(path: &str) -> Result<ConsoleConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        tracing::debug!(%path, "config file absent, using defaults");
        Ok(ConsoleConfig::default())
    }
}
