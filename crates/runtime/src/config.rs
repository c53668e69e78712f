//! Behaviour configuration files.
//!
//! Files are JSON objects whose keys are [`BehaviorConfig`] field names.
//! Missing keys keep their defaults, so a file only lists what it overrides.
use std::path::Path;

use maze_core::BehaviorConfig;

use crate::api::{DecisionError, Result};

/// Parses a behaviour configuration from JSON text.
pub fn parse_behavior_config(text: &str) -> Result<BehaviorConfig> {
    let mut config: BehaviorConfig =
        serde_json::from_str(text).map_err(DecisionError::ConfigParse)?;
    config.hotspot_interval = config.hotspot_interval.max(1);
    Ok(config)
}

/// Reads and parses a behaviour configuration file.
pub fn load_behavior_config(path: impl AsRef<Path>) -> Result<BehaviorConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DecisionError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_behavior_config(&text)?;
    tracing::debug!(path = %path.display(), ?config, "behaviour config loaded");
    Ok(config)
}
