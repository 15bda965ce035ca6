use std::path::Path;

use ramcool_core::RamCoolConfig;

use crate::error::{PassError, Result};

/// Load a TOML settings file. Keys mirror [`RamCoolConfig`] field names;
/// anything omitted keeps its default.
pub fn load_settings(path: &Path) -> Result<RamCoolConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| PassError::ReadSettings {
        path: path.to_path_buf(),
        source,
    })?;
    let config: RamCoolConfig = toml::from_str(&text).map_err(|source| {
        PassError::ParseSettings {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!("loaded settings from {}: {config:?}", path.display());
    Ok(config)
}
