use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::ShopError;

/// Shop configuration (loaded from `shop.toml`)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Directory holding `weapons/`, `scenes/` and `characters.toml`
    pub data_dir: PathBuf,
    /// Name the merchant uses in the trade-in dialogue
    pub merchant_name: String,
    /// Percentage of a weapon's cost credited on trade-in
    pub trade_in_percent: i32,
    /// Persist viewpoints as JSON here; in memory when unset
    pub viewpoint_dir: Option<PathBuf>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            merchant_name: "MightyE".to_string(),
            trade_in_percent: 75,
            viewpoint_dir: None,
        }
    }
}

impl ShopConfig {
    /// Load config from a TOML file, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self, ShopError> {
        if !path.exists() {
            warn!("Config file {:?} does not exist, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ShopError::Load(format!("Failed to read {:?}: {}", path, e)))?;
        let config = Self::from_toml(&content)
            .map_err(|e| ShopError::Load(format!("Failed to parse {:?}: {}", path, e)))?;

        info!("Loaded shop config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
