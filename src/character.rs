use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// The player character visiting a scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub level: i32,
}

impl Character {
    pub fn new(id: i64, name: &str, level: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            level,
        }
    }
}

/// Character entry from `characters.toml`, including the state the stores are seeded with
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    pub id: i64,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub gold: i32,
    /// Equipped weapon ID, if any
    pub weapon: Option<String>,
}

fn default_level() -> i32 {
    1
}

/// Load characters keyed by name, returned in name order
pub fn load_characters(path: &Path) -> Result<Vec<(Character, CharacterRecord)>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;

    let table: BTreeMap<String, CharacterRecord> = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse {:?}: {}", path, e))?;

    let characters: Vec<_> = table
        .into_iter()
        .map(|(name, record)| (Character::new(record.id, &name, record.level), record))
        .collect();

    info!("Loaded {} characters", characters.len());
    Ok(characters)
}
