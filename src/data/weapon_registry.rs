use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use super::weapon_def::{RawWeaponDefinition, WeaponDefinition};

/// Registry for all weapon definitions
pub struct WeaponRegistry {
    weapons: HashMap<String, WeaponDefinition>,
}

impl WeaponRegistry {
    pub fn new() -> Self {
        Self {
            weapons: HashMap::new(),
        }
    }

    /// Load all weapon definitions from a directory
    pub fn load_from_directory(&mut self, data_dir: &Path) -> Result<(), String> {
        let weapons_dir = data_dir.join("weapons");

        if !weapons_dir.exists() {
            warn!("Weapons directory does not exist: {:?}", weapons_dir);
            return Ok(());
        }

        let entries = std::fs::read_dir(&weapons_dir)
            .map_err(|e| format!("Failed to read weapons directory: {}", e))?;

        for entry in entries {
            let entry = entry.map_err(|e| format!("Failed to read entry: {}", e))?;
            let path = entry.path();

            if path.extension().map_or(false, |ext| ext == "toml") {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;

                // Parse as table of weapons
                let table: HashMap<String, RawWeaponDefinition> = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse {:?}: {}", path, e))?;

                for (id, raw) in table {
                    if self.weapons.contains_key(&id) {
                        warn!("Duplicate weapon ID '{}' in {:?}, overwriting", id, path);
                    }
                    self.insert(WeaponDefinition::from_raw(&id, &raw));
                }
            }
        }

        info!("Loaded {} weapon definitions", self.weapons.len());

        Ok(())
    }

    pub fn insert(&mut self, weapon: WeaponDefinition) {
        self.weapons.insert(weapon.id.clone(), weapon);
    }

    /// Get a weapon definition by ID
    pub fn get(&self, id: &str) -> Option<&WeaponDefinition> {
        self.weapons.get(id)
    }

    /// Weapons a character of `level` can buy, cheapest first (ties broken by ID)
    pub fn for_level(&self, level: i32) -> Vec<&WeaponDefinition> {
        let mut weapons: Vec<_> = self
            .weapons
            .values()
            .filter(|w| w.available_at(level))
            .collect();
        weapons.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.id.cmp(&b.id)));
        weapons
    }

    /// Check if a weapon exists
    pub fn contains(&self, id: &str) -> bool {
        self.weapons.contains_key(id)
    }

    /// Get the number of loaded weapons
    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

impl Default for WeaponRegistry {
    fn default() -> Self {
        Self::new()
    }
}
