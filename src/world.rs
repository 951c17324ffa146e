use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::character::{load_characters, Character, CharacterRecord};
use crate::data::WeaponRegistry;
use crate::error::ShopError;
use crate::scene::SceneRegistry;

/// Everything loaded from the data directory
pub struct ShopWorld {
    pub weapons: Arc<WeaponRegistry>,
    pub scenes: Arc<SceneRegistry>,
    pub characters: Vec<(Character, CharacterRecord)>,
}

impl ShopWorld {
    /// Load weapons, scenes and characters. Any unreadable file fails the whole load.
    pub fn load(data_dir: &Path) -> Result<Self, ShopError> {
        // Load weapon registry from TOML files
        let mut weapons = WeaponRegistry::new();
        weapons.load_from_directory(data_dir).map_err(ShopError::Load)?;

        // Load scene graph from TOML files
        let mut scenes = SceneRegistry::new();
        scenes.load_from_directory(data_dir).map_err(ShopError::Load)?;
        scenes.validate_links();

        let characters = load_characters(&data_dir.join("characters.toml")).map_err(ShopError::Load)?;

        info!("Loaded shop data from {:?}", data_dir);
        Ok(Self {
            weapons: Arc::new(weapons),
            scenes: Arc::new(scenes),
            characters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_data(dir: &Path, weapons: &str) {
        std::fs::create_dir(dir.join("weapons")).unwrap();
        std::fs::create_dir(dir.join("scenes")).unwrap();
        std::fs::write(dir.join("weapons").join("level_one.toml"), weapons).unwrap();
        std::fs::write(
            dir.join("scenes").join("village.toml"),
            "[village]\ntemplate = \"village\"\n",
        )
        .unwrap();
        std::fs::write(dir.join("characters.toml"), "[aria]\nid = 1\n").unwrap();
    }

    #[test]
    fn test_load_world() {
        let temp_dir = TempDir::new().unwrap();
        write_data(temp_dir.path(), "[club]\ncost = 20\n");

        let world = ShopWorld::load(temp_dir.path()).unwrap();
        assert_eq!(world.weapons.len(), 1);
        assert_eq!(world.scenes.len(), 1);
        assert_eq!(world.characters.len(), 1);
    }

    #[test]
    fn test_bad_weapon_file_fails_load() {
        let temp_dir = TempDir::new().unwrap();
        write_data(temp_dir.path(), "[club]\ncost = 20\n");
        std::fs::write(
            temp_dir.path().join("weapons").join("bad.toml"),
            "[axe]\ncost = \"lots\"\n",
        )
        .unwrap();

        let err = ShopWorld::load(temp_dir.path()).err().unwrap();
        assert!(matches!(err, ShopError::Load(ref msg) if msg.contains("bad.toml")));
    }

    #[test]
    fn test_missing_characters_file_fails_load() {
        let temp_dir = TempDir::new().unwrap();
        write_data(temp_dir.path(), "[club]\ncost = 20\n");
        std::fs::remove_file(temp_dir.path().join("characters.toml")).unwrap();

        assert!(matches!(ShopWorld::load(temp_dir.path()), Err(ShopError::Load(_))));
    }
}
