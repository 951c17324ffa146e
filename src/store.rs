//! Collaborator Stores
//!
//! The shop only reads inventory, gold and the scene graph, and writes the
//! finished viewpoint. Each concern is a trait so the host engine can plug in
//! its own storage; in-process implementations live here too.

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::character::Character;
use crate::data::{WeaponDefinition, WeaponRegistry};
use crate::error::ShopError;
use crate::scene::Scene;
use crate::viewpoint::Viewpoint;

/// Weapon ownership and the level-gated catalog
pub trait InventoryStore: Send + Sync {
    /// Weapon the character currently has equipped
    fn equipped_weapon(&self, character: &Character) -> Option<WeaponDefinition>;

    /// Every weapon sold at `level`, in display order
    fn weapons_for_level(&self, level: i32) -> Vec<WeaponDefinition>;
}

pub trait WealthStore: Send + Sync {
    fn gold(&self, character: &Character) -> i32;
}

/// Read-only navigation of the scene graph
pub trait SceneGraph: Send + Sync {
    fn scene(&self, scene_id: &str) -> Option<&Scene>;
}

pub trait ViewpointStore: Send + Sync {
    fn save(&self, viewpoint: &Viewpoint) -> Result<(), ShopError>;
}

// ============================================================================
// Armory (inventory backed by the weapon registry)
// ============================================================================

/// Weapon catalog plus who has what equipped
pub struct Armory {
    weapons: Arc<WeaponRegistry>,
    // Character ID -> equipped weapon ID
    equipped: DashMap<i64, String>,
}

impl Armory {
    pub fn new(weapons: Arc<WeaponRegistry>) -> Self {
        Self {
            weapons,
            equipped: DashMap::new(),
        }
    }

    pub fn equip(&self, character_id: i64, weapon_id: &str) {
        if !self.weapons.contains(weapon_id) {
            warn!("Equipping unknown weapon '{}' on character {}", weapon_id, character_id);
        }
        self.equipped.insert(character_id, weapon_id.to_string());
    }
}

impl InventoryStore for Armory {
    fn equipped_weapon(&self, character: &Character) -> Option<WeaponDefinition> {
        let weapon_id = self.equipped.get(&character.id)?.value().clone();
        self.weapons.get(&weapon_id).cloned()
    }

    fn weapons_for_level(&self, level: i32) -> Vec<WeaponDefinition> {
        self.weapons.for_level(level).into_iter().cloned().collect()
    }
}

// ============================================================================
// Treasury (gold balances)
// ============================================================================

#[derive(Default)]
pub struct Treasury {
    gold: DashMap<i64, i32>,
}

impl Treasury {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_gold(&self, character_id: i64, gold: i32) {
        self.gold.insert(character_id, gold);
    }
}

impl WealthStore for Treasury {
    fn gold(&self, character: &Character) -> i32 {
        self.gold.get(&character.id).map(|g| *g).unwrap_or(0)
    }
}

// ============================================================================
// Viewpoint stores
// ============================================================================

/// Keeps the latest viewpoint per character in memory
#[derive(Default)]
pub struct MemoryViewpointStore {
    viewpoints: DashMap<i64, Viewpoint>,
}

impl MemoryViewpointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, owner: i64) -> Option<Viewpoint> {
        self.viewpoints.get(&owner).map(|v| v.value().clone())
    }

    pub fn len(&self) -> usize {
        self.viewpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewpoints.is_empty()
    }
}

impl ViewpointStore for MemoryViewpointStore {
    fn save(&self, viewpoint: &Viewpoint) -> Result<(), ShopError> {
        self.viewpoints.insert(viewpoint.owner, viewpoint.clone());
        Ok(())
    }
}

/// Writes each character's viewpoint to `<dir>/<owner>.json`.
///
/// Saves go to a temporary file first and are renamed into place, so a
/// reader never sees a half-written viewpoint.
pub struct JsonViewpointStore {
    dir: PathBuf,
}

impl JsonViewpointStore {
    pub fn new(dir: &Path) -> Result<Self, ShopError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, owner: i64) -> PathBuf {
        self.dir.join(format!("{}.json", owner))
    }

    pub fn load(&self, owner: i64) -> Result<Option<Viewpoint>, ShopError> {
        let path = self.path_for(owner);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}

impl ViewpointStore for JsonViewpointStore {
    fn save(&self, viewpoint: &Viewpoint) -> Result<(), ShopError> {
        let path = self.path_for(viewpoint.owner);
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(viewpoint)?;

        std::fs::write(&tmp_path, json)?;
        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        debug!("Saved viewpoint for character {} to {:?}", viewpoint.owner, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Scene, SceneTemplate};
    use crate::viewpoint::{Action, ActionGroupId};
    use tempfile::TempDir;

    fn registry() -> Arc<WeaponRegistry> {
        let mut registry = WeaponRegistry::new();
        for (id, cost, level) in [("club", 20, 1), ("axe", 225, 3)] {
            registry.insert(WeaponDefinition {
                id: id.to_string(),
                display_name: id.to_string(),
                cost,
                level_required: level,
                damage: 1,
            });
        }
        Arc::new(registry)
    }

    #[test]
    fn test_armory_equipped_weapon() {
        let armory = Armory::new(registry());
        let character = Character::new(1, "aria", 2);

        assert!(armory.equipped_weapon(&character).is_none());

        armory.equip(1, "club");
        assert_eq!(armory.equipped_weapon(&character).unwrap().id, "club");

        armory.equip(1, "missing");
        assert!(armory.equipped_weapon(&character).is_none());

        let catalog: Vec<_> = armory.weapons_for_level(2).into_iter().map(|w| w.id).collect();
        assert_eq!(catalog, vec!["club".to_string()]);
    }

    #[test]
    fn test_treasury_defaults_to_zero() {
        let treasury = Treasury::new();
        let character = Character::new(3, "violet", 1);
        assert_eq!(treasury.gold(&character), 0);

        treasury.set_gold(3, 250);
        assert_eq!(treasury.gold(&character), 250);
    }

    #[test]
    fn test_json_store_writes_viewpoint() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonViewpointStore::new(&temp_dir.path().join("viewpoints")).unwrap();

        let scene = Scene::new("shop", SceneTemplate::WeaponShop, "Shop");
        let mut viewpoint = Viewpoint::from_scene(&scene, 9);
        viewpoint.add_action_to_group(Action::new("village"), ActionGroupId::Default);

        assert!(store.load(9).unwrap().is_none());
        store.save(&viewpoint).unwrap();
        assert_eq!(store.load(9).unwrap(), Some(viewpoint));
    }

    #[test]
    fn test_json_store_replaces_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("viewpoints");
        let store = JsonViewpointStore::new(&dir).unwrap();

        let scene = Scene::new("shop", SceneTemplate::WeaponShop, "Shop")
            .with_description(&"long ".repeat(200));
        store.save(&Viewpoint::from_scene(&scene, 4)).unwrap();

        let short = Viewpoint::from_scene(&Scene::new("shop", SceneTemplate::WeaponShop, "Shop"), 4);
        store.save(&short).unwrap();
        assert_eq!(store.load(4).unwrap(), Some(short));

        // A leftover from an interrupted save doesn't shadow the saved file
        std::fs::write(dir.join("4.json.tmp"), "{\"owner\": 4, \"scene_").unwrap();
        assert!(store.load(4).unwrap().is_some());

        let files: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|name| name.ends_with(".json"))
            .collect();
        assert_eq!(files, vec!["4.json".to_string()]);
    }
}
