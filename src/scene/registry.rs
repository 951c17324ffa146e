//! Scene Registry
//!
//! Loads and caches the scene graph from TOML files.

use super::definition::{RawSceneDefinition, Scene, SceneTemplate};
use crate::store::SceneGraph;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Registry for all scenes, keyed by scene ID
pub struct SceneRegistry {
    scenes: HashMap<String, Scene>,
}

impl SceneRegistry {
    /// Create a new empty scene registry
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
        }
    }

    /// Load all scene definitions from a directory
    pub fn load_from_directory(&mut self, data_dir: &Path) -> Result<(), String> {
        let path = data_dir.join("scenes");

        if !path.exists() {
            warn!("Scene directory does not exist: {:?}", path);
            return Ok(());
        }

        for entry in fs::read_dir(&path).map_err(|e| e.to_string())? {
            let entry = entry.map_err(|e| e.to_string())?;
            let file_path = entry.path();

            if file_path.extension().and_then(|s| s.to_str()) == Some("toml") {
                let contents = fs::read_to_string(&file_path)
                    .map_err(|e| format!("Failed to read {:?}: {}", file_path, e))?;

                let table: HashMap<String, RawSceneDefinition> = toml::from_str(&contents)
                    .map_err(|e| format!("Failed to parse {:?}: {}", file_path, e))?;

                for (id, raw) in table {
                    if self.scenes.contains_key(&id) {
                        warn!("Duplicate scene ID '{}' in {:?}, overwriting", id, file_path);
                    }
                    self.insert(Scene::from_raw(&id, &raw));
                }
            }
        }

        info!("Loaded {} scene definitions", self.scenes.len());
        Ok(())
    }

    pub fn insert(&mut self, scene: Scene) {
        self.scenes.insert(scene.id.clone(), scene);
    }

    /// Get a scene by ID
    pub fn get(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.get(scene_id)
    }

    /// Report child/parent links that point at unknown scenes.
    ///
    /// Returns `(scene_id, missing_id)` pairs, sorted for stable output.
    pub fn validate_links(&self) -> Vec<(String, String)> {
        let mut dangling: Vec<(String, String)> = self
            .scenes
            .values()
            .flat_map(|scene| {
                scene
                    .children
                    .iter()
                    .chain(scene.parents.iter())
                    .filter(move |link| !self.scenes.contains_key(link.as_str()))
                    .map(move |link| (scene.id.clone(), link.clone()))
            })
            .collect();
        dangling.sort();

        for (scene_id, missing) in &dangling {
            warn!("Scene '{}' links to unknown scene '{}'", scene_id, missing);
        }
        dangling
    }

    /// Scenes rendered with `template`, sorted by ID
    pub fn with_template(&self, template: SceneTemplate) -> Vec<&Scene> {
        let mut scenes: Vec<_> = self
            .scenes
            .values()
            .filter(|s| s.template == template)
            .collect();
        scenes.sort_by(|a, b| a.id.cmp(&b.id));
        scenes
    }

    /// Get the number of scenes in the registry
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph for SceneRegistry {
    fn scene(&self, scene_id: &str) -> Option<&Scene> {
        self.get(scene_id)
    }
}
