//! Scene Definition Structures
//!
//! Static screens of the game graph. A scene's template says what kind of
//! screen it is; children and parents are scene IDs in link order.

use serde::{Deserialize, Serialize};

pub const WEAPON_SHOP_TITLE: &str = "MightyE's Weapons";

pub const WEAPON_SHOP_DESCRIPTION: &str = "MightyE stands behind a counter and appears to pay little \
attention to you as you enter, but you know from experience that he has his eye on every move you make.\n\
MightyE finally nods to you, stroking his goatee and looking like he wished he could have an \
opportunity to use one of his weapons.\n\
You stroll up the counter and try your best to look like you know what most of these contraptions do.";

/// Kind of screen a scene renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SceneTemplate {
    /// The weapon shop counter (catalog + trade-in)
    WeaponShop,
    /// Consumes the weapon shop's buy form
    WeaponShopBuy,
    Village,
    #[default]
    Other,
}

// ============================================================================
// Raw Scene Definition (direct from TOML)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RawSceneDefinition {
    #[serde(default)]
    pub template: SceneTemplate,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub parents: Vec<String>,
}

// ============================================================================
// Resolved Scene
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub id: String,
    pub template: SceneTemplate,
    pub title: String,
    pub description: String,
    pub children: Vec<String>,
    pub parents: Vec<String>,
}

impl Scene {
    pub fn new(id: &str, template: SceneTemplate, title: &str) -> Self {
        Self {
            id: id.to_string(),
            template,
            title: title.to_string(),
            description: String::new(),
            children: Vec::new(),
            parents: Vec::new(),
        }
    }

    pub fn from_raw(id: &str, raw: &RawSceneDefinition) -> Self {
        let (default_title, default_description) = match raw.template {
            SceneTemplate::WeaponShop => (WEAPON_SHOP_TITLE.to_string(), WEAPON_SHOP_DESCRIPTION.to_string()),
            _ => (id.to_string(), String::new()),
        };

        Self {
            id: id.to_string(),
            template: raw.template,
            title: raw.title.clone().unwrap_or(default_title),
            description: raw.description.clone().unwrap_or(default_description),
            children: raw.children.clone(),
            parents: raw.parents.clone(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_child(mut self, child_id: &str) -> Self {
        self.children.push(child_id.to_string());
        self
    }

    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parents.push(parent_id.to_string());
        self
    }
}

/// The stock weapon shop scene
pub fn weapon_shop_scene(id: &str) -> Scene {
    Scene::new(id, SceneTemplate::WeaponShop, WEAPON_SHOP_TITLE)
        .with_description(WEAPON_SHOP_DESCRIPTION)
}
