//! Shop Errors
//!
//! Everything that can abort a shop render. None of these are retried.

use thiserror::Error;

/// Errors raised while loading shop data or rendering the shop screen
#[derive(Debug, Error)]
pub enum ShopError {
    /// The shop scene has no child scene that handles the buy form
    #[error("Can't find a buy scene that's a child of scene id={scene_id}")]
    MissingBuyScene { scene_id: String },

    /// The shop scene has no parent to return to
    #[error("Scene id={scene_id} has no parent scene")]
    MissingParentScene { scene_id: String },

    /// A scene link points at a scene the graph doesn't know about
    #[error("Unknown scene id={scene_id}")]
    UnknownScene { scene_id: String },

    /// Data or config file could not be loaded
    #[error("Load error: {0}")]
    Load(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShopError {
    pub fn missing_buy_scene(scene_id: impl Into<String>) -> Self {
        Self::MissingBuyScene {
            scene_id: scene_id.into(),
        }
    }

    pub fn missing_parent_scene(scene_id: impl Into<String>) -> Self {
        Self::MissingParentScene {
            scene_id: scene_id.into(),
        }
    }

    pub fn unknown_scene(scene_id: impl Into<String>) -> Self {
        Self::UnknownScene {
            scene_id: scene_id.into(),
        }
    }

    /// Whether this error means the scene graph itself is misconfigured
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ShopError::MissingBuyScene { .. }
                | ShopError::MissingParentScene { .. }
                | ShopError::UnknownScene { .. }
        )
    }
}
