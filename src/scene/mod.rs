pub mod definition;
pub mod registry;

pub use definition::{
    weapon_shop_scene, Scene, SceneTemplate, WEAPON_SHOP_DESCRIPTION, WEAPON_SHOP_TITLE,
};
pub use registry::SceneRegistry;
