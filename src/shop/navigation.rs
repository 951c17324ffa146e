use crate::error::ShopError;
use crate::scene::{Scene, SceneTemplate};
use crate::store::SceneGraph;

/// The child scene that handles the shop's buy form. First match wins.
pub fn find_buy_scene<'a>(graph: &'a dyn SceneGraph, scene: &Scene) -> Result<&'a Scene, ShopError> {
    scene
        .children
        .iter()
        .filter_map(|child_id| graph.scene(child_id))
        .find(|child| child.template == SceneTemplate::WeaponShopBuy)
        .ok_or_else(|| ShopError::missing_buy_scene(&scene.id))
}

/// The scene's first parent, where "back" leads
pub fn find_parent_scene<'a>(graph: &'a dyn SceneGraph, scene: &Scene) -> Result<&'a Scene, ShopError> {
    let parent_id = scene
        .parents
        .first()
        .ok_or_else(|| ShopError::missing_parent_scene(&scene.id))?;

    graph
        .scene(parent_id)
        .ok_or_else(|| ShopError::unknown_scene(parent_id))
}
