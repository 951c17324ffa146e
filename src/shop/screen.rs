//! Weapon Shop Screen
//!
//! Builds a character's viewpoint of the weapon shop: the merchant's trade-in
//! offer, the weapons for sale, the hidden buy action and the way back out.

use std::sync::Arc;
use tracing::{debug, info};

use crate::character::Character;
use crate::error::ShopError;
use crate::scene::Scene;
use crate::store::{InventoryStore, SceneGraph, ViewpointStore, WealthStore};
use crate::viewpoint::{Action, ActionGroupId, Attachment, Form, Viewpoint};

use super::catalog::build_choices;
use super::navigation::{find_buy_scene, find_parent_scene};
use super::trade_in::{TradeIn, TradeInValuator};

pub struct WeaponShop {
    inventory: Arc<dyn InventoryStore>,
    wealth: Arc<dyn WealthStore>,
    scenes: Arc<dyn SceneGraph>,
    viewpoints: Arc<dyn ViewpointStore>,
    valuator: TradeInValuator,
    merchant_name: String,
}

impl WeaponShop {
    pub fn new(
        inventory: Arc<dyn InventoryStore>,
        wealth: Arc<dyn WealthStore>,
        scenes: Arc<dyn SceneGraph>,
        viewpoints: Arc<dyn ViewpointStore>,
        valuator: TradeInValuator,
        merchant_name: &str,
    ) -> Self {
        Self {
            inventory,
            wealth,
            scenes,
            viewpoints,
            valuator,
            merchant_name: merchant_name.to_string(),
        }
    }

    /// Populate `viewpoint` with the shop screen and save it.
    ///
    /// The trade-in is valued once and the same value is both quoted and
    /// applied to prices. On error nothing is saved and the viewpoint should
    /// be discarded.
    pub fn render_shop_screen(
        &self,
        character: &Character,
        scene: &Scene,
        viewpoint: &mut Viewpoint,
    ) -> Result<(), ShopError> {
        let trade_in = self.valuator.compute(self.inventory.as_ref(), character);

        self.add_trade_in_message(&trade_in, viewpoint);
        self.add_for_sale_form(character, scene, &trade_in, viewpoint)?;
        self.add_menu(scene, viewpoint)?;

        self.viewpoints.save(viewpoint)?;

        info!(
            "Rendered weapon shop {} for character {} (trade-in {})",
            scene.id, character.id, trade_in.value
        );
        Ok(())
    }

    fn add_trade_in_message(&self, trade_in: &TradeIn, viewpoint: &mut Viewpoint) {
        if trade_in.value <= 0 {
            return;
        }
        if let Some(weapon) = &trade_in.weapon {
            viewpoint.description.push_str(&format!(
                "\n{} looks at you and says, \"I'll give you {} trade-in value for your {}.\"",
                self.merchant_name, trade_in.value, weapon.display_name
            ));
        }
    }

    fn add_for_sale_form(
        &self,
        character: &Character,
        scene: &Scene,
        trade_in: &TradeIn,
        viewpoint: &mut Viewpoint,
    ) -> Result<(), ShopError> {
        let gold = self.wealth.gold(character);
        let catalog = self.inventory.weapons_for_level(character.level);
        let elements = build_choices(gold, trade_in, &catalog);
        debug!(
            "Character {} with {} gold sees {} weapons",
            character.id,
            gold,
            elements.len()
        );

        let buy_scene = find_buy_scene(self.scenes.as_ref(), scene)?;
        let buy_action = Action::new(&buy_scene.id);

        viewpoint.add_attachment(Attachment::Form(Form::new(elements, buy_action.clone())));

        // Must be present for the client to submit the form, but not listed in the menu
        viewpoint.add_action_to_group(buy_action, ActionGroupId::Hidden);
        Ok(())
    }

    fn add_menu(&self, scene: &Scene, viewpoint: &mut Viewpoint) -> Result<(), ShopError> {
        let parent = find_parent_scene(self.scenes.as_ref(), scene)?;
        viewpoint.add_action_to_group(Action::new(&parent.id), ActionGroupId::Default);
        Ok(())
    }
}
