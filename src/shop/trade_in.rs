//! Trade-in valuation
//!
//! The base credit is a fixed share of the equipped weapon's cost. Other
//! modules can register adjusters; they run in registration order, each
//! receiving the previous adjuster's output.

use tracing::{debug, error};

use crate::character::Character;
use crate::data::{trade_in_value, WeaponDefinition};
use crate::store::InventoryStore;

/// Hook for other modules to change what the merchant offers
pub trait TradeInAdjuster: Send + Sync {
    fn adjust(&self, weapon: &WeaponDefinition, value: i32) -> i32;
}

impl<F> TradeInAdjuster for F
where
    F: Fn(&WeaponDefinition, i32) -> i32 + Send + Sync,
{
    fn adjust(&self, weapon: &WeaponDefinition, value: i32) -> i32 {
        self(weapon, value)
    }
}

/// Outcome of valuing a character's equipped weapon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeIn {
    pub value: i32,
    /// The weapon being traded in, `None` if nothing is equipped
    pub weapon: Option<WeaponDefinition>,
}

impl TradeIn {
    pub fn none() -> Self {
        Self {
            value: 0,
            weapon: None,
        }
    }

    pub fn weapon_id(&self) -> Option<&str> {
        self.weapon.as_ref().map(|w| w.id.as_str())
    }
}

pub struct TradeInValuator {
    percent: i32,
    adjusters: Vec<Box<dyn TradeInAdjuster>>,
}

impl TradeInValuator {
    pub fn new(percent: i32) -> Self {
        Self {
            percent,
            adjusters: Vec::new(),
        }
    }

    pub fn add_adjuster(&mut self, adjuster: impl TradeInAdjuster + 'static) {
        self.adjusters.push(Box::new(adjuster));
    }

    pub fn with_adjuster(mut self, adjuster: impl TradeInAdjuster + 'static) -> Self {
        self.add_adjuster(adjuster);
        self
    }

    /// Base value of `weapon` run through every adjuster, never below zero
    pub fn value_of(&self, weapon: &WeaponDefinition) -> i32 {
        let base = trade_in_value(weapon, self.percent);
        let adjusted = self
            .adjusters
            .iter()
            .fold(base, |value, adjuster| adjuster.adjust(weapon, value));

        if adjusted != base {
            debug!("Trade-in for {} adjusted from {} to {}", weapon.id, base, adjusted);
        }
        adjusted.max(0)
    }

    /// Value the character's equipped weapon. Having no weapon is not an error.
    pub fn compute(&self, inventory: &dyn InventoryStore, character: &Character) -> TradeIn {
        match inventory.equipped_weapon(character) {
            Some(weapon) => TradeIn {
                value: self.value_of(&weapon),
                weapon: Some(weapon),
            },
            None => {
                error!("Couldn't find a weapon for character {}.", character.id);
                TradeIn::none()
            }
        }
    }
}
