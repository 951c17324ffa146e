//! Weapon Shop
//!
//! Trade-in valuation, the for-sale catalog and the shop screen itself.

pub mod catalog;
pub mod navigation;
pub mod screen;
pub mod trade_in;

pub use catalog::{build_choices, effective_price, is_purchasable, CHOICE_PARAMETER};
pub use navigation::{find_buy_scene, find_parent_scene};
pub use screen::WeaponShop;
pub use trade_in::{TradeIn, TradeInAdjuster, TradeInValuator};
