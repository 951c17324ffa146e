pub mod weapon_def;
pub mod weapon_registry;

pub use weapon_def::{trade_in_value, WeaponDefinition};
pub use weapon_registry::WeaponRegistry;
