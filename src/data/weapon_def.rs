use serde::{Deserialize, Serialize};

// ============================================================================
// Raw Weapon Definition (direct from TOML)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RawWeaponDefinition {
    pub display_name: Option<String>,
    pub cost: i32,
    /// Minimum character level for the weapon to show up in the shop
    pub level_required: Option<i32>,
    #[serde(default)]
    pub damage: i32,
}

// ============================================================================
// Resolved Weapon Definition
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponDefinition {
    pub id: String,
    pub display_name: String,
    pub cost: i32,
    pub level_required: i32,
    pub damage: i32,
}

impl WeaponDefinition {
    pub fn from_raw(id: &str, raw: &RawWeaponDefinition) -> Self {
        Self {
            id: id.to_string(),
            display_name: raw.display_name.clone()
                .unwrap_or_else(|| id.to_string()),
            cost: raw.cost.max(0),
            level_required: raw.level_required.unwrap_or(1),
            damage: raw.damage,
        }
    }

    /// Whether a character of `level` may see this weapon in the shop
    pub fn available_at(&self, level: i32) -> bool {
        self.level_required <= level
    }
}

/// Base trade-in value of a weapon: `percent` of its cost, rounded half up.
/// Saturates at `i32::MAX`.
pub fn trade_in_value(weapon: &WeaponDefinition, percent: i32) -> i32 {
    let percent = percent.max(0) as i64;
    let value = (weapon.cost.max(0) as i64 * percent + 50) / 100;
    i32::try_from(value).unwrap_or(i32::MAX)
}
