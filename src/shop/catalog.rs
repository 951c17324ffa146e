use crate::data::WeaponDefinition;
use crate::viewpoint::{FormElement, FormElementOptions};

use super::trade_in::TradeIn;

/// Form field the buy scene reads the chosen weapon ID from
pub const CHOICE_PARAMETER: &str = "choice";

/// Price of `weapon` after the trade-in credit
pub fn effective_price(weapon: &WeaponDefinition, trade_in_value: i32) -> i32 {
    weapon.cost - trade_in_value
}

/// Whether the character can buy `weapon`: affordable after trade-in and not the one they hold
pub fn is_purchasable(weapon: &WeaponDefinition, gold: i32, trade_in: &TradeIn) -> bool {
    effective_price(weapon, trade_in.value) <= gold && trade_in.weapon_id() != Some(weapon.id.as_str())
}

/// One button per catalog weapon, in catalog order.
///
/// Weapons the character can't buy are disabled, never dropped.
pub fn build_choices(gold: i32, trade_in: &TradeIn, catalog: &[WeaponDefinition]) -> Vec<FormElement> {
    catalog
        .iter()
        .map(|weapon| {
            let options = if is_purchasable(weapon, gold, trade_in) {
                FormElementOptions::None
            } else {
                FormElementOptions::Disabled
            };
            FormElement::button(CHOICE_PARAMETER, &weapon.display_name, &weapon.id, options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(id: &str, cost: i32) -> WeaponDefinition {
        WeaponDefinition {
            id: id.to_string(),
            display_name: format!("Weapon {}", id),
            cost,
            level_required: 1,
            damage: 1,
        }
    }

    fn enabled(choices: &[FormElement]) -> Vec<bool> {
        choices.iter().map(|c| c.is_enabled()).collect()
    }

    #[test]
    fn test_affordability_and_ownership() {
        let equipped = weapon("3", 20);
        let catalog = vec![weapon("1", 50), weapon("2", 150), equipped.clone()];
        let trade_in = TradeIn {
            value: 20,
            weapon: Some(equipped),
        };

        let choices = build_choices(100, &trade_in, &catalog);

        assert_eq!(enabled(&choices), vec![true, false, false]);
        assert_eq!(choices[0].value, "1");
        assert_eq!(choices[0].label, "Weapon 1");
        assert_eq!(choices[0].parameter, CHOICE_PARAMETER);
    }

    #[test]
    fn test_exact_gold_is_affordable() {
        let catalog = vec![weapon("a", 130), weapon("b", 131)];
        let trade_in = TradeIn {
            value: 30,
            weapon: Some(weapon("old", 40)),
        };
        assert_eq!(enabled(&build_choices(100, &trade_in, &catalog)), vec![true, false]);
    }

    #[test]
    fn test_no_equipped_weapon_excludes_nothing() {
        let catalog = vec![weapon("1", 10), weapon("2", 10)];
        let choices = build_choices(10, &TradeIn::none(), &catalog);
        assert_eq!(enabled(&choices), vec![true, true]);
    }

    #[test]
    fn test_order_and_length_preserved() {
        let catalog = vec![weapon("z", 900), weapon("a", 5), weapon("m", 300)];
        let choices = build_choices(0, &TradeIn::none(), &catalog);

        let values: Vec<_> = choices.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["z", "a", "m"]);
        assert!(choices.iter().all(|c| !c.is_enabled()));
        assert!(build_choices(0, &TradeIn::none(), &[]).is_empty());
    }

    #[test]
    fn test_same_inputs_same_choices() {
        let catalog = vec![weapon("1", 50), weapon("2", 150)];
        let trade_in = TradeIn {
            value: 20,
            weapon: Some(weapon("3", 20)),
        };

        let first = build_choices(100, &trade_in, &catalog);
        let second = build_choices(100, &trade_in, &catalog);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
