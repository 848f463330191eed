// Copyright 2023 Remi Bernotavicius

//! Works out what needs to be bought for a meal plan. Amounts are free text, so only the leading
//! number and the unit text after it are understood. Units are never converted or compared.

use super::MealPlan;
use crate::inventory::models::InventoryItem;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9.]+)\s*([^0-9.]+)").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    pub quantity: f32,
    pub unit: String,
}

/// The longest prefix of `digits` that reads as a number, so "1.5.2" is 1.5.
fn leading_number(digits: &str) -> Option<f32> {
    (1..=digits.len())
        .rev()
        .find_map(|end| digits[..end].parse().ok())
}

/// Parses strings like "200g" or "2 cloves". Returns `None` for things like "to taste".
pub fn parse_amount(text: &str) -> Option<Amount> {
    let captures = AMOUNT.captures(text)?;
    Some(Amount {
        quantity: leading_number(&captures[1])?,
        unit: captures[2].to_owned(),
    })
}

/// Total amount of each ingredient the plan calls for, in the order ingredients first appear.
/// When the same ingredient shows up with a different unit, the later unit replaces the earlier
/// one and the quantities are added regardless.
pub fn required_ingredients(plan: &MealPlan) -> Vec<(String, Amount)> {
    let mut totals: Vec<(String, Amount)> = vec![];
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for ingredient in plan.recipes().flat_map(|r| r.ingredients.iter()) {
        let Some(amount) = parse_amount(&ingredient.amount) else {
            continue;
        };
        match positions.get(ingredient.name.as_str()) {
            Some(&i) => {
                let total = &mut totals[i].1;
                total.quantity += amount.quantity;
                total.unit = amount.unit;
            }
            None => {
                positions.insert(&ingredient.name, totals.len());
                totals.push((ingredient.name.clone(), amount));
            }
        }
    }
    totals
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shortfall {
    pub name: String,
    pub required: f32,
    pub available: f32,
    pub unit: String,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            required,
            available,
            unit,
        } = self;
        write!(f, "{name}: need {required}{unit}, have {available}{unit}")
    }
}

/// Every ingredient the plan needs more of than is on hand. Inventory is matched by name alone,
/// so "2 pcs" on hand satisfies "2g" required.
pub fn shortfalls<'a>(
    plan: &MealPlan,
    inventory: impl IntoIterator<Item = &'a InventoryItem>,
) -> Vec<Shortfall> {
    let available: HashMap<&str, f32> = inventory
        .into_iter()
        .map(|i| (i.name.as_str(), i.quantity))
        .collect();

    required_ingredients(plan)
        .into_iter()
        .filter_map(|(name, required)| {
            let available = available.get(name.as_str()).copied().unwrap_or(0.0);
            (available < required.quantity).then(|| Shortfall {
                name,
                required: required.quantity,
                available,
                unit: required.unit,
            })
        })
        .collect()
}

pub fn shopping_list_text(shortfalls: &[Shortfall]) -> String {
    shortfalls
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::models::{
        Category, IngredientGroups, ItemId, ItemImage, NewItem, RecipeIngredient,
    };
    use crate::meal_plan::{Menu, Recipe};
    use maplit::hashmap;

    fn amount(quantity: f32, unit: &str) -> Amount {
        Amount {
            quantity,
            unit: unit.into(),
        }
    }

    fn recipe(name: &str, main: &[(&str, &str)], seasonings: &[(&str, &str)]) -> Recipe {
        let list = |l: &[(&str, &str)]| -> Vec<RecipeIngredient> {
            l.iter().map(|(n, a)| RecipeIngredient::new(*n, *a)).collect()
        };
        Recipe {
            name: name.into(),
            ingredients: IngredientGroups {
                main: list(main),
                secondary: vec![],
                seasonings: list(seasonings),
            },
        }
    }

    fn menu(recipes: Vec<Recipe>) -> Menu {
        Menu {
            name: "menu".into(),
            recipes,
        }
    }

    fn test_plan() -> MealPlan {
        MealPlan {
            breakfast: menu(vec![recipe(
                "Omelette",
                &[("Eggs", "2 pcs"), ("Milk", "100ml")],
                &[("Salt", "to taste")],
            )]),
            lunch: menu(vec![recipe(
                "Stir fry",
                &[("Pork", "300g"), ("Green pepper", "150g")],
                &[("Soy sauce", "15ml")],
            )]),
            dinner: menu(vec![recipe(
                "Stew",
                &[("Pork", "200g"), ("Eggs", "1 g")],
                &[("Soy sauce", "5ml")],
            )]),
        }
    }

    fn item(id: ItemId, name: &str, quantity: f32, unit: &str) -> InventoryItem {
        NewItem {
            category: Category::Other,
            name: name.into(),
            image: ItemImage::None,
            production_date: None,
            expiration_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            quantity,
            unit: unit.into(),
            recipe: None,
        }
        .with_id(id)
    }

    #[test]
    fn parse_amounts() {
        assert_eq!(parse_amount("200g"), Some(amount(200.0, "g")));
        assert_eq!(parse_amount("2 cloves"), Some(amount(2.0, "cloves")));
        assert_eq!(parse_amount("1.5kg"), Some(amount(1.5, "kg")));
        assert_eq!(parse_amount("15ml"), Some(amount(15.0, "ml")));
        assert_eq!(parse_amount("2个"), Some(amount(2.0, "个")));
        assert_eq!(parse_amount("about 3 cups"), Some(amount(3.0, "cups")));
        assert_eq!(parse_amount("1.5.2 l"), Some(amount(1.5, "l")));
        assert_eq!(parse_amount("to taste"), None);
        assert_eq!(parse_amount("200"), None);
        assert_eq!(parse_amount(". g"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn requirements_are_summed_by_name() {
        let required: HashMap<_, _> = required_ingredients(&test_plan()).into_iter().collect();
        assert_eq!(
            required,
            hashmap! {
                "Eggs".to_string() => amount(3.0, "g"),
                "Milk".to_string() => amount(100.0, "ml"),
                "Pork".to_string() => amount(500.0, "g"),
                "Green pepper".to_string() => amount(150.0, "g"),
                "Soy sauce".to_string() => amount(20.0, "ml"),
            }
        );
    }

    #[test]
    fn requirements_keep_first_seen_order() {
        let names: Vec<_> = required_ingredients(&test_plan())
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["Eggs", "Milk", "Pork", "Green pepper", "Soy sauce"]);
    }

    #[test]
    fn later_unit_overwrites_earlier() {
        let required = required_ingredients(&test_plan());
        let (_, eggs) = required.iter().find(|(n, _)| n == "Eggs").unwrap();
        assert_eq!(eggs, &amount(3.0, "g"));
    }

    #[test]
    fn missing_ingredients() {
        let inventory = vec![
            item(ItemId::INITIAL, "Pork", 500.0, "g"),
            item(ItemId::INITIAL.next(), "Milk", 50.0, "ml"),
            item(ItemId::INITIAL.next().next(), "Eggs", 6.0, "pcs"),
        ];
        let missing = shortfalls(&test_plan(), &inventory);
        assert_eq!(
            missing,
            vec![
                Shortfall {
                    name: "Milk".into(),
                    required: 100.0,
                    available: 50.0,
                    unit: "ml".into(),
                },
                Shortfall {
                    name: "Green pepper".into(),
                    required: 150.0,
                    available: 0.0,
                    unit: "g".into(),
                },
                Shortfall {
                    name: "Soy sauce".into(),
                    required: 20.0,
                    available: 0.0,
                    unit: "ml".into(),
                },
            ]
        );
    }

    #[test]
    fn exact_amount_on_hand_is_enough() {
        let inventory = vec![item(ItemId::INITIAL, "Green pepper", 150.0, "g")];
        let missing = shortfalls(&test_plan(), &inventory);
        assert!(missing.iter().all(|s| s.name != "Green pepper"));
    }

    #[test]
    fn units_are_ignored_when_matching() {
        // 2 pieces of pork count as 2 of whatever unit the plan wants.
        let inventory = vec![item(ItemId::INITIAL, "Pork", 2.0, "pcs")];
        let missing = shortfalls(&test_plan(), &inventory);
        let pork = missing.iter().find(|s| s.name == "Pork").unwrap();
        assert_eq!(pork.available, 2.0);
        assert_eq!(pork.unit, "g");
    }

    #[test]
    fn later_inventory_item_with_same_name_wins() {
        let inventory = vec![
            item(ItemId::INITIAL, "Pork", 1000.0, "g"),
            item(ItemId::INITIAL.next(), "Pork", 10.0, "g"),
        ];
        let missing = shortfalls(&test_plan(), &inventory);
        let pork = missing.iter().find(|s| s.name == "Pork").unwrap();
        assert_eq!(pork.available, 10.0);
    }

    #[test]
    fn shortfalls_are_idempotent() {
        let plan = test_plan();
        let inventory = vec![item(ItemId::INITIAL, "Pork", 100.0, "g")];
        let first = shortfalls(&plan, &inventory);
        for _ in 0..5 {
            assert_eq!(shortfalls(&plan, &inventory), first);
        }
    }

    #[test]
    fn shopping_list_rendering() {
        let missing = vec![
            Shortfall {
                name: "Tofu".into(),
                required: 300.0,
                available: 0.0,
                unit: "g".into(),
            },
            Shortfall {
                name: "Soy milk".into(),
                required: 300.0,
                available: 120.5,
                unit: "ml".into(),
            },
        ];
        assert_eq!(missing[0].to_string(), "Tofu: need 300g, have 0g");
        assert_eq!(
            shopping_list_text(&missing),
            "Tofu: need 300g, have 0g\nSoy milk: need 300ml, have 120.5ml"
        );
    }
}
