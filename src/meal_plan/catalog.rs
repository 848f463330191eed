// Copyright 2023 Remi Bernotavicius

use super::{MealSlot, Menu, Recipe};
use crate::inventory::models::{IngredientGroups, RecipeIngredient};

fn ingredients(list: &[(&str, &str)]) -> Vec<RecipeIngredient> {
    list.iter()
        .map(|(name, amount)| RecipeIngredient::new(*name, *amount))
        .collect()
}

fn recipe(
    name: &str,
    main: &[(&str, &str)],
    secondary: &[(&str, &str)],
    seasonings: &[(&str, &str)],
) -> Recipe {
    Recipe {
        name: name.into(),
        ingredients: IngredientGroups {
            main: ingredients(main),
            secondary: ingredients(secondary),
            seasonings: ingredients(seasonings),
        },
    }
}

fn menu(name: &str, recipes: Vec<Recipe>) -> Menu {
    Menu {
        name: name.into(),
        recipes,
    }
}

fn breakfast() -> Vec<Menu> {
    vec![
        menu(
            "Sichuan breakfast",
            vec![
                recipe(
                    "Dan dan noodles",
                    &[("Noodles", "200g"), ("Minced pork", "100g")],
                    &[("Greens", "100g"), ("Crushed peanuts", "30g")],
                    &[
                        ("Sichuan pepper", "5g"),
                        ("Chili oil", "15ml"),
                        ("Soy sauce", "10ml"),
                        ("Salt", "to taste"),
                    ],
                ),
                recipe(
                    "Fried eggs",
                    &[("Eggs", "2 pcs")],
                    &[],
                    &[("Salt", "to taste"), ("Pepper", "a pinch")],
                ),
            ],
        ),
        menu(
            "Traditional breakfast",
            vec![
                recipe(
                    "Tofu pudding with rice",
                    &[("Tofu", "300g"), ("Rice", "200g")],
                    &[("Green pepper", "50g"), ("Chopped scallion", "20g")],
                    &[
                        ("Chili oil", "15ml"),
                        ("Soy sauce", "10ml"),
                        ("Salt", "to taste"),
                    ],
                ),
                recipe(
                    "Fried dough sticks with soy milk",
                    &[("Fried dough sticks", "2 pcs"), ("Soy milk", "300ml")],
                    &[],
                    &[("Sugar", "to taste")],
                ),
            ],
        ),
    ]
}

fn lunch() -> Vec<Menu> {
    vec![
        menu(
            "Spicy lunch",
            vec![
                recipe(
                    "Mapo tofu",
                    &[("Tofu", "400g"), ("Minced pork", "150g")],
                    &[("Chopped scallion", "30g"), ("Minced garlic", "20g")],
                    &[
                        ("Bean paste", "30g"),
                        ("Sichuan pepper", "5g"),
                        ("Light soy sauce", "15ml"),
                        ("Salt", "to taste"),
                    ],
                ),
                recipe(
                    "Twice-cooked pork",
                    &[("Pork belly", "300g"), ("Green pepper", "150g")],
                    &[("Garlic sprouts", "100g"), ("Ginger", "20g")],
                    &[
                        ("Bean paste", "25g"),
                        ("Cooking wine", "15ml"),
                        ("Light soy sauce", "20ml"),
                        ("Salt", "to taste"),
                    ],
                ),
            ],
        ),
        menu(
            "Sichuan lunch",
            vec![
                recipe(
                    "Boiled fish",
                    &[("Fish fillet", "400g")],
                    &[
                        ("Bean sprouts", "200g"),
                        ("Greens", "150g"),
                        ("Scallion", "50g"),
                    ],
                    &[
                        ("Sichuan pepper", "10g"),
                        ("Dried chili", "20g"),
                        ("Cooking wine", "20ml"),
                        ("Light soy sauce", "15ml"),
                        ("Salt", "to taste"),
                    ],
                ),
                recipe(
                    "Kung pao chicken",
                    &[("Chicken breast", "300g"), ("Peanuts", "50g")],
                    &[
                        ("Carrot", "50g"),
                        ("Cucumber", "50g"),
                        ("Chopped scallion", "30g"),
                    ],
                    &[
                        ("Dried chili", "10g"),
                        ("Sichuan pepper", "5g"),
                        ("Light soy sauce", "15ml"),
                        ("Vinegar", "10ml"),
                        ("Salt", "to taste"),
                    ],
                ),
            ],
        ),
    ]
}

fn dinner() -> Vec<Menu> {
    vec![menu(
        "Spicy dinner",
        vec![
            recipe(
                "Mao xue wang",
                &[("Tripe", "200g"), ("Pork blood", "200g")],
                &[
                    ("Bean sprouts", "150g"),
                    ("Yellow chives", "100g"),
                    ("Scallion", "50g"),
                ],
                &[
                    ("Sichuan pepper", "10g"),
                    ("Dried chili", "20g"),
                    ("Bean paste", "30g"),
                    ("Cooking wine", "20ml"),
                    ("Salt", "to taste"),
                ],
            ),
            recipe(
                "Chongqing chicken",
                &[("Chicken pieces", "400g")],
                &[("Peanuts", "50g"), ("Scallion", "30g")],
                &[
                    ("Dried chili", "30g"),
                    ("Sichuan pepper", "15g"),
                    ("Light soy sauce", "20ml"),
                    ("Cooking wine", "15ml"),
                    ("Salt", "to taste"),
                ],
            ),
        ],
    )]
}

/// The fixed set of menus a plan is drawn from. Every slot has at least one menu.
pub struct Catalog {
    breakfast: Vec<Menu>,
    lunch: Vec<Menu>,
    dinner: Vec<Menu>,
}

impl Catalog {
    pub fn canned() -> Self {
        Self {
            breakfast: breakfast(),
            lunch: lunch(),
            dinner: dinner(),
        }
    }

    pub fn menus(&self, slot: MealSlot) -> &[Menu] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Every distinct ingredient name used by any recipe, sorted.
    pub fn ingredient_names(&self) -> Vec<String> {
        let mut names: Vec<_> = MealSlot::iter()
            .flat_map(|slot| self.menus(slot))
            .flat_map(|menu| &menu.recipes)
            .flat_map(|recipe| recipe.ingredients.iter())
            .map(|i| i.name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

#[test]
fn canned_catalog_shape() {
    let catalog = Catalog::canned();
    assert_eq!(catalog.menus(MealSlot::Breakfast).len(), 2);
    assert_eq!(catalog.menus(MealSlot::Lunch).len(), 2);
    assert_eq!(catalog.menus(MealSlot::Dinner).len(), 1);
    for slot in MealSlot::iter() {
        for menu in catalog.menus(slot) {
            assert_eq!(menu.recipes.len(), 2);
        }
    }

    let names = catalog.ingredient_names();
    assert!(names.contains(&"Green pepper".to_string()));
    assert!(names.windows(2).all(|w| w[0] < w[1]));
}
