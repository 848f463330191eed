// Copyright 2023 Remi Bernotavicius

use crate::inventory::models::IngredientGroups;
use derive_more::Display;
use rand::Rng;
use strum::EnumIter;

pub use catalog::Catalog;

mod catalog;
pub mod shortfall;

#[derive(Debug, Display, EnumIter, Hash, Copy, Clone, PartialEq, Eq)]
pub enum MealSlot {
    #[display("Breakfast")]
    Breakfast,
    #[display("Lunch")]
    Lunch,
    #[display("Dinner")]
    Dinner,
}

impl MealSlot {
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: IngredientGroups,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub name: String,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    pub breakfast: Menu,
    pub lunch: Menu,
    pub dinner: Menu,
}

impl MealPlan {
    /// Picks one menu per slot, uniformly at random.
    pub fn generate(catalog: &Catalog, rng: &mut impl Rng) -> Self {
        let mut pick = |slot| {
            let menus = catalog.menus(slot);
            menus[rng.random_range(0..menus.len())].clone()
        };
        let plan = Self {
            breakfast: pick(MealSlot::Breakfast),
            lunch: pick(MealSlot::Lunch),
            dinner: pick(MealSlot::Dinner),
        };
        log::debug!(
            "generated plan: {} / {} / {}",
            plan.breakfast.name,
            plan.lunch.name,
            plan.dinner.name
        );
        plan
    }

    pub fn menu(&self, slot: MealSlot) -> &Menu {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn menus(&self) -> impl Iterator<Item = (MealSlot, &Menu)> {
        MealSlot::iter().map(move |slot| (slot, self.menu(slot)))
    }

    /// Recipes in slot order: breakfast, lunch, then dinner.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.menus().flat_map(|(_, menu)| &menu.recipes)
    }
}

#[cfg(test)]
use rand::SeedableRng as _;

#[test]
fn one_menu_per_slot_from_catalog() {
    let catalog = Catalog::canned();
    for seed in 0..50 {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let plan = MealPlan::generate(&catalog, &mut rng);
        assert_eq!(plan.menus().count(), 3);
        for (slot, menu) in plan.menus() {
            assert!(catalog.menus(slot).contains(menu), "{slot}: {}", menu.name);
        }
    }
}

#[test]
fn shuffling_reaches_every_menu() {
    let catalog = Catalog::canned();
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let plan = MealPlan::generate(&catalog, &mut rng);
        for (slot, menu) in plan.menus() {
            seen.insert((slot, menu.name.clone()));
        }
    }
    let total: usize = MealSlot::iter().map(|s| catalog.menus(s).len()).sum();
    assert_eq!(seen.len(), total);
}

#[test]
fn recipes_in_slot_order() {
    let catalog = Catalog::canned();
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let plan = MealPlan::generate(&catalog, &mut rng);
    let names: Vec<_> = plan.recipes().map(|r| r.name.clone()).collect();
    let expected: Vec<_> = [&plan.breakfast, &plan.lunch, &plan.dinner]
        .into_iter()
        .flat_map(|m| m.recipes.iter().map(|r| r.name.clone()))
        .collect();
    assert_eq!(names, expected);
}
