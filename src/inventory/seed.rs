// Copyright 2023 Remi Bernotavicius

//! The canned inventory the app starts with. Dates are drawn relative to today so there is always
//! a mix of expired, nearly expired and fresh items.

use super::models::{Category, IngredientGroups, ItemImage, NewItem, RecipeIngredient};
use rand::Rng;

/// A day somewhere in `today + from ..= today + to`.
fn random_date(
    rng: &mut impl Rng,
    today: chrono::NaiveDate,
    from: i64,
    to: i64,
) -> chrono::NaiveDate {
    today + chrono::TimeDelta::days(rng.random_range(from..=to))
}

fn ingredients(list: &[(&str, &str)]) -> Vec<RecipeIngredient> {
    list.iter()
        .map(|(name, amount)| RecipeIngredient::new(*name, *amount))
        .collect()
}

fn remote_image(kind: &str, name: &str) -> ItemImage {
    ItemImage::Remote(format!("https://source.unsplash.com/featured/?{kind},{name}"))
}

struct SeedItem<'a> {
    category: Category,
    kind: &'a str,
    name: &'a str,
    produced: (i64, i64),
    expires: (i64, i64),
    quantity: f32,
    unit: &'a str,
    recipe: Option<IngredientGroups>,
}

impl SeedItem<'_> {
    fn build(self, rng: &mut impl Rng, today: chrono::NaiveDate) -> NewItem {
        NewItem {
            category: self.category,
            name: self.name.into(),
            image: remote_image(self.kind, self.name),
            production_date: Some(random_date(rng, today, self.produced.0, self.produced.1)),
            expiration_date: random_date(rng, today, self.expires.0, self.expires.1),
            quantity: self.quantity,
            unit: self.unit.into(),
            recipe: self.recipe,
        }
    }
}

fn vegetables(rng: &mut impl Rng, today: chrono::NaiveDate) -> Vec<NewItem> {
    ["Carrot", "Broccoli", "Lettuce", "Eggplant", "Green pepper"]
        .into_iter()
        .map(|name| {
            let expired = name == "Lettuce" || name == "Green pepper";
            SeedItem {
                category: Category::Vegetables,
                kind: "vegetable",
                name,
                produced: if expired { (-14, -7) } else { (-7, -3) },
                expires: if expired { (-2, -1) } else { (0, 14) },
                quantity: rng.random_range(1..=3) as f32,
                unit: "pcs",
                recipe: Some(IngredientGroups {
                    main: ingredients(&[(name, "500g")]),
                    secondary: ingredients(&[("Scallion", "2 stalks"), ("Garlic", "2 cloves")]),
                    seasonings: ingredients(&[("Salt", "to taste"), ("Pepper", "a pinch")]),
                }),
            }
            .build(rng, today)
        })
        .collect()
}

fn fruit(rng: &mut impl Rng, today: chrono::NaiveDate) -> Vec<NewItem> {
    ["Apple", "Banana", "Orange", "Grape"]
        .into_iter()
        .map(|name| {
            let (produced, expires) = match name {
                "Grape" => ((-10, -5), (-2, -1)),
                "Banana" => ((-7, -3), (2, 4)),
                _ => ((-7, -3), (7, 14)),
            };
            SeedItem {
                category: Category::Fruit,
                kind: "fruit",
                name,
                produced,
                expires,
                quantity: rng.random_range(1..=5) as f32,
                unit: if name == "Grape" { "bunch" } else { "pcs" },
                recipe: None,
            }
            .build(rng, today)
        })
        .collect()
}

fn meat(rng: &mut impl Rng, today: chrono::NaiveDate) -> Vec<NewItem> {
    ["Pork", "Beef", "Chicken", "Lamb"]
        .into_iter()
        .map(|name| {
            SeedItem {
                category: Category::Meat,
                kind: "meat",
                name,
                produced: (-5, 0),
                expires: (0, 7),
                quantity: 500.0,
                unit: "g",
                recipe: Some(IngredientGroups {
                    main: ingredients(&[(name, "300g")]),
                    secondary: ingredients(&[("Ginger", "3 slices"), ("Garlic", "3 cloves")]),
                    seasonings: ingredients(&[
                        ("Light soy sauce", "2 spoons"),
                        ("Cooking wine", "1 spoon"),
                        ("Salt", "to taste"),
                    ]),
                }),
            }
            .build(rng, today)
        })
        .collect()
}

fn seafood(rng: &mut impl Rng, today: chrono::NaiveDate) -> Vec<NewItem> {
    ["Salmon", "Shrimp", "Crab", "Squid"]
        .into_iter()
        .map(|name| {
            let counted = name == "Shrimp" || name == "Crab";
            SeedItem {
                category: Category::Seafood,
                kind: "seafood",
                name,
                produced: (-3, 0),
                expires: (0, 5),
                quantity: if counted {
                    rng.random_range(5..=14) as f32
                } else {
                    300.0
                },
                unit: if counted { "pcs" } else { "g" },
                recipe: Some(IngredientGroups {
                    main: ingredients(&[(name, "250g")]),
                    secondary: ingredients(&[("Scallion", "2 stalks"), ("Ginger", "2 slices")]),
                    seasonings: ingredients(&[
                        ("Minced garlic", "2 spoons"),
                        ("Cooking wine", "1 spoon"),
                        ("Salt", "to taste"),
                    ]),
                }),
            }
            .build(rng, today)
        })
        .collect()
}

fn dairy(rng: &mut impl Rng, today: chrono::NaiveDate) -> Vec<NewItem> {
    ["Milk", "Yogurt", "Cheese", "Butter"]
        .into_iter()
        .map(|name| {
            let liquid = name == "Milk" || name == "Yogurt";
            SeedItem {
                category: Category::Dairy,
                kind: "dairy",
                name,
                produced: if liquid { (-15, -10) } else { (-10, -5) },
                expires: if liquid { (2, 5) } else { (10, 20) },
                quantity: if liquid { 500.0 } else { 200.0 },
                unit: if liquid { "ml" } else { "g" },
                recipe: None,
            }
            .build(rng, today)
        })
        .collect()
}

fn other(rng: &mut impl Rng, today: chrono::NaiveDate) -> Vec<NewItem> {
    ["Bread", "Biscuits", "Jam", "Cake"]
        .into_iter()
        .map(|name| {
            let (produced, expires) = match name {
                "Bread" | "Cake" => ((-10, -5), (-3, -1)),
                "Biscuits" => ((-5, -2), (2, 4)),
                _ => ((-5, -2), (7, 10)),
            };
            let unit = match name {
                "Bread" => "slices",
                "Biscuits" => "packs",
                "Jam" => "g",
                _ => "pcs",
            };
            SeedItem {
                category: Category::Other,
                kind: "food",
                name,
                produced,
                expires,
                quantity: if unit == "g" {
                    250.0
                } else {
                    rng.random_range(1..=5) as f32
                },
                unit,
                recipe: None,
            }
            .build(rng, today)
        })
        .collect()
}

pub fn initial_items(rng: &mut impl Rng, today: chrono::NaiveDate) -> Vec<NewItem> {
    let mut items = vec![];
    items.extend(vegetables(rng, today));
    items.extend(fruit(rng, today));
    items.extend(meat(rng, today));
    items.extend(seafood(rng, today));
    items.extend(dairy(rng, today));
    items.extend(other(rng, today));
    log::debug!("seeded {} items", items.len());
    items
}

#[cfg(test)]
use rand::SeedableRng as _;

#[test]
fn seed_contents() {
    let today = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let items = initial_items(&mut rng, today);
    assert_eq!(items.len(), 25);

    let count = |c: Category| items.iter().filter(|i| i.category == c).count();
    assert_eq!(count(Category::Vegetables), 5);
    assert_eq!(count(Category::Fruit), 4);
    assert_eq!(count(Category::Meat), 4);
    assert_eq!(count(Category::Seafood), 4);
    assert_eq!(count(Category::Dairy), 4);
    assert_eq!(count(Category::Other), 4);

    let find = |name: &str| items.iter().find(|i| i.name == name).unwrap();
    assert!(find("Lettuce").expiration_date < today);
    assert!(find("Bread").expiration_date < today);
    assert!(find("Carrot").expiration_date >= today);
    assert_eq!(find("Pork").quantity, 500.0);
    assert_eq!(find("Pork").unit, "g");
    assert_eq!(find("Grape").unit, "bunch");
    assert_eq!(find("Jam").quantity, 250.0);
    assert!(find("Milk").recipe.is_none());
    assert_eq!(
        find("Salmon").recipe.as_ref().unwrap().main,
        vec![RecipeIngredient::new("Salmon", "250g")]
    );
}

#[test]
fn seed_dates_stay_in_their_windows() {
    let today = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    for seed in 0..20 {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        for item in initial_items(&mut rng, today) {
            let expires = (item.expiration_date - today).num_days();
            match item.name.as_str() {
                "Lettuce" | "Green pepper" | "Grape" => assert!((-2..=-1).contains(&expires)),
                "Bread" | "Cake" => assert!((-3..=-1).contains(&expires)),
                "Banana" | "Biscuits" => assert!((2..=4).contains(&expires)),
                "Milk" | "Yogurt" => assert!((2..=5).contains(&expires)),
                _ => assert!(expires >= 0),
            }
            let produced = item.production_date.unwrap();
            assert!(produced <= today);
        }
    }
}
