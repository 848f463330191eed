// Copyright 2023 Remi Bernotavicius

use derive_more::Display;
use std::sync::Arc;
use strum::EnumIter;

#[derive(Debug, Display, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct ItemId(u32);

impl ItemId {
    pub const INITIAL: Self = Self(1);

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Display, EnumIter, Hash, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    #[display("Vegetables")]
    Vegetables,
    #[display("Fruit")]
    Fruit,
    #[display("Meat")]
    Meat,
    #[display("Seafood")]
    Seafood,
    #[display("Dairy")]
    Dairy,
    #[display("Other")]
    Other,
}

impl Category {
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// Where an item's picture comes from. Uploaded pictures are kept in memory and addressed by a
/// `bytes://` URI so the UI can cache the decoded texture.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum ItemImage {
    #[default]
    None,
    Remote(String),
    Embedded {
        uri: String,
        bytes: Arc<[u8]>,
    },
}

impl ItemImage {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    /// Free text like "200g", "2 cloves" or "to taste".
    pub amount: String,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct IngredientGroups {
    pub main: Vec<RecipeIngredient>,
    pub secondary: Vec<RecipeIngredient>,
    pub seasonings: Vec<RecipeIngredient>,
}

impl IngredientGroups {
    pub fn iter(&self) -> impl Iterator<Item = &RecipeIngredient> {
        self.main
            .iter()
            .chain(&self.secondary)
            .chain(&self.seasonings)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub category: Category,
    pub name: String,
    pub image: ItemImage,
    pub production_date: Option<chrono::NaiveDate>,
    pub expiration_date: chrono::NaiveDate,
    pub quantity: f32,
    pub unit: String,
    pub recipe: Option<IngredientGroups>,
}

impl NewItem {
    pub fn with_id(self, id: ItemId) -> InventoryItem {
        InventoryItem {
            id,
            category: self.category,
            name: self.name,
            image: self.image,
            production_date: self.production_date,
            expiration_date: self.expiration_date,
            quantity: self.quantity,
            unit: self.unit,
            recipe: self.recipe,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: ItemId,
    pub category: Category,
    pub name: String,
    pub image: ItemImage,
    pub production_date: Option<chrono::NaiveDate>,
    pub expiration_date: chrono::NaiveDate,
    pub quantity: f32,
    pub unit: String,
    pub recipe: Option<IngredientGroups>,
}
