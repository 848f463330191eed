// Copyright 2023 Remi Bernotavicius

use derive_more::Display;
use models::{Category, InventoryItem, ItemId, NewItem};

pub mod models;
pub mod seed;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Items with this many days left or fewer are shown as expiring.
pub const WARNING_DAYS: i64 = 7;

pub fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Whole days until `expiration` (taken at midnight), rounded up. Negative once expired.
pub fn remaining_days(expiration: chrono::NaiveDate, now: chrono::NaiveDateTime) -> i64 {
    let millis = (expiration.and_time(chrono::NaiveTime::default()) - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpirationStatus {
    Expired { days_ago: i64 },
    Soon { days_left: i64 },
    Fresh { days_left: i64 },
}

impl ExpirationStatus {
    pub fn from_remaining_days(days: i64) -> Self {
        if days < 0 {
            Self::Expired { days_ago: -days }
        } else if days <= WARNING_DAYS {
            Self::Soon { days_left: days }
        } else {
            Self::Fresh { days_left: days }
        }
    }

    pub fn of(item: &InventoryItem, now: chrono::NaiveDateTime) -> Self {
        Self::from_remaining_days(remaining_days(item.expiration_date, now))
    }
}

impl std::fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expired { days_ago } => write!(f, "expired {days_ago} days ago"),
            Self::Soon { days_left } | Self::Fresh { days_left } => {
                write!(f, "{days_left} days left")
            }
        }
    }
}

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemFilter {
    #[display("All")]
    All,
    #[display("Expiring soon")]
    ExpiringSoon,
    #[display("{_0}")]
    Category(Category),
}

impl ItemFilter {
    pub fn iter() -> impl Iterator<Item = Self> {
        [Self::All, Self::ExpiringSoon]
            .into_iter()
            .chain(Category::iter().map(Self::Category))
    }

    pub fn matches(
        &self,
        item: &InventoryItem,
        now: chrono::NaiveDateTime,
        expiring_within: i64,
    ) -> bool {
        match self {
            Self::All => true,
            Self::ExpiringSoon => remaining_days(item.expiration_date, now) <= expiring_within,
            Self::Category(c) => item.category == *c,
        }
    }
}

/// Stable, so items expiring on the same day keep their insertion order.
pub fn sort_by_remaining_days(items: &mut [&InventoryItem], now: chrono::NaiveDateTime) {
    items.sort_by_key(|i| remaining_days(i.expiration_date, now));
}

pub struct Inventory {
    items: Vec<InventoryItem>,
    next_id: ItemId,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: vec![],
            next_id: ItemId::INITIAL,
        }
    }

    pub fn from_items(items: impl IntoIterator<Item = NewItem>) -> Self {
        let mut inventory = Self::new();
        for item in items {
            inventory.add(item);
        }
        inventory
    }

    pub fn add(&mut self, item: NewItem) -> ItemId {
        let id = self.next_id;
        self.next_id = id.next();
        log::info!("adding {} ({id})", item.name);
        self.items.push(item.with_id(id));
        id
    }

    /// Replaces the item with the given id, keeping the id. Returns false if there is no such
    /// item.
    pub fn edit(&mut self, id: ItemId, item: NewItem) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(existing) => {
                log::info!("editing {} ({id})", item.name);
                *existing = item.with_id(id);
                true
            }
            None => {
                log::warn!("tried to edit missing item {id}");
                false
            }
        }
    }

    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        let deleted = self.items.len() != before;
        if deleted {
            log::info!("deleted item {id}");
        }
        deleted
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items matching `filter`, soonest to expire first.
    pub fn view(
        &self,
        filter: ItemFilter,
        now: chrono::NaiveDateTime,
        expiring_within: i64,
    ) -> Vec<&InventoryItem> {
        let mut items: Vec<_> = self
            .items
            .iter()
            .filter(|i| filter.matches(i, now, expiring_within))
            .collect();
        sort_by_remaining_days(&mut items, now);
        items
    }

    pub fn count(
        &self,
        filter: ItemFilter,
        now: chrono::NaiveDateTime,
        expiring_within: i64,
    ) -> usize {
        self.items
            .iter()
            .filter(|i| filter.matches(i, now, expiring_within))
            .count()
    }
}

#[cfg(test)]
fn test_now() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap()
}

#[cfg(test)]
fn test_date(month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

#[cfg(test)]
fn test_item(name: &str, category: Category, expiration_date: chrono::NaiveDate) -> NewItem {
    NewItem {
        category,
        name: name.into(),
        image: models::ItemImage::None,
        production_date: None,
        expiration_date,
        quantity: 1.0,
        unit: "pcs".into(),
        recipe: None,
    }
}

#[test]
fn remaining_days_rounds_up() {
    let now = test_now();
    assert_eq!(remaining_days(test_date(5, 2), now), 1);
    assert_eq!(remaining_days(test_date(5, 10), now), 9);
    assert_eq!(remaining_days(test_date(5, 1), now), 0);
    assert_eq!(remaining_days(test_date(4, 30), now), -1);
    assert_eq!(remaining_days(test_date(4, 28), now), -3);

    let midnight = test_date(5, 1).and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(remaining_days(test_date(5, 1), midnight), 0);
    assert_eq!(remaining_days(test_date(5, 4), midnight), 3);
}

#[test]
fn remaining_days_is_deterministic() {
    let now = test_now();
    let first = remaining_days(test_date(6, 15), now);
    for _ in 0..10 {
        assert_eq!(remaining_days(test_date(6, 15), now), first);
    }
}

#[test]
fn expiration_status() {
    assert_eq!(
        ExpirationStatus::from_remaining_days(-2),
        ExpirationStatus::Expired { days_ago: 2 }
    );
    assert_eq!(
        ExpirationStatus::from_remaining_days(0),
        ExpirationStatus::Soon { days_left: 0 }
    );
    assert_eq!(
        ExpirationStatus::from_remaining_days(7),
        ExpirationStatus::Soon { days_left: 7 }
    );
    assert_eq!(
        ExpirationStatus::from_remaining_days(8),
        ExpirationStatus::Fresh { days_left: 8 }
    );
    assert_eq!(
        ExpirationStatus::Expired { days_ago: 3 }.to_string(),
        "expired 3 days ago"
    );
    assert_eq!(
        ExpirationStatus::Fresh { days_left: 12 }.to_string(),
        "12 days left"
    );
}

#[test]
fn add_edit_delete() {
    let mut inventory = Inventory::new();
    assert!(inventory.is_empty());
    let carrot = inventory.add(test_item("Carrot", Category::Vegetables, test_date(5, 5)));
    let milk = inventory.add(test_item("Milk", Category::Dairy, test_date(5, 3)));
    assert_ne!(carrot, milk);
    assert_eq!(inventory.len(), 2);

    let mut edited = test_item("Carrots", Category::Vegetables, test_date(5, 6));
    edited.quantity = 4.0;
    assert!(inventory.edit(carrot, edited));
    let item = inventory.get(carrot).unwrap();
    assert_eq!(item.id, carrot);
    assert_eq!(item.name, "Carrots");
    assert_eq!(item.quantity, 4.0);

    assert!(inventory.delete(milk));
    assert!(!inventory.delete(milk));
    assert!(inventory.get(milk).is_none());
    assert_eq!(inventory.len(), 1);

    let missing = milk.next().next();
    assert!(!inventory.edit(
        missing,
        test_item("Ghost", Category::Other, test_date(5, 1))
    ));
    assert_eq!(inventory.len(), 1);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut inventory = Inventory::new();
    let a = inventory.add(test_item("Apple", Category::Fruit, test_date(5, 5)));
    inventory.delete(a);
    assert!(inventory.is_empty());
    let b = inventory.add(test_item("Banana", Category::Fruit, test_date(5, 5)));
    assert_ne!(a, b);
}

#[test]
fn view_filters_and_sorts() {
    let now = test_now();
    let inventory = Inventory::from_items([
        test_item("Beef", Category::Meat, test_date(5, 7)),
        test_item("Apple", Category::Fruit, test_date(5, 20)),
        test_item("Bread", Category::Other, test_date(4, 29)),
        test_item("Pork", Category::Meat, test_date(5, 3)),
        test_item("Grape", Category::Fruit, test_date(5, 3)),
    ]);

    let names = |items: Vec<&InventoryItem>| -> Vec<String> {
        items.into_iter().map(|i| i.name.clone()).collect()
    };

    assert_eq!(
        names(inventory.view(ItemFilter::All, now, 5)),
        ["Bread", "Pork", "Grape", "Beef", "Apple"]
    );
    assert_eq!(
        names(inventory.view(ItemFilter::Category(Category::Meat), now, 5)),
        ["Pork", "Beef"]
    );
    assert_eq!(
        names(inventory.view(ItemFilter::ExpiringSoon, now, 5)),
        ["Bread", "Pork", "Grape"]
    );
    assert_eq!(
        names(inventory.view(ItemFilter::ExpiringSoon, now, 6)),
        ["Bread", "Pork", "Grape", "Beef"]
    );
    assert_eq!(inventory.count(ItemFilter::All, now, 5), 5);
    assert_eq!(inventory.count(ItemFilter::ExpiringSoon, now, 5), 3);
    assert_eq!(
        inventory.count(ItemFilter::Category(Category::Seafood), now, 5),
        0
    );
}

#[test]
fn sort_is_stable_and_monotonic() {
    let now = test_now();
    let inventory = Inventory::from_items(
        (0..20).map(|i| test_item(&format!("item {i}"), Category::Other, test_date(5, 1 + i % 4))),
    );
    let items = inventory.view(ItemFilter::All, now, 5);
    let days: Vec<_> = items
        .iter()
        .map(|i| remaining_days(i.expiration_date, now))
        .collect();
    assert!(days.windows(2).all(|w| w[0] <= w[1]));

    for pair in items.windows(2) {
        if pair[0].expiration_date == pair[1].expiration_date {
            assert!(pair[0].id < pair[1].id);
        }
    }
}

#[test]
fn filters_cover_every_category() {
    let filters: Vec<_> = ItemFilter::iter().collect();
    assert_eq!(filters.len(), 2 + Category::iter().count());
    assert_eq!(filters[0].to_string(), "All");
    assert_eq!(filters[1].to_string(), "Expiring soon");
    assert_eq!(
        ItemFilter::Category(Category::Seafood).to_string(),
        "Seafood"
    );
}
