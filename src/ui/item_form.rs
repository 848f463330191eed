use super::{image_source, new_error_toast, search::search_names, search::SearchWidget};
use crate::image_data;
use crate::inventory::models::{
    Category, IngredientGroups, InventoryItem, ItemId, ItemImage, NewItem,
};
use crate::meal_plan::Catalog;
use derive_more::{Display, Error};
use eframe::egui;

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum FormError {
    #[display("Name can't be empty")]
    MissingName,
    #[display("Unit can't be empty")]
    MissingUnit,
    #[display("Quantity must be a number of at least 0")]
    InvalidQuantity,
}

/// The form's fields as typed, before they are checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub category: Category,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub production_date: Option<chrono::NaiveDate>,
    pub expiration_date: chrono::NaiveDate,
    pub image: ItemImage,
    recipe: Option<IngredientGroups>,
}

impl ItemDraft {
    pub fn new(today: chrono::NaiveDate) -> Self {
        Self {
            category: Category::Vegetables,
            name: String::new(),
            quantity: "1".into(),
            unit: String::new(),
            production_date: None,
            expiration_date: today,
            image: ItemImage::None,
            recipe: None,
        }
    }

    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            category: item.category,
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            unit: item.unit.clone(),
            production_date: item.production_date,
            expiration_date: item.expiration_date,
            image: item.image.clone(),
            recipe: item.recipe.clone(),
        }
    }

    pub fn build(&self) -> Result<NewItem, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let unit = self.unit.trim();
        if unit.is_empty() {
            return Err(FormError::MissingUnit);
        }
        let quantity: f32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidQuantity)?;
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(FormError::InvalidQuantity);
        }

        Ok(NewItem {
            category: self.category,
            name: name.into(),
            image: self.image.clone(),
            production_date: self.production_date,
            expiration_date: self.expiration_date,
            quantity,
            unit: unit.into(),
            recipe: self.recipe.clone(),
        })
    }
}

pub enum UpdateEvent {
    Closed,
    Saved { id: Option<ItemId>, item: NewItem },
}

pub struct ItemFormWindow {
    editing: Option<ItemId>,
    draft: ItemDraft,
}

impl ItemFormWindow {
    pub fn new(today: chrono::NaiveDate) -> Self {
        Self {
            editing: None,
            draft: ItemDraft::new(today),
        }
    }

    pub fn edit(item: &InventoryItem) -> Self {
        Self {
            editing: Some(item.id),
            draft: ItemDraft::from_item(item),
        }
    }

    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    fn set_image(
        &mut self,
        result: Result<ItemImage, image_data::ImageError>,
        toasts: &mut egui_toast::Toasts,
    ) {
        match result {
            Ok(image) => self.draft.image = image,
            Err(error) => {
                toasts.add(new_error_toast(format!("Please pick an image file. {error}")));
            }
        }
    }

    fn pick_image(&mut self, toasts: &mut egui_toast::Toasts) {
        if let Some(file) = rfd::FileDialog::new()
            .add_filter("image", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .pick_file()
        {
            self.set_image(image_data::ingest_file(&file), toasts);
        }
    }

    fn take_dropped_image(&mut self, ctx: &egui::Context, toasts: &mut egui_toast::Toasts) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.into_iter().next() {
            let result = match (file.bytes, file.path) {
                (Some(bytes), _) => image_data::ingest_bytes(&file.name, bytes),
                (None, Some(path)) => image_data::ingest_file(&path),
                (None, None) => return,
            };
            self.set_image(result, toasts);
        }
    }

    fn update_fields(&mut self, ui: &mut egui::Ui, catalog: &Catalog) {
        let draft = &mut self.draft;
        egui::Grid::new("item form")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Category:");
                egui::ComboBox::from_id_salt("item category")
                    .selected_text(draft.category.to_string())
                    .show_ui(ui, |ui| {
                        for c in Category::iter() {
                            ui.selectable_value(&mut draft.category, c, c.to_string());
                        }
                    });
                ui.end_row();

                ui.label("Name:");
                ui.add(
                    SearchWidget::new("item name", &mut draft.name, |query| {
                        search_names(&catalog.ingredient_names(), query)
                    })
                    .hint_text("e.g. Carrot")
                    .desired_width(200.0),
                );
                ui.end_row();

                ui.label("Quantity:");
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut draft.quantity).desired_width(80.0));
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.unit)
                            .hint_text("pcs, g, ml...")
                            .desired_width(100.0),
                    );
                });
                ui.end_row();

                ui.label("Produced:");
                ui.horizontal(|ui| {
                    let mut known = draft.production_date.is_some();
                    ui.checkbox(&mut known, "");
                    if !known {
                        draft.production_date = None;
                    } else if draft.production_date.is_none() {
                        draft.production_date = Some(draft.expiration_date);
                    }
                    if let Some(date) = &mut draft.production_date {
                        ui.add(
                            egui_extras::DatePickerButton::new(date).id_salt("production date"),
                        );
                    }
                });
                ui.end_row();

                ui.label("Expires:");
                ui.add(
                    egui_extras::DatePickerButton::new(&mut draft.expiration_date)
                        .id_salt("expiration date"),
                );
                ui.end_row();
            });
    }

    fn update_image(&mut self, ui: &mut egui::Ui, toasts: &mut egui_toast::Toasts) {
        let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let stroke = if hovering {
            ui.visuals().selection.stroke
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };
        egui::Frame::group(ui.style())
            .stroke(stroke)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let label = if self.draft.image.is_none() {
                        "Drop an image here or"
                    } else {
                        "Drop another image here or"
                    };
                    ui.label(label);
                    if ui.button("Choose image...").clicked() {
                        self.pick_image(toasts);
                    }
                    if let Some(source) = image_source(&self.draft.image) {
                        ui.add(egui::Image::new(source).max_width(200.0));
                    }
                });
            });
    }

    pub fn update(
        &mut self,
        ctx: &egui::Context,
        catalog: &Catalog,
        toasts: &mut egui_toast::Toasts,
    ) -> Vec<UpdateEvent> {
        let mut events = vec![];
        let mut open = true;
        let title = if self.editing.is_some() {
            "Edit item"
        } else {
            "Add item"
        };

        self.take_dropped_image(ctx, toasts);

        egui::Window::new(title)
            .id(egui::Id::new("item form window"))
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                self.update_fields(ui, catalog);
                ui.add_space(8.0);
                self.update_image(ui, toasts);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        events.push(UpdateEvent::Closed);
                    }
                    if ui.button("Save").clicked() {
                        match self.draft.build() {
                            Ok(item) => events.push(UpdateEvent::Saved {
                                id: self.editing,
                                item,
                            }),
                            Err(error) => {
                                toasts.add(new_error_toast(error.to_string()));
                            }
                        }
                    }
                });
            });

        if !open {
            events.push(UpdateEvent::Closed);
        }
        events
    }
}

#[cfg(test)]
fn test_today() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[test]
fn draft_builds_item() {
    let mut draft = ItemDraft::new(test_today());
    draft.category = Category::Dairy;
    draft.name = "  Milk ".into();
    draft.quantity = "1.5".into();
    draft.unit = "l".into();
    let item = draft.build().unwrap();
    assert_eq!(item.name, "Milk");
    assert_eq!(item.quantity, 1.5);
    assert_eq!(item.unit, "l");
    assert_eq!(item.category, Category::Dairy);
    assert_eq!(item.expiration_date, test_today());
    assert_eq!(item.production_date, None);
}

#[test]
fn draft_validation() {
    let mut draft = ItemDraft::new(test_today());
    assert_eq!(draft.build(), Err(FormError::MissingName));

    draft.name = "Eggs".into();
    assert_eq!(draft.build(), Err(FormError::MissingUnit));

    draft.unit = "pcs".into();
    draft.quantity = "a dozen".into();
    assert_eq!(draft.build(), Err(FormError::InvalidQuantity));

    draft.quantity = "-1".into();
    assert_eq!(draft.build(), Err(FormError::InvalidQuantity));

    draft.quantity = "NaN".into();
    assert_eq!(draft.build(), Err(FormError::InvalidQuantity));

    draft.quantity = "0".into();
    assert!(draft.build().is_ok());
}

#[test]
fn editing_round_trips_every_field() {
    let item = NewItem {
        category: Category::Meat,
        name: "Pork".into(),
        image: ItemImage::Remote("https://example.com/pork.jpg".into()),
        production_date: chrono::NaiveDate::from_ymd_opt(2024, 4, 28),
        expiration_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
        quantity: 500.0,
        unit: "g".into(),
        recipe: Some(IngredientGroups::default()),
    };
    let existing = item.clone().with_id(ItemId::INITIAL);
    assert_eq!(ItemDraft::from_item(&existing).build(), Ok(item));
}
