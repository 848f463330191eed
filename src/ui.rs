// Copyright 2023 Remi Bernotavicius

use crate::config::Config;
use crate::inventory::models::{ItemId, ItemImage, NewItem};
use crate::inventory::{self, Inventory, ItemFilter};
use crate::meal_plan::Catalog;
use eframe::egui;

mod about;
mod category_nav;
mod delete_confirm;
mod item_form;
mod item_list;
mod meal_planner;
mod search;

use about::AboutWindow;
use delete_confirm::DeleteConfirmWindow;
use item_form::ItemFormWindow;
use meal_planner::MealPlannerWindow;

fn new_error_toast(msg: impl Into<egui::WidgetText>) -> egui_toast::Toast {
    egui_toast::Toast {
        text: msg.into(),
        kind: egui_toast::ToastKind::Error,
        options: egui_toast::ToastOptions::default()
            .duration_in_seconds(3.0)
            .show_progress(false)
            .show_icon(true),
        ..Default::default()
    }
}

fn new_info_toast(msg: impl Into<egui::WidgetText>) -> egui_toast::Toast {
    egui_toast::Toast {
        text: msg.into(),
        kind: egui_toast::ToastKind::Info,
        options: egui_toast::ToastOptions::default()
            .duration_in_seconds(2.0)
            .show_progress(false),
        ..Default::default()
    }
}

fn image_source(image: &ItemImage) -> Option<egui::ImageSource<'static>> {
    match image {
        ItemImage::None => None,
        ItemImage::Remote(uri) => Some(egui::ImageSource::Uri(uri.clone().into())),
        ItemImage::Embedded { uri, bytes } => Some(egui::ImageSource::Bytes {
            uri: uri.clone().into(),
            bytes: egui::load::Bytes::Shared(bytes.clone()),
        }),
    }
}

pub struct FridgeApp {
    config: Config,
    inventory: Inventory,
    catalog: Catalog,
    filter: ItemFilter,
    rng: rand::rngs::StdRng,
    toasts: egui_toast::Toasts,
    item_form: Option<ItemFormWindow>,
    delete_confirm: Option<DeleteConfirmWindow>,
    meal_planner: Option<MealPlannerWindow>,
    about_window: Option<AboutWindow>,
}

impl FridgeApp {
    pub fn new(config: Config) -> Self {
        let mut rng = config.rng();
        let today = inventory::now().date();
        let inventory = Inventory::from_items(inventory::seed::initial_items(&mut rng, today));
        Self {
            config,
            inventory,
            catalog: Catalog::canned(),
            filter: ItemFilter::All,
            rng,
            toasts: egui_toast::Toasts::new()
                .anchor(egui::Align2::RIGHT_BOTTOM, (-10.0, -10.0))
                .direction(egui::Direction::BottomUp),
            item_form: None,
            delete_confirm: None,
            meal_planner: None,
            about_window: None,
        }
    }

    fn update_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("About").clicked() && self.about_window.is_none() {
                        self.about_window = Some(AboutWindow::new());
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
            ui.horizontal(|ui| {
                ui.heading("My Fridge");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Add item").clicked() && self.item_form.is_none() {
                        self.item_form = Some(ItemFormWindow::new(inventory::now().date()));
                    }
                    if ui.button("What to eat?").clicked() && self.meal_planner.is_none() {
                        self.meal_planner =
                            Some(MealPlannerWindow::new(&self.catalog, &mut self.rng));
                    }
                });
            });
        });
    }

    fn update_category_nav(&mut self, ctx: &egui::Context) {
        let now = inventory::now();
        egui::SidePanel::left("categories")
            .resizable(false)
            .show(ctx, |ui| {
                category_nav::show(
                    ui,
                    &self.inventory,
                    &mut self.filter,
                    now,
                    self.config.expiring_within(),
                );
            });
    }

    fn update_item_list(&mut self, ctx: &egui::Context) {
        let now = inventory::now();
        let mut events = vec![];
        egui::CentralPanel::default().show(ctx, |ui| {
            events = item_list::show(
                ui,
                &self.inventory,
                self.filter,
                now,
                self.config.expiring_within(),
            );
        });

        for event in events {
            match event {
                item_list::UpdateEvent::Edit(id) => {
                    if let Some(item) = self.inventory.get(id) {
                        self.item_form = Some(ItemFormWindow::edit(item));
                    }
                }
                item_list::UpdateEvent::Delete(id) => {
                    if let Some(item) = self.inventory.get(id) {
                        self.delete_confirm = Some(DeleteConfirmWindow::new(item));
                    }
                }
            }
        }
    }

    /// Stores the item from a saved form. Returns false when the item being edited no longer
    /// exists.
    fn save_item(&mut self, id: Option<ItemId>, item: NewItem) -> bool {
        self.item_form = None;
        match id {
            Some(id) => {
                let name = item.name.clone();
                let saved = self.inventory.edit(id, item);
                if !saved {
                    self.toasts
                        .add(new_error_toast(format!("{name} was deleted, nothing saved")));
                }
                saved
            }
            None => {
                self.inventory.add(item);
                true
            }
        }
    }

    fn delete_item(&mut self, id: ItemId) {
        self.inventory.delete(id);
        if self.item_form.as_ref().and_then(|w| w.editing()) == Some(id) {
            self.item_form = None;
        }
    }

    fn update_item_form(&mut self, ctx: &egui::Context) {
        let Some(window) = &mut self.item_form else {
            return;
        };
        for event in window.update(ctx, &self.catalog, &mut self.toasts) {
            match event {
                item_form::UpdateEvent::Closed => self.item_form = None,
                item_form::UpdateEvent::Saved { id, item } => {
                    self.save_item(id, item);
                }
            }
        }
    }

    fn update_delete_confirm(&mut self, ctx: &egui::Context) {
        if let Some(window) = &mut self.delete_confirm {
            match window.update(ctx) {
                Some(delete_confirm::UpdateEvent::Confirmed(id)) => {
                    self.delete_item(id);
                    self.delete_confirm = None;
                }
                Some(delete_confirm::UpdateEvent::Cancelled) => self.delete_confirm = None,
                None => {}
            }
        }
    }

    fn update_meal_planner(&mut self, ctx: &egui::Context) {
        if let Some(window) = &mut self.meal_planner {
            if window.update(
                ctx,
                &self.catalog,
                &self.inventory,
                &mut self.rng,
                &mut self.toasts,
            ) {
                self.meal_planner = None;
            }
        }
    }

    fn update_about_window(&mut self, ctx: &egui::Context) {
        if let Some(window) = &mut self.about_window {
            if window.update(ctx) {
                self.about_window = None;
            }
        }
    }
}

impl eframe::App for FridgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_menu(ctx);
        self.update_category_nav(ctx);
        self.update_item_list(ctx);
        self.update_item_form(ctx);
        self.update_delete_confirm(ctx);
        self.update_meal_planner(ctx);
        self.update_about_window(ctx);
        self.toasts.show(ctx);
    }
}

#[cfg(test)]
fn test_app() -> FridgeApp {
    FridgeApp::new(Config {
        seed: Some(7),
        ..Default::default()
    })
}

#[test]
fn deleting_an_item_closes_its_edit_form() {
    let mut app = test_app();
    let ids: Vec<_> = app.inventory.iter().map(|i| i.id).collect();
    let (edited, other) = (ids[0], ids[1]);

    app.item_form = Some(ItemFormWindow::edit(app.inventory.get(edited).unwrap()));
    app.delete_item(other);
    assert!(app.item_form.is_some());

    app.delete_item(edited);
    assert!(app.item_form.is_none());
    assert!(app.inventory.get(edited).is_none());
}

#[test]
fn saving_a_deleted_item_stores_nothing() {
    let mut app = test_app();
    let item = app.inventory.iter().next().unwrap().clone();
    let len = app.inventory.len();

    let mut update = item_form::ItemDraft::from_item(&item).build().unwrap();
    update.quantity = 99.0;
    app.inventory.delete(item.id);
    assert!(!app.save_item(Some(item.id), update.clone()));
    assert_eq!(app.inventory.len(), len - 1);
    assert!(app.item_form.is_none());

    assert!(app.save_item(None, update));
    assert_eq!(app.inventory.len(), len);
}
