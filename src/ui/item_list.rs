use super::image_source;
use crate::inventory::models::ItemId;
use crate::inventory::{ExpirationStatus, Inventory, ItemFilter};
use eframe::egui;

pub enum UpdateEvent {
    Edit(ItemId),
    Delete(ItemId),
}

fn status_text(ui: &egui::Ui, status: ExpirationStatus) -> egui::RichText {
    let text = egui::RichText::new(status.to_string());
    match status {
        ExpirationStatus::Expired { .. } => text.color(ui.visuals().error_fg_color),
        ExpirationStatus::Soon { .. } => text.color(ui.visuals().warn_fg_color),
        ExpirationStatus::Fresh { .. } => text,
    }
}

pub fn show(
    ui: &mut egui::Ui,
    inventory: &Inventory,
    filter: ItemFilter,
    now: chrono::NaiveDateTime,
    expiring_within: i64,
) -> Vec<UpdateEvent> {
    let mut events = vec![];
    let items = inventory.view(filter, now, expiring_within);

    egui::ScrollArea::vertical()
        .auto_shrink(false)
        .show(ui, |ui| {
            egui::Grid::new("item list")
                .striped(true)
                .min_row_height(40.0)
                .show(ui, |ui| {
                    ui.label("");
                    ui.label("Name");
                    ui.label("Category");
                    ui.label("Produced");
                    ui.label("Shelf life");
                    ui.label("Quantity");
                    ui.end_row();

                    for item in &items {
                        match image_source(&item.image) {
                            Some(source) => {
                                ui.add(
                                    egui::Image::new(source)
                                        .max_width(40.0)
                                        .max_height(40.0),
                                );
                            }
                            None => {
                                ui.label("");
                            }
                        }
                        ui.label(&item.name);
                        ui.label(item.category.to_string());
                        ui.label(
                            item.production_date
                                .map(|d| d.to_string())
                                .unwrap_or_default(),
                        );
                        let status = status_text(ui, ExpirationStatus::of(item, now));
                        ui.label(status);
                        ui.label(format!("{} {}", item.quantity, item.unit));
                        if ui.button("Edit").clicked() {
                            events.push(UpdateEvent::Edit(item.id));
                        }
                        if ui.button("Delete").clicked() {
                            events.push(UpdateEvent::Delete(item.id));
                        }
                        ui.end_row();
                    }
                });
            if inventory.is_empty() {
                ui.label("The fridge is empty");
            } else if items.is_empty() {
                ui.label("Nothing here");
            }
        });
    events
}
