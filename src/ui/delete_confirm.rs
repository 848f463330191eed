use crate::inventory::models::{InventoryItem, ItemId};
use eframe::egui;

pub enum UpdateEvent {
    Confirmed(ItemId),
    Cancelled,
}

pub struct DeleteConfirmWindow {
    id: ItemId,
    name: String,
}

impl DeleteConfirmWindow {
    pub fn new(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
        }
    }

    pub fn update(&mut self, ctx: &egui::Context) -> Option<UpdateEvent> {
        let mut event = None;
        let mut open = true;
        egui::Window::new("Confirm delete")
            .id(egui::Id::new(("delete confirm", self.id)))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, (0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Delete \"{}\"? This can't be undone.",
                    self.name
                ));
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        event = Some(UpdateEvent::Cancelled);
                    }
                    let delete = egui::RichText::new("Delete").color(ui.visuals().error_fg_color);
                    if ui.button(delete).clicked() {
                        event = Some(UpdateEvent::Confirmed(self.id));
                    }
                });
            });
        if !open {
            event = Some(UpdateEvent::Cancelled);
        }
        event
    }
}
