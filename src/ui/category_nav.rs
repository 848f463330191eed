use crate::inventory::{Inventory, ItemFilter};
use eframe::egui;

pub fn show(
    ui: &mut egui::Ui,
    inventory: &Inventory,
    filter: &mut ItemFilter,
    now: chrono::NaiveDateTime,
    expiring_within: i64,
) {
    ui.add_space(4.0);
    egui::Grid::new("category nav")
        .num_columns(2)
        .show(ui, |ui| {
            for f in ItemFilter::iter() {
                let count = inventory.count(f, now, expiring_within);
                if ui.selectable_label(*filter == f, f.to_string()).clicked() {
                    *filter = f;
                }
                ui.label(count.to_string());
                ui.end_row();
            }
        });
}
