use super::new_info_toast;
use crate::inventory::models::RecipeIngredient;
use crate::inventory::Inventory;
use crate::meal_plan::shortfall::{self, Shortfall};
use crate::meal_plan::{Catalog, MealPlan, Menu};
use eframe::egui;

fn ingredient_line(label: &str, ingredients: &[RecipeIngredient]) -> Option<String> {
    if ingredients.is_empty() {
        return None;
    }
    let list: Vec<_> = ingredients
        .iter()
        .map(|i| format!("{} {}", i.name, i.amount))
        .collect();
    Some(format!("{label}: {}", list.join(", ")))
}

fn show_menu(ui: &mut egui::Ui, menu: &Menu) {
    ui.label(egui::RichText::new(&menu.name).strong());
    for recipe in &menu.recipes {
        ui.indent(&recipe.name, |ui| {
            ui.label(&recipe.name);
            let groups = &recipe.ingredients;
            for line in [
                ingredient_line("Main", &groups.main),
                ingredient_line("Secondary", &groups.secondary),
                ingredient_line("Seasonings", &groups.seasonings),
            ]
            .into_iter()
            .flatten()
            {
                ui.small(line);
            }
        });
    }
}

pub struct MealPlannerWindow {
    plan: MealPlan,
}

impl MealPlannerWindow {
    pub fn new(catalog: &Catalog, rng: &mut impl rand::Rng) -> Self {
        Self {
            plan: MealPlan::generate(catalog, rng),
        }
    }

    pub fn shuffle(&mut self, catalog: &Catalog, rng: &mut impl rand::Rng) {
        self.plan = MealPlan::generate(catalog, rng);
    }

    fn update_plan(&mut self, ui: &mut egui::Ui, catalog: &Catalog, rng: &mut impl rand::Rng) {
        ui.horizontal(|ui| {
            ui.heading("Today's meals");
            if ui.button("Shuffle").clicked() {
                self.shuffle(catalog, rng);
            }
        });
        egui::ScrollArea::vertical()
            .id_salt("meal plan")
            .show(ui, |ui| {
                for (slot, menu) in self.plan.menus() {
                    ui.separator();
                    ui.label(egui::RichText::new(slot.to_string()).heading());
                    show_menu(ui, menu);
                }
            });
    }

    fn update_shopping_list(
        ui: &mut egui::Ui,
        missing: &[Shortfall],
        toasts: &mut egui_toast::Toasts,
    ) {
        ui.horizontal(|ui| {
            ui.heading("Shopping list");
            if !missing.is_empty() && ui.button("Copy").clicked() {
                ui.ctx().copy_text(shortfall::shopping_list_text(missing));
                toasts.add(new_info_toast("Shopping list copied"));
            }
        });
        ui.separator();
        egui::ScrollArea::vertical()
            .id_salt("shopping list")
            .show(ui, |ui| {
                for s in missing {
                    ui.label(egui::RichText::new(&s.name).strong());
                    ui.small(format!(
                        "need {}{unit}, have {}{unit}",
                        s.required,
                        s.available,
                        unit = s.unit
                    ));
                }
                if missing.is_empty() {
                    ui.label("Everything is in the fridge");
                }
            });
    }

    pub fn update(
        &mut self,
        ctx: &egui::Context,
        catalog: &Catalog,
        inventory: &Inventory,
        rng: &mut impl rand::Rng,
        toasts: &mut egui_toast::Toasts,
    ) -> bool {
        let mut open = true;
        egui::Window::new("What to eat?")
            .default_width(700.0)
            .open(&mut open)
            .show(ctx, |ui| {
                let missing = shortfall::shortfalls(&self.plan, inventory.iter());
                ui.columns(2, |columns| {
                    self.update_plan(&mut columns[0], catalog, rng);
                    Self::update_shopping_list(&mut columns[1], &missing, toasts);
                });
            });
        !open
    }
}
