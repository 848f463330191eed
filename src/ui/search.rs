use eframe::egui;
use std::hash::Hash;

/// A text box that pops up matching suggestions underneath it while it has focus. Clicking a
/// suggestion replaces the text with it.
pub struct SearchWidget<'a, SearchFn> {
    buf: &'a mut String,
    search_fn: SearchFn,
    pop_up_id: egui::Id,
    hint_text: Option<egui::WidgetText>,
    desired_width: Option<f32>,
}

impl<'a, SearchFn> SearchWidget<'a, SearchFn>
where
    SearchFn: FnOnce(&str) -> Vec<String>,
{
    pub fn new(id_source: impl Hash, buf: &'a mut String, search_fn: SearchFn) -> Self {
        Self {
            buf,
            search_fn,
            pop_up_id: egui::Id::new(id_source),
            hint_text: None,
            desired_width: None,
        }
    }

    pub fn hint_text(mut self, hint_text: impl Into<egui::WidgetText>) -> Self {
        self.hint_text = Some(hint_text.into());
        self
    }

    pub fn desired_width(mut self, desired_width: f32) -> Self {
        self.desired_width = Some(desired_width);
        self
    }
}

impl<SearchFn> egui::Widget for SearchWidget<'_, SearchFn>
where
    SearchFn: FnOnce(&str) -> Vec<String>,
{
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let Self {
            buf,
            search_fn,
            pop_up_id,
            hint_text,
            desired_width,
        } = self;

        let mut edit = egui::TextEdit::singleline(buf);
        if let Some(hint_text) = hint_text {
            edit = edit.hint_text(hint_text);
        }
        if let Some(desired_width) = desired_width {
            edit = edit.desired_width(desired_width);
        }
        let mut response = edit.show(ui).response;
        if response.gained_focus() {
            ui.memory_mut(|m| m.open_popup(pop_up_id));
        }

        let mut picked = None;
        egui::popup_below_widget(
            ui,
            pop_up_id,
            &response,
            egui::PopupCloseBehavior::CloseOnClick,
            |ui| {
                egui::ScrollArea::vertical()
                    .max_height(200.0)
                    .show(ui, |ui| {
                        for suggestion in search_fn(buf) {
                            if ui.selectable_label(*buf == suggestion, &suggestion).clicked() {
                                picked = Some(suggestion);
                            }
                        }
                    });
            },
        );

        if let Some(suggestion) = picked {
            *buf = suggestion;
            ui.memory_mut(|m| m.close_popup());
            response.mark_changed();
        }
        response
    }
}

/// Case-insensitive substring search over `names`, shaped for `SearchWidget`.
pub fn search_names(names: &[String], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    names
        .iter()
        .filter(|n| n.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[test]
fn search_names_matches_substrings() {
    let names: Vec<String> = ["Carrot", "Chili oil", "Dried chili", "Tofu"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(search_names(&names, "chili"), ["Chili oil", "Dried chili"]);
    assert_eq!(search_names(&names, "TOFU"), ["Tofu"]);
    assert_eq!(search_names(&names, "").len(), 4);
    assert!(search_names(&names, "beef").is_empty());
}
