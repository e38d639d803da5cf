//! Top bar: year navigation, fit and display toggles.

use super::YearGlanceApp;
use crate::models::settings::{THEME_DARK, THEME_LIGHT};
use egui::RichText;

impl YearGlanceApp {
    pub(super) fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("year_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous year").clicked() {
                    self.session.previous_year();
                    self.data_dirty = true;
                }

                ui.label(RichText::new(self.session.year().to_string()).heading().strong());

                if ui.button("▶").on_hover_text("Next year").clicked() {
                    self.session.next_year();
                    self.data_dirty = true;
                }

                ui.separator();

                if ui
                    .button("Fit")
                    .on_hover_text("Show the whole year")
                    .clicked()
                {
                    self.fit_canvas();
                }

                ui.separator();

                let mut show_headers = self.settings.show_cell_headers;
                if ui.checkbox(&mut show_headers, "Day headers").changed() {
                    self.settings.show_cell_headers = show_headers;
                    self.apply_settings(ctx);
                }

                let mut dark = self.settings.is_dark();
                if ui.checkbox(&mut dark, "Dark").changed() {
                    self.settings.theme = if dark { THEME_DARK } else { THEME_LIGHT }.to_string();
                    self.apply_settings(ctx);
                }
            });
        });
    }
}
