//! Calendar list with visibility toggles.

use super::YearGlanceApp;
use crate::canvas::palette::{fallback_calendar_color, parse_color};
use egui::{RichText, Sense, Vec2};

const SIDEBAR_MIN_WIDTH: f32 = 140.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 180.0;
const SIDEBAR_MAX_WIDTH: f32 = 300.0;

impl YearGlanceApp {
    pub(super) fn render_calendar_list(&mut self, ctx: &egui::Context) {
        let mut toggled = None;

        egui::SidePanel::left("calendar_list")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui.label(RichText::new("Calendars").strong());
                ui.separator();

                if self.session.calendars().is_empty() {
                    ui.label(RichText::new("No calendars loaded").italics().weak());
                    return;
                }

                for calendar in self.session.calendars() {
                    let color = parse_color(&calendar.display_color)
                        .unwrap_or_else(fallback_calendar_color);
                    ui.horizontal(|ui| {
                        let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                        ui.painter().circle_filled(swatch.center(), 5.0, color);

                        let mut visible = calendar.visible;
                        if ui.checkbox(&mut visible, calendar.display_name()).changed() {
                            toggled = Some(calendar.id.clone());
                        }
                    });
                }
            });

        if let Some(id) = toggled {
            self.session.toggle_calendar(&id);
            self.data_dirty = true;
        }
    }
}
