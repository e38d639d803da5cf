//! Events of the selected day.

use super::YearGlanceApp;
use crate::services::session::event_time_label;
use egui::{Align, Layout, RichText, Sense, Vec2};

impl YearGlanceApp {
    pub(super) fn render_day_panel(&mut self, ctx: &egui::Context) {
        let Some(selected) = self.session.selected_day() else {
            return;
        };
        let mut close = false;

        egui::SidePanel::right("day_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(selected.title()).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button("✕").on_hover_text("Close").clicked() {
                            close = true;
                        }
                    });
                });
                ui.separator();

                let events = self.session.selected_day_events();
                if events.is_empty() {
                    ui.label(RichText::new("No events").italics().weak());
                    return;
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for event in events {
                        let color = self.session.event_color(event);
                        ui.horizontal(|ui| {
                            let (swatch, _) =
                                ui.allocate_exact_size(Vec2::new(4.0, 16.0), Sense::hover());
                            ui.painter().rect_filled(swatch, 1.0, color);
                            ui.label(RichText::new(event.title()).strong());
                        });
                        ui.label(RichText::new(event_time_label(event)).small());

                        if let Some(location) = &event.location {
                            ui.label(RichText::new(location).small().weak());
                        }
                        if let Some(description) = event.clean_description() {
                            ui.label(description);
                        }
                        if let Some(note) = event.display_note() {
                            ui.label(RichText::new(note).italics());
                        }
                        ui.add_space(6.0);
                    }
                });
            });

        if close {
            self.session.clear_selection();
        }
    }
}
