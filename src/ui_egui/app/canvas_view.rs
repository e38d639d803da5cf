//! Central canvas: keeps the engine's surface in sync with the panel and
//! maps pointer, wheel and touch input onto engine gestures.

use super::YearGlanceApp;
use crate::ui_egui::touch::TouchAction;
use egui::{PointerButton, Pos2, Rect, Sense, TouchPhase};

impl YearGlanceApp {
    pub(super) fn render_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

                self.sync_canvas(response.rect);
                self.handle_touch_input(ui, response.rect);
                if !self.touches.is_active() {
                    self.handle_pointer_input(ui, &response);
                }
                self.drain_day_clicks();

                painter.extend(self.canvas.surface().shapes().iter().cloned());
            });
    }

    /// Follow the panel rectangle, redraw data changes and fit when needed.
    fn sync_canvas(&mut self, rect: Rect) {
        let moved = self.canvas.surface().rect().min != rect.min;
        let resized = self.canvas.surface_mut().set_rect(rect);
        if resized {
            self.canvas.resize();
        }

        let mut stale = moved || resized;
        if self.data_dirty {
            self.refresh_canvas();
            stale = false;
        }

        let has_area = rect.width() > 0.0 && rect.height() > 0.0;
        if has_area && (self.needs_fit || (resized && self.settings.auto_fit_on_resize)) {
            self.needs_fit = false;
            self.canvas.fit_to_view(rect.width(), rect.height());
            stale = false;
        }

        if stale {
            self.canvas.redraw();
        }
    }

    fn handle_pointer_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let origin = response.rect.min.to_vec2();

        if response.drag_started_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                self.canvas.start_drag(local.x, local.y);
            }
        }
        if response.dragged_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                self.canvas.drag(local.x, local.y);
            }
        }
        if response.drag_stopped() {
            self.canvas.end_drag();
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                self.canvas.click(local.x, local.y);
            }
        }

        if let Some(pos) = response.hover_pos() {
            let scroll = ui.input(|input| input.raw_scroll_delta.y);
            if scroll != 0.0 {
                // Scrolling up zooms in
                let local = pos - origin;
                let delta = self.settings.zoom_step.copysign(scroll);
                self.canvas.zoom(delta, local.x, local.y);
            }
        }
    }

    fn handle_touch_input(&mut self, ui: &egui::Ui, rect: Rect) {
        let touches: Vec<(u64, TouchPhase, Pos2)> = ui.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Touch { id, phase, pos, .. } => Some((id.0, *phase, *pos)),
                    _ => None,
                })
                .collect()
        });

        for (id, phase, pos) in touches {
            if phase == TouchPhase::Start && !rect.contains(pos) {
                continue;
            }
            let local = pos - rect.min.to_vec2();
            for action in self.touches.apply(id, phase, local) {
                self.apply_touch(action);
            }
        }
    }

    fn apply_touch(&mut self, action: TouchAction) {
        match action {
            TouchAction::StartDrag(point) => self.canvas.start_drag(point.x, point.y),
            TouchAction::Drag(point) => self.canvas.drag(point.x, point.y),
            TouchAction::EndDrag => self.canvas.end_drag(),
            TouchAction::StartPinch(points) => self.canvas.start_pinch(&points),
            TouchAction::Pinch(points) => self.canvas.pinch(&points),
            TouchAction::EndPinch => self.canvas.end_pinch(),
        }
    }
}
