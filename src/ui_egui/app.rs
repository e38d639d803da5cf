mod canvas_view;
mod day_panel;
mod sidebar;
mod toolbar;

use std::sync::mpsc::{self, Receiver};

use crate::canvas::hit_test::DayCell;
use crate::canvas::{CanvasOptions, YearCanvas};
use crate::models::settings::Settings;
use crate::services::session::YearSession;
use crate::services::settings::SettingsService;
use crate::ui_egui::surface::EguiSurface;
use crate::ui_egui::touch::TouchTracker;

pub struct YearGlanceApp {
    settings: Settings,
    /// Absent when the platform has no config directory
    settings_service: Option<SettingsService>,
    session: YearSession,
    canvas: YearCanvas<EguiSurface>,
    /// Days clicked on the canvas, delivered by the engine's click handler
    day_clicks: Receiver<DayCell>,
    touches: TouchTracker,
    /// Fit once the canvas first gets a real size
    needs_fit: bool,
    /// Year, calendars or visibility changed since the last draw
    data_dirty: bool,
}

impl eframe::App for YearGlanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_toolbar(ctx);
        self.render_calendar_list(ctx);
        self.render_day_panel(ctx);
        self.render_canvas(ctx);
    }
}

impl YearGlanceApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: Option<SettingsService>,
        session: YearSession,
    ) -> Self {
        apply_visuals(&cc.egui_ctx, &settings);

        let options = CanvasOptions::from_settings(&settings);
        let surface = EguiSurface::new(cc.egui_ctx.clone(), options.palette.background);
        let (sender, day_clicks) = mpsc::channel();
        let canvas = YearCanvas::new(surface, options, move |day: u32, month: u32| {
            if sender.send(DayCell { day, month }).is_err() {
                log::debug!("Day click {}/{} dropped, app is gone", day, month);
            }
        });

        log::info!(
            "Showing {} with {} calendars",
            session.year(),
            session.calendars().len()
        );

        Self {
            settings,
            settings_service,
            session,
            canvas,
            day_clicks,
            touches: TouchTracker::new(),
            needs_fit: true,
            data_dirty: true,
        }
    }

    /// Push the visible part of the session to the engine.
    fn refresh_canvas(&mut self) {
        let events = self.session.visible_events();
        self.canvas
            .draw(self.session.year(), &events, self.session.calendars());
        self.data_dirty = false;
    }

    fn fit_canvas(&mut self) {
        let size = self.canvas.surface().rect().size();
        self.canvas.fit_to_view(size.x, size.y);
    }

    fn drain_day_clicks(&mut self) {
        while let Ok(cell) = self.day_clicks.try_recv() {
            match self.session.select_day(cell.day, cell.month) {
                Some(selected) => log::debug!("Selected {}", selected.date_key()),
                None => log::debug!("Ignoring click on {}/{}", cell.day, cell.month),
            }
        }
    }

    /// Re-apply settings after a change from the UI and persist them.
    fn apply_settings(&mut self, ctx: &egui::Context) {
        apply_visuals(ctx, &self.settings);

        let options = CanvasOptions::from_settings(&self.settings);
        self.canvas
            .surface_mut()
            .set_background(options.palette.background);
        self.canvas.set_options(options);
        self.canvas.redraw();

        if let Some(service) = &self.settings_service {
            if let Err(err) = service.save(&self.settings) {
                log::warn!("Failed to save settings: {}", err);
            }
        }
    }
}

fn apply_visuals(ctx: &egui::Context, settings: &Settings) {
    ctx.set_visuals(if settings.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}
