//! Year-at-a-glance canvas engine.
//!
//! [`YearCanvas`] owns a drawing [`Surface`], the pan/zoom [`Transform`] and
//! the current year snapshot. Every transform change redraws immediately;
//! all calls run to completion on the caller's thread.

pub mod event_indicator;
pub mod fit;
pub mod gesture;
pub mod grid_painter;
pub mod layout;
pub mod palette;
pub mod surface;
pub mod transform;

use egui::{Pos2, Vec2};

use crate::models::calendar::Calendar;
use crate::models::event::EventsByDate;
use crate::models::settings::Settings;

use self::event_indicator::{draw_day_events, CalendarColors, IndicatorLayout};
use self::gesture::{GestureController, GestureState};
use self::grid_painter::draw_static_layer;
use self::hit_test::{hit_test, DayCell, DayClickHandler};
use self::layout::{GridGeometry, DEFAULT_PADDING};
use self::palette::YearGridPalette;
use self::surface::Surface;
use self::transform::Transform;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasOptions {
    /// Space left around the grid, in world units
    pub padding: f32,
    pub show_cell_headers: bool,
    pub palette: YearGridPalette,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            show_cell_headers: true,
            palette: YearGridPalette::light(),
        }
    }
}

impl CanvasOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            padding: DEFAULT_PADDING,
            show_cell_headers: settings.show_cell_headers,
            palette: if settings.is_dark() {
                YearGridPalette::dark()
            } else {
                YearGridPalette::light()
            },
        }
    }
}

/// Data of the last `draw` call, replayed on every interaction.
#[derive(Debug, Clone)]
struct YearSnapshot {
    year: i32,
    events: EventsByDate,
    calendars: Vec<Calendar>,
}

pub struct YearCanvas<S: Surface> {
    surface: S,
    options: CanvasOptions,
    transform: Transform,
    geometry: GridGeometry,
    gestures: GestureController,
    snapshot: Option<YearSnapshot>,
    on_day_click: Box<dyn DayClickHandler>,
}

impl<S: Surface> YearCanvas<S> {
    /// Bind to `surface` and compute the initial grid geometry.
    pub fn new(
        surface: S,
        options: CanvasOptions,
        on_day_click: impl DayClickHandler + 'static,
    ) -> Self {
        let geometry = GridGeometry::from_surface(surface.size(), options.padding);
        Self {
            surface,
            options,
            transform: Transform::default(),
            geometry,
            gestures: GestureController::new(),
            snapshot: None,
            on_day_click: Box::new(on_day_click),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    pub fn gesture(&self) -> GestureState {
        self.gestures.state()
    }

    pub fn options(&self) -> &CanvasOptions {
        &self.options
    }

    /// Year of the last `draw`, if any.
    pub fn year(&self) -> Option<i32> {
        self.snapshot.as_ref().map(|snapshot| snapshot.year)
    }

    /// Replace the options and recompute geometry. Does not redraw.
    pub fn set_options(&mut self, options: CanvasOptions) {
        self.options = options;
        self.resize();
    }

    /// Re-read the surface size and recompute the grid geometry.
    /// The caller decides when to redraw.
    pub fn resize(&mut self) {
        self.geometry = GridGeometry::from_surface(self.surface.size(), self.options.padding);
        log::debug!(
            "Grid geometry: column {:.2} x row {:.2}",
            self.geometry.column_width,
            self.geometry.row_height
        );
    }

    /// Render `year` with its events and remember the data for later
    /// interaction-driven redraws.
    pub fn draw(&mut self, year: i32, events: &EventsByDate, calendars: &[Calendar]) {
        self.snapshot = Some(YearSnapshot {
            year,
            events: events.clone(),
            calendars: calendars.to_vec(),
        });
        self.redraw();
    }

    /// Render the last snapshot again. No-op before the first `draw`.
    pub fn redraw(&mut self) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };

        self.surface.clear();
        self.surface.set_transform(self.transform);

        draw_static_layer(
            &mut self.surface,
            &self.geometry,
            &self.options.palette,
            snapshot.year,
            self.options.show_cell_headers,
        );

        let colors = CalendarColors::new(&snapshot.calendars);
        draw_day_events(
            &mut self.surface,
            &self.geometry,
            IndicatorLayout::for_headers(self.options.show_cell_headers),
            &self.options.palette,
            snapshot.year,
            &snapshot.events,
            &colors,
        );
    }

    pub fn start_drag(&mut self, x: f32, y: f32) {
        self.gestures.start_drag(Pos2::new(x, y), &self.transform);
    }

    pub fn drag(&mut self, x: f32, y: f32) {
        if self.gestures.drag(Pos2::new(x, y), &mut self.transform) {
            self.redraw();
        }
    }

    pub fn end_drag(&mut self) {
        self.gestures.end_drag();
    }

    /// Add `delta` to the scale, keeping the screen point `(x, y)` fixed.
    pub fn zoom(&mut self, delta: f32, x: f32, y: f32) {
        if self.gestures.zoom(delta, Pos2::new(x, y), &mut self.transform) {
            self.redraw();
        }
    }

    pub fn start_pinch(&mut self, touches: &[Pos2]) {
        self.gestures.start_pinch(touches, &self.transform);
    }

    pub fn pinch(&mut self, touches: &[Pos2]) {
        if self.gestures.pinch(touches, &mut self.transform) {
            self.redraw();
        }
    }

    pub fn end_pinch(&mut self) {
        self.gestures.end_pinch();
    }

    /// Resolve a click at screen `(x, y)` and notify the day-click handler.
    ///
    /// Clicks arriving while a drag or pinch is still active are the tail of
    /// that gesture and are ignored.
    pub fn click(&mut self, x: f32, y: f32) -> Option<DayCell> {
        if !self.gestures.is_idle() {
            return None;
        }
        let year = self.year()?;
        let cell = hit_test(&self.transform, &self.geometry, year, Pos2::new(x, y))?;
        log::debug!("Clicked day {} of month {}", cell.day, cell.month);
        self.on_day_click.on_day_click(cell.day, cell.month);
        Some(cell)
    }

    /// Scale and centre the whole grid inside a `width` x `height` container.
    pub fn fit_to_view(&mut self, width: f32, height: f32) {
        match fit::fit_transform(&self.geometry, Vec2::new(width, height)) {
            Some(transform) => {
                log::debug!(
                    "Fit to {:.0}x{:.0}: scale {:.3}",
                    width,
                    height,
                    transform.scale()
                );
                self.transform = transform;
                self.redraw();
            }
            None => log::debug!("Skipping fit into empty {:.0}x{:.0} container", width, height),
        }
    }
}
