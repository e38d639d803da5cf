//! [`Surface`] backed by egui shapes.
//!
//! Calls are converted to screen-space [`Shape`]s offset by the canvas
//! rectangle and retained until the next `clear`, so the app can repaint the
//! last frame without asking the engine to redraw.

use std::f32::consts::FRAC_PI_2;

use egui::{Align2, Color32, Context, FontId, Pos2, Rect, Shape, Stroke, Vec2};

use crate::canvas::surface::Surface;
use crate::canvas::transform::Transform;

/// Arc points per quarter turn of a pie wedge
const SEGMENTS_PER_QUADRANT: usize = 8;

pub struct EguiSurface {
    ctx: Context,
    rect: Rect,
    background: Color32,
    transform: Transform,
    shapes: Vec<Shape>,
}

impl EguiSurface {
    pub fn new(ctx: Context, background: Color32) -> Self {
        Self {
            ctx,
            rect: Rect::from_min_size(Pos2::ZERO, Vec2::ZERO),
            background,
            transform: Transform::default(),
            shapes: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move the surface to `rect`. Returns true when the size changed.
    pub fn set_rect(&mut self, rect: Rect) -> bool {
        let resized = rect.size() != self.rect.size();
        self.rect = rect;
        resized
    }

    pub fn set_background(&mut self, background: Color32) {
        self.background = background;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    fn to_screen(&self, world: Pos2) -> Pos2 {
        self.rect.min + self.transform.world_to_screen(world).to_vec2()
    }

    fn scaled(&self, length: f32) -> f32 {
        length * self.transform.scale()
    }

    fn scaled_stroke(&self, stroke: Stroke) -> Stroke {
        Stroke::new(self.scaled(stroke.width), stroke.color)
    }
}

impl Surface for EguiSurface {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clear(&mut self) {
        self.shapes.clear();
        self.shapes
            .push(Shape::rect_filled(self.rect, 0.0, self.background));
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        let points = [self.to_screen(from), self.to_screen(to)];
        let stroke = self.scaled_stroke(stroke);
        self.shapes.push(Shape::line_segment(points, stroke));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.shapes.push(Shape::circle_filled(
            self.to_screen(center),
            self.scaled(radius),
            color,
        ));
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, stroke: Stroke) {
        self.shapes.push(Shape::circle_stroke(
            self.to_screen(center),
            self.scaled(radius),
            self.scaled_stroke(stroke),
        ));
    }

    fn fill_wedge(&mut self, center: Pos2, radius: f32, start_angle: f32, sweep: f32, color: Color32) {
        if !(sweep > 0.0 && sweep.is_finite() && start_angle.is_finite()) {
            return;
        }

        let center = self.to_screen(center);
        let radius = self.scaled(radius);

        // Convex polygons only, so split the wedge into fans of at most 90 degrees
        let fans = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
        let fan_sweep = sweep / fans as f32;
        for fan in 0..fans {
            let fan_start = start_angle + fan_sweep * fan as f32;
            let mut points = Vec::with_capacity(SEGMENTS_PER_QUADRANT + 2);
            points.push(center);
            for step in 0..=SEGMENTS_PER_QUADRANT {
                let angle = fan_start + fan_sweep * step as f32 / SEGMENTS_PER_QUADRANT as f32;
                points.push(center + radius * Vec2::angled(angle));
            }
            self.shapes
                .push(Shape::convex_polygon(points, color, Stroke::NONE));
        }
    }

    fn text(&mut self, center: Pos2, text: &str, font_size: f32, color: Color32) {
        let position = self.to_screen(center);
        let font = FontId::proportional(self.scaled(font_size));
        let shape = self
            .ctx
            .fonts(|fonts| Shape::text(fonts, position, Align2::CENTER_CENTER, text, font, color));
        self.shapes.push(shape);
    }
}
