//! Pan/zoom transform between screen space and world space.
//!
//! Everything on the canvas is laid out in world coordinates. The surface
//! maps a world point `w` to the screen as `translate + w * scale`.

use egui::{Pos2, Vec2};

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 5.0;

/// Uniform scale plus translation. Scale always stays within
/// [`MIN_SCALE`, `MAX_SCALE`]; out-of-range requests saturate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale: f32,
    translate: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

/// Clamp a requested scale into the allowed band. NaN collapses to the
/// lower bound so a bad input can never poison the transform.
pub fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

impl Transform {
    pub fn new(scale: f32, translate: Vec2) -> Self {
        Self {
            scale: clamp_scale(scale),
            translate,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    pub fn screen_to_world(&self, screen: Pos2) -> Pos2 {
        Pos2::new(
            (screen.x - self.translate.x) / self.scale,
            (screen.y - self.translate.y) / self.scale,
        )
    }

    pub fn world_to_screen(&self, world: Pos2) -> Pos2 {
        Pos2::new(
            world.x * self.scale + self.translate.x,
            world.y * self.scale + self.translate.y,
        )
    }

    pub fn set_translate(&mut self, translate: Vec2) {
        self.translate = translate;
    }

    /// Change the scale to `scale` (clamped) while keeping the world point
    /// under `anchor` at the same screen position.
    pub fn zoom_about(&mut self, anchor: Pos2, scale: f32) {
        let world = self.screen_to_world(anchor);
        self.scale = clamp_scale(scale);
        self.translate = Vec2::new(
            anchor.x - world.x * self.scale,
            anchor.y - world.y * self.scale,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Pos2, b: Pos2) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_default_is_identity() {
        let transform = Transform::default();
        let point = Pos2::new(12.5, -3.0);
        assert_eq!(transform.scale(), 1.0);
        assert_eq!(transform.screen_to_world(point), point);
    }

    #[test]
    fn test_screen_to_world_inverts_world_to_screen() {
        let transform = Transform::new(2.5, Vec2::new(40.0, -15.0));
        let world = Pos2::new(123.0, 77.0);
        assert_close(transform.screen_to_world(transform.world_to_screen(world)), world);
    }

    #[test]
    fn test_screen_to_world_formula() {
        let transform = Transform::new(2.0, Vec2::new(10.0, 20.0));
        assert_eq!(
            transform.screen_to_world(Pos2::new(30.0, 60.0)),
            Pos2::new(10.0, 20.0)
        );
    }

    #[test]
    fn test_new_clamps_scale() {
        assert_eq!(Transform::new(0.1, Vec2::ZERO).scale(), MIN_SCALE);
        assert_eq!(Transform::new(50.0, Vec2::ZERO).scale(), MAX_SCALE);
        assert_eq!(Transform::new(f32::NAN, Vec2::ZERO).scale(), MIN_SCALE);
    }

    #[test]
    fn test_zoom_about_keeps_anchor_fixed() {
        let mut transform = Transform::new(1.3, Vec2::new(-20.0, 35.0));
        let anchor = Pos2::new(300.0, 140.0);
        let world_before = transform.screen_to_world(anchor);

        transform.zoom_about(anchor, 3.7);

        assert_eq!(transform.scale(), 3.7);
        assert_close(transform.world_to_screen(world_before), anchor);
    }

    #[test]
    fn test_zoom_about_saturates() {
        let mut transform = Transform::default();
        let anchor = Pos2::new(50.0, 50.0);
        let world_before = transform.screen_to_world(anchor);

        transform.zoom_about(anchor, 9.0);

        assert_eq!(transform.scale(), MAX_SCALE);
        assert_close(transform.world_to_screen(world_before), anchor);
    }
}
