//! Drag, wheel-zoom and pinch handling.
//!
//! Gesture mode is a single tagged state so dragging and pinching can never
//! be active at the same time. A second finger landing during a drag turns
//! the drag into a pinch; a drag cannot start while pinching.

use egui::{Pos2, Vec2};

use super::transform::Transform;

/// Pinches starting with the fingers closer than this are ignored.
pub const MIN_PINCH_DISTANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        start: Pos2,
        /// Translation when the drag began
        origin_translate: Vec2,
    },
    Pinching {
        initial_distance: f32,
        initial_scale: f32,
    },
}

pub fn pinch_distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}

pub fn pinch_center(a: Pos2, b: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

fn touch_pair(touches: &[Pos2]) -> Option<(Pos2, Pos2)> {
    match touches {
        [a, b] => Some((*a, *b)),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.state, GestureState::Pinching { .. })
    }

    /// Begin (or restart) a drag at `point`. Ignored while pinching or
    /// when `point` is not finite.
    pub fn start_drag(&mut self, point: Pos2, transform: &Transform) -> bool {
        if !point.is_finite() {
            return false;
        }
        if self.is_pinching() {
            log::debug!("Ignoring drag start during pinch");
            return false;
        }
        self.state = GestureState::Dragging {
            start: point,
            origin_translate: transform.translate(),
        };
        log::debug!("Drag started at ({:.1}, {:.1})", point.x, point.y);
        true
    }

    /// Move the view so the content follows the pointer. Returns whether the
    /// transform was updated; non-finite points are ignored.
    pub fn drag(&mut self, point: Pos2, transform: &mut Transform) -> bool {
        let GestureState::Dragging {
            start,
            origin_translate,
        } = self.state
        else {
            return false;
        };
        if !point.is_finite() {
            return false;
        }
        transform.set_translate(origin_translate + (point - start));
        true
    }

    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            self.state = GestureState::Idle;
            log::debug!("Drag ended");
        }
    }

    /// Add `delta` to the scale, keeping `anchor` visually fixed. Works in
    /// any gesture mode. Non-finite deltas are ignored.
    pub fn zoom(&self, delta: f32, anchor: Pos2, transform: &mut Transform) -> bool {
        if !delta.is_finite() || !anchor.x.is_finite() || !anchor.y.is_finite() {
            return false;
        }
        transform.zoom_about(anchor, transform.scale() + delta);
        true
    }

    /// Begin a pinch. Needs exactly two touches that are not on top of
    /// each other; anything else leaves the state untouched.
    pub fn start_pinch(&mut self, touches: &[Pos2], transform: &Transform) -> bool {
        let Some((a, b)) = touch_pair(touches) else {
            return false;
        };
        let initial_distance = pinch_distance(a, b);
        if initial_distance.is_nan() || initial_distance < MIN_PINCH_DISTANCE {
            log::debug!("Ignoring degenerate pinch (distance {:.3})", initial_distance);
            return false;
        }
        self.state = GestureState::Pinching {
            initial_distance,
            initial_scale: transform.scale(),
        };
        log::debug!("Pinch started at distance {:.1}", initial_distance);
        true
    }

    /// Scale relative to the pinch start, anchored at the touch midpoint.
    pub fn pinch(&mut self, touches: &[Pos2], transform: &mut Transform) -> bool {
        let GestureState::Pinching {
            initial_distance,
            initial_scale,
        } = self.state
        else {
            return false;
        };
        let Some((a, b)) = touch_pair(touches) else {
            return false;
        };
        let ratio = pinch_distance(a, b) / initial_distance;
        if !ratio.is_finite() {
            return false;
        }
        transform.zoom_about(pinch_center(a, b), initial_scale * ratio);
        true
    }

    pub fn end_pinch(&mut self) {
        if self.is_pinching() {
            self.state = GestureState::Idle;
            log::debug!("Pinch ended");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::transform::{MAX_SCALE, MIN_SCALE};

    #[test]
    fn test_drag_moves_by_pointer_delta() {
        let mut controller = GestureController::new();
        let mut transform = Transform::new(2.0, Vec2::new(10.0, 10.0));

        assert!(controller.start_drag(Pos2::new(100.0, 100.0), &transform));
        assert!(controller.drag(Pos2::new(130.0, 80.0), &mut transform));
        assert_eq!(transform.translate(), Vec2::new(40.0, -10.0));

        // Deltas are measured from the drag start, not the last move
        assert!(controller.drag(Pos2::new(100.0, 100.0), &mut transform));
        assert_eq!(transform.translate(), Vec2::new(10.0, 10.0));

        controller.end_drag();
        assert!(controller.is_idle());
        assert!(!controller.drag(Pos2::new(0.0, 0.0), &mut transform));
        assert_eq!(transform.translate(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_zoom_clamps() {
        let controller = GestureController::new();
        let mut transform = Transform::default();

        controller.zoom(100.0, Pos2::new(10.0, 10.0), &mut transform);
        assert_eq!(transform.scale(), MAX_SCALE);

        controller.zoom(-100.0, Pos2::new(10.0, 10.0), &mut transform);
        assert_eq!(transform.scale(), MIN_SCALE);

        assert!(!controller.zoom(f32::NAN, Pos2::new(10.0, 10.0), &mut transform));
        assert_eq!(transform.scale(), MIN_SCALE);
    }

    #[test]
    fn test_non_finite_drag_points_are_ignored() {
        let mut controller = GestureController::new();
        let mut transform = Transform::new(1.0, Vec2::new(5.0, 2.5));

        assert!(!controller.start_drag(Pos2::new(f32::NAN, 0.0), &transform));
        assert!(controller.is_idle());

        assert!(controller.start_drag(Pos2::new(10.0, 10.0), &transform));
        assert!(!controller.drag(Pos2::new(f32::NAN, 20.0), &mut transform));
        assert!(!controller.drag(Pos2::new(20.0, f32::INFINITY), &mut transform));
        assert_eq!(transform.translate(), Vec2::new(5.0, 2.5));
        assert!(controller.is_dragging());

        controller.zoom(0.5, Pos2::new(40.0, 40.0), &mut transform);
        assert_eq!(transform.scale(), 1.5);
        assert!(transform.translate().is_finite());

        // The drag keeps working once the pointer is sane again
        assert!(controller.drag(Pos2::new(15.0, 10.0), &mut transform));
        assert_eq!(transform.translate(), Vec2::new(10.0, 2.5));
    }

    #[test]
    fn test_pinch_clamps_at_both_ends() {
        let mut controller = GestureController::new();
        let mut transform = Transform::new(1.3, Vec2::ZERO);
        let center = Pos2::new(150.0, 100.0);
        let before = transform.screen_to_world(center);

        assert!(controller.start_pinch(&[Pos2::new(140.0, 100.0), Pos2::new(160.0, 100.0)], &transform));
        assert!(controller.pinch(&[Pos2::new(52.0, 100.0), Pos2::new(248.0, 100.0)], &mut transform));
        assert_eq!(transform.scale(), MAX_SCALE);
        assert!((transform.world_to_screen(before) - center).length() < 1e-3);

        // Ratio stays relative to the start, so pinching in reaches the floor
        let before = transform.screen_to_world(center);
        assert!(controller.pinch(&[Pos2::new(149.0, 100.0), Pos2::new(151.0, 100.0)], &mut transform));
        assert_eq!(transform.scale(), MIN_SCALE);
        assert!((transform.world_to_screen(before) - center).length() < 1e-3);
        controller.end_pinch();
        assert!(controller.is_idle());
    }

    #[test]
    fn test_pinch_requires_two_touches() {
        let mut controller = GestureController::new();
        let transform = Transform::default();

        assert!(!controller.start_pinch(&[Pos2::ZERO], &transform));
        assert!(!controller.start_pinch(&[Pos2::ZERO, Pos2::new(1.0, 1.0), Pos2::new(5.0, 5.0)], &transform));
        assert!(controller.is_idle());
    }

    #[test]
    fn test_degenerate_pinch_is_ignored() {
        let mut controller = GestureController::new();
        let mut transform = Transform::default();
        let same = Pos2::new(50.0, 50.0);

        assert!(!controller.start_pinch(&[same, same], &transform));
        assert!(controller.is_idle());
        assert!(!controller.pinch(&[same, Pos2::new(80.0, 50.0)], &mut transform));
        assert_eq!(transform, Transform::default());
    }

    #[test]
    fn test_pinch_scales_by_distance_ratio() {
        let mut controller = GestureController::new();
        let mut transform = Transform::default();

        controller.start_pinch(&[Pos2::new(100.0, 100.0), Pos2::new(200.0, 100.0)], &transform);
        controller.pinch(&[Pos2::new(50.0, 100.0), Pos2::new(250.0, 100.0)], &mut transform);
        assert_eq!(transform.scale(), 2.0);

        // Ratio is relative to the starting distance, not the previous move
        controller.pinch(&[Pos2::new(75.0, 100.0), Pos2::new(225.0, 100.0)], &mut transform);
        assert_eq!(transform.scale(), 1.5);

        controller.end_pinch();
        assert!(controller.is_idle());
    }

    #[test]
    fn test_second_finger_turns_drag_into_pinch() {
        let mut controller = GestureController::new();
        let transform = Transform::default();

        controller.start_drag(Pos2::new(10.0, 10.0), &transform);
        assert!(controller.start_pinch(&[Pos2::new(10.0, 10.0), Pos2::new(60.0, 10.0)], &transform));
        assert!(controller.is_pinching());
        assert!(!controller.is_dragging());

        // A drag cannot start until the pinch has ended
        assert!(!controller.start_drag(Pos2::new(10.0, 10.0), &transform));
        controller.end_drag();
        assert!(controller.is_pinching());
        controller.end_pinch();
        assert!(controller.start_drag(Pos2::new(10.0, 10.0), &transform));
    }
}
