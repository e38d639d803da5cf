//! One-shot fit of the whole grid into a container.

use egui::Vec2;

use super::layout::GridGeometry;
use super::transform::Transform;

/// Fit results are clamped tighter than interactive zoom.
pub const FIT_MIN_SCALE: f32 = 0.5;
pub const FIT_MAX_SCALE: f32 = 1.5;
/// Leave 5% of the container free around the grid
pub const FIT_MARGIN: f32 = 0.95;

/// Transform that centres the full grid in a `container`-sized view.
///
/// Returns `None` when either the grid or the container has no area.
pub fn fit_transform(geometry: &GridGeometry, container: Vec2) -> Option<Transform> {
    let grid = geometry.grid_size();
    if !(grid.x > 0.0 && grid.y > 0.0 && container.x > 0.0 && container.y > 0.0) {
        return None;
    }

    let width_scale = container.x / grid.x;
    let height_scale = container.y / grid.y;
    let scale = (width_scale.min(height_scale) * FIT_MARGIN).clamp(FIT_MIN_SCALE, FIT_MAX_SCALE);

    let translate = Vec2::new(
        (container.x - grid.x * scale) / 2.0,
        (container.y - grid.y * scale) / 2.0,
    );
    Some(Transform::new(scale, translate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::layout::DEFAULT_PADDING;

    fn geometry() -> GridGeometry {
        // 640 x 260 grid
        GridGeometry::from_surface(Vec2::new(680.0, 300.0), DEFAULT_PADDING)
    }

    #[test]
    fn test_fit_uses_limiting_dimension() {
        let transform = fit_transform(&geometry(), Vec2::new(640.0, 520.0)).unwrap();

        // Width limits: 1.0 * 0.95
        assert!((transform.scale() - 0.95).abs() < 1e-6);
        assert!((transform.translate().x - 16.0).abs() < 1e-3);
        assert!((transform.translate().y - (520.0 - 247.0) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_fit_clamps_to_band() {
        let huge = fit_transform(&geometry(), Vec2::new(6400.0, 2600.0)).unwrap();
        assert_eq!(huge.scale(), FIT_MAX_SCALE);

        let tiny = fit_transform(&geometry(), Vec2::new(64.0, 26.0)).unwrap();
        assert_eq!(tiny.scale(), FIT_MIN_SCALE);
        // Still centred even when the grid overflows
        assert!((tiny.translate().x - (64.0 - 320.0) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_fit_rejects_empty_sizes() {
        assert_eq!(fit_transform(&geometry(), Vec2::new(0.0, 100.0)), None);
        let empty = GridGeometry::from_surface(Vec2::new(10.0, 10.0), DEFAULT_PADDING);
        assert_eq!(fit_transform(&empty, Vec2::new(500.0, 500.0)), None);
    }
}
