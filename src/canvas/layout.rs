//! Grid layout for the 32 x 13 year grid.
//!
//! Column 0 holds month labels and row 0 holds day numbers, so day `d` of
//! month `m` lives in column `d`, row `m`.

use egui::{Pos2, Rect, Vec2};

pub const DEFAULT_PADDING: f32 = 20.0;
/// 31 day columns plus the month label column
pub const TOTAL_COLUMNS: u32 = 32;
/// 12 month rows plus the day label row
pub const TOTAL_ROWS: u32 = 13;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub column_width: f32,
    pub row_height: f32,
    pub origin: Pos2,
}

impl GridGeometry {
    /// Derive the geometry for a surface of `size`, leaving `padding` on
    /// every side. Surfaces smaller than the padding collapse to zero-sized
    /// cells rather than negative ones.
    pub fn from_surface(size: Vec2, padding: f32) -> Self {
        let available_width = (size.x - padding * 2.0).max(0.0);
        let available_height = (size.y - padding * 2.0).max(0.0);
        Self {
            column_width: available_width / TOTAL_COLUMNS as f32,
            row_height: available_height / TOTAL_ROWS as f32,
            origin: Pos2::new(padding, padding),
        }
    }

    /// Cells with zero width or height cannot be drawn or hit.
    pub fn is_degenerate(&self) -> bool {
        !(self.column_width > 0.0 && self.row_height > 0.0)
    }

    /// Full logical size of the grid, labels included.
    pub fn grid_size(&self) -> Vec2 {
        Vec2::new(
            self.column_width * TOTAL_COLUMNS as f32,
            self.row_height * TOTAL_ROWS as f32,
        )
    }

    pub fn cell_rect(&self, column: u32, row: u32) -> Rect {
        let min = Pos2::new(
            self.origin.x + column as f32 * self.column_width,
            self.origin.y + row as f32 * self.row_height,
        );
        Rect::from_min_size(min, Vec2::new(self.column_width, self.row_height))
    }

    /// Rectangle of the cell for day `day` (1-31) of month `month` (1-12).
    pub fn day_cell_rect(&self, day: u32, month: u32) -> Rect {
        self.cell_rect(day, month)
    }

    /// Column and row under a world-space point, or `None` when the point
    /// lies above or left of the grid origin or the grid is degenerate.
    /// Points past the right/bottom edge still return their (out of range)
    /// cell so callers can decide.
    pub fn cell_at(&self, world: Pos2) -> Option<(u32, u32)> {
        if self.is_degenerate() || world.x < self.origin.x || world.y < self.origin.y {
            return None;
        }
        let column = ((world.x - self.origin.x) / self.column_width).floor();
        let row = ((world.y - self.origin.y) / self.row_height).floor();
        if !column.is_finite() || !row.is_finite() || column > u32::MAX as f32 || row > u32::MAX as f32 {
            return None;
        }
        Some((column as u32, row as u32))
    }
}
