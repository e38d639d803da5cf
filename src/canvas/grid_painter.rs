//! Static layer of the year grid: lines, month labels, day numbers and
//! per-cell date headers.

use egui::{Pos2, Stroke};

use super::layout::{GridGeometry, TOTAL_COLUMNS, TOTAL_ROWS};
use super::palette::YearGridPalette;
use super::surface::Surface;
use crate::utils::date::{calendar_date, cell_header_label, MONTH_ABBREVIATIONS};

const LABEL_FONT_SIZE: f32 = 14.0;
const HEADER_FONT_SIZE: f32 = 9.0;
/// Header text baseline, as a fraction of the row height
const HEADER_TEXT_Y: f32 = 0.15;
/// Separator between header and indicator area, as a fraction of the row height
const HEADER_SEPARATOR_Y: f32 = 0.25;
const HEADER_SEPARATOR_INSET: f32 = 2.0;

/// Draw the full static layer in order: lines, month labels, day labels
/// and, when enabled, the per-cell headers.
pub fn draw_static_layer<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &GridGeometry,
    palette: &YearGridPalette,
    year: i32,
    show_cell_headers: bool,
) {
    draw_grid_lines(surface, geometry, palette);
    draw_month_labels(surface, geometry, palette);
    draw_day_labels(surface, geometry, palette);
    if show_cell_headers {
        draw_cell_headers(surface, geometry, palette, year);
    }
}

/// 14 horizontal and 33 vertical lines bounding the 32 x 13 cells.
pub fn draw_grid_lines<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &GridGeometry,
    palette: &YearGridPalette,
) {
    let stroke = Stroke::new(1.0, palette.grid_line);
    let size = geometry.grid_size();
    let origin = geometry.origin;

    for row in 0..=TOTAL_ROWS {
        let y = origin.y + row as f32 * geometry.row_height;
        surface.line(Pos2::new(origin.x, y), Pos2::new(origin.x + size.x, y), stroke);
    }

    for column in 0..=TOTAL_COLUMNS {
        let x = origin.x + column as f32 * geometry.column_width;
        surface.line(Pos2::new(x, origin.y), Pos2::new(x, origin.y + size.y), stroke);
    }
}

pub fn draw_month_labels<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &GridGeometry,
    palette: &YearGridPalette,
) {
    for (month, label) in (1u32..).zip(MONTH_ABBREVIATIONS) {
        let center = geometry.cell_rect(0, month).center();
        surface.text(center, label, LABEL_FONT_SIZE, palette.label_text);
    }
}

pub fn draw_day_labels<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &GridGeometry,
    palette: &YearGridPalette,
) {
    for day in 1..=31u32 {
        let center = geometry.cell_rect(day, 0).center();
        surface.text(center, &day.to_string(), LABEL_FONT_SIZE, palette.label_text);
    }
}

/// `Jan Wed 1st` style header plus a separator line in every cell that is
/// a real date of `year`. Cells such as Feb 30 stay empty.
pub fn draw_cell_headers<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &GridGeometry,
    palette: &YearGridPalette,
    year: i32,
) {
    let separator = Stroke::new(1.0, palette.header_separator);

    for month in 1..=12u32 {
        for day in 1..=31u32 {
            let Some(date) = calendar_date(year, month, day) else {
                continue;
            };
            let cell = geometry.day_cell_rect(day, month);

            let header_center = Pos2::new(
                cell.center().x,
                cell.top() + geometry.row_height * HEADER_TEXT_Y,
            );
            surface.text(
                header_center,
                &cell_header_label(date),
                HEADER_FONT_SIZE,
                palette.header_text,
            );

            let y = cell.top() + geometry.row_height * HEADER_SEPARATOR_Y;
            surface.line(
                Pos2::new(cell.left() + HEADER_SEPARATOR_INSET, y),
                Pos2::new(cell.right() - HEADER_SEPARATOR_INSET, y),
                separator,
            );
        }
    }
}
