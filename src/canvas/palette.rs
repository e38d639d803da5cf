use egui::Color32;

use crate::models::calendar::DEFAULT_CALENDAR_COLOR;

/// Parse a hex color string (`#RRGGBB` or `#RGB`, `#` optional) to Color32.
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
            Some(Color32::from_rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

/// Colour for events whose calendar cannot be resolved.
pub fn fallback_calendar_color() -> Color32 {
    parse_color(DEFAULT_CALENDAR_COLOR).unwrap_or(Color32::from_rgb(0x42, 0x85, 0xF4))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearGridPalette {
    pub background: Color32,
    pub grid_line: Color32,
    pub label_text: Color32,
    pub header_text: Color32,
    pub header_separator: Color32,
    pub indicator_text: Color32,
    pub indicator_ring: Color32,
    pub count_disc: Color32,
    pub count_disc_text: Color32,
}

impl YearGridPalette {
    pub fn light() -> Self {
        Self {
            background: Color32::WHITE,
            grid_line: Color32::from_rgb(0xe0, 0xe0, 0xe0),
            label_text: Color32::from_rgb(0x33, 0x33, 0x33),
            header_text: Color32::from_rgb(0x55, 0x55, 0x55),
            header_separator: Color32::from_rgb(0xdd, 0xdd, 0xdd),
            indicator_text: Color32::WHITE,
            indicator_ring: Color32::WHITE,
            count_disc: Color32::WHITE,
            count_disc_text: Color32::from_rgb(0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(40, 40, 40),
            grid_line: Color32::from_rgb(60, 60, 60),
            label_text: Color32::from_rgb(240, 240, 240),
            header_text: Color32::from_rgb(170, 170, 170),
            header_separator: Color32::from_rgb(70, 70, 70),
            ..Self::light()
        }
    }
}

impl Default for YearGridPalette {
    fn default() -> Self {
        Self::light()
    }
}
