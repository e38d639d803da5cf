// Settings module
// User-facing configuration persisted as TOML

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const THEME_LIGHT: &str = "light";
pub const THEME_DARK: &str = "dark";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `"light"` or `"dark"`
    pub theme: String,
    /// Draw the `Jan Wed 1st` header inside every day cell
    pub show_cell_headers: bool,
    /// Scale change applied per mouse-wheel notch
    pub zoom_step: f32,
    /// Re-run fit-to-view whenever the canvas changes size
    pub auto_fit_on_resize: bool,
    /// JSON year bundle to load at startup
    pub data_file: Option<PathBuf>,
    /// Year shown at startup; the current local year when unset
    pub default_year: Option<i32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: THEME_LIGHT.to_string(),
            show_cell_headers: true,
            zoom_step: 0.1,
            auto_fit_on_resize: true,
            data_file: None,
            default_year: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.theme != THEME_LIGHT && self.theme != THEME_DARK {
            return Err(format!(
                "Theme must be '{}' or '{}', got '{}'",
                THEME_LIGHT, THEME_DARK, self.theme
            ));
        }

        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err("Zoom step must be a positive number".to_string());
        }

        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        self.theme == THEME_DARK
    }
}
