use serde::{Deserialize, Serialize};

/// Colour used for events whose calendar is unknown or has no usable colour.
pub const DEFAULT_CALENDAR_COLOR: &str = "#4285F4";

/// A calendar descriptor supplied by the collaborator.
///
/// Accepts both the canonical field names (`displayColor`, `visible`) and
/// the Google Calendar list names (`backgroundColor`, `selected`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub id: String,
    #[serde(alias = "backgroundColor", default = "default_display_color")]
    pub display_color: String,
    #[serde(alias = "selected", default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

fn default_display_color() -> String {
    DEFAULT_CALENDAR_COLOR.to_string()
}

fn default_visible() -> bool {
    true
}

impl Calendar {
    pub fn new(id: impl Into<String>, display_color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_color: display_color.into(),
            visible: true,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Name for the calendar list; the id when no summary was given.
    pub fn display_name(&self) -> &str {
        self.summary
            .as_deref()
            .filter(|summary| !summary.trim().is_empty())
            .unwrap_or(&self.id)
    }
}
