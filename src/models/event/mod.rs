// Event module
// Per-day event records as delivered by the calendar collaborator

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Markers the calendar backend wraps around a note kept inside a description.
pub const NOTE_START_MARKER: &str = "<!-- BIGASSCALENDAR_NOTE_START -->";
pub const NOTE_END_MARKER: &str = "<!-- BIGASSCALENDAR_NOTE_END -->";

/// Events keyed by ISO date string (`YYYY-MM-DD`).
///
/// A multi-day event appears once under every date it touches.
pub type EventsByDate = BTreeMap<String, Vec<Event>>;

/// Start or end of an event: either a pure calendar date (all-day) or a
/// date with a time of day.
///
/// On the wire this is `{ "date": "2025-01-05" }` or
/// `{ "dateTime": "2025-01-05T10:00:00+01:00", "timeZone": "..." }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEventTime", into = "RawEventTime")]
pub enum EventTime {
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

impl EventTime {
    /// Calendar date of this value, in the offset it was recorded with.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(date_time) => date_time.date_naive(),
        }
    }

    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Self::Date(_) => None,
            Self::DateTime(date_time) => Some(date_time.time()),
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::Date(_))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEventTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_zone: Option<String>,
}

impl TryFrom<RawEventTime> for EventTime {
    type Error = String;

    fn try_from(raw: RawEventTime) -> Result<Self, Self::Error> {
        match (raw.date, raw.date_time) {
            (_, Some(date_time)) => Ok(Self::DateTime(date_time)),
            (Some(date), None) => Ok(Self::Date(date)),
            (None, None) => Err("event time needs either `date` or `dateTime`".to_string()),
        }
    }
}

impl From<EventTime> for RawEventTime {
    fn from(value: EventTime) -> Self {
        match value {
            EventTime::Date(date) => Self {
                date: Some(date),
                ..Self::default()
            },
            EventTime::DateTime(date_time) => Self {
                date_time: Some(date_time),
                ..Self::default()
            },
        }
    }
}

/// A single calendar event as it appears under one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub calendar_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub start: EventTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,
    #[serde(default)]
    pub is_multi_day: bool,
    #[serde(default)]
    pub is_first_day: bool,
}

impl Event {
    /// Create a builder for constructing events with optional fields
    pub fn builder(id: impl Into<String>, calendar_id: impl Into<String>) -> EventBuilder {
        EventBuilder::new(id, calendar_id)
    }

    /// Title shown in the day panel, falling back to a placeholder.
    pub fn title(&self) -> &str {
        self.summary
            .as_deref()
            .map(str::trim)
            .filter(|summary| !summary.is_empty())
            .unwrap_or("(No title)")
    }

    /// True for the entries of a multi-day event that are not its first day.
    pub fn is_continuation(&self) -> bool {
        self.is_multi_day && !self.is_first_day
    }

    /// Description with the embedded note block removed, or `None` when
    /// nothing else is left.
    ///
    /// The block runs from the first start marker to the last end marker.
    pub fn clean_description(&self) -> Option<String> {
        let description = self.description.as_deref()?;
        let cleaned = match (
            description.find(NOTE_START_MARKER),
            description.rfind(NOTE_END_MARKER),
        ) {
            (Some(start), Some(end)) if start <= end => {
                let mut text = String::with_capacity(description.len());
                text.push_str(&description[..start]);
                text.push_str(&description[end + NOTE_END_MARKER.len()..]);
                text
            }
            _ => description.to_string(),
        };
        let cleaned = cleaned.trim();
        (!cleaned.is_empty()).then(|| cleaned.to_string())
    }

    /// The event's note: the `note` field when set, otherwise the text
    /// between the first pair of note markers in the description.
    pub fn display_note(&self) -> Option<&str> {
        if let Some(note) = self.note.as_deref().filter(|note| !note.trim().is_empty()) {
            return Some(note);
        }
        let description = self.description.as_deref()?;
        let body_start = description.find(NOTE_START_MARKER)? + NOTE_START_MARKER.len();
        let body_len = description[body_start..].find(NOTE_END_MARKER)?;
        let note = &description[body_start..body_start + body_len];
        (!note.trim().is_empty()).then_some(note)
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: String,
    calendar_id: String,
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<EventTime>,
    end: Option<EventTime>,
    is_multi_day: bool,
    is_first_day: bool,
}

impl EventBuilder {
    pub fn new(id: impl Into<String>, calendar_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            calendar_id: calendar_id.into(),
            summary: None,
            description: None,
            location: None,
            start: None,
            end: None,
            is_multi_day: false,
            is_first_day: false,
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn start(mut self, start: EventTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: EventTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Shorthand for an all-day start on `date`.
    pub fn all_day(self, date: NaiveDate) -> Self {
        self.start(EventTime::Date(date))
    }

    /// Mark the record as one day of a multi-day event.
    pub fn multi_day(mut self, is_first_day: bool) -> Self {
        self.is_multi_day = true;
        self.is_first_day = is_first_day;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }
        if self.calendar_id.trim().is_empty() {
            return Err("Event calendar id cannot be empty".to_string());
        }
        let start = self.start.ok_or("Event start is required")?;

        Ok(Event {
            id: self.id,
            calendar_id: self.calendar_id,
            summary: self.summary,
            description: self.description,
            location: self.location,
            note: None,
            start,
            end: self.end,
            is_multi_day: self.is_multi_day,
            is_first_day: self.is_first_day,
        })
    }
}
