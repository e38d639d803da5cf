//! State of the year being browsed: year navigation, calendar visibility and
//! the selected day with its event list.

use chrono::NaiveDate;
use egui::Color32;

use crate::canvas::palette::{fallback_calendar_color, parse_color};
use crate::models::calendar::Calendar;
use crate::models::event::{Event, EventTime, EventsByDate};
use crate::services::data_loader::YearBundle;
use crate::utils::date::{calendar_date, date_key, format_month_day};

const TIME_FORMAT: &str = "%-I:%M %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedDay {
    pub day: u32,
    pub month: u32,
    pub date: NaiveDate,
}

impl SelectedDay {
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    /// Long form such as `Wednesday, January 1, 2025`.
    pub fn title(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct YearSession {
    year: i32,
    calendars: Vec<Calendar>,
    events: EventsByDate,
    selected: Option<SelectedDay>,
}

impl YearSession {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            calendars: Vec::new(),
            events: EventsByDate::new(),
            selected: None,
        }
    }

    /// Session over a loaded bundle; `fallback_year` is used when the bundle
    /// does not say which year it holds.
    pub fn from_bundle(bundle: YearBundle, fallback_year: i32) -> Self {
        Self {
            year: bundle.year.unwrap_or(fallback_year),
            calendars: bundle.calendars,
            events: bundle.events,
            selected: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    pub fn events(&self) -> &EventsByDate {
        &self.events
    }

    pub fn set_data(&mut self, calendars: Vec<Calendar>, events: EventsByDate) {
        self.calendars = calendars;
        self.events = events;
    }

    pub fn previous_year(&mut self) -> i32 {
        self.year -= 1;
        self.selected = None;
        self.year
    }

    pub fn next_year(&mut self) -> i32 {
        self.year += 1;
        self.selected = None;
        self.year
    }

    /// Flip a calendar's visibility. Returns false for unknown ids.
    pub fn toggle_calendar(&mut self, calendar_id: &str) -> bool {
        match self.calendars.iter_mut().find(|calendar| calendar.id == calendar_id) {
            Some(calendar) => {
                calendar.visible = !calendar.visible;
                log::debug!("Calendar '{}' visible: {}", calendar.id, calendar.visible);
                true
            }
            None => false,
        }
    }

    /// Events from unknown calendars stay visible; only calendars the user
    /// switched off are hidden.
    fn is_shown(&self, event: &Event) -> bool {
        self.calendars
            .iter()
            .find(|calendar| calendar.id == event.calendar_id)
            .map_or(true, |calendar| calendar.visible)
    }

    /// Events restricted to visible calendars; dates left empty are dropped.
    pub fn visible_events(&self) -> EventsByDate {
        self.events
            .iter()
            .filter_map(|(key, events)| {
                let shown: Vec<Event> = events
                    .iter()
                    .filter(|event| self.is_shown(event))
                    .cloned()
                    .collect();
                (!shown.is_empty()).then(|| (key.clone(), shown))
            })
            .collect()
    }

    /// Select a day of the current year; invalid dates are ignored.
    pub fn select_day(&mut self, day: u32, month: u32) -> Option<SelectedDay> {
        let date = calendar_date(self.year, month, day)?;
        let selected = SelectedDay { day, month, date };
        self.selected = Some(selected);
        Some(selected)
    }

    pub fn selected_day(&self) -> Option<SelectedDay> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Events of the selected day that belong to visible calendars.
    pub fn selected_day_events(&self) -> Vec<&Event> {
        let Some(selected) = self.selected else {
            return Vec::new();
        };
        self.events
            .get(&selected.date_key())
            .map(|events| events.iter().filter(|event| self.is_shown(event)).collect())
            .unwrap_or_default()
    }

    pub fn event_color(&self, event: &Event) -> Color32 {
        self.calendars
            .iter()
            .find(|calendar| calendar.id == event.calendar_id)
            .and_then(|calendar| parse_color(&calendar.display_color))
            .unwrap_or_else(fallback_calendar_color)
    }
}

/// Human-readable timing of an event for the day panel.
///
/// All-day end dates are exclusive, so a multi-day span shows the day before
/// the recorded end.
pub fn event_time_label(event: &Event) -> String {
    let start = event.start;

    if event.is_continuation() {
        return format!("Continues from {}", format_month_day(start.date()));
    }
    if event.is_multi_day {
        return match start {
            EventTime::Date(start_date) => {
                let end_date = match event.end {
                    Some(EventTime::Date(end)) => end.pred_opt().unwrap_or(end),
                    _ => start_date,
                };
                format!(
                    "Multi-day: {} - {}",
                    format_month_day(start_date),
                    format_month_day(end_date)
                )
            }
            EventTime::DateTime(start_time) => {
                let end_date = match event.end {
                    Some(EventTime::DateTime(end)) => end.date_naive(),
                    _ => start_time.date_naive(),
                };
                format!(
                    "Starts: {}, {} - {}",
                    start_time.format(TIME_FORMAT),
                    format_month_day(start_time.date_naive()),
                    format_month_day(end_date)
                )
            }
        };
    }

    match (start, event.end) {
        (EventTime::Date(_), _) => "All day".to_string(),
        (EventTime::DateTime(start), Some(EventTime::DateTime(end))) => {
            format!("{} - {}", start.format(TIME_FORMAT), end.format(TIME_FORMAT))
        }
        (EventTime::DateTime(start), _) => start.format(TIME_FORMAT).to_string(),
    }
}
