// Test fixtures - reusable test data
// Provides consistent calendars, events and year bundles across test files
#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use year_glance::models::calendar::Calendar;
use year_glance::models::event::{Event, EventTime, EventsByDate};
use year_glance::utils::date::date_key;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Jan 5, 2025 (Sunday), start of the sample trip
    pub fn trip_start() -> NaiveDate {
        ymd(2025, 1, 5)
    }
}

/// Sample calendars for testing
pub mod calendars {
    use super::*;

    pub fn work() -> Calendar {
        Calendar::new("work", "#0B8043").with_summary("Work")
    }

    pub fn home() -> Calendar {
        Calendar::new("home", "#D50000").with_summary("Home")
    }

    pub fn all() -> Vec<Calendar> {
        vec![work(), home()]
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn all_day(id: &str, calendar_id: &str, date: NaiveDate) -> Event {
        Event::builder(id, calendar_id)
            .summary(format!("Event {id}"))
            .all_day(date)
            .build()
            .unwrap()
    }

    /// Add an all-day event under its own date key
    pub fn add(map: &mut EventsByDate, event: Event) {
        map.entry(date_key(event.start.date())).or_default().push(event);
    }

    /// Add one record per day of an all-day event spanning `days` days.
    /// Every record carries the span's start and exclusive end; only the
    /// first is flagged as the first day.
    pub fn add_span(map: &mut EventsByDate, id: &str, calendar_id: &str, start: NaiveDate, days: u64) {
        let end = start.checked_add_days(Days::new(days)).unwrap();
        for offset in 0..days {
            let date = start.checked_add_days(Days::new(offset)).unwrap();
            let event = Event::builder(id, calendar_id)
                .summary(format!("Span {id}"))
                .all_day(start)
                .end(EventTime::Date(end))
                .multi_day(offset == 0)
                .build()
                .unwrap();
            map.entry(date_key(date)).or_default().push(event);
        }
    }

    /// A busy 2025: a 3-day trip, a shared day and a few single events
    pub fn sample_year() -> EventsByDate {
        let mut map = EventsByDate::new();
        add_span(&mut map, "trip", "work", dates::trip_start(), 3);
        add(&mut map, all_day("standup", "work", dates::ymd(2025, 1, 6)));
        add(&mut map, all_day("review", "work", dates::ymd(2025, 1, 10)));
        add(&mut map, all_day("sync", "work", dates::ymd(2025, 1, 10)));
        add(&mut map, all_day("dinner", "home", dates::ymd(2025, 1, 10)));
        add(&mut map, all_day("birthday", "home", dates::ymd(2025, 7, 4)));
        map
    }
}

/// Year bundle as delivered by the calendar backend
pub const BUNDLE_JSON: &str = r##"{
    "year": 2025,
    "calendars": [
        { "id": "work", "backgroundColor": "#0B8043", "selected": true, "summary": "Work" },
        { "id": "home", "displayColor": "#D50000", "visible": false }
    ],
    "events": {
        "2025-03-14": [
            {
                "id": "pi",
                "calendarId": "work",
                "summary": "Pi day talk",
                "location": "Room 3",
                "description": "Slides on the wiki\n\n<!-- BIGASSCALENDAR_NOTE_START -->bring pie<!-- BIGASSCALENDAR_NOTE_END -->",
                "start": { "dateTime": "2025-03-14T15:00:00+01:00", "timeZone": "Europe/Paris" },
                "end": { "dateTime": "2025-03-14T16:30:00+01:00", "timeZone": "Europe/Paris" }
            },
            { "id": "chores", "calendarId": "home", "start": { "date": "2025-03-14" } }
        ],
        "2025-03-20": [
            {
                "id": "conf",
                "calendarId": "work",
                "summary": "Conference",
                "start": { "date": "2025-03-20" },
                "end": { "date": "2025-03-23" },
                "isMultiDay": true,
                "isFirstDay": true
            }
        ],
        "2025-03-21": [
            {
                "id": "conf",
                "calendarId": "work",
                "summary": "Conference",
                "start": { "date": "2025-03-20" },
                "end": { "date": "2025-03-23" },
                "isMultiDay": true,
                "isFirstDay": false
            }
        ]
    }
}"##;
