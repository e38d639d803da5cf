//! Per-day event indicators.
//!
//! A day's events are grouped by calendar and counted with multi-day
//! continuations collapsed. One calendar gives a filled circle, several
//! give a pie whose slices are proportional to each calendar's count.

use std::collections::{HashMap, HashSet};
use std::f32::consts::TAU;

use chrono::Datelike;
use egui::{Color32, Pos2, Rect, Stroke};

use super::layout::GridGeometry;
use super::palette::{fallback_calendar_color, parse_color, YearGridPalette};
use super::surface::Surface;
use crate::models::calendar::Calendar;
use crate::models::event::{Event, EventsByDate};
use crate::utils::date::parse_date_key;

const COUNT_FONT_SIZE: f32 = 10.0;
const MULTI_DAY_RING_GAP: f32 = 2.0;
const MULTI_DAY_RING_WIDTH: f32 = 2.0;

/// Count the events credited to one day.
///
/// An event counts when it is single-day, when it is the first day of its
/// span, or when its id has not been counted yet for this day. Continuation
/// entries of an id already seen are skipped.
pub fn count_unique_events<'a, I>(events: I) -> usize
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut counted_ids: HashSet<&str> = HashSet::new();
    let mut count = 0;

    for event in events {
        if !event.is_multi_day || event.is_first_day || !counted_ids.contains(event.id.as_str()) {
            count += 1;
            counted_ids.insert(event.id.as_str());
        }
    }

    count
}

/// Calendar colours resolved once per draw.
pub struct CalendarColors<'a> {
    by_id: HashMap<&'a str, Color32>,
}

impl<'a> CalendarColors<'a> {
    pub fn new(calendars: &'a [Calendar]) -> Self {
        let by_id = calendars
            .iter()
            .map(|calendar| {
                let color = parse_color(&calendar.display_color).unwrap_or_else(|| {
                    log::warn!(
                        "Calendar '{}' has unusable colour '{}', using fallback",
                        calendar.id,
                        calendar.display_color
                    );
                    fallback_calendar_color()
                });
                (calendar.id.as_str(), color)
            })
            .collect();
        Self { by_id }
    }

    /// Colour for `calendar_id`; unknown ids get the fallback colour.
    pub fn resolve(&self, calendar_id: &str) -> Color32 {
        match self.by_id.get(calendar_id) {
            Some(color) => *color,
            None => {
                log::debug!("Event references unknown calendar '{}'", calendar_id);
                fallback_calendar_color()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarShare {
    pub calendar_id: String,
    pub color: Color32,
    pub count: usize,
}

/// Everything needed to draw one day's indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAggregate {
    /// Calendars in order of first appearance in the day's list
    pub shares: Vec<CalendarShare>,
    /// Unique single-day events plus unique multi-day events
    pub total: usize,
    pub has_multi_day: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSegment {
    pub color: Color32,
    pub start_angle: f32,
    pub sweep: f32,
}

/// Aggregate one day's events, or `None` when there is nothing to show.
pub fn aggregate_day(events: &[Event], colors: &CalendarColors<'_>) -> Option<DayAggregate> {
    if events.is_empty() {
        return None;
    }

    let (multi_day, single_day): (Vec<&Event>, Vec<&Event>) =
        events.iter().partition(|event| event.is_multi_day);
    let multi_day_count = count_unique_events(multi_day.iter().copied());
    let total = count_unique_events(single_day.iter().copied()) + multi_day_count;

    let mut groups: Vec<(&str, Vec<&Event>)> = Vec::new();
    for event in events {
        match groups.iter_mut().find(|(id, _)| *id == event.calendar_id) {
            Some((_, members)) => members.push(event),
            None => groups.push((event.calendar_id.as_str(), vec![event])),
        }
    }

    let shares: Vec<CalendarShare> = groups
        .into_iter()
        .map(|(calendar_id, members)| CalendarShare {
            calendar_id: calendar_id.to_string(),
            color: colors.resolve(calendar_id),
            count: count_unique_events(members),
        })
        .filter(|share| share.count > 0)
        .collect();

    if shares.is_empty() {
        return None;
    }

    Some(DayAggregate {
        shares,
        total,
        has_multi_day: multi_day_count > 0,
    })
}

impl DayAggregate {
    pub fn is_single_calendar(&self) -> bool {
        self.shares.len() == 1
    }

    /// Slices proportional to each calendar's count, laid end to end from
    /// angle 0. The denominator only includes calendars present on the day.
    pub fn pie_segments(&self) -> Vec<PieSegment> {
        let denominator: usize = self.shares.iter().map(|share| share.count).sum();
        if denominator == 0 {
            return Vec::new();
        }

        let mut start_angle = 0.0;
        self.shares
            .iter()
            .map(|share| {
                let sweep = share.count as f32 / denominator as f32 * TAU;
                let segment = PieSegment {
                    color: share.color,
                    start_angle,
                    sweep,
                };
                start_angle += sweep;
                segment
            })
            .collect()
    }
}

/// Size and vertical placement of the indicator inside a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorLayout {
    /// Diameter as a fraction of `min(column_width, row_height)`
    pub size_factor: f32,
    /// Centre y as a fraction of the row height from the cell top
    pub center_y_factor: f32,
}

impl IndicatorLayout {
    /// Cells carrying a date header: smaller indicator in the lower part.
    pub const WITH_HEADERS: Self = Self {
        size_factor: 0.6,
        center_y_factor: 0.6,
    };

    pub const SIMPLE: Self = Self {
        size_factor: 0.8,
        center_y_factor: 0.5,
    };

    pub fn for_headers(show_cell_headers: bool) -> Self {
        if show_cell_headers {
            Self::WITH_HEADERS
        } else {
            Self::SIMPLE
        }
    }

    pub fn diameter(&self, geometry: &GridGeometry) -> f32 {
        geometry.column_width.min(geometry.row_height) * self.size_factor
    }

    pub fn center(&self, cell: Rect, geometry: &GridGeometry) -> Pos2 {
        Pos2::new(
            cell.center().x,
            cell.top() + geometry.row_height * self.center_y_factor,
        )
    }
}

pub fn draw_indicator<S: Surface + ?Sized>(
    surface: &mut S,
    cell: Rect,
    geometry: &GridGeometry,
    layout: IndicatorLayout,
    aggregate: &DayAggregate,
    palette: &YearGridPalette,
) {
    let diameter = layout.diameter(geometry);
    let radius = diameter / 2.0;
    let center = layout.center(cell, geometry);

    if aggregate.is_single_calendar() {
        surface.fill_circle(center, radius, aggregate.shares[0].color);
        if aggregate.total > 1 {
            surface.text(
                center,
                &aggregate.total.to_string(),
                COUNT_FONT_SIZE,
                palette.indicator_text,
            );
        }
    } else {
        for segment in aggregate.pie_segments() {
            surface.fill_wedge(center, radius, segment.start_angle, segment.sweep, segment.color);
        }
        if aggregate.total > 1 {
            surface.fill_circle(center, diameter / 4.0, palette.count_disc);
            surface.text(
                center,
                &aggregate.total.to_string(),
                COUNT_FONT_SIZE,
                palette.count_disc_text,
            );
        }
    }

    if aggregate.has_multi_day {
        surface.stroke_circle(
            center,
            radius + MULTI_DAY_RING_GAP,
            Stroke::new(MULTI_DAY_RING_WIDTH, palette.indicator_ring),
        );
    }
}

/// Draw indicators for every date of `year` present in `events`.
///
/// Keys that do not parse, or that belong to another year, are skipped.
pub fn draw_day_events<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &GridGeometry,
    layout: IndicatorLayout,
    palette: &YearGridPalette,
    year: i32,
    events: &EventsByDate,
    colors: &CalendarColors<'_>,
) {
    for (key, day_events) in events {
        let Some(date) = parse_date_key(key) else {
            log::warn!("Skipping events under unparsable date key '{}'", key);
            continue;
        };
        if date.year() != year {
            log::debug!("Skipping events for {} while drawing {}", key, year);
            continue;
        }
        let Some(aggregate) = aggregate_day(day_events, colors) else {
            continue;
        };

        let cell = geometry.day_cell_rect(date.day(), date.month());
        draw_indicator(surface, cell, geometry, layout, &aggregate, palette);
    }
}
