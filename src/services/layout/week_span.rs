//! Week-span projection for multi-day bars.
//!
//! For one week of seven days, computes where each overlapping multi-day
//! event's bar starts and ends, whether it is truncated at either edge, and
//! which stack row it occupies. Everything here is recomputed on every
//! layout pass; nothing is stored.

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;
use crate::services::grid::DAYS_PER_WEEK;

use super::geometry::{bar_geometry, BarGeometry};

/// One event's bar inside one week row.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSpan {
    pub event: CalendarEvent,
    /// First occupied column (0-6); 0 when the event started before this week.
    pub start_col: usize,
    /// Last occupied column (0-6); 6 when the event ends after this week.
    pub end_col: usize,
    /// Whether the event's start date falls inside this week.
    pub starts_in_week: bool,
    /// Whether the event's effective end falls inside this week.
    pub ends_in_week: bool,
    /// Vertical slot among the events overlapping this week. Dense per week:
    /// a week with two bars uses rows 0 and 1 no matter how many events
    /// exist elsewhere.
    pub stack_row: usize,
    /// True for the live drag preview bar.
    pub is_preview: bool,
}

impl WeekSpan {
    /// Horizontal placement as fractions of the week row width.
    pub fn geometry(&self) -> BarGeometry {
        bar_geometry(self)
    }
}

/// Project `multi_day` events (already in display order) onto one week.
///
/// When a live drag preview exists for an id in the set, the static bar is
/// suppressed and the preview takes its place so the event never renders
/// twice. A move preview can also drift into weeks its committed event never
/// touched; it then stacks after the static bars.
pub fn project_week(
    week: &[NaiveDate],
    multi_day: &[CalendarEvent],
    preview: Option<&CalendarEvent>,
) -> Vec<WeekSpan> {
    debug_assert_eq!(week.len(), DAYS_PER_WEEK);

    let mut spans = Vec::new();
    let mut preview_substituted = false;

    for event in multi_day {
        let (subject, is_preview) = match preview {
            Some(p) if p.id == event.id => {
                preview_substituted = true;
                (p, true)
            }
            _ => (event, false),
        };
        if let Some(span) = span_for(week, subject, spans.len(), is_preview) {
            spans.push(span);
        }
    }

    if let Some(p) = preview {
        if !preview_substituted {
            if let Some(span) = span_for(week, p, spans.len(), true) {
                spans.push(span);
            }
        }
    }

    spans
}

fn span_for(
    week: &[NaiveDate],
    event: &CalendarEvent,
    stack_row: usize,
    is_preview: bool,
) -> Option<WeekSpan> {
    let week_start = *week.first()?;
    let week_end = *week.last()?;
    if !event.span_overlaps(week_start, week_end) {
        return None;
    }

    let start = event.start_date;
    let end = event.effective_end();

    // Overlap guarantees both positions exist; the fallbacks are never hit.
    let start_col = week.iter().position(|day| *day >= start).unwrap_or(0);
    let end_col = week
        .iter()
        .rposition(|day| *day <= end)
        .unwrap_or(week.len() - 1);

    Some(WeekSpan {
        event: event.clone(),
        start_col,
        end_col,
        starts_in_week: start >= week_start && start <= week_end,
        ends_in_week: end >= week_start && end <= week_end,
        stack_row,
        is_preview,
    })
}
