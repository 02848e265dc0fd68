//! Event partitioning and ordering.
//!
//! Splits a materialized, filtered collection into the two shapes the month
//! cards consume: single-day chips grouped per date, and multi-day bars in
//! the fixed layout order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;

/// Events split by layout shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBuckets {
    /// Single-day events keyed by date; per-date order follows the global
    /// sort, so cells can render "first N, +K more" without re-sorting.
    pub single_day: BTreeMap<NaiveDate, Vec<CalendarEvent>>,
    /// Multi-day events in the order week projection stacks them.
    pub multi_day: Vec<CalendarEvent>,
}

impl EventBuckets {
    /// Single-day events on `date`, in display order.
    pub fn events_on(&self, date: NaiveDate) -> &[CalendarEvent] {
        self.single_day.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.single_day.is_empty() && self.multi_day.is_empty()
    }
}

/// Display comparator. Primary key: fixed category priority (holidays first,
/// seasons last). Secondary key: start date ascending.
pub fn compare_events(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    a.category
        .sort_priority()
        .cmp(&b.category.sort_priority())
        .then_with(|| a.start_date.cmp(&b.start_date))
}

/// Sort and partition `events` into buckets.
pub fn bucket_events(mut events: Vec<CalendarEvent>) -> EventBuckets {
    // Stable sort keeps input order on full ties.
    events.sort_by(compare_events);

    let mut buckets = EventBuckets::default();
    for event in events {
        if event.end_date.is_some_and(|end| end < event.start_date) {
            log::warn!(
                "event {} has end_date before start_date; laying out as single-day",
                event.id
            );
        }

        if event.is_multi_day() {
            buckets.multi_day.push(event);
        } else {
            buckets
                .single_day
                .entry(event.start_date)
                .or_default()
                .push(event);
        }
    }
    buckets
}

/// The first `limit` events of a day cell plus the hidden remainder count,
/// for the "show first N, then +K more" truncation policy. The limit is a
/// display concern supplied by the caller.
pub fn visible_with_overflow(events: &[CalendarEvent], limit: usize) -> (&[CalendarEvent], usize) {
    let shown = events.len().min(limit);
    (&events[..shown], events.len() - shown)
}
