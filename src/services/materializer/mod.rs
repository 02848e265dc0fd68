//! Recurrence materialization.
//!
//! Expands yearly-recurring templates into concrete dated instances for a
//! requested year. Non-recurring events pass through only when they already
//! start in that year. The whole pass is a pure function of its inputs, so
//! materializing the same collection twice yields identical output, ids
//! included.

use chrono::Datelike;

use crate::models::event::CalendarEvent;
use crate::models::recurrence::Frequency;
use crate::utils::date::with_year_clamped;

/// Materialize `events` into concrete instances for `year`.
///
/// Output order follows input order; layout applies its own sort later.
pub fn materialize_for_year(events: &[CalendarEvent], year: i32) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter_map(|event| materialize_event(event, year))
        .collect()
}

fn materialize_event(event: &CalendarEvent, year: i32) -> Option<CalendarEvent> {
    match event.recurrence.map(|r| r.freq) {
        Some(Frequency::Yearly) => Some(instance_for_year(event, year)),
        None if event.start_date.year() == year => Some(event.clone()),
        None => None,
    }
}

/// Synthesize the instance of a yearly template for `year`.
///
/// A template already stored in the target year passes through unchanged
/// (same id). Otherwise dates shift by the whole-year delta with month and
/// day preserved; Feb 29 lands on Feb 28 in non-leap years. The synthesized
/// id is suffixed with the year so it stays distinct from the template while
/// remaining traceable to it.
fn instance_for_year(template: &CalendarEvent, year: i32) -> CalendarEvent {
    if template.start_date.year() == year {
        return template.clone();
    }

    let delta = year - template.start_date.year();
    let mut instance = template.clone();
    instance.id = format!("{}-{}", template.id, year);
    instance.start_date = with_year_clamped(template.start_date, year);
    instance.end_date = template
        .end_date
        .map(|end| with_year_clamped(end, end.year() + delta));
    instance
}
