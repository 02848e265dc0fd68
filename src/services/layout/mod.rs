//! Layout pipeline.
//!
//! Composes materialization, filtering and bucketing for one year and caches
//! the result keyed by (revision, year, toggles, query) so unrelated
//! re-renders don't recompute it. Week projection is NOT cached: it depends
//! on the live drag preview and is cheap, O(events x weeks).
//!
//! Everything runs on the host's single UI thread; no interior locking.

pub mod bucketing;
pub mod geometry;
pub mod week_span;

pub use bucketing::{bucket_events, compare_events, visible_with_overflow, EventBuckets};
pub use geometry::{bar_geometry, BarGeometry, BAR_INSET};
pub use week_span::{project_week, WeekSpan};

use std::rc::Rc;

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;
use crate::services::filter::{self, CategoryToggles};
use crate::services::grid::{MonthGrid, DAYS_PER_WEEK};
use crate::services::materializer::materialize_for_year;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LayoutKey {
    revision: u64,
    year: i32,
    toggles: CategoryToggles,
    query: String,
}

/// Memoizing front door for the year pipeline.
///
/// `revision` fingerprints the raw event collection; the host bumps it on
/// every store mutation so a stale cache can never be served.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    cached: Option<(LayoutKey, Rc<EventBuckets>)>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize, filter and bucket `events` for `year`.
    pub fn buckets_for_year(
        &mut self,
        events: &[CalendarEvent],
        revision: u64,
        year: i32,
        toggles: CategoryToggles,
        query: &str,
    ) -> Rc<EventBuckets> {
        let key = LayoutKey {
            revision,
            year,
            toggles,
            query: query.trim().to_lowercase(),
        };

        if let Some((cached_key, buckets)) = &self.cached {
            if *cached_key == key {
                return Rc::clone(buckets);
            }
        }

        let materialized = materialize_for_year(events, year);
        let filtered = filter::apply(&materialized, toggles, query);
        let buckets = Rc::new(bucket_events(filtered));
        self.cached = Some((key, Rc::clone(&buckets)));
        buckets
    }

    /// Drop the cached year, forcing the next call to recompute.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

/// One projected week row of a month card.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub days: [NaiveDate; DAYS_PER_WEEK],
    pub spans: Vec<WeekSpan>,
}

/// The six projected week rows of a month card.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub weeks: Vec<WeekLayout>,
}

/// Project a month grid against bucketed events and an optional live drag
/// preview. Recomputed every pass; previews are never cached.
pub fn project_month(
    grid: &MonthGrid,
    buckets: &EventBuckets,
    preview: Option<&CalendarEvent>,
) -> MonthLayout {
    let weeks = grid
        .weeks()
        .map(|week| {
            let mut days = [week[0]; DAYS_PER_WEEK];
            days.copy_from_slice(week);
            WeekLayout {
                days,
                spans: project_week(week, &buckets.multi_day, preview),
            }
        })
        .collect();
    MonthLayout { weeks }
}
