//! Month grid construction.
//!
//! Every month renders as a fixed 6-week grid (42 day cells, Monday first).
//! The fixed height keeps month cards visually stable, and the guaranteed
//! trailing overflow days are what make dragging an event into the following
//! month possible at all.

use chrono::{Datelike, Duration, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const GRID_DAYS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// The 42 ordered day cells of one month view.
///
/// Cells before the 1st and after the last day of the focal month belong to
/// the adjacent months (overflow days).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days: Vec<NaiveDate>,
}

impl MonthGrid {
    /// Build the grid for `month` (1-12) of `year`.
    ///
    /// The grid is the 42 consecutive days starting at the Monday on or
    /// before the 1st. That single rule covers the backward extension, the
    /// forward extension to Sunday, and the 6-week pad.
    ///
    /// Returns `None` for an invalid month number.
    pub fn build(year: i32, month: u32) -> Option<Self> {
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
        let grid_start = crate::utils::date::week_start(first_of_month);
        let days = (0..GRID_DAYS as i64)
            .map(|offset| grid_start + Duration::days(offset))
            .collect();
        Some(Self { year, month, days })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// All 42 days in order.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// The six Monday-first weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    /// One week by row index (0-5).
    pub fn week(&self, row: usize) -> Option<&[NaiveDate]> {
        let start = row.checked_mul(DAYS_PER_WEEK)?;
        self.days.get(start..start + DAYS_PER_WEEK)
    }

    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.days[GRID_DAYS - 1]
    }

    /// Whether `date` is one of the 42 cells.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first() && date <= self.last()
    }

    /// Whether `date` belongs to the focal month rather than the overflow.
    pub fn in_focal_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Number of leading cells taken from the previous month.
    pub fn leading_overflow(&self) -> usize {
        self.days.iter().take_while(|d| !self.in_focal_month(**d)).count()
    }

    /// Number of trailing cells taken from the following month(s).
    pub fn trailing_overflow(&self) -> usize {
        self.days
            .iter()
            .rev()
            .take_while(|d| !self.in_focal_month(**d))
            .count()
    }
}

/// Monday-first weekday column (0-6) for a date.
pub fn weekday_column(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Short Monday-first day names for the grid header.
pub fn day_names() -> [&'static str; DAYS_PER_WEEK] {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
}
