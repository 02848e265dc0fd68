//! Column-to-geometry mapping for week bars.
//!
//! The week row is 7 equal columns; a bar's placement is expressed as
//! fractions of the row width so the host can scale it to any pixel width.

use crate::services::grid::DAYS_PER_WEEK;

use super::week_span::WeekSpan;

/// Horizontal inset applied to each side of a bar, as a fraction of the row
/// width, so adjacent bars don't visually touch the cell border.
pub const BAR_INSET: f32 = 0.004;

/// Horizontal placement of one bar, as fractions of the week row width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub left: f32,
    pub width: f32,
}

/// Map a projected span onto the 7-column row.
pub fn bar_geometry(span: &WeekSpan) -> BarGeometry {
    let columns = DAYS_PER_WEEK as f32;
    let left = span.start_col as f32 / columns + BAR_INSET;
    let width = (span.end_col - span.start_col + 1) as f32 / columns - 2.0 * BAR_INSET;
    BarGeometry { left, width }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::EventCategory;
    use crate::models::event::CalendarEvent;
    use chrono::NaiveDate;

    fn span(start_col: usize, end_col: usize) -> WeekSpan {
        let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        WeekSpan {
            event: CalendarEvent::new("e", "e", EventCategory::CampaignFlight, start).unwrap(),
            start_col,
            end_col,
            starts_in_week: true,
            ends_in_week: true,
            stack_row: 0,
            is_preview: false,
        }
    }

    #[test]
    fn test_full_week_bar() {
        let geometry = bar_geometry(&span(0, 6));
        assert!((geometry.left - BAR_INSET).abs() < f32::EPSILON);
        assert!((geometry.width - (1.0 - 2.0 * BAR_INSET)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_single_column_bar() {
        let geometry = bar_geometry(&span(3, 3));
        let column = 1.0 / 7.0;
        assert!((geometry.left - (3.0 * column + BAR_INSET)).abs() < 1e-6);
        assert!((geometry.width - (column - 2.0 * BAR_INSET)).abs() < 1e-6);
    }

    #[test]
    fn test_inset_keeps_bars_apart() {
        let left_bar = bar_geometry(&span(0, 2));
        let right_bar = bar_geometry(&span(3, 6));
        assert!(left_bar.left + left_bar.width < right_bar.left);
    }
}
