// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::NaiveDate;

use campaign_calendar::models::category::EventCategory;
use campaign_calendar::models::event::{CalendarEvent, Importance};
use campaign_calendar::models::recurrence::Recurrence;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025
    pub fn jan_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Returns Feb 29, 2024 (leap day)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Mar 10, 2025 (a Monday)
    pub fn monday_mar_10_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A global public holiday recurring every year.
    pub fn recurring_holiday() -> CalendarEvent {
        let mut event = CalendarEvent::new(
            "may-day",
            "May Day",
            EventCategory::PublicHoliday,
            dates::ymd(2024, 5, 1),
        )
        .unwrap();
        event.recurrence = Some(Recurrence::yearly());
        event
    }

    /// A yearly key date stored on a leap day.
    pub fn leap_day_template() -> CalendarEvent {
        let mut event = CalendarEvent::new(
            "leap-review",
            "Quadrennial review",
            EventCategory::UserKeyDate,
            dates::leap_day_2024(),
        )
        .unwrap();
        event.recurrence = Some(Recurrence::yearly());
        event
    }

    /// Brand-owned multi-day campaign flight, Mar 10-15 2025.
    pub fn spring_flight(brand: &str) -> CalendarEvent {
        CalendarEvent::builder()
            .id("spring-flight")
            .owner(brand)
            .title("Spring flight")
            .category(EventCategory::CampaignFlight)
            .start_date(dates::monday_mar_10_2025())
            .end_date(dates::ymd(2025, 3, 15))
            .tag("spring")
            .importance(Importance::High)
            .build()
            .unwrap()
    }

    /// Brand-owned single-day deadline with an accent override.
    pub fn asset_deadline(brand: &str) -> CalendarEvent {
        CalendarEvent::builder()
            .id("asset-deadline")
            .owner(brand)
            .title("Asset handoff")
            .category(EventCategory::Deadline)
            .start_date(dates::ymd(2025, 3, 14))
            .accent_color("#7C3AED")
            .notes("Final creative to production")
            .build()
            .unwrap()
    }

    /// A cultural moment in 2025, global and single-day.
    pub fn cultural_moment() -> CalendarEvent {
        CalendarEvent::builder()
            .id("pride")
            .title("Pride Month kickoff")
            .category(EventCategory::CulturalMoment)
            .start_date(dates::ymd(2025, 6, 1))
            .tag("community")
            .build()
            .unwrap()
    }
}
