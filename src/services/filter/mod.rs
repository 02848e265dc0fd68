//! Filter and search projection.
//!
//! Pure predicates narrowing the materialized event set before layout runs.
//! Both filters commute and neither mutates anything; they apply after
//! materialization so synthesized ids and dates exist to match against.

use serde::{Deserialize, Serialize};

use crate::models::category::EventCategory;
use crate::models::event::CalendarEvent;

/// Named category toggles, persisted by the host as a UI preference.
///
/// Each toggle covers a fixed group of categories; together the groups cover
/// all of them, so a category outside every group (should one ever be added)
/// defaults to always-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryToggles {
    /// Public holidays and cultural moments.
    pub holidays_and_moments: bool,
    /// School terms and back-to-school windows.
    pub school: bool,
    /// Seasonal windows.
    pub seasons: bool,
    /// Brand moments and campaign flights.
    pub brand: bool,
    /// User key dates and deadlines.
    pub key_dates: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self::all_on()
    }
}

impl CategoryToggles {
    pub fn all_on() -> Self {
        Self {
            holidays_and_moments: true,
            school: true,
            seasons: true,
            brand: true,
            key_dates: true,
        }
    }

    /// Whether events of `category` pass the toggles.
    pub fn allows(&self, category: EventCategory) -> bool {
        match category {
            EventCategory::PublicHoliday | EventCategory::CulturalMoment => {
                self.holidays_and_moments
            }
            EventCategory::SchoolTerm | EventCategory::BackToSchool => self.school,
            EventCategory::Season => self.seasons,
            EventCategory::BrandMoment | EventCategory::CampaignFlight => self.brand,
            EventCategory::UserKeyDate | EventCategory::Deadline => self.key_dates,
        }
    }
}

/// Case-insensitive substring match over title, tags and notes.
/// A blank or whitespace-only query matches everything.
pub fn matches_query(event: &CalendarEvent, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    if event.title.to_lowercase().contains(&needle) {
        return true;
    }
    if event.tags.iter().any(|tag| tag.to_lowercase().contains(&needle)) {
        return true;
    }
    event
        .notes
        .as_deref()
        .is_some_and(|notes| notes.to_lowercase().contains(&needle))
}

/// Apply toggles and search to a materialized event set.
pub fn apply(events: &[CalendarEvent], toggles: CategoryToggles, query: &str) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| toggles.allows(event.category) && matches_query(event, query))
        .cloned()
        .collect()
}
