//! Event category model.
//!
//! Every calendar event belongs to exactly one category. The category decides
//! the default bar color, the sort priority used by layout, and whether the
//! event may occupy a multi-day span.

use serde::{Deserialize, Serialize};

/// Fixed set of event categories.
///
/// Serialized in camelCase so externally produced datasets (`publicHoliday`,
/// `brandMoment`, ...) deserialize directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventCategory {
    PublicHoliday,
    SchoolTerm,
    BackToSchool,
    Season,
    CulturalMoment,
    BrandMoment,
    CampaignFlight,
    UserKeyDate,
    Deadline,
}

impl EventCategory {
    /// All categories, in declaration order.
    pub const ALL: [EventCategory; 9] = [
        EventCategory::PublicHoliday,
        EventCategory::SchoolTerm,
        EventCategory::BackToSchool,
        EventCategory::Season,
        EventCategory::CulturalMoment,
        EventCategory::BrandMoment,
        EventCategory::CampaignFlight,
        EventCategory::UserKeyDate,
        EventCategory::Deadline,
    ];

    /// Whether events of this category may span more than one day and expose
    /// the extend handle. All other categories are rendered single-day even
    /// when storage carries a stray end date.
    pub fn supports_multi_day(&self) -> bool {
        matches!(
            self,
            EventCategory::BrandMoment | EventCategory::CampaignFlight | EventCategory::Deadline
        )
    }

    /// Position in the fixed layout ordering. Lower sorts first.
    pub fn sort_priority(&self) -> u8 {
        match self {
            EventCategory::PublicHoliday => 0,
            EventCategory::Deadline => 1,
            EventCategory::BackToSchool => 2,
            EventCategory::SchoolTerm => 3,
            EventCategory::BrandMoment => 4,
            EventCategory::CampaignFlight => 5,
            EventCategory::UserKeyDate => 6,
            EventCategory::CulturalMoment => 7,
            EventCategory::Season => 8,
        }
    }

    /// Default hex color for bars and chips of this category.
    /// Deadlines may override this per event via `custom_accent_color`.
    pub fn default_color(&self) -> &'static str {
        match self {
            EventCategory::PublicHoliday => "#EF4444",
            EventCategory::SchoolTerm => "#0EA5E9",
            EventCategory::BackToSchool => "#F59E0B",
            EventCategory::Season => "#84CC16",
            EventCategory::CulturalMoment => "#A855F7",
            EventCategory::BrandMoment => "#EC4899",
            EventCategory::CampaignFlight => "#3B82F6",
            EventCategory::UserKeyDate => "#10B981",
            EventCategory::Deadline => "#DC2626",
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::PublicHoliday => "Public holiday",
            EventCategory::SchoolTerm => "School term",
            EventCategory::BackToSchool => "Back to school",
            EventCategory::Season => "Season",
            EventCategory::CulturalMoment => "Cultural moment",
            EventCategory::BrandMoment => "Brand moment",
            EventCategory::CampaignFlight => "Campaign flight",
            EventCategory::UserKeyDate => "Key date",
            EventCategory::Deadline => "Deadline",
        }
    }
}
