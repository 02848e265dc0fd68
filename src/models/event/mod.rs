// Event module
// Calendar event model shared by every brand planning surface

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::category::EventCategory;
use crate::models::recurrence::Recurrence;

/// How prominently an event is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Med,
    Low,
}

/// A single planned event on the yearly calendar.
///
/// `owner_id == None` marks a global event (public holidays and the like)
/// shared across every brand; those are read-only through the drag interface.
/// Dates are date-only and the span `[start_date, effective_end()]` is
/// inclusive on both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    pub title: String,
    pub category: EventCategory,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub importance: Importance,
    /// Only honored for deadline events; overrides the category color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When present the event is a template and must be materialized before
    /// layout; it never renders directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl CalendarEvent {
    /// Create a new single-day event with required fields.
    ///
    /// # Arguments
    /// * `id` - Opaque unique identifier
    /// * `title` - Event title (required, non-empty)
    /// * `category` - Event category
    /// * `start_date` - The day the event occupies
    ///
    /// # Returns
    /// Returns `Result<CalendarEvent, String>` with validation
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: EventCategory,
        start_date: NaiveDate,
    ) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        Ok(Self {
            id: id.into(),
            owner_id: None,
            title,
            category,
            start_date,
            end_date: None,
            tags: Vec::new(),
            importance: Importance::Med,
            custom_accent_color: None,
            notes: None,
            recurrence: None,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// Inclusive end of the occupied span.
    ///
    /// Storage may carry an end date before the start date after an external
    /// edit; that is clamped back to the start so layout never sees a
    /// negative span. Write-time rejection is the store's job, not ours.
    pub fn effective_end(&self) -> NaiveDate {
        match self.end_date {
            Some(end) if end >= self.start_date => end,
            _ => self.start_date,
        }
    }

    /// True when the event both spans more than one day and belongs to a
    /// category that is allowed to. Categories without multi-day support
    /// report single-day even if a stray `end_date` exists in storage.
    pub fn is_multi_day(&self) -> bool {
        self.category.supports_multi_day() && self.effective_end() != self.start_date
    }

    /// Closed-interval overlap test against `[range_start, range_end]`.
    pub fn span_overlaps(&self, range_start: NaiveDate, range_end: NaiveDate) -> bool {
        self.start_date.max(range_start) <= self.effective_end().min(range_end)
    }

    /// Whole days between start and effective end; zero for single-day
    /// events. Moving an event shifts both endpoints by preserving this.
    pub fn duration_days(&self) -> i64 {
        (self.effective_end() - self.start_date).num_days()
    }

    /// Global events have no owning brand and are immutable through drag.
    pub fn is_global(&self) -> bool {
        self.owner_id.is_none()
    }

    /// True when `brand` is the owning brand.
    pub fn owned_by(&self, brand: &str) -> bool {
        self.owner_id.as_deref() == Some(brand)
    }

    /// Check if this is a recurring template
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// The bar/chip color after applying the deadline accent override.
    pub fn display_color(&self) -> &str {
        if self.category == EventCategory::Deadline {
            if let Some(accent) = self.custom_accent_color.as_deref() {
                return accent;
            }
        }
        self.category.default_color()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(EventValidationError::EndBeforeStart);
            }
        }

        if let Some(ref accent) = self.custom_accent_color {
            if self.category != EventCategory::Deadline {
                return Err(EventValidationError::AccentOutsideDeadline);
            }
            if !is_valid_hex_color(accent) {
                return Err(EventValidationError::InvalidAccentColor);
            }
        }

        Ok(())
    }
}

/// Validation errors for CalendarEvent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    EmptyTitle,
    EndBeforeStart,
    AccentOutsideDeadline,
    InvalidAccentColor,
}

impl std::fmt::Display for EventValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Event title cannot be empty"),
            Self::EndBeforeStart => write!(f, "Event end date must not be before its start date"),
            Self::AccentOutsideDeadline => {
                write!(f, "Only deadline events may carry a custom accent color")
            }
            Self::InvalidAccentColor => {
                write!(f, "Invalid accent color format (use hex like #FF0000)")
            }
        }
    }
}

impl std::error::Error for EventValidationError {}

/// Check if a string is a valid hex color code.
fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    if !color.starts_with('#') {
        return false;
    }
    let hex = &color[1..];
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Builder for creating events with optional fields
pub struct CalendarEventBuilder {
    id: Option<String>,
    owner_id: Option<String>,
    title: Option<String>,
    category: Option<EventCategory>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    tags: Vec<String>,
    importance: Importance,
    custom_accent_color: Option<String>,
    notes: Option<String>,
    recurrence: Option<Recurrence>,
}

impl CalendarEventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            owner_id: None,
            title: None,
            category: None,
            start_date: None,
            end_date: None,
            tags: Vec::new(),
            importance: Importance::Med,
            custom_accent_color: None,
            notes: None,
            recurrence: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the owning brand; events without one are global.
    pub fn owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    /// Set the accent color (hex format, deadlines only)
    pub fn accent_color(mut self, color: impl Into<String>) -> Self {
        self.custom_accent_color = Some(color.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Mark the event as a yearly-recurring template.
    pub fn recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let category = self.category.ok_or("Event category is required")?;
        let start_date = self.start_date.ok_or("Event start date is required")?;

        let event = CalendarEvent {
            id,
            owner_id: self.owner_id,
            title,
            category,
            start_date,
            end_date: self.end_date,
            tags: self.tags,
            importance: self.importance,
            custom_accent_color: self.custom_accent_color,
            notes: self.notes,
            recurrence: self.recurrence,
        };

        event.validate().map_err(|e| e.to_string())?;
        Ok(event)
    }
}

impl Default for CalendarEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
