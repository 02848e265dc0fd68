//! Event store seam.
//!
//! The layout core never persists anything itself. Resolved drag mutations
//! are handed to whatever store the host wires in; the only fields the core
//! ever writes are an event's start and end dates. `MemoryEventStore` backs
//! tests and offline use.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::event::CalendarEvent;
use crate::services::drag::EventMutation;

/// Typed store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no event with id {0}")]
    UnknownEvent(String),
    #[error("event id {0} already exists")]
    DuplicateId(String),
}

/// External event store interface.
pub trait EventStore {
    /// Events visible in the current viewing context.
    fn list_events(&self) -> Result<Vec<CalendarEvent>>;

    fn create_event(&mut self, event: CalendarEvent) -> Result<CalendarEvent>;

    /// Update only an event's date span. This is the only write the layout
    /// core ever issues.
    fn update_event_dates(
        &mut self,
        id: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<()>;

    fn delete_event(&mut self, id: &str) -> Result<()>;
}

/// Apply a resolved drag mutation to a store.
pub fn apply_mutation(store: &mut dyn EventStore, mutation: &EventMutation) -> Result<()> {
    store.update_event_dates(&mutation.event_id, mutation.start_date, mutation.end_date)
}

/// Per-brand soft-hide sets for global events.
///
/// Deleting a global event must not remove it for other brands, so the
/// "deletion" is a visibility override keyed by the viewing brand, layered
/// on top of the shared collection rather than stored on the event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenEvents {
    by_brand: BTreeMap<String, BTreeSet<String>>,
}

impl HiddenEvents {
    pub fn hide(&mut self, brand: &str, event_id: &str) {
        self.by_brand
            .entry(brand.to_string())
            .or_default()
            .insert(event_id.to_string());
    }

    pub fn unhide(&mut self, brand: &str, event_id: &str) {
        if let Some(hidden) = self.by_brand.get_mut(brand) {
            hidden.remove(event_id);
        }
    }

    pub fn is_hidden(&self, brand: &str, event_id: &str) -> bool {
        self.by_brand
            .get(brand)
            .is_some_and(|hidden| hidden.contains(event_id))
    }
}

/// In-memory store scoped to one viewing brand.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    brand: String,
    events: Vec<CalendarEvent>,
    hidden: HiddenEvents,
    revision: u64,
}

impl MemoryEventStore {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            ..Self::default()
        }
    }

    pub fn with_events(brand: impl Into<String>, events: Vec<CalendarEvent>) -> Self {
        Self {
            brand: brand.into(),
            events,
            ..Self::default()
        }
    }

    /// Monotonic fingerprint of the collection, bumped on every mutation.
    /// Feed this to `LayoutEngine::buckets_for_year` as the cache key part.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn hidden(&self) -> &HiddenEvents {
        &self.hidden
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }
}

impl EventStore for MemoryEventStore {
    fn list_events(&self) -> Result<Vec<CalendarEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|event| !self.hidden.is_hidden(&self.brand, &event.id))
            .cloned()
            .collect())
    }

    fn create_event(&mut self, event: CalendarEvent) -> Result<CalendarEvent> {
        if self.find_index(&event.id).is_some() {
            return Err(StoreError::DuplicateId(event.id).into());
        }
        event.validate()?;
        self.events.push(event.clone());
        self.revision += 1;
        Ok(event)
    }

    fn update_event_dates(
        &mut self,
        id: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<()> {
        let index = self
            .find_index(id)
            .ok_or_else(|| StoreError::UnknownEvent(id.to_string()))?;
        let event = &mut self.events[index];
        event.start_date = start_date;
        event.end_date = end_date;
        self.revision += 1;
        Ok(())
    }

    fn delete_event(&mut self, id: &str) -> Result<()> {
        let index = self
            .find_index(id)
            .ok_or_else(|| StoreError::UnknownEvent(id.to_string()))?;

        if self.events[index].is_global() {
            // Global events are shared; deletion only hides them here.
            let brand = self.brand.clone();
            self.hidden.hide(&brand, id);
        } else {
            self.events.remove(index);
        }
        self.revision += 1;
        Ok(())
    }
}
