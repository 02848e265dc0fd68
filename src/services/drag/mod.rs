//! Drag interaction state machine.
//!
//! One gesture may be in flight at a time: moving an event (shifting its
//! whole span) or extending/shortening it from the trailing-edge handle.
//! The controller owns the single mutable slot, hands immutable snapshots to
//! renderers, derives the live preview on every hover change, and resolves
//! the final mutation on drop. Starting a new drag implicitly discards any
//! previous one.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Duration, NaiveDate};

use crate::models::event::CalendarEvent;
use crate::utils::date::same_month;

/// Kind of gesture in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    /// Shift the whole span, preserving its duration.
    Move,
    /// Re-anchor the end date from the trailing-edge handle.
    Extend,
}

/// Snapshot of an in-progress drag, handed to renderers each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    pub mode: DragMode,
    /// The event as it was when the gesture started.
    pub event: CalendarEvent,
    /// Day cell currently under the pointer.
    pub hovered_date: Option<NaiveDate>,
    /// Pointer x within the hovered week row, for sub-day extend feedback.
    pub pointer_x: Option<f32>,
    /// Week row index the pointer is over.
    pub hovered_week: Option<usize>,
}

/// Date mutation handed to the external event store after a successful drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMutation {
    pub event_id: String,
    pub start_date: NaiveDate,
    /// `None` collapses the event back to single-day.
    pub end_date: Option<NaiveDate>,
}

/// How a drop resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// New dates to hand to the event store.
    Mutated(EventMutation),
    /// Valid drop that changes nothing.
    Unchanged,
    /// Disallowed drop, or no drag was in progress; nothing to apply.
    Rejected,
}

/// Raises the shared "bars are inert" flag for the lifetime of a drag and
/// lowers it when the owning state is discarded, however that happens, so
/// day cells underneath bar elements stay reachable exactly while a drag is
/// active.
#[derive(Debug)]
struct RoutingGuard {
    flag: Rc<Cell<bool>>,
}

impl RoutingGuard {
    fn raise(flag: &Rc<Cell<bool>>) -> Self {
        flag.set(true);
        Self {
            flag: Rc::clone(flag),
        }
    }
}

impl Drop for RoutingGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[derive(Debug)]
struct ActiveDrag {
    state: DragState,
    _guard: RoutingGuard,
}

/// Owner of the single drag slot.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
    bars_inert: Rc<Cell<bool>>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a move gesture from an event's body.
    ///
    /// Refused (returning `false`, staying idle) for global events and for
    /// events owned by a different brand than the one being viewed.
    pub fn begin_move(&mut self, event: &CalendarEvent, viewed_brand: &str) -> bool {
        if !event.owned_by(viewed_brand) {
            log::debug!(
                "drag-move refused for {}: not owned by {}",
                event.id,
                viewed_brand
            );
            return false;
        }
        self.start(DragMode::Move, event);
        true
    }

    /// Begin an extend/shorten gesture from an event's trailing-edge handle.
    ///
    /// Same ownership rule as [`begin_move`](Self::begin_move), and the
    /// event's category must support multi-day spans.
    pub fn begin_extend(&mut self, event: &CalendarEvent, viewed_brand: &str) -> bool {
        if !event.owned_by(viewed_brand) {
            log::debug!(
                "drag-extend refused for {}: not owned by {}",
                event.id,
                viewed_brand
            );
            return false;
        }
        if !event.category.supports_multi_day() {
            log::debug!(
                "drag-extend refused for {}: {:?} is single-day only",
                event.id,
                event.category
            );
            return false;
        }
        self.start(DragMode::Extend, event);
        true
    }

    fn start(&mut self, mode: DragMode, event: &CalendarEvent) {
        // Drop any previous gesture first so its guard lowers the flag
        // before the new guard raises it.
        self.active = None;
        let state = DragState {
            mode,
            event: event.clone(),
            hovered_date: Some(event.start_date),
            pointer_x: None,
            hovered_week: None,
        };
        self.active = Some(ActiveDrag {
            state,
            _guard: RoutingGuard::raise(&self.bars_inert),
        });
    }

    /// Record the day cell under the pointer. No-op while idle.
    pub fn update_hover(&mut self, date: NaiveDate) {
        if let Some(drag) = &mut self.active {
            drag.state.hovered_date = Some(date);
        }
    }

    /// Record the pointer position within a week row, for continuous extend
    /// feedback. No-op while idle.
    pub fn update_pointer(&mut self, x: f32, week_row: usize) {
        if let Some(drag) = &mut self.active {
            drag.state.pointer_x = Some(x);
            drag.state.hovered_week = Some(week_row);
        }
    }

    /// The in-flight gesture, if any.
    pub fn active(&self) -> Option<&DragState> {
        self.active.as_ref().map(|drag| &drag.state)
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_dragging_event(&self, event_id: &str) -> bool {
        self.active
            .as_ref()
            .is_some_and(|drag| drag.state.event.id == event_id)
    }

    /// Whether bar elements should currently ignore pointer events so day
    /// cells underneath stay reachable as drop targets.
    pub fn pointer_events_suspended(&self) -> bool {
        self.bars_inert.get()
    }

    /// Shared handle to the suspension flag, for renderers that outlive a
    /// single borrow of the controller.
    pub fn suspension_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.bars_inert)
    }

    /// Derive the live preview event for the current hover, if it differs
    /// from the committed state.
    ///
    /// A single-day move has no interpolated preview; the host highlights
    /// the hovered cell instead (see `DragState::hovered_date`).
    pub fn preview(&self) -> Option<CalendarEvent> {
        let state = self.active()?;
        let hover = state.hovered_date?;
        let event = &state.event;

        match state.mode {
            DragMode::Extend => {
                let candidate = (hover >= event.start_date).then_some(hover);
                if candidate == event.end_date {
                    return None;
                }
                let mut preview = event.clone();
                preview.end_date = candidate;
                Some(preview)
            }
            DragMode::Move => {
                if !event.is_multi_day() {
                    return None;
                }
                if hover == event.start_date {
                    return None;
                }
                let mut preview = event.clone();
                preview.start_date = hover;
                preview.end_date = Some(hover + Duration::days(event.duration_days()));
                Some(preview)
            }
        }
    }

    /// Resolve the gesture at `drop_date`, clearing the slot.
    pub fn resolve_drop(&mut self, drop_date: NaiveDate) -> DropOutcome {
        let Some(drag) = self.active.take() else {
            return DropOutcome::Rejected;
        };
        let event = drag.state.event;

        match drag.state.mode {
            DragMode::Move => {
                if !same_month(drop_date, event.start_date) {
                    log::debug!(
                        "drag-move for {} dropped outside its origin month; ignoring",
                        event.id
                    );
                    return DropOutcome::Rejected;
                }
                if drop_date == event.start_date {
                    return DropOutcome::Unchanged;
                }
                let end_date = event
                    .end_date
                    .map(|_| drop_date + Duration::days(event.duration_days()));
                DropOutcome::Mutated(EventMutation {
                    event_id: event.id,
                    start_date: drop_date,
                    end_date,
                })
            }
            DragMode::Extend => {
                // Dropping on or before the start collapses to single-day.
                let end_date = (drop_date > event.start_date).then_some(drop_date);
                if end_date == event.end_date {
                    return DropOutcome::Unchanged;
                }
                DropOutcome::Mutated(EventMutation {
                    event_id: event.id,
                    start_date: event.start_date,
                    end_date,
                })
            }
        }
    }

    /// Abandon the gesture without a mutation.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
