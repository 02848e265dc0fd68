// Integration tests for the year pipeline and drag-to-store round trips

mod fixtures;

use pretty_assertions::assert_eq;

use campaign_calendar::models::category::EventCategory;
use campaign_calendar::services::drag::{DragController, DropOutcome};
use campaign_calendar::services::filter::CategoryToggles;
use campaign_calendar::services::grid::MonthGrid;
use campaign_calendar::services::layout::{project_month, LayoutEngine};
use campaign_calendar::services::store::{apply_mutation, EventStore, MemoryEventStore};

use fixtures::{dates, events};

const BRAND: &str = "acme";

fn seeded_store() -> MemoryEventStore {
    MemoryEventStore::with_events(
        BRAND,
        vec![
            events::recurring_holiday(),
            events::leap_day_template(),
            events::spring_flight(BRAND),
            events::asset_deadline(BRAND),
            events::cultural_moment(),
        ],
    )
}

#[test]
fn test_year_pipeline_produces_renderable_buckets() {
    let store = seeded_store();
    let mut engine = LayoutEngine::new();

    let events = store.list_events().unwrap();
    let buckets = engine.buckets_for_year(
        &events,
        store.revision(),
        2025,
        CategoryToggles::all_on(),
        "",
    );

    // Recurring templates materialized into 2025 with suffixed ids.
    let holiday = buckets.events_on(dates::ymd(2025, 5, 1));
    assert_eq!(holiday.len(), 1);
    assert_eq!(holiday[0].id, "may-day-2025");

    // The leap-day template clamps to Feb 28 in a non-leap year.
    assert_eq!(buckets.events_on(dates::ymd(2025, 2, 28)).len(), 1);

    // The flight is the only multi-day bar.
    assert_eq!(buckets.multi_day.len(), 1);
    assert_eq!(buckets.multi_day[0].id, "spring-flight");

    // Deadline and cultural moment land on their cells.
    assert_eq!(buckets.events_on(dates::ymd(2025, 3, 14)).len(), 1);
    assert_eq!(buckets.events_on(dates::ymd(2025, 6, 1)).len(), 1);
}

#[test]
fn test_category_toggles_narrow_the_projection() {
    let store = seeded_store();
    let mut engine = LayoutEngine::new();
    let toggles = CategoryToggles {
        holidays_and_moments: false,
        ..CategoryToggles::all_on()
    };

    let events = store.list_events().unwrap();
    let buckets = engine.buckets_for_year(&events, store.revision(), 2025, toggles, "");

    assert!(buckets.events_on(dates::ymd(2025, 5, 1)).is_empty());
    assert!(buckets.events_on(dates::ymd(2025, 6, 1)).is_empty());
    assert_eq!(buckets.multi_day.len(), 1, "brand toggle still on");
}

#[test]
fn test_search_narrows_without_breaking_materialization() {
    let store = seeded_store();
    let mut engine = LayoutEngine::new();

    let events = store.list_events().unwrap();
    let buckets = engine.buckets_for_year(
        &events,
        store.revision(),
        2025,
        CategoryToggles::all_on(),
        "creative",
    );

    // Only the deadline mentions "creative" (in its notes).
    assert!(buckets.multi_day.is_empty());
    assert_eq!(buckets.events_on(dates::ymd(2025, 3, 14)).len(), 1);
}

#[test]
fn test_march_month_card_carries_the_flight_bar() {
    let store = seeded_store();
    let mut engine = LayoutEngine::new();

    let events = store.list_events().unwrap();
    let buckets = engine.buckets_for_year(
        &events,
        store.revision(),
        2025,
        CategoryToggles::all_on(),
        "",
    );

    let grid = MonthGrid::build(2025, 3).unwrap();
    let layout = project_month(&grid, &buckets, None);

    // March 2025 grid starts Mon Feb 24; Mar 10-15 is row 2 entirely.
    let week = &layout.weeks[2];
    assert_eq!(week.days[0], dates::monday_mar_10_2025());
    assert_eq!(week.spans.len(), 1);
    let span = &week.spans[0];
    assert_eq!((span.start_col, span.end_col), (0, 5));
    assert!(span.starts_in_week);
    assert!(span.ends_in_week);
}

#[test]
fn test_move_drag_round_trip_through_the_store() {
    let mut store = seeded_store();
    let mut controller = DragController::new();
    let flight = events::spring_flight(BRAND);

    assert!(controller.begin_move(&flight, BRAND));
    controller.update_hover(dates::ymd(2025, 3, 20));

    let DropOutcome::Mutated(mutation) = controller.resolve_drop(dates::ymd(2025, 3, 20)) else {
        panic!("move drop should mutate");
    };
    apply_mutation(&mut store, &mutation).unwrap();

    let moved = store
        .list_events()
        .unwrap()
        .into_iter()
        .find(|e| e.id == "spring-flight")
        .unwrap();
    assert_eq!(moved.start_date, dates::ymd(2025, 3, 20));
    assert_eq!(moved.end_date, Some(dates::ymd(2025, 3, 25)));
}

#[test]
fn test_preview_merges_into_projection_without_double_render() {
    let store = seeded_store();
    let mut engine = LayoutEngine::new();
    let mut controller = DragController::new();
    let flight = events::spring_flight(BRAND);

    controller.begin_extend(&flight, BRAND);
    controller.update_hover(dates::ymd(2025, 3, 19));
    let preview = controller.preview().unwrap();

    let events = store.list_events().unwrap();
    let buckets = engine.buckets_for_year(
        &events,
        store.revision(),
        2025,
        CategoryToggles::all_on(),
        "",
    );
    let grid = MonthGrid::build(2025, 3).unwrap();
    let layout = project_month(&grid, &buckets, Some(&preview));

    // Row 2 holds the preview instead of the static bar, stretched to Sunday.
    let row2 = &layout.weeks[2];
    assert_eq!(row2.spans.len(), 1);
    assert!(row2.spans[0].is_preview);
    assert_eq!((row2.spans[0].start_col, row2.spans[0].end_col), (0, 6));
    assert!(!row2.spans[0].ends_in_week);

    // The extension continues into row 3 (Mar 17-23).
    let row3 = &layout.weeks[3];
    assert_eq!(row3.spans.len(), 1);
    assert!(row3.spans[0].is_preview);
    assert_eq!((row3.spans[0].start_col, row3.spans[0].end_col), (0, 2));
    assert!(row3.spans[0].ends_in_week);
}

#[test]
fn test_extend_collapse_round_trip() {
    let mut store = seeded_store();
    let mut controller = DragController::new();
    let flight = events::spring_flight(BRAND);

    controller.begin_extend(&flight, BRAND);
    let DropOutcome::Mutated(mutation) = controller.resolve_drop(dates::monday_mar_10_2025())
    else {
        panic!("collapse drop should mutate");
    };
    assert_eq!(mutation.end_date, None);
    apply_mutation(&mut store, &mutation).unwrap();

    let collapsed = store
        .list_events()
        .unwrap()
        .into_iter()
        .find(|e| e.id == "spring-flight")
        .unwrap();
    assert!(collapsed.end_date.is_none());
    assert!(!collapsed.is_multi_day());
}

#[test]
fn test_global_event_is_immutable_through_drag() {
    let store = seeded_store();
    let mut controller = DragController::new();
    let holiday = events::recurring_holiday();

    assert!(!controller.begin_move(&holiday, BRAND));
    assert!(!controller.begin_extend(&holiday, BRAND));
    assert_eq!(
        controller.resolve_drop(dates::ymd(2025, 5, 2)),
        DropOutcome::Rejected
    );

    // Nothing changed in the store.
    assert_eq!(store.revision(), 0);
}

#[test]
fn test_store_mutation_invalidates_layout_cache() {
    let mut store = seeded_store();
    let mut engine = LayoutEngine::new();
    let toggles = CategoryToggles::all_on();

    let events = store.list_events().unwrap();
    let before = engine.buckets_for_year(&events, store.revision(), 2025, toggles, "");
    assert_eq!(before.multi_day[0].end_date, Some(dates::ymd(2025, 3, 15)));

    store
        .update_event_dates("spring-flight", dates::ymd(2025, 3, 20), Some(dates::ymd(2025, 3, 25)))
        .unwrap();

    let events = store.list_events().unwrap();
    let after = engine.buckets_for_year(&events, store.revision(), 2025, toggles, "");
    assert_eq!(after.multi_day[0].start_date, dates::ymd(2025, 3, 20));
}

#[test]
fn test_deleting_a_global_event_soft_hides_it_from_layout() {
    let mut store = seeded_store();
    let mut engine = LayoutEngine::new();

    store.delete_event("pride").unwrap();

    let events = store.list_events().unwrap();
    let buckets = engine.buckets_for_year(
        &events,
        store.revision(),
        2025,
        CategoryToggles::all_on(),
        "",
    );
    assert!(buckets.events_on(dates::ymd(2025, 6, 1)).is_empty());
    assert!(store.hidden().is_hidden(BRAND, "pride"));
}

#[test]
fn test_dragging_into_trailing_overflow_days() {
    // The fixed 42-day grid guarantees next-month cells exist as drop
    // targets; an extend drop on one must apply.
    let grid = MonthGrid::build(2025, 3).unwrap();
    let last_cell = grid.last();
    assert_eq!(last_cell, dates::ymd(2025, 4, 6));

    let mut controller = DragController::new();
    let flight = events::spring_flight(BRAND);
    controller.begin_extend(&flight, BRAND);

    let DropOutcome::Mutated(mutation) = controller.resolve_drop(last_cell) else {
        panic!("extend into overflow should mutate");
    };
    assert_eq!(mutation.end_date, Some(last_cell));
}
