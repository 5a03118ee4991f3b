//! End-to-end tests: views and the store they share.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use weekgrid_calendar::{Appointment, AppointmentStore};
use weekgrid_ui::{CalendarSettings, CalendarView, DraftError, ViewMode};

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn at(day: u32, hour: u32) -> NaiveDateTime {
    jan(day).and_hms_opt(hour, 0, 0).unwrap()
}

fn shared_store() -> Arc<AppointmentStore> {
    Arc::new(AppointmentStore::new())
}

#[test]
fn test_create_in_one_view_shows_in_another() {
    let store = shared_store();
    let mut editor = CalendarView::new(Arc::clone(&store), CalendarSettings::default(), jan(1));
    let mut viewer = CalendarView::new(Arc::clone(&store), CalendarSettings::default(), jan(1));

    editor.open_appointment_modal(jan(2), 11).unwrap();
    editor.set_title("Lunch with Sam");
    let saved = editor.save_appointment().unwrap();

    assert!(viewer.cell_occupants(jan(2), 11).is_empty());
    assert!(viewer.poll_store());
    let occupants = viewer.cell_occupants(jan(2), 11);
    assert_eq!(occupants.len(), 1);
    assert_eq!(occupants[0].id, saved.id);
}

#[test]
fn test_drag_reschedule_scenario() {
    let store = shared_store();
    store.add(Appointment::new("Standup", at(1, 9), at(1, 10)).with_id("a"));

    let mut view = CalendarView::new(Arc::clone(&store), CalendarSettings::default(), jan(1));
    view.begin_drag("a").unwrap();
    let moved = view.drop_on(jan(3), 14).unwrap();

    assert_eq!(moved.start_time, at(3, 14));
    assert_eq!(moved.duration(), Duration::hours(1));
    assert!(store.for_date(jan(1)).is_empty());
    assert_eq!(store.for_date(jan(3)), vec![moved]);
}

#[test]
fn test_invalid_draft_leaves_store_untouched() {
    let store = shared_store();
    let mut view = CalendarView::new(Arc::clone(&store), CalendarSettings::default(), jan(1));
    let watcher = store.subscribe();
    let _ = watcher.latest();

    view.open_appointment_modal(jan(1), 9).unwrap();
    assert_eq!(view.save_appointment(), Err(DraftError::MissingTitle));

    view.set_title("Title");
    view.set_start_time_input("garbage");
    assert_eq!(view.save_appointment(), Err(DraftError::MissingStartTime));

    assert!(view.is_modal_open());
    assert!(store.is_empty());
    assert!(watcher.latest().is_none());
}

#[test]
fn test_navigation_round_trip_does_not_drift() {
    let store = shared_store();
    let mut view = CalendarView::new(store, CalendarSettings::default(), jan(10));
    let start = view.week_days().to_vec();

    for _ in 0..52 {
        view.navigate_week(1);
    }
    for _ in 0..52 {
        view.navigate_week(-1);
    }
    assert_eq!(view.current_date(), jan(10));
    assert_eq!(view.week_days(), start.as_slice());

    view.switch_view(ViewMode::Day);
    view.navigate_day(3);
    assert_eq!(view.visible_days(), vec![jan(13)]);
}

#[test]
fn test_week_query_matches_visible_week() {
    let store = shared_store();
    store.add(Appointment::new("Before", at(6, 8), at(6, 9)).with_id("before"));
    store.add(Appointment::new("Inside", at(8, 8), at(8, 9)).with_id("inside"));
    store.add(Appointment::new("After", at(14, 8), at(14, 9)).with_id("after"));

    let view = CalendarView::new(Arc::clone(&store), CalendarSettings::default(), jan(10));
    let week = store.for_week(view.week_days()[0]);

    assert_eq!(week.len(), 1);
    assert_eq!(week[0].id, "inside");
    let in_grid: usize = view
        .grid()
        .iter()
        .flat_map(|col| col.cells.iter())
        .map(|cell| cell.appointments.len())
        .sum();
    assert_eq!(in_grid, 1);
}
