use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use weekgrid_calendar::AppointmentStore;
use weekgrid_core::AppError;
use weekgrid_ui::format::{format_date, format_time};
use weekgrid_ui::{CalendarSettings, CalendarView};

/// Day after `from` within `week`, or the day before when `from` is the last one.
fn drop_target(week: &[NaiveDate], from: NaiveDate) -> Option<NaiveDate> {
    week.iter()
        .copied()
        .find(|&day| day > from)
        .or_else(|| week.iter().copied().rev().find(|&day| day < from))
}

fn main() -> Result<()> {
    // Initialize logging
    weekgrid_core::init()?;

    let (config, _warnings) = weekgrid_core::Config::load_validated()?;
    let settings = CalendarSettings::from(&config.calendar);

    let store = Arc::new(AppointmentStore::new());
    let mut view = CalendarView::for_today(Arc::clone(&store), settings);

    tracing::info!("Weekgrid started on {}", view.current_date());

    // Click the 9:00 cell of the current day and save a draft
    let today = view.current_date();
    view.open_appointment_modal(today, 9)?;
    view.set_title("Planning");
    view.set_description("Weekly planning session");
    let planning = view.save_appointment()?;

    // Drag it to 14:00 on another day of the displayed week
    if let Some(target) = drop_target(view.week_days(), today) {
        view.begin_drag(&planning.id)?;
        view.drop_on(target, 14)?;
    }

    // An empty draft is refused silently; show what the UI would say
    view.open_appointment_modal(today, 11)?;
    if let Err(e) = view.save_appointment() {
        let app_err = AppError::from(e);
        tracing::debug!("Draft kept open: {}", app_err.user_message());
    }
    view.close_appointment_modal();

    println!("Weekgrid - week of {}", format_date(view.start_of_week(today)));
    for column in view.grid() {
        for cell in column.cells.iter().filter(|c| !c.appointments.is_empty()) {
            for apt in &cell.appointments {
                println!(
                    "  {} {:02}:00  {} ({}-{})",
                    format_date(column.date),
                    cell.hour,
                    apt.title,
                    format_time(&apt.start_time),
                    format_time(&apt.end_time),
                );
            }
        }
    }
    println!("\nConfiguration:");
    println!("  Config directory: {}", config.config_dir.display());

    Ok(())
}
