//! Calendar date math: week boundaries, navigation and cell start times.

use std::ops::Range;

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, Weekday};
use weekgrid_core::{CalendarConfig, ViewModeSetting, WeekStart};

/// Which grid is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Week,
    Day,
}

impl From<ViewModeSetting> for ViewMode {
    fn from(setting: ViewModeSetting) -> Self {
        match setting {
            ViewModeSetting::Week => ViewMode::Week,
            ViewModeSetting::Day => ViewMode::Day,
        }
    }
}

/// Step size for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavUnit {
    Week,
    Day,
}

impl NavUnit {
    fn days(self) -> i64 {
        match self {
            NavUnit::Week => 7,
            NavUnit::Day => 1,
        }
    }
}

/// View settings derived from the config file.
#[derive(Debug, Clone)]
pub struct CalendarSettings {
    pub default_view: ViewMode,
    pub week_start: Weekday,
    pub default_color: String,
    pub default_duration: Duration,
    pub hours: Range<u32>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self::from(&CalendarConfig::default())
    }
}

impl From<&CalendarConfig> for CalendarSettings {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            default_view: config.default_view.into(),
            week_start: match config.week_start {
                WeekStart::Sunday => Weekday::Sun,
                WeekStart::Monday => Weekday::Mon,
            },
            default_color: config.default_color.clone(),
            default_duration: Duration::minutes(i64::from(config.default_duration_minutes)),
            hours: config.day_start_hour.min(24)..config.day_end_hour.min(24),
        }
    }
}

/// Most recent `week_start` day at or before `date`.
///
/// The first partial week of chrono's range starts at `NaiveDate::MIN`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// The seven consecutive days beginning at `start`.
pub fn week_days(start: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take(7).collect()
}

/// Shift `date` by `direction` units. Returns `None` past chrono's date range.
pub fn shift(date: NaiveDate, direction: i32, unit: NavUnit) -> Option<NaiveDate> {
    let days = i64::from(direction).checked_mul(unit.days())?;
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Start of the `(date, hour)` cell, or `None` for hours past 23.
pub fn cell_start(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    date.and_hms_opt(hour, 0, 0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_start_of_week_sunday() {
        // 2024-01-01 is a Monday
        assert_eq!(start_of_week(jan(1), Weekday::Sun), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(start_of_week(jan(7), Weekday::Sun), jan(7));
        assert_eq!(start_of_week(jan(13), Weekday::Sun), jan(7));
    }

    #[test]
    fn test_start_of_week_monday() {
        assert_eq!(start_of_week(jan(1), Weekday::Mon), jan(1));
        assert_eq!(start_of_week(jan(7), Weekday::Mon), jan(1));
        assert_eq!(start_of_week(jan(8), Weekday::Mon), jan(8));
    }

    #[test]
    fn test_start_of_week_clamps_at_range_start() {
        let first = NaiveDate::MIN;
        let next_week = first.checked_add_days(Days::new(7)).unwrap();

        assert_eq!(start_of_week(first, Weekday::Sun), first);
        assert_eq!(start_of_week(first, first.weekday()), first);
        assert_eq!(start_of_week(next_week, first.weekday()), next_week);
    }

    #[test]
    fn test_week_days() {
        let days = week_days(jan(7));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], jan(7));
        assert_eq!(days[6], jan(13));
        assert!(days.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
    }

    #[test]
    fn test_shift() {
        assert_eq!(shift(jan(10), 1, NavUnit::Week), Some(jan(17)));
        assert_eq!(shift(jan(10), -1, NavUnit::Week), Some(jan(3)));
        assert_eq!(shift(jan(10), -1, NavUnit::Day), Some(jan(9)));
        assert_eq!(
            shift(jan(31), 1, NavUnit::Day),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
        assert_eq!(shift(NaiveDate::MAX, 1, NavUnit::Day), None);
    }

    #[test]
    fn test_cell_start() {
        assert_eq!(cell_start(jan(3), 14), jan(3).and_hms_opt(14, 0, 0));
        assert_eq!(cell_start(jan(3), 24), None);
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = CalendarConfig::default();
        config.week_start = WeekStart::Monday;
        config.default_view = ViewModeSetting::Day;
        config.default_duration_minutes = 30;
        config.day_start_hour = 8;
        config.day_end_hour = 18;

        let settings = CalendarSettings::from(&config);
        assert_eq!(settings.week_start, Weekday::Mon);
        assert_eq!(settings.default_view, ViewMode::Day);
        assert_eq!(settings.default_duration, Duration::minutes(30));
        assert_eq!(settings.hours, 8..18);
    }

    #[test]
    fn test_default_settings() {
        let settings = CalendarSettings::default();
        assert_eq!(settings.week_start, Weekday::Sun);
        assert_eq!(settings.hours, 0..24);
        assert_eq!(settings.default_duration, Duration::hours(1));
        assert_eq!(settings.default_color, "#3498db");
    }
}
