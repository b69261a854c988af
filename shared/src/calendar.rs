//! Calendar domain logic for the booking widget.
//!
//! This module builds the month grid shown to customers: a Sunday-first,
//! seven-column layout padded at both ends so it always forms whole weeks.
//! Every day in the month is keyed by its local calendar date (`YYYY-MM-DD`)
//! and marked available when that key is in the [`AvailabilitySet`].
//!
//! Keys are built from `chrono::NaiveDate`, which has no time zone attached,
//! so a day can never slip into the previous month for viewers west of UTC.

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::locale::Labels;

/// Format of the date keys used throughout the widgets
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Empty padding day after the end of the month to complete the last week
    PaddingAfter,
}

/// Represents a single cell in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    /// `YYYY-MM-DD`, empty for padding cells
    pub date_key: String,
    pub day_type: CalendarDayType,
    pub available: bool,
    pub selected: bool,
}

impl CalendarDay {
    fn padding(day_type: CalendarDayType) -> Self {
        Self {
            day: 0,
            date_key: String::new(),
            day_type,
            available: false,
            selected: false,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day_type != CalendarDayType::MonthDay
    }
}

/// Represents a rendered calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub label: String,
    pub weekday_labels: Vec<String>,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

impl CalendarMonth {
    /// Rows of exactly seven cells
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    pub fn selected_day(&self) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.selected)
    }
}

/// The month/year currently shown in the calendar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

impl CalendarFocusDate {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    pub fn previous(self) -> Self {
        if self.month <= 1 {
            Self {
                month: 12,
                year: self.year - 1,
            }
        } else {
            Self {
                month: self.month - 1,
                year: self.year,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self {
                month: 1,
                year: self.year + 1,
            }
        } else {
            Self {
                month: self.month + 1,
                year: self.year,
            }
        }
    }
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year(),
        }
    }
}

/// Availability file shape: `{ "availableDates": ["2025-09-01", ...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityData {
    #[serde(default)]
    pub available_dates: Vec<String>,
}

/// Set of bookable date keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySet {
    dates: BTreeSet<String>,
}

impl AvailabilitySet {
    pub fn new<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dates: dates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, date_key: &str) -> bool {
        self.dates.contains(date_key)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl From<AvailabilityData> for AvailabilitySet {
    fn from(data: AvailabilityData) -> Self {
        Self::new(data.available_dates)
    }
}

/// Calendar service that builds month grids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarService {
    labels: Labels,
}

impl CalendarService {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    /// Generate a calendar month view.
    ///
    /// `month` is 1-based. `selected` marks at most one cell, and only when
    /// it names an available day of this month.
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: i32,
        availability: &AvailabilitySet,
        selected: Option<&str>,
    ) -> CalendarMonth {
        let days_in_month = days_in_month(month, year);
        let first_day = first_day_of_month(month, year);

        debug!(
            "Generating calendar for {}/{}: {} days, first weekday {}",
            month, year, days_in_month, first_day
        );

        let mut calendar_days = Vec::with_capacity(42);

        for _ in 0..first_day {
            calendar_days.push(CalendarDay::padding(CalendarDayType::PaddingBefore));
        }

        for day in 1..=days_in_month {
            let date_key = NaiveDate::from_ymd_opt(year, month, day)
                .map(format_date_key)
                .unwrap_or_default();
            let available = !date_key.is_empty() && availability.contains(&date_key);
            let selected = available && selected == Some(date_key.as_str());

            calendar_days.push(CalendarDay {
                day,
                date_key,
                day_type: CalendarDayType::MonthDay,
                available,
                selected,
            });
        }

        while calendar_days.len() % 7 != 0 {
            calendar_days.push(CalendarDay::padding(CalendarDayType::PaddingAfter));
        }

        CalendarMonth {
            month,
            year,
            label: self.labels.month_label(month, year),
            weekday_labels: self.labels.weekdays.to_vec(),
            days: calendar_days,
            first_day_of_week: first_day,
        }
    }
}

/// Get the number of days in a given month and year
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => if is_leap_year(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 0,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
pub fn first_day_of_month(month: u32, year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// `YYYY-MM-DD` for a local calendar date
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn september_availability() -> AvailabilitySet {
        AvailabilitySet::new(["2025-09-01", "2025-09-02", "2025-09-15", "2025-10-01"])
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, 2025), 31);
        assert_eq!(days_in_month(4, 2025), 30);
        assert_eq!(days_in_month(2, 2025), 28);
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(13, 2024), 0);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_first_day_of_month() {
        // 1 September 2025 is a Monday
        assert_eq!(first_day_of_month(9, 2025), 1);
        // 1 June 2025 is a Sunday
        assert_eq!(first_day_of_month(6, 2025), 0);
        // 1 November 2025 is a Saturday
        assert_eq!(first_day_of_month(11, 2025), 6);
    }

    #[test]
    fn test_date_key_is_local_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(format_date_key(date), "2025-09-01");

        let service = CalendarService::default();
        let calendar = service.generate_calendar_month(9, 2025, &AvailabilitySet::default(), None);
        let first = calendar.days.iter().find(|d| d.day == 1).unwrap();
        assert_eq!(first.date_key, "2025-09-01");
    }

    #[test]
    fn test_grid_forms_whole_weeks_for_every_month() {
        let service = CalendarService::default();
        let availability = AvailabilitySet::default();

        for year in [1999, 2000, 2024, 2025, 2026] {
            for month in 1..=12 {
                let calendar = service.generate_calendar_month(month, year, &availability, None);
                assert_eq!(calendar.days.len() % 7, 0, "{}/{}", month, year);
                assert!(calendar.weeks().all(|week| week.len() == 7));

                let month_days: Vec<u32> = calendar
                    .days
                    .iter()
                    .filter(|d| d.day_type == CalendarDayType::MonthDay)
                    .map(|d| d.day)
                    .collect();
                assert_eq!(month_days.len() as u32, days_in_month(month, year));
                assert_eq!(month_days, (1..=days_in_month(month, year)).collect::<Vec<_>>());

                let leading = calendar
                    .days
                    .iter()
                    .take_while(|d| d.day_type == CalendarDayType::PaddingBefore)
                    .count();
                assert_eq!(leading as u32, calendar.first_day_of_week);
                assert!(calendar.days.len() - leading - month_days.len() < 7);
            }
        }
    }

    #[test]
    fn test_availability_marks_exact_matches_only() {
        let service = CalendarService::default();
        let availability = september_availability();

        let calendar = service.generate_calendar_month(9, 2025, &availability, None);
        let available: Vec<&str> = calendar
            .days
            .iter()
            .filter(|d| d.available)
            .map(|d| d.date_key.as_str())
            .collect();
        assert_eq!(available, vec!["2025-09-01", "2025-09-02", "2025-09-15"]);

        for day in calendar.days.iter().filter(|d| d.is_padding()) {
            assert!(!day.available);
            assert!(day.date_key.is_empty());
        }

        let october = service.generate_calendar_month(10, 2025, &availability, None);
        let available: Vec<u32> = october
            .days
            .iter()
            .filter(|d| d.available)
            .map(|d| d.day)
            .collect();
        assert_eq!(available, vec![1]);
    }

    #[test]
    fn test_dst_transition_months_keep_keys_contiguous() {
        let service = CalendarService::default();
        for (month, year) in [(3, 2025), (10, 2025), (11, 2024)] {
            let calendar =
                service.generate_calendar_month(month, year, &AvailabilitySet::default(), None);
            for day in calendar.days.iter().filter(|d| !d.is_padding()) {
                let expected = format!("{:04}-{:02}-{:02}", year, month, day.day);
                assert_eq!(day.date_key, expected);
            }
        }
    }

    #[test]
    fn test_selection_marks_single_available_cell() {
        let service = CalendarService::default();
        let availability = september_availability();

        let calendar = service.generate_calendar_month(9, 2025, &availability, Some("2025-09-02"));
        assert_eq!(calendar.days.iter().filter(|d| d.selected).count(), 1);
        assert_eq!(calendar.selected_day().map(|d| d.day), Some(2));

        // Unavailable or out-of-month selections never mark a cell
        let calendar = service.generate_calendar_month(9, 2025, &availability, Some("2025-09-03"));
        assert!(calendar.selected_day().is_none());
        let calendar = service.generate_calendar_month(9, 2025, &availability, Some("2025-10-01"));
        assert!(calendar.selected_day().is_none());
    }

    #[test]
    fn test_labels_are_localized() {
        let calendar = CalendarService::new(Labels::german())
            .generate_calendar_month(3, 2025, &AvailabilitySet::default(), None);
        assert_eq!(calendar.label, "März 2025");
        assert_eq!(calendar.weekday_labels.first().map(String::as_str), Some("So"));
        assert_eq!(calendar.weekday_labels.len(), 7);
    }

    #[test]
    fn test_focus_navigation_wraps_years() {
        let january = CalendarFocusDate::new(1, 2025);
        assert_eq!(january.previous(), CalendarFocusDate::new(12, 2024));
        assert_eq!(january.next(), CalendarFocusDate::new(2, 2025));

        let december = CalendarFocusDate::new(12, 2025);
        assert_eq!(december.next(), CalendarFocusDate::new(1, 2026));
        assert_eq!(december.next().previous(), december);
    }

    #[test]
    fn test_availability_data_defaults_to_empty() {
        let data: AvailabilityData = serde_json::from_str("{}").unwrap();
        assert!(AvailabilitySet::from(data).is_empty());

        let json = r#"{"availableDates":["2025-09-01","2025-09-01","2025-09-02"]}"#;
        let data: AvailabilityData = serde_json::from_str(json).unwrap();
        let set = AvailabilitySet::from(data);
        assert_eq!(set.len(), 2);
        assert!(set.contains("2025-09-01"));
    }
}
