//! Birthdate picker
//!
//! The selected day is kept inside the legal range of the selected
//! year/month at all times: changing the year or month clamps the day
//! down, it never rolls over into the following month.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

pub const FIRST_YEAR: i32 = 1990;
pub const LAST_YEAR: i32 = 2020;
const DEFAULT_YEAR: i32 = 2000;

/// Number of days in `month` (1-12) of `year`, Gregorian rules.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdateSelection {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthdateSelection {
    pub fn max_day(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    fn clamp_day(&mut self) {
        self.day = self.day.clamp(1, self.max_day().max(1));
    }

    /// Zero padded `YYYY-MM-DD`.
    pub fn format(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdatePicker {
    selection: BirthdateSelection,
    open: bool,
}

impl BirthdatePicker {
    /// Starts at the default year with `today`'s month and day.
    pub fn new(today: NaiveDate) -> Self {
        let mut selection = BirthdateSelection {
            year: DEFAULT_YEAR,
            month: today.month(),
            day: today.day(),
        };
        selection.clamp_day();
        Self {
            selection,
            open: false,
        }
    }

    pub fn selection(&self) -> BirthdateSelection {
        self.selection
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        FIRST_YEAR..=LAST_YEAR
    }

    pub fn months(&self) -> RangeInclusive<u32> {
        1..=12
    }

    /// Legal days for the current year/month.
    pub fn days(&self) -> RangeInclusive<u32> {
        1..=self.selection.max_day()
    }

    pub fn set_year(&mut self, year: i32) {
        self.selection.year = year.clamp(FIRST_YEAR, LAST_YEAR);
        self.selection.clamp_day();
    }

    pub fn set_month(&mut self, month: u32) {
        self.selection.month = month.clamp(1, 12);
        self.selection.clamp_day();
    }

    pub fn set_day(&mut self, day: u32) {
        self.selection.day = day;
        self.selection.clamp_day();
    }

    /// Formats the selection and closes the picker.
    pub fn confirm(&mut self) -> String {
        self.close();
        self.selection.format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_days_in_month_matches_calendar_for_every_month() {
        for year in [1999, 2000, 2019, 2020] {
            for month in 1..=12 {
                let last = days_in_month(year, month);
                assert!(NaiveDate::from_ymd_opt(year, month, last).is_some());
                assert!(NaiveDate::from_ymd_opt(year, month, last + 1).is_none());
            }
        }
    }

    #[test]
    fn test_month_change_clamps_day() {
        let mut picker = BirthdatePicker::new(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(picker.selection().day, 31);
        picker.set_month(4);
        assert_eq!(picker.selection().month, 4);
        assert_eq!(picker.selection().day, 30);
    }

    #[test]
    fn test_year_change_clamps_leap_day() {
        let mut picker = BirthdatePicker::new(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        picker.set_year(2000);
        picker.set_day(29);
        assert_eq!(picker.selection().day, 29);
        picker.set_year(2001);
        assert_eq!(picker.selection().day, 28);
    }

    #[test]
    fn test_initial_selection_uses_today() {
        let picker = BirthdatePicker::new(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(picker.selection().year, 2000);
        assert_eq!(picker.selection().month, 2);
        assert_eq!(picker.selection().day, 29);
        assert_eq!(picker.days(), 1..=29);
    }

    #[test]
    fn test_confirm_formats_and_closes() {
        let mut picker = BirthdatePicker::new(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        picker.open();
        picker.set_year(1995);
        assert_eq!(picker.confirm(), "1995-03-05");
        assert!(!picker.is_open());
    }
}
