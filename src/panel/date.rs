use crate::panel::PanelError;
use chrono::{Datelike, NaiveDate};

/// Number of days in `month` of `year`, or `None` when chrono cannot represent
/// that month at all.
pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
}

/// Moves `date` to `year`, keeping month and clamping the day to the month's end
/// (29 Feb becomes 28 Feb in a common year).
pub fn with_year(date: NaiveDate, year: i32) -> Result<NaiveDate, PanelError> {
    let max_day = days_in_month(year, date.month()).ok_or(PanelError::YearOutOfRange(year))?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day().min(max_day))
        .ok_or(PanelError::YearOutOfRange(year))
}

/// Moves `date` to `month` (1-based) within its year, clamping the day.
pub fn with_month(date: NaiveDate, month: u32) -> Result<NaiveDate, PanelError> {
    let year = date.year();
    let max_day = days_in_month(year, month).ok_or(PanelError::YearOutOfRange(year))?;
    NaiveDate::from_ymd_opt(year, month, date.day().min(max_day))
        .ok_or(PanelError::YearOutOfRange(year))
}

pub fn add_years(date: NaiveDate, years: i32) -> Result<NaiveDate, PanelError> {
    with_year(date, date.year().saturating_add(years))
}
