use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::time::holiday::JapaneseHoliday;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayError {
    #[error("day {day} computed for {year}-{month:02} is outside the month")]
    InvalidDateArithmetic { year: i32, month: u32, day: i64 },
    #[error("{year}-{month:02}-{day:02} is outside the supported date range")]
    DateOutOfRange { year: i32, month: u32, day: u32 },
    #[error("no date precedes {0}")]
    NoPreviousDate(NaiveDate)
}

pub(crate) fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, HolidayError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(HolidayError::DateOutOfRange { year, month, day })
}

pub trait RecurringHoliday: Send + Sync {

    fn holiday(&self) -> JapaneseHoliday;

    fn get_holiday(&self, year: i32) -> Result<HashSet<NaiveDate>, HolidayError>;

    fn is_holiday(&self, d: &NaiveDate) -> Result<bool, HolidayError> {
        let holiday_set = self.get_holiday(d.year())?;
        Ok(holiday_set.contains(d))
    }
}
