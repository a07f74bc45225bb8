use std::collections::HashSet;

use chrono::NaiveDate;

use crate::time::holiday::JapaneseHoliday;
use crate::time::utility::days_of_month;
use super::recurringholiday::{HolidayError, RecurringHoliday, ymd};

pub const EQUINOX_BASE_YEAR: i64 = 1980;
pub const EQUINOX_ANNUAL_DRIFT: f64 = 0.242194;
pub const VERNAL_EQUINOX_CONSTANT: f64 = 20.8431;
pub const AUTUMNAL_EQUINOX_CONSTANT: f64 = 23.2488;

/// Equinox holiday approximated by the linear NAOJ formula
/// `floor(constant + 0.242194 * (year - 1980) - (year - 1980) / 4)`.
///
/// The leap-day correction `(year - 1980) / 4` is integer division truncated
/// toward zero, so years before 1980 are not floored.
#[derive(Clone)]
pub struct EquinoxHoliday {
    holiday: JapaneseHoliday,
    month: u32,
    constant: f64
}

impl EquinoxHoliday {
    pub fn new(holiday: JapaneseHoliday, month: u32, constant: f64) -> Option<EquinoxHoliday> {
        if !(1..=12).contains(&month) || !constant.is_finite() {
            None
        } else {
            Some(EquinoxHoliday { holiday, month, constant })
        }
    }

    pub fn vernal() -> EquinoxHoliday {
        EquinoxHoliday {
            holiday: JapaneseHoliday::VernalEquinoxDay,
            month: 3,
            constant: VERNAL_EQUINOX_CONSTANT
        }
    }

    pub fn autumnal() -> EquinoxHoliday {
        EquinoxHoliday {
            holiday: JapaneseHoliday::AutumnalEquinoxDay,
            month: 9,
            constant: AUTUMNAL_EQUINOX_CONSTANT
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Raw day-of-month from the formula, not yet checked against the month.
    pub fn equinox_day(&self, year: i32) -> i64 {
        let years_since = year as i64 - EQUINOX_BASE_YEAR;
        let day = self.constant
            + EQUINOX_ANNUAL_DRIFT * years_since as f64
            - (years_since / 4) as f64;
        day.floor() as i64
    }

    pub fn equinox_date(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        let day = self.equinox_day(year);
        if day < 1 || day > days_of_month(year, self.month) as i64 {
            return Err(HolidayError::InvalidDateArithmetic { year, month: self.month, day });
        }
        ymd(year, self.month, day as u32)
    }
}

impl RecurringHoliday for EquinoxHoliday {
    fn holiday(&self) -> JapaneseHoliday {
        self.holiday
    }

    fn get_holiday(&self, year: i32) -> Result<HashSet<NaiveDate>, HolidayError> {
        let mut holiday_set = HashSet::new();
        holiday_set.insert(self.equinox_date(year)?);
        Ok(holiday_set)
    }
}
