use std::collections::HashSet;

use chrono::NaiveDate;

use crate::time::holiday::JapaneseHoliday;
use crate::time::utility::days_of_month;
use super::recurringholiday::{HolidayError, RecurringHoliday, ymd};

#[derive(Clone)]
pub struct FixedDateHoliday {
    holiday: JapaneseHoliday,
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// Rejects month/day pairs that never exist. Feb 29 is accepted and simply
    /// yields nothing in common years.
    pub fn new(holiday: JapaneseHoliday, month: u32, day: u32) -> Option<FixedDateHoliday> {
        if !(1..=12).contains(&month) || day == 0 || day > days_of_month(2000, month) {
            None
        } else {
            Some(FixedDateHoliday { holiday, month, day })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn holiday(&self) -> JapaneseHoliday {
        self.holiday
    }

    fn get_holiday(&self, year: i32) -> Result<HashSet<NaiveDate>, HolidayError> {
        let mut holiday_set = HashSet::new();
        if self.day > days_of_month(year, self.month) {
            return Ok(holiday_set);
        }
        holiday_set.insert(ymd(year, self.month, self.day)?);
        Ok(holiday_set)
    }
}
