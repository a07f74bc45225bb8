use std::collections::HashSet;

use chrono::{
    NaiveDate,
    Weekday
};

use crate::time::holiday::JapaneseHoliday;
use crate::time::utility::nth_weekday_of_month;
use super::recurringholiday::{HolidayError, RecurringHoliday, ymd};

/// Happy Monday style holiday: the `n`-th given weekday of a month.
#[derive(Clone)]
pub struct NthWeekdayHoliday {
    holiday: JapaneseHoliday,
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(holiday: JapaneseHoliday, month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { holiday, month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn holiday(&self) -> JapaneseHoliday {
        self.holiday
    }

    fn get_holiday(&self, year: i32) -> Result<HashSet<NaiveDate>, HolidayError> {
        // surfaces an unrepresentable year as an error instead of an empty set
        ymd(year, self.month, 1)?;

        let mut holiday_set = HashSet::new();
        if let Some(date) = nth_weekday_of_month(year, self.month, self.weekday, self.n) {
            holiday_set.insert(date);
        }
        Ok(holiday_set)
    }
}
