use chrono::{Datelike, NaiveDate, Weekday};

use crate::time::calendar::holidayset::HolidaySet;
use crate::time::recurringholiday::recurringholiday::HolidayError;

/// `Send + Sync` so calendars can be shared behind `Arc`.
pub trait HolidayCalendar: Send + Sync {
    fn get_holiday_set(&self, year: i32) -> Result<HolidaySet, HolidayError>;

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// National holidays only; weekends are reported by `is_weekend`.
    fn is_holiday(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        Ok(self.get_holiday_set(d.year())?.contains(&d))
    }

    fn is_business_day(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        Ok(!self.is_weekend(d) && !self.is_holiday(d)?)
    }
}
