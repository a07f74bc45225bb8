use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::time::holiday::JapaneseHoliday;
use super::equinoxholiday::EquinoxHoliday;
use super::recurringholiday::{HolidayError, RecurringHoliday, ymd};

/// Kokumin no kyujitsu: the day before an equinox that falls on `weekday`.
///
/// With the autumnal equinox on a Wednesday, the Tuesday in between is
/// sandwiched by Respect-for-the-Aged Day and the equinox.
#[derive(Clone)]
pub struct CitizensHoliday {
    equinox: EquinoxHoliday,
    weekday: Weekday
}

impl CitizensHoliday {
    pub fn new(equinox: EquinoxHoliday, weekday: Weekday) -> CitizensHoliday {
        CitizensHoliday { equinox, weekday }
    }

    pub fn autumnal() -> CitizensHoliday {
        CitizensHoliday::new(EquinoxHoliday::autumnal(), Weekday::Wed)
    }

    pub fn equinox(&self) -> &EquinoxHoliday {
        &self.equinox
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for CitizensHoliday {
    fn holiday(&self) -> JapaneseHoliday {
        JapaneseHoliday::CitizensHoliday
    }

    fn get_holiday(&self, year: i32) -> Result<HashSet<NaiveDate>, HolidayError> {
        let mut holiday_set = HashSet::new();
        let equinox = self.equinox.equinox_date(year)?;
        if equinox.weekday() != self.weekday {
            return Ok(holiday_set);
        }

        let month = self.equinox.month();
        let day = equinox.day() as i64 - 1;
        if day < 1 {
            return Err(HolidayError::InvalidDateArithmetic { year, month, day });
        }
        holiday_set.insert(ymd(year, month, day as u32)?);
        Ok(holiday_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wednesday_equinox_makes_tuesday_a_holiday() {
        // 2026-09-23 is a Wednesday
        let expected = NaiveDate::from_ymd_opt(2026, 9, 22).unwrap();
        assert_eq!(CitizensHoliday::autumnal().get_holiday(2026).unwrap(), HashSet::from([expected]));
        assert_eq!(expected.weekday(), Weekday::Tue);
    }

    #[test]
    fn other_weekdays_add_nothing() {
        // 2024-09-22 is a Sunday
        assert!(CitizensHoliday::autumnal().get_holiday(2024).unwrap().is_empty());
    }

    #[test]
    fn propagates_equinox_errors() {
        assert!(CitizensHoliday::autumnal().get_holiday(-5000).is_err());
    }
}
