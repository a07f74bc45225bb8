use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::recurringholiday::HolidayError;

/// Which year's holidays are checked once the backward scan leaves the year
/// of the reference date.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum YearBoundaryPolicy {
    /// Keep using the reference date's holiday set for every candidate.
    #[default]
    ReferenceYear,
    /// Recompute the holiday set whenever the candidate changes year.
    CandidateYear
}

pub struct BusinessDayFinder {
    calendar: Arc<dyn HolidayCalendar>,
    policy: YearBoundaryPolicy
}

impl BusinessDayFinder {
    pub fn new(calendar: Arc<dyn HolidayCalendar>) -> BusinessDayFinder {
        BusinessDayFinder::with_policy(calendar, YearBoundaryPolicy::ReferenceYear)
    }

    pub fn with_policy(calendar: Arc<dyn HolidayCalendar>, policy: YearBoundaryPolicy) -> BusinessDayFinder {
        BusinessDayFinder { calendar, policy }
    }

    pub fn calendar(&self) -> &Arc<dyn HolidayCalendar> {
        &self.calendar
    }

    pub fn policy(&self) -> YearBoundaryPolicy {
        self.policy
    }

    pub fn is_business_day(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        self.calendar.is_business_day(d)
    }

    /// Latest date strictly before `d` that is neither a weekend nor a holiday.
    ///
    /// The holiday set is computed once for `d`'s year. Under
    /// `ReferenceYear` that set is used even after the scan crosses into the
    /// previous year.
    pub fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate, HolidayError> {
        let step_back = |day: NaiveDate| day.pred_opt().ok_or(HolidayError::NoPreviousDate(day));

        let mut prev_business_day = step_back(d)?;
        let mut holidays = self.calendar.get_holiday_set(d.year())?;

        loop {
            if self.policy == YearBoundaryPolicy::CandidateYear && holidays.year() != prev_business_day.year() {
                holidays = self.calendar.get_holiday_set(prev_business_day.year())?;
            }
            if !self.calendar.is_weekend(prev_business_day) && !holidays.contains(&prev_business_day) {
                return Ok(prev_business_day);
            }
            prev_business_day = step_back(prev_business_day)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::time::calendar::japanesecalendar::JapaneseCalendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn finder() -> BusinessDayFinder {
        BusinessDayFinder::new(Arc::new(JapaneseCalendar::new()))
    }

    #[test]
    fn new_years_day_2024() {
        assert_eq!(finder().previous_business_day(date(2024, 1, 1)), Ok(date(2023, 12, 29)));
    }

    #[test]
    fn golden_week_2024() {
        assert_eq!(finder().previous_business_day(date(2024, 5, 7)), Ok(date(2024, 5, 2)));
    }

    #[test]
    fn substitute_holiday_is_skipped() {
        // Feb 12 substitutes for Sunday Feb 11
        assert_eq!(finder().previous_business_day(date(2024, 2, 13)), Ok(date(2024, 2, 9)));
    }

    #[test]
    fn silver_week_2026() {
        // Sep 21 Respect-for-the-Aged, Sep 22 citizens' holiday, Sep 23 equinox
        assert_eq!(finder().previous_business_day(date(2026, 9, 24)), Ok(date(2026, 9, 18)));
    }

    #[test]
    fn ordinary_monday() {
        assert_eq!(finder().previous_business_day(date(2026, 10, 19)), Ok(date(2026, 10, 16)));
    }

    #[test]
    fn business_day_reference_steps_one_day() {
        assert_eq!(finder().previous_business_day(date(2024, 6, 12)), Ok(date(2024, 6, 11)));
    }

    #[test]
    fn never_weekend_or_holiday() {
        let finder = finder();
        let calendar = JapaneseCalendar::new();
        let mut d = date(2023, 1, 1);
        while d <= date(2026, 12, 31) {
            let prev = finder.previous_business_day(d).unwrap();
            let holidays = calendar.get_holiday_set(d.year()).unwrap();
            assert!(prev < d);
            assert!(!matches!(prev.weekday(), Weekday::Sat | Weekday::Sun));
            assert!(!holidays.contains(&prev), "{d} -> {prev}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn is_business_day() {
        let finder = finder();
        assert!(finder.is_business_day(date(2024, 5, 2)).unwrap());
        assert!(!finder.is_business_day(date(2024, 5, 6)).unwrap());
        assert!(!finder.is_business_day(date(2024, 5, 11)).unwrap());
    }

    #[test]
    fn minimum_date_has_no_predecessor() {
        assert_eq!(
            finder().previous_business_day(NaiveDate::MIN),
            Err(HolidayError::NoPreviousDate(NaiveDate::MIN))
        );
    }

    #[test]
    fn equinox_errors_propagate() {
        assert!(finder().previous_business_day(date(10000, 6, 1)).is_err());
    }
}
