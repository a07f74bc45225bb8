use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::calendar::japanesecalendar::JapaneseCalendar;
use crate::time::recurringholiday::recurringholiday::HolidayError;

/// Keeps the holiday sets of a range of years in memory.
///
/// Years in [start_year, end_year] are served from the precomputed sets;
/// anything else is forwarded to the raw calendar, so results are identical
/// to the raw calendar's.
pub struct PrecomputedCalendar {
    raw_calendar: JapaneseCalendar,
    start_year: i32,
    precomputed_sets: Vec<HolidaySet>,
}

impl PrecomputedCalendar {
    /// Precomputes years [start_year, end_year] inclusive. An empty range
    /// precomputes nothing.
    pub fn new(
        raw_calendar: JapaneseCalendar,
        start_year: i32,
        end_year: i32,
    ) -> Result<PrecomputedCalendar, HolidayError> {
        let mut precomputed_sets = Vec::new();

        for year in start_year..=end_year {
            precomputed_sets.push(raw_calendar.get_holiday_set(year)?);
        }

        Ok(PrecomputedCalendar {
            raw_calendar,
            start_year,
            precomputed_sets,
        })
    }

    pub fn raw_calendar(&self) -> &JapaneseCalendar {
        &self.raw_calendar
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// `None` when nothing was precomputed.
    pub fn end_year(&self) -> Option<i32> {
        let n_years = i32::try_from(self.len()).ok()?;
        self.start_year.checked_add(n_years.checked_sub(1)?)
    }

    pub fn len(&self) -> usize {
        self.precomputed_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precomputed_sets.is_empty()
    }

    pub fn in_precomputation_range(&self, year: i32) -> bool {
        self.end_year().is_some_and(|end_year| year >= self.start_year && year <= end_year)
    }
}

impl HolidayCalendar for PrecomputedCalendar {
    fn get_holiday_set(&self, year: i32) -> Result<HolidaySet, HolidayError> {
        if self.in_precomputation_range(year) {
            let index = (year as i64 - self.start_year as i64) as usize;
            Ok(self.precomputed_sets[index].clone())
        } else {
            self.raw_calendar.get_holiday_set(year)
        }
    }
}
