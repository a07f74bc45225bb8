use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::holiday::JapaneseHoliday;
use crate::time::recurringholiday::citizensholiday::CitizensHoliday;
use crate::time::recurringholiday::equinoxholiday::EquinoxHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::{HolidayError, RecurringHoliday};
use crate::time::utility::first_weekday_on_or_after;

fn out_of_range(d: NaiveDate) -> HolidayError {
    HolidayError::DateOutOfRange { year: d.year(), month: d.month(), day: d.day() }
}

/// Moves every Sunday holiday of `base` to the next Monday, or further while
/// that day is already a holiday of `base`.
///
/// Only `base` is consulted for collisions, so each Sunday holiday is moved
/// independently of the substitutes found before it.
pub fn substitute_holidays(base: &HolidaySet) -> Result<HolidaySet, HolidayError> {
    let mut adjusted = base.clone();
    for d in base.dates().filter(|d| d.weekday() == Weekday::Sun) {
        let mut move_day = first_weekday_on_or_after(d, Weekday::Mon).ok_or_else(|| out_of_range(d))?;
        while base.contains(&move_day) {
            move_day = move_day.succ_opt().ok_or_else(|| out_of_range(move_day))?;
        }
        adjusted.insert(move_day, JapaneseHoliday::SubstituteHoliday);
    }
    Ok(adjusted)
}

/// Japanese national holiday calendar built from recurring rules.
///
/// Holiday sets are computed on every call; wrap it in a
/// `PrecomputedCalendar` to keep them in memory.
pub struct JapaneseCalendar {
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
    substitute_holiday: bool
}

impl JapaneseCalendar {
    /// Holidays in force today, applied to every year.
    pub fn new() -> JapaneseCalendar {
        JapaneseCalendar::with_rules(default_recurring_holidays(), true)
    }

    pub fn with_rules(
        recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
        substitute_holiday: bool
    ) -> JapaneseCalendar {
        JapaneseCalendar { recurring_holidays, substitute_holiday }
    }

    pub fn recurring_holidays(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.recurring_holidays
    }

    pub fn substitute_holiday(&self) -> bool {
        self.substitute_holiday
    }

    /// Holidays before the substitute-holiday adjustment. When two rules land
    /// on the same date the earlier rule keeps it.
    pub fn base_holidays(&self, year: i32) -> Result<HolidaySet, HolidayError> {
        let mut holiday_set = HolidaySet::new(year);
        for r in self.recurring_holidays.iter() {
            let holiday = r.holiday();
            for d in r.get_holiday(year)? {
                holiday_set.insert(d, holiday);
            }
        }
        Ok(holiday_set)
    }
}

impl Default for JapaneseCalendar {
    fn default() -> Self {
        JapaneseCalendar::new()
    }
}

impl HolidayCalendar for JapaneseCalendar {
    fn get_holiday_set(&self, year: i32) -> Result<HolidaySet, HolidayError> {
        let base = self.base_holidays(year)?;
        if self.substitute_holiday {
            substitute_holidays(&base)
        } else {
            Ok(base)
        }
    }
}

fn fixed(holiday: JapaneseHoliday, month: u32, day: u32) -> Option<Arc<dyn RecurringHoliday>> {
    let rule: Arc<dyn RecurringHoliday> = Arc::new(FixedDateHoliday::new(holiday, month, day)?);
    Some(rule)
}

fn nth_monday(holiday: JapaneseHoliday, month: u32, n: u8) -> Option<Arc<dyn RecurringHoliday>> {
    let rule: Arc<dyn RecurringHoliday> = Arc::new(NthWeekdayHoliday::new(holiday, month, n, Weekday::Mon)?);
    Some(rule)
}

pub fn default_recurring_holidays() -> Vec<Arc<dyn RecurringHoliday>> {
    let vernal: Arc<dyn RecurringHoliday> = Arc::new(EquinoxHoliday::vernal());
    let autumnal: Arc<dyn RecurringHoliday> = Arc::new(EquinoxHoliday::autumnal());
    let citizens: Arc<dyn RecurringHoliday> = Arc::new(CitizensHoliday::autumnal());

    // every parameter below is a valid month/day, so none of these is dropped
    [
        fixed(JapaneseHoliday::NewYearsDay, 1, 1),
        nth_monday(JapaneseHoliday::ComingOfAgeDay, 1, 2),
        fixed(JapaneseHoliday::NationalFoundationDay, 2, 11),
        fixed(JapaneseHoliday::EmperorsBirthday, 2, 23),
        Some(vernal),
        fixed(JapaneseHoliday::ShowaDay, 4, 29),
        fixed(JapaneseHoliday::ConstitutionMemorialDay, 5, 3),
        fixed(JapaneseHoliday::GreeneryDay, 5, 4),
        fixed(JapaneseHoliday::ChildrensDay, 5, 5),
        nth_monday(JapaneseHoliday::MarineDay, 7, 3),
        fixed(JapaneseHoliday::MountainDay, 8, 11),
        nth_monday(JapaneseHoliday::RespectForTheAgedDay, 9, 3),
        Some(autumnal),
        Some(citizens),
        nth_monday(JapaneseHoliday::SportsDay, 10, 2),
        fixed(JapaneseHoliday::CultureDay, 11, 3),
        fixed(JapaneseHoliday::LaborThanksgivingDay, 11, 23)
    ]
    .into_iter()
    .flatten()
    .collect()
}
