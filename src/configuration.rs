use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;
use thiserror::Error;

use crate::time::businessdayfinder::YearBoundaryPolicy;
use crate::time::calendar::japanesecalendar::JapaneseCalendar;
use crate::time::holiday::JapaneseHoliday;
use crate::time::recurringholiday::citizensholiday::CitizensHoliday;
use crate::time::recurringholiday::equinoxholiday::EquinoxHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
    #[error("invalid holiday rule: {0}")]
    InvalidRule(String)
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ConfigurationError>
    where T: for<'a> Deserialize<'a> {
    Ok(serde_json::from_value(json_value)?)
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    holiday: JapaneseHoliday,
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ConfigurationError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.holiday, json_prop.month, json_prop.day)
        .ok_or_else(|| ConfigurationError::InvalidRule(
            format!("{:?} on {}/{}", json_prop.holiday, json_prop.month, json_prop.day)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    holiday: JapaneseHoliday,
    month: u32,
    n: u8,
    weekday: Weekday
}

fn nth_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ConfigurationError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = NthWeekdayHoliday::new(json_prop.holiday, json_prop.month, json_prop.n, json_prop.weekday)
        .ok_or_else(|| ConfigurationError::InvalidRule(
            format!("{:?} as {} {} of month {}", json_prop.holiday, json_prop.n, json_prop.weekday, json_prop.month)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct EquinoxHolidayJsonProp {
    holiday: JapaneseHoliday,
    month: u32,
    constant: f64
}

fn equinox_from_prop(json_prop: &EquinoxHolidayJsonProp) -> Result<EquinoxHoliday, ConfigurationError> {
    EquinoxHoliday::new(json_prop.holiday, json_prop.month, json_prop.constant)
        .ok_or_else(|| ConfigurationError::InvalidRule(
            format!("{:?} in month {} with constant {}", json_prop.holiday, json_prop.month, json_prop.constant)
        ))
}

fn equinox_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ConfigurationError> {
    let json_prop: EquinoxHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(equinox_from_prop(&json_prop)?))
}

#[derive(Deserialize)]
struct CitizensHolidayJsonProp {
    #[serde(flatten)]
    equinox: EquinoxHolidayJsonProp,
    weekday: Weekday
}

fn citizens_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ConfigurationError> {
    let json_prop: CitizensHolidayJsonProp = parse_json_value(json)?;
    let equinox = equinox_from_prop(&json_prop.equinox)?;
    Ok(Arc::new(CitizensHoliday::new(equinox, json_prop.weekday)))
}

#[derive(Deserialize)]
enum HolidayType {
    FixedDate,
    NthWeekday,
    Equinox,
    Citizens
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

pub fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ConfigurationError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::FixedDate  => fixed_date_holiday_from_json(json),
        HolidayType::NthWeekday => nth_weekday_from_json(json),
        HolidayType::Equinox    => equinox_holiday_from_json(json),
        HolidayType::Citizens   => citizens_holiday_from_json(json)
    }
}

fn default_substitute_holiday() -> bool {
    true
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    recurring_holidays: Vec<serde_json::Value>,
    #[serde(default = "default_substitute_holiday")]
    substitute_holiday: bool,
    #[serde(default)]
    year_boundary: YearBoundaryPolicy
}

/// Holiday rules and lookup policy loaded from JSON.
pub struct Configuration {
    calendar: JapaneseCalendar,
    year_boundary: YearBoundaryPolicy
}

impl Configuration {
    /// The built-in Japanese rules.
    pub fn new() -> Configuration {
        Configuration {
            calendar: JapaneseCalendar::new(),
            year_boundary: YearBoundaryPolicy::default()
        }
    }

    pub fn calendar(&self) -> &JapaneseCalendar {
        &self.calendar
    }

    pub fn into_calendar(self) -> JapaneseCalendar {
        self.calendar
    }

    pub fn year_boundary(&self) -> YearBoundaryPolicy {
        self.year_boundary
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        let mut recurring_holidays: Vec<Arc<dyn RecurringHoliday>> = Vec::new();
        for recurring_holiday_json in json_prop.recurring_holidays.into_iter() {
            recurring_holidays.push(get_recurring_holiday_from_json(recurring_holiday_json)?);
        }

        Ok(Configuration {
            calendar: JapaneseCalendar::with_rules(recurring_holidays, json_prop.substitute_holiday),
            year_boundary: json_prop.year_boundary
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Configuration::from_json_value(json_value)
    }

    pub fn from_path<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
