use std::fs;
use std::io::Write;

use jpbizday::configuration::{Configuration, ConfigurationError};
use jpbizday::time::businessdayfinder::YearBoundaryPolicy;
use jpbizday::time::calendar::holidaycalendar::HolidayCalendar;
use jpbizday::time::calendar::japanesecalendar::JapaneseCalendar;

const JAPAN_JSON: &str = include_str!("../json/japan.json");

#[test]
fn bundled_rules_match_the_built_in_calendar() {
    let config = Configuration::from_reader(JAPAN_JSON.as_bytes()).unwrap();
    let built_in = JapaneseCalendar::new();
    assert_eq!(config.year_boundary(), YearBoundaryPolicy::ReferenceYear);
    assert_eq!(config.calendar().recurring_holidays().len(), built_in.recurring_holidays().len());
    for year in 1990..=2060 {
        assert_eq!(config.calendar().get_holiday_set(year), built_in.get_holiday_set(year), "{year}");
    }
}

#[test]
fn loads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(JAPAN_JSON.as_bytes()).unwrap();
    let config = Configuration::from_path(file.path()).unwrap();
    assert_eq!(config.calendar().get_holiday_set(2024).unwrap().len(), 21);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Configuration::from_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigurationError::Io(_))));
}

#[test]
fn malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"recurring_holidays\": [").unwrap();
    assert!(matches!(Configuration::from_path(&path), Err(ConfigurationError::JsonParse(_))));
}
