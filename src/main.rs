mod cli;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use thiserror::Error;

use jpbizday::configuration::{Configuration, ConfigurationError};
use jpbizday::time::businessdayfinder::BusinessDayFinder;
use jpbizday::time::calendar::holidaycalendar::HolidayCalendar;
use jpbizday::time::calendar::holidayset::HolidaySet;
use jpbizday::time::recurringholiday::recurringholiday::HolidayError;

use crate::cli::Cli;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Holiday(#[from] HolidayError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    const fn exit_code(&self) -> u8 {
        match self {
            Self::Holiday(_) => 2,
            Self::Configuration(_) => 3,
            Self::Io(_) => 10,
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Configuration::from_path(path)?,
        None => Configuration::new(),
    };
    let policy = cli.year_boundary.map_or(config.year_boundary(), Into::into);
    let calendar: Arc<dyn HolidayCalendar> = Arc::new(config.into_calendar());
    let finder = BusinessDayFinder::with_policy(calendar.clone(), policy);

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let prev_business_day = finder.previous_business_day(today)?;

    let holidays = if cli.list_holidays {
        Some(calendar.get_holiday_set(today.year())?)
    } else {
        None
    };

    let mut stdout = io::stdout().lock();
    end_of_output(write_report(&mut stdout, prev_business_day, holidays.as_ref()))
}

/// A reader that went away (e.g. `| head -1`) ends the output normally.
fn end_of_output(result: io::Result<()>) -> Result<(), CliError> {
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}

fn write_report<W: Write>(
    out: &mut W,
    prev_business_day: NaiveDate,
    holidays: Option<&HolidaySet>,
) -> io::Result<()> {
    writeln!(out, "前営業日: {prev_business_day}")?;
    if let Some(holidays) = holidays {
        for (d, holiday) in holidays.iter() {
            writeln!(out, "{d} {holiday}")?;
        }
    }
    out.flush()
}
