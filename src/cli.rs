//! Command-line arguments for `jpbizday`.
//!
//! With no arguments the previous business day of today's local date is
//! printed as `前営業日: YYYY-MM-DD`.
//!
//! # Examples
//!
//! ```bash
//! jpbizday
//! jpbizday --date 2024-01-01
//! jpbizday --date 2026-09-24 --list-holidays
//! jpbizday --config json/japan.json --year-boundary candidate
//! ```

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use jpbizday::time::businessdayfinder::YearBoundaryPolicy;

/// Previous Japanese business day, skipping weekends and national holidays.
#[derive(Debug, Parser)]
#[command(name = "jpbizday", version)]
pub struct Cli {
    /// Reference date (YYYY-MM-DD); defaults to today's local date.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// JSON file with holiday rules, replacing the built-in table.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Holiday set used once the search crosses into the previous year.
    #[arg(long, value_enum)]
    pub year_boundary: Option<YearBoundary>,

    /// Also print every holiday of the reference year.
    #[arg(long)]
    pub list_holidays: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum YearBoundary {
    /// Keep the reference year's holidays (historical behaviour).
    Reference,
    /// Switch to the candidate date's year.
    Candidate,
}

impl From<YearBoundary> for YearBoundaryPolicy {
    fn from(value: YearBoundary) -> Self {
        match value {
            YearBoundary::Reference => YearBoundaryPolicy::ReferenceYear,
            YearBoundary::Candidate => YearBoundaryPolicy::CandidateYear,
        }
    }
}
