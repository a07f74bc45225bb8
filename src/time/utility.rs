use chrono::{Datelike, Days, NaiveDate, Weekday};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month == 0 || month > 12 {
        0
    } else if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Days to walk forward from `from` to reach `to` (0 when they are equal).
#[inline]
pub fn days_until_weekday(from: Weekday, to: Weekday) -> u64 {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as u64
}

/// First date on or after `d` that falls on `weekday`.
pub fn first_weekday_on_or_after(d: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    d.checked_add_days(Days::new(days_until_weekday(d.weekday(), weekday)))
}

/// The `n`-th `weekday` of the month, counted from the 1st.
///
/// Starts at the first of the month, walks to the first matching weekday and
/// then adds whole weeks. Returns `None` when the month is invalid, `n` is 0,
/// or the result does not stay inside the month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_match = first_weekday_on_or_after(first_of_month, weekday)?;
    let d = first_match.checked_add_days(Days::new(7 * (n as u64 - 1)))?;

    if d.month() == month {
        Some(d)
    } else {
        None
    }
}
