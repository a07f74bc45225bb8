use std::collections::btree_map::{BTreeMap, Entry, Iter};
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::time::holiday::JapaneseHoliday;

/// The holidays of one calendar year, keyed by date.
///
/// A date appears at most once; the first holiday inserted for a date wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidaySet {
    year: i32,
    holidays: BTreeMap<NaiveDate, JapaneseHoliday>
}

impl HolidaySet {
    pub fn new(year: i32) -> HolidaySet {
        HolidaySet { year, holidays: BTreeMap::new() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns `false` and keeps the existing entry when `d` is already taken.
    pub fn insert(&mut self, d: NaiveDate, holiday: JapaneseHoliday) -> bool {
        match self.holidays.entry(d) {
            Entry::Vacant(entry) => {
                entry.insert(holiday);
                true
            },
            Entry::Occupied(_) => false
        }
    }

    #[inline]
    pub fn contains(&self, d: &NaiveDate) -> bool {
        self.holidays.contains_key(d)
    }

    pub fn holiday(&self, d: &NaiveDate) -> Option<JapaneseHoliday> {
        self.holidays.get(d).copied()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> Iter<'_, NaiveDate, JapaneseHoliday> {
        self.holidays.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.keys().copied()
    }

    pub fn to_hash_set(&self) -> HashSet<NaiveDate> {
        self.dates().collect()
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = (&'a NaiveDate, &'a JapaneseHoliday);
    type IntoIter = Iter<'a, NaiveDate, JapaneseHoliday>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_holiday_for_a_date() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        let mut set = HolidaySet::new(2024);
        assert!(set.insert(d, JapaneseHoliday::ConstitutionMemorialDay));
        assert!(!set.insert(d, JapaneseHoliday::SubstituteHoliday));
        assert_eq!(set.len(), 1);
        assert_eq!(set.holiday(&d), Some(JapaneseHoliday::ConstitutionMemorialDay));
    }

    #[test]
    fn iterates_in_date_order() {
        let mut set = HolidaySet::new(2024);
        let later = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
        let earlier = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        set.insert(later, JapaneseHoliday::CultureDay);
        set.insert(earlier, JapaneseHoliday::NewYearsDay);
        assert_eq!(set.dates().collect::<Vec<_>>(), vec![earlier, later]);
    }
}
