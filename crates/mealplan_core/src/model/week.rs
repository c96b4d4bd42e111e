//! Calendar helpers for the Monday-start planning week.
//!
//! # Invariants
//! - `DateInterval` bounds are inclusive on both ends.
//! - `WeekRange::start` is always a Monday.

use chrono::{Datelike, Days, NaiveDate};

/// Inclusive calendar-day interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns whether `date` lies within the inclusive bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Seven-day planning week starting on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekRange {
    start: NaiveDate,
}

impl WeekRange {
    /// Returns the week that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_monday());
        Self {
            start: date - Days::new(offset),
        }
    }

    /// Monday of this week.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Sunday of this week.
    pub fn end(&self) -> NaiveDate {
        self.start + Days::new(6)
    }

    pub fn previous(&self) -> Self {
        Self {
            start: self.start - Days::new(7),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            start: self.start + Days::new(7),
        }
    }

    /// ISO-8601 week number of this week.
    pub fn iso_week(&self) -> u32 {
        self.start.iso_week().week()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.interval().contains(date)
    }

    /// Inclusive Monday..=Sunday interval.
    pub fn interval(&self) -> DateInterval {
        DateInterval::new(self.start(), self.end())
    }

    /// Monday..=Sunday in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..7).map(|offset| self.start + Days::new(offset)).collect()
    }

    /// `yyyy-MM-dd` form of the week start, used in storage keys.
    pub fn start_key(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::WeekRange;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn containing_snaps_to_monday() {
        let sunday = day(2025, 3, 16);
        let week = WeekRange::containing(sunday);
        assert_eq!(week.start(), day(2025, 3, 10));
        assert_eq!(week.end(), sunday);
        assert_eq!(WeekRange::containing(day(2025, 3, 10)), week);
    }

    #[test]
    fn navigation_and_keys() {
        let week = WeekRange::containing(day(2025, 1, 1));
        assert_eq!(week.start_key(), "2024-12-30");
        assert_eq!(week.iso_week(), 1);
        assert_eq!(week.next().start(), day(2025, 1, 6));
        assert_eq!(week.previous().start(), day(2024, 12, 23));
        assert_eq!(week.days().len(), 7);
        assert!(!week.contains(day(2025, 1, 6)));
    }
}
