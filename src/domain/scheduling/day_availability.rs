//! One calendar day of declared availability.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeInterval;

/// A day paired with one party's open intervals on that day.
///
/// Intervals are kept in submission order; they are not required to be
/// sorted or disjoint (duplicate and overlapping submissions are stored
/// as-is), and the engine tolerates both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    day: NaiveDate,
    intervals: Vec<TimeInterval>,
}

impl DayAvailability {
    pub fn new(day: NaiveDate, intervals: Vec<TimeInterval>) -> Self {
        Self { day, intervals }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    /// Appends further intervals to this day, preserving what is already
    /// there. No coalescing happens on purpose.
    pub fn append(&mut self, intervals: impl IntoIterator<Item = TimeInterval>) {
        self.intervals.extend(intervals);
    }

    /// Sorts intervals by start time, then end time. Used when shaping
    /// query results; stored availability keeps submission order.
    pub fn sorted(mut self) -> Self {
        self.intervals.sort();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn iv(from_h: u32, to_h: u32) -> TimeInterval {
        TimeInterval::new(
            NaiveTime::from_hms_opt(from_h, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(to_h, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 1, 1).unwrap()
    }

    #[test]
    fn append_concatenates_without_merging() {
        let mut avail = DayAvailability::new(day(), vec![iv(9, 11)]);
        avail.append(vec![iv(10, 12), iv(9, 11)]);
        assert_eq!(avail.intervals().len(), 3);
        assert_eq!(avail.intervals()[0], iv(9, 11));
        assert_eq!(avail.intervals()[2], iv(9, 11));
    }

    #[test]
    fn sorted_orders_by_start_time() {
        let avail = DayAvailability::new(day(), vec![iv(14, 16), iv(9, 11)]).sorted();
        assert_eq!(avail.intervals()[0], iv(9, 11));
        assert_eq!(avail.intervals()[1], iv(14, 16));
    }
}
