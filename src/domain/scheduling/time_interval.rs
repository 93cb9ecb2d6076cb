//! Half-open time-of-day interval.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::SchedulingError;

/// A half-open `[from, to)` range of time-of-day within a single day.
///
/// `from < to` always holds; equal endpoints are invalid rather than a
/// zero-length interval, and intervals never span midnight. Hour
/// alignment is deliberately NOT enforced here - it is a submission-time
/// policy applied by [`SlotMerger`](super::SlotMerger), so the type stays
/// usable at other granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeInterval {
    from: NaiveTime,
    to: NaiveTime,
}

impl TimeInterval {
    /// Creates an interval, rejecting `from >= to`.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInterval` when the start is not
    /// strictly before the end.
    pub fn new(from: NaiveTime, to: NaiveTime) -> Result<Self, SchedulingError> {
        if from >= to {
            return Err(SchedulingError::invalid_interval(from, to));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveTime {
        self.from
    }

    pub fn to(&self) -> NaiveTime {
        self.to
    }

    /// Whether both endpoints fall exactly on an hour boundary.
    pub fn is_hour_aligned(&self) -> bool {
        on_the_hour(self.from) && on_the_hour(self.to)
    }

    /// Computes the overlap of two intervals, if any.
    ///
    /// Two intervals overlap iff `a.from < b.to && b.from < a.to`; the
    /// inequalities are strict, so touching endpoints do not overlap. The
    /// result spans `max(from)` to `min(to)`. Commutative.
    pub fn overlap(&self, other: &TimeInterval) -> Option<TimeInterval> {
        if self.from < other.to && other.from < self.to {
            Some(Self {
                from: self.from.max(other.from),
                to: self.to.min(other.to),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from.format("%H:%M"), self.to.format("%H:%M"))
    }
}

fn on_the_hour(time: NaiveTime) -> bool {
    time.minute() == 0 && time.second() == 0 && time.nanosecond() == 0
}
