//! Scheduling module - The availability intersection engine.
//!
//! # Module Organization
//!
//! - `time_interval` - Half-open time-of-day range, the foundation type
//! - `day_availability` - One calendar day plus a party's open intervals
//! - `party_availability` - A party's complete day-indexed availability
//! - `intersector` - Pairwise and N-ary interval intersection for one day
//! - `day_aligner` - Days present in every party's availability
//! - `slot_merger` - Validates and folds submissions into stored availability

mod day_aligner;
mod day_availability;
mod errors;
mod intersector;
mod party_availability;
mod slot_merger;
mod time_interval;

pub use day_aligner::common_days;
pub use day_availability::DayAvailability;
pub use errors::SchedulingError;
pub use intersector::intersect_day;
pub use party_availability::PartyAvailability;
pub use slot_merger::{AlignmentPolicy, SlotMerger};
pub use time_interval::TimeInterval;
