//! Run the per-day pipeline over every configured day.
//!
//! Each day is handled on its own: generate slots, evaluate each slot, feed
//! the verdicts to a fresh [`RangeMerger`], then flush it. Days are processed
//! in the order they are configured.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::AvailabilityConfig;
use crate::evaluator::is_slot_available;
use crate::merger::{MergedRange, RangeMerger};
use crate::model::UserDirectory;
use crate::slots::generate_slots_with_quantum;

/// The shared free ranges found on one day, in time order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub ranges: Vec<MergedRange>,
}

/// Compute the shared free ranges for a single day.
pub fn find_day_availability(
    day: NaiveDate,
    config: &AvailabilityConfig,
    users: &UserDirectory,
) -> DayAvailability {
    let slots = generate_slots_with_quantum(
        day,
        config.work_start_hour,
        config.work_end_hour,
        Duration::minutes(config.slot_minutes),
    );

    let mut merger = RangeMerger::new();
    let mut ranges = Vec::new();
    for slot in &slots {
        let available = is_slot_available(slot, &config.requested, users);
        ranges.extend(merger.push(*slot, available));
    }
    ranges.extend(merger.finish());

    tracing::debug!(%day, slots = slots.len(), ranges = ranges.len(), "evaluated day");
    for range in &ranges {
        tracing::debug!(start = %range.start, end = %range.end, "free range");
    }

    DayAvailability { date: day, ranges }
}

/// Compute the shared free ranges for every configured day.
pub fn find_availability(config: &AvailabilityConfig, users: &UserDirectory) -> Vec<DayAvailability> {
    config
        .days
        .iter()
        .map(|&day| find_day_availability(day, config, users))
        .collect()
}
