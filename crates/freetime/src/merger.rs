//! Merge runs of available slots into maximal contiguous ranges.
//!
//! [`RangeMerger`] consumes one day's verdicts in time order. It holds at most
//! one open range, extends it while available slots keep touching its end,
//! and flushes it when availability breaks, when a gap appears, or when the
//! day is finished.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evaluator::AvailabilityVerdict;
use crate::slots::TimeSlot;

/// A half-open `[start, end)` range built from one or more consecutive available slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MergedRange {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl From<TimeSlot> for MergedRange {
    fn from(slot: TimeSlot) -> Self {
        MergedRange {
            start: slot.start,
            end: slot.end,
        }
    }
}

/// Stateful accumulator for a single day's verdict stream.
#[derive(Debug, Default)]
pub struct RangeMerger {
    current: Option<MergedRange>,
}

impl RangeMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next slot's verdict. Returns a range if this slot completed one.
    pub fn push(&mut self, slot: TimeSlot, available: bool) -> Option<MergedRange> {
        if !available {
            return self.current.take();
        }

        if let Some(open) = self.current.as_mut() {
            if slot.start == open.end {
                open.end = slot.end;
                return None;
            }
        }

        // Nothing open, or a gap before this slot: open a new range and hand
        // back whatever was open before.
        self.current.replace(slot.into())
    }

    pub fn push_verdict(&mut self, verdict: &AvailabilityVerdict) -> Option<MergedRange> {
        self.push(verdict.slot, verdict.available)
    }

    /// End of the day: flush the open range, if any, and reset.
    pub fn finish(&mut self) -> Option<MergedRange> {
        self.current.take()
    }

    /// The range currently being extended.
    pub fn current(&self) -> Option<&MergedRange> {
        self.current.as_ref()
    }
}

/// Run a fresh merger over a whole day's verdicts and collect every range it emits.
pub fn merge_verdicts<'a, I>(verdicts: I) -> Vec<MergedRange>
where
    I: IntoIterator<Item = &'a AvailabilityVerdict>,
{
    let mut merger = RangeMerger::new();
    let mut ranges: Vec<MergedRange> = verdicts
        .into_iter()
        .filter_map(|verdict| merger.push_verdict(verdict))
        .collect();
    ranges.extend(merger.finish());
    ranges
}
