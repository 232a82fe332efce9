//! Partition a work day into fixed-width time slots.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Width of one availability slot, in minutes.
pub const SLOT_MINUTES: i64 = 15;

/// A half-open `[start, end)` block of time on one work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeSlot { start, end }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// The UTC instant `hour:00` on `day`. Hour 24 is midnight at the end of the day.
pub fn hour_on(day: NaiveDate, hour: u32) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc() + Duration::hours(i64::from(hour))
}

/// Slots of [`SLOT_MINUTES`] covering `day@work_start_hour:00` to `day@work_end_hour:00`.
///
/// See [`generate_slots_with_quantum`].
pub fn generate_slots(day: NaiveDate, work_start_hour: u32, work_end_hour: u32) -> Vec<TimeSlot> {
    generate_slots_with_quantum(
        day,
        work_start_hour,
        work_end_hour,
        Duration::minutes(SLOT_MINUTES),
    )
}

/// Walk from the work-day start in steps of `quantum` until the work-day end
/// is reached or passed, and pair up consecutive instants as slots.
///
/// The instant that reaches or passes the end never starts a slot; it only
/// bounds the last one, which is clamped so it never runs past the work-day
/// end. When `work_start_hour >= work_end_hour` no slots are produced, and a
/// non-positive `quantum` also yields none.
pub fn generate_slots_with_quantum(
    day: NaiveDate,
    work_start_hour: u32,
    work_end_hour: u32,
    quantum: Duration,
) -> Vec<TimeSlot> {
    if quantum <= Duration::zero() {
        return Vec::new();
    }

    let day_start = hour_on(day, work_start_hour);
    let day_end = hour_on(day, work_end_hour);

    let mut slots = Vec::new();
    let mut cursor = day_start;
    while cursor < day_end {
        let next = cursor + quantum;
        slots.push(TimeSlot::new(cursor, next.min(day_end)));
        cursor = next;
    }
    slots
}
