//! Validated run parameters.

use chrono::NaiveDate;

use crate::error::{FreetimeError, Result};
use crate::model::RequestedNames;
use crate::slots::SLOT_MINUTES;

pub const DEFAULT_WORK_START_HOUR: u32 = 13;
pub const DEFAULT_WORK_END_HOUR: u32 = 21;
pub const MAX_HOUR: i64 = 24;

/// Reference days searched when none are given, as `(year, month, day)`.
pub const DEFAULT_DAYS: [(i32, u32, u32); 3] = [(2021, 7, 5), (2021, 7, 6), (2021, 7, 7)];

pub fn default_days() -> Vec<NaiveDate> {
    DEFAULT_DAYS
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

/// Check an hour-of-day argument lies in `[0, 24]`.
///
/// # Errors
/// Returns `FreetimeError::InvalidHour` naming `flag` otherwise.
pub fn validate_hour(flag: &'static str, value: i64) -> Result<u32> {
    if !(0..=MAX_HOUR).contains(&value) {
        return Err(FreetimeError::InvalidHour { flag, value });
    }
    u32::try_from(value).map_err(|_| FreetimeError::InvalidHour { flag, value })
}

/// Everything one availability search needs besides the user data.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityConfig {
    pub requested: RequestedNames,
    pub work_start_hour: u32,
    pub work_end_hour: u32,
    pub days: Vec<NaiveDate>,
    pub slot_minutes: i64,
}

impl AvailabilityConfig {
    /// Build a config over the default days with the standard slot width.
    ///
    /// # Errors
    /// Returns `FreetimeError::InvalidHour` if either hour is outside `[0, 24]`.
    pub fn new(requested: RequestedNames, work_start_hour: i64, work_end_hour: i64) -> Result<Self> {
        let work_start_hour = validate_hour("--start", work_start_hour)?;
        let work_end_hour = validate_hour("--end", work_end_hour)?;
        if work_start_hour >= work_end_hour {
            tracing::warn!(
                work_start_hour,
                work_end_hour,
                "work day is empty; no slots will be produced"
            );
        }
        Ok(AvailabilityConfig {
            requested,
            work_start_hour,
            work_end_hour,
            days: default_days(),
            slot_minutes: SLOT_MINUTES,
        })
    }

    /// Same as [`AvailabilityConfig::new`] with the default 13:00–21:00 work day.
    pub fn with_default_hours(requested: RequestedNames) -> Self {
        AvailabilityConfig {
            requested,
            work_start_hour: DEFAULT_WORK_START_HOUR,
            work_end_hour: DEFAULT_WORK_END_HOUR,
            days: default_days(),
            slot_minutes: SLOT_MINUTES,
        }
    }

    /// Replace the searched days. An empty list keeps the defaults.
    pub fn with_days(mut self, days: Vec<NaiveDate>) -> Self {
        if !days.is_empty() {
            self.days = days;
        }
        self
    }
}
