//! # freetime
//!
//! Shared free-time windows for a named group of users across fixed work days.
//!
//! Each work day is cut into 15-minute slots. A slot is available when no
//! requested user has an event covering all of it, and runs of available
//! slots are merged into maximal ranges for reporting.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use freetime::{find_availability, AvailabilityConfig, RequestedNames, User, UserDirectory};
//!
//! let users = UserDirectory::from_users([User::new("1", "Maggie", vec![])]).unwrap();
//! let requested = RequestedNames::parse("Maggie").unwrap();
//! let config = AvailabilityConfig::new(requested, 13, 14)
//!     .unwrap()
//!     .with_days(vec![NaiveDate::from_ymd_opt(2021, 7, 5).unwrap()]);
//!
//! let days = find_availability(&config, &users);
//! assert_eq!(freetime::format_range(&days[0].ranges[0]), "2021-07-05 13:00 - 14:00");
//! ```
//!
//! ## Modules
//!
//! - [`model`] — users, events, the frozen `UserDirectory`, requested names
//! - [`loader`] — `users.json` / `events.json` → `UserDirectory`
//! - [`slots`] — work day → ordered fixed-width slots
//! - [`evaluator`] — is every requested user free for this slot?
//! - [`merger`] — available slots → maximal contiguous ranges
//! - [`planner`] — runs the per-day pipeline over all configured days
//! - [`report`] — text and JSON rendering
//! - [`config`] — validated run parameters and reference constants
//! - [`error`] — Error types

pub mod config;
pub mod error;
pub mod evaluator;
pub mod loader;
pub mod merger;
pub mod model;
pub mod planner;
pub mod report;
pub mod slots;

pub use config::AvailabilityConfig;
pub use error::FreetimeError;
pub use evaluator::{evaluate_slots, is_slot_available, AvailabilityVerdict};
pub use merger::{merge_verdicts, MergedRange, RangeMerger};
pub use model::{Event, RequestedNames, User, UserDirectory, UserId};
pub use planner::{find_availability, find_day_availability, DayAvailability};
pub use report::{format_range, write_json_report, write_text_report};
pub use slots::{generate_slots, TimeSlot, SLOT_MINUTES};
