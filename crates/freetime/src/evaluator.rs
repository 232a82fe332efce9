//! Decide whether every requested user is free for a slot.
//!
//! A user is busy for a slot only when one of their events contains the whole
//! slot. An event that overlaps part of a slot, or touches one of its edges,
//! leaves the slot free.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{RequestedNames, UserDirectory};
use crate::slots::TimeSlot;

/// A slot paired with whether the whole requested group is free for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityVerdict {
    pub slot: TimeSlot,
    pub available: bool,
}

/// True iff every requested name belongs to a user with no event covering `slot`.
///
/// The names of the free requested users are collected and compared with the
/// requested set. A name that matches no user is never collected, so it
/// makes every slot unavailable.
pub fn is_slot_available(slot: &TimeSlot, requested: &RequestedNames, users: &UserDirectory) -> bool {
    let available: BTreeSet<&str> = users
        .iter()
        .filter(|user| requested.contains(&user.name))
        .filter(|user| user.is_free(slot.start, slot.end))
        .map(|user| user.name.as_str())
        .collect();

    available.len() == requested.len() && requested.iter().all(|name| available.contains(name))
}

/// Evaluate each slot in order.
pub fn evaluate_slots(
    slots: &[TimeSlot],
    requested: &RequestedNames,
    users: &UserDirectory,
) -> Vec<AvailabilityVerdict> {
    slots
        .iter()
        .map(|slot| AvailabilityVerdict {
            slot: *slot,
            available: is_slot_available(slot, requested, users),
        })
        .collect()
}
