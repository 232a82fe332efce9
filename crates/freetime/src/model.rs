//! Users, their busy events, and the frozen directory the core reads from.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FreetimeError, Result};

/// Stable user identifier.
///
/// Record files carry ids as either JSON numbers or strings; both normalise to
/// the same textual form, so `7` and `"7"` name the same user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawUserId")]
pub struct UserId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Number(i64),
    Text(String),
}

impl From<RawUserId> for UserId {
    fn from(raw: RawUserId) -> Self {
        match raw {
            RawUserId::Number(n) => UserId(n.to_string()),
            RawUserId::Text(s) => UserId(s),
        }
    }
}

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A busy period on a user's calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Owner of the event. A foreign key, not a back-reference.
    pub user_id: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    pub fn new(user_id: impl Into<UserId>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Event {
            user_id: user_id.into(),
            start,
            end,
        }
    }

    /// True when this event spans the whole of `[start, end)`.
    ///
    /// Both bounds are inclusive, so an event exactly as long as the range
    /// covers it, while an event that merely touches one edge does not.
    pub fn covers(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start <= start && self.end >= end
    }
}

/// A user and the events they own, in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub events: Vec<Event>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, events: Vec<Event>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            events,
        }
    }

    /// True when none of this user's events covers `[start, end)`.
    pub fn is_free(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        !self.events.iter().any(|event| event.covers(start, end))
    }
}

/// Read-only map from user id to [`User`].
///
/// Built once by the loader (or [`UserDirectory::from_users`]) and borrowed by
/// the core for the rest of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: BTreeMap<UserId, User>,
}

impl UserDirectory {
    /// Build a directory from finished users.
    ///
    /// # Errors
    /// Returns `FreetimeError::DuplicateUserId` if two users share an id.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for user in users {
            if map.contains_key(&user.id) {
                return Err(FreetimeError::DuplicateUserId(user.id));
            }
            map.insert(user.id.clone(), user);
        }
        Ok(UserDirectory { users: map })
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// All users, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Users whose display name is exactly `name`.
    pub fn users_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a User> + 'a {
        self.users.values().filter(move |user| user.name == name)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Resolve requested names against the directory before any computation.
    ///
    /// Returns the requested names that match no user. Such names make every
    /// slot unavailable, which is reported rather than rejected.
    ///
    /// # Errors
    /// Returns `FreetimeError::AmbiguousName` if a requested name belongs to
    /// more than one user.
    pub fn check_requested<'a>(&self, requested: &'a RequestedNames) -> Result<Vec<&'a str>> {
        let mut unknown = Vec::new();
        for name in requested.iter() {
            match self.users_named(name).count() {
                0 => unknown.push(name),
                1 => {}
                count => {
                    return Err(FreetimeError::AmbiguousName {
                        name: name.to_string(),
                        count,
                    })
                }
            }
        }
        Ok(unknown)
    }
}

/// The non-empty set of display names a search asks about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedNames {
    names: BTreeSet<String>,
}

impl RequestedNames {
    /// Collect names, trimming whitespace and dropping blanks.
    ///
    /// Repeated names collapse into one entry.
    ///
    /// # Errors
    /// Returns `FreetimeError::NoNames` if nothing is left.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if !set.insert(trimmed.to_string()) {
                tracing::warn!(name = trimmed, "requested name given more than once");
            }
        }
        if set.is_empty() {
            return Err(FreetimeError::NoNames);
        }
        Ok(RequestedNames { names: set })
    }

    /// Parse a comma-separated list such as `Maggie,Joe,Jordan`.
    pub fn parse(list: &str) -> Result<Self> {
        Self::new(list.split(','))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
