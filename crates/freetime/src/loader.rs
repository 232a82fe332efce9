//! Load user and event records from JSON and freeze them into a [`UserDirectory`].
//!
//! Loading happens in two steps. Records are first gathered into per-user
//! [`UserBuilder`]s keyed by id, with each event pushed onto its owner's
//! builder. The builders are then frozen into immutable [`User`]s, so the core
//! never sees a half-populated user.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FreetimeError, Result};
use crate::model::{Event, User, UserDirectory, UserId};

/// One entry of `users.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
}

/// One entry of `events.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub user_id: UserId,
    #[serde(deserialize_with = "deserialize_instant")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_instant")]
    pub end_time: DateTime<Utc>,
}

/// Accepts RFC 3339 (any offset, converted to UTC) or a naive
/// `YYYY-MM-DDTHH:MM:SS`, which is read as UTC.
fn deserialize_instant<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {raw}")))
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Mutable accumulator for one user while records are still being read.
#[derive(Debug)]
pub struct UserBuilder {
    id: UserId,
    name: String,
    events: Vec<Event>,
}

impl UserBuilder {
    pub fn new(id: UserId, name: String) -> Self {
        UserBuilder {
            id,
            name,
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            name: self.name,
            events: self.events,
        }
    }
}

/// Index users by id, attach every event to its owner, then freeze.
///
/// # Errors
/// Returns `FreetimeError::DuplicateUserId` if two user records share an id,
/// or `FreetimeError::UnknownUser` if an event names an id with no user.
pub fn build_directory(users: Vec<UserRecord>, events: Vec<EventRecord>) -> Result<UserDirectory> {
    let mut index: BTreeMap<UserId, UserBuilder> = BTreeMap::new();
    for record in users {
        if index.contains_key(&record.id) {
            return Err(FreetimeError::DuplicateUserId(record.id));
        }
        index.insert(record.id.clone(), UserBuilder::new(record.id, record.name));
    }

    for record in events {
        if record.end_time <= record.start_time {
            tracing::warn!(
                user_id = %record.user_id,
                start = %record.start_time,
                end = %record.end_time,
                "event does not end after it starts"
            );
        }
        let builder = index
            .get_mut(&record.user_id)
            .ok_or_else(|| FreetimeError::UnknownUser(record.user_id.clone()))?;
        builder.push_event(Event::new(record.user_id, record.start_time, record.end_time));
    }

    UserDirectory::from_users(index.into_values().map(UserBuilder::build))
}

impl UserDirectory {
    /// Parse `users.json` and `events.json` contents into a directory.
    pub fn from_json(users_json: &str, events_json: &str) -> Result<Self> {
        let users: Vec<UserRecord> = serde_json::from_str(users_json)?;
        let events: Vec<EventRecord> = serde_json::from_str(events_json)?;
        build_directory(users, events)
    }

    /// Read and parse the two record files.
    ///
    /// # Errors
    /// Returns `FreetimeError::Io` if either file cannot be read, plus any
    /// error from [`UserDirectory::from_json`].
    pub fn load(users_path: impl AsRef<Path>, events_path: impl AsRef<Path>) -> Result<Self> {
        let users_json = read_file(users_path.as_ref())?;
        let events_json = read_file(events_path.as_ref())?;
        let directory = Self::from_json(&users_json, &events_json)?;
        tracing::debug!(users = directory.len(), "loaded user directory");
        Ok(directory)
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| FreetimeError::Io {
        path: path.display().to_string(),
        source,
    })
}
