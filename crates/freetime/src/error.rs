//! Error types for freetime operations.

use thiserror::Error;

use crate::model::UserId;

#[derive(Error, Debug)]
pub enum FreetimeError {
    #[error("Please supply the names of users you'd like to search (i.e Maggie,Joe,Jordan)")]
    NoNames,

    #[error("{flag} flag must be a digit from 0-24 (got {value})")]
    InvalidHour { flag: &'static str, value: i64 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate user id: {0}")]
    DuplicateUserId(UserId),

    #[error("Event references unknown user id: {0}")]
    UnknownUser(UserId),

    #[error("Name '{name}' matches {count} users; display names must be unique")]
    AmbiguousName { name: String, count: usize },
}

pub type Result<T> = std::result::Result<T, FreetimeError>;
