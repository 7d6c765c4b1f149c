//! API Models
//!
//! Data structures matching the REST API payloads.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::validate::parse_date;

/// Task status, serialized exactly as the API spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three statuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown task status {:?}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Task as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque id; numeric ids are kept in their decimal form
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(deserialize_with = "lenient_status")]
    pub status: TaskStatus,
    /// Server's date string, `YYYY-MM-DD` or a datetime
    #[serde(default)]
    pub due_date: Option<String>,
}

impl Task {
    /// Calendar due date, `None` when missing or unparsable
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_date)
    }

    /// Due date for display
    pub fn due_label(&self) -> String {
        match self.due() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "No due date".to_string(),
        }
    }
}

/// User reference inside an auth response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
}

/// Body of a successful login or register call
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Lists come back either bare or wrapped in `{ "data": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Wrapped { data } => data,
        }
    }
}

/// Single records come back bare or wrapped in `data` / `task`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Single<T> {
    Data { data: T },
    Task { task: T },
    Bare(T),
}

impl<T> Single<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Single::Data { data } => data,
            Single::Task { task } => task,
            Single::Bare(item) => item,
        }
    }
}

/// Decode list rows one at a time; a row that is not a task is skipped
pub(crate) fn decode_rows(rows: Vec<serde_json::Value>) -> Vec<Task> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<Task>(row) {
            Ok(task) => Some(task),
            Err(err) => {
                tracing::warn!("skipping undecodable task row: {err}");
                None
            }
        })
        .collect()
}

/// Status ignoring case and surrounding whitespace
fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TaskStatus, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.trim().to_lowercase().parse().map_err(serde::de::Error::custom)
}

fn opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
