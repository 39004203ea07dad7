use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Add,
    Delete,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Add => "add",
            ActivityAction::Delete => "delete",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown playlist activity action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for ActivityAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(ActivityAction::Add),
            "delete" => Ok(ActivityAction::Delete),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// One membership change of a playlist. Rows are only ever inserted.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct PlaylistActivity {
    pub id: String,
    pub playlist_id: String,
    pub song_id: String,
    pub user_id: String,
    pub action: ActivityAction,
    pub time: DateTime<Utc>,
}

/// An activity joined with the current username and song title.
/// Either side may be gone by the time the log is read.
#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct ActivityEntry {
    pub username: Option<String>,
    pub title: Option<String>,
    pub action: String,
    pub time: DateTime<Utc>,
}
