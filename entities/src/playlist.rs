use serde::Serialize;
use sqlx::FromRow;

use crate::song::SongSummary;

#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: String,
}

/// A playlist joined with its owner's username.
#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub username: Option<String>,
}

#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct PlaylistWithSongs {
    pub id: String,
    pub name: String,
    pub username: Option<String>,
    pub songs: Vec<SongSummary>,
}

impl PlaylistWithSongs {
    pub fn from_summary(summary: PlaylistSummary, songs: Vec<SongSummary>) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            username: summary.username,
            songs,
        }
    }
}

#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug)]
pub struct PlaylistSong {
    pub id: String,
    pub playlist_id: String,
    pub song_id: String,
}
