use serde::Serialize;
use sqlx::FromRow;

use crate::song::SongSummary;

#[derive(Clone, Debug, PartialEq, Eq, FromRow, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub cover_url: Option<String>,
}

/// Album as returned by the detail endpoint, with the songs referencing it.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumWithSongs {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub cover_url: Option<String>,
    pub songs: Vec<SongSummary>,
}

impl AlbumWithSongs {
    pub fn from_album(album: Album, songs: Vec<SongSummary>) -> Self {
        Self {
            id: album.id,
            name: album.name,
            year: album.year,
            cover_url: album.cover_url,
            songs,
        }
    }
}
