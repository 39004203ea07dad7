use serde::Serialize;
use sqlx::FromRow;

#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

/// Everything about a song except its id, as supplied on create and update.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct SongDetails {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

impl SongDetails {
    /// An empty album id is stored as no album.
    pub fn into_song(self, id: String) -> Song {
        Song {
            id,
            title: self.title,
            year: self.year,
            genre: self.genre,
            performer: self.performer,
            duration: self.duration,
            album_id: self.album_id.filter(|album_id| !album_id.is_empty()),
        }
    }
}

/// The short projection used by listings, album details and playlists.
#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    pub performer: String,
}

impl From<&Song> for SongSummary {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id.to_owned(),
            title: song.title.to_owned(),
            performer: song.performer.to_owned(),
        }
    }
}

/// Case-insensitive partial match filters. `None` means the filter is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub title: Option<String>,
    pub performer: Option<String>,
}

impl SongFilter {
    /// Empty strings count as absent filters.
    pub fn new(title: Option<String>, performer: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            performer: performer.filter(|p| !p.is_empty()),
        }
    }

    pub fn matches(&self, song: &Song) -> bool {
        fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }
        self.title
            .as_deref()
            .map_or(true, |t| contains_ignore_case(&song.title, t))
            && self
                .performer
                .as_deref()
                .map_or(true, |p| contains_ignore_case(&song.performer, p))
    }
}
