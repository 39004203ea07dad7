use entities::album::{Album, AlbumWithSongs};
use entities::song::{Song, SongSummary};
use serde::Serialize;

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlbumIdData {
    pub(crate) album_id: String,
}

#[derive(Serialize, Clone)]
pub struct AlbumsData {
    pub(crate) albums: Vec<Album>,
}

#[derive(Serialize, Clone)]
pub struct AlbumData {
    pub(crate) album: AlbumWithSongs,
}

#[derive(Serialize, Clone)]
pub struct LikesData {
    pub(crate) likes: i64,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SongIdData {
    pub(crate) song_id: String,
}

#[derive(Serialize, Clone)]
pub struct SongsData {
    pub(crate) songs: Vec<SongSummary>,
}

#[derive(Serialize, Clone)]
pub struct SongData {
    pub(crate) song: Song,
}
