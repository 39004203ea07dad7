use entities::activity::ActivityEntry;
use entities::playlist::{PlaylistSummary, PlaylistWithSongs};
use serde::Serialize;

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistIdData {
    pub(crate) playlist_id: String,
}

#[derive(Serialize, Clone)]
pub struct PlaylistsData {
    pub(crate) playlists: Vec<PlaylistSummary>,
}

#[derive(Serialize, Clone)]
pub struct PlaylistData {
    pub(crate) playlist: PlaylistWithSongs,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesData {
    pub(crate) playlist_id: String,
    pub(crate) activities: Vec<ActivityEntry>,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationIdData {
    pub(crate) collaboration_id: String,
}
