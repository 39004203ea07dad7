//! Store whose existence pre-checks always answer "absent", as a request
//! sees it when another request commits between its check and its insert.

use async_trait::async_trait;
use entities::activity::{ActivityEntry, PlaylistActivity};
use entities::album::Album;
use entities::album_like::AlbumLike;
use entities::collaboration::Collaboration;
use entities::playlist::{Playlist, PlaylistSong, PlaylistSummary};
use entities::song::{Song, SongFilter, SongSummary};
use entities::user::User;
use queries::{
    ActivityStore, AlbumLikeStore, AlbumStore, AuthenticationStore, CollaborationStore,
    MemoryStore, PlaylistStore, SongStore, StoreResult, UserStore,
};

#[derive(Default)]
pub struct StalePrecheckStore {
    inner: MemoryStore,
}

impl StalePrecheckStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for StalePrecheckStore {
    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        self.inner.insert_user(user).await
    }

    async fn username_exists(&self, _username: &str) -> StoreResult<bool> {
        Ok(false)
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        self.inner.get_user_by_username(username).await
    }

    async fn get_user_by_id(&self, user_id: &str) -> StoreResult<Option<User>> {
        self.inner.get_user_by_id(user_id).await
    }
}

#[async_trait]
impl AlbumLikeStore for StalePrecheckStore {
    async fn album_like_exists(&self, _album_id: &str, _user_id: &str) -> StoreResult<bool> {
        Ok(false)
    }

    async fn insert_album_like(&self, like: &AlbumLike) -> StoreResult<()> {
        self.inner.insert_album_like(like).await
    }

    async fn delete_album_like(&self, album_id: &str, user_id: &str) -> StoreResult<bool> {
        self.inner.delete_album_like(album_id, user_id).await
    }

    async fn count_album_likes(&self, album_id: &str) -> StoreResult<i64> {
        self.inner.count_album_likes(album_id).await
    }
}

#[async_trait]
impl AuthenticationStore for StalePrecheckStore {
    async fn insert_refresh_token(&self, token: &str) -> StoreResult<()> {
        self.inner.insert_refresh_token(token).await
    }

    async fn refresh_token_exists(&self, token: &str) -> StoreResult<bool> {
        self.inner.refresh_token_exists(token).await
    }

    async fn delete_refresh_token(&self, token: &str) -> StoreResult<bool> {
        self.inner.delete_refresh_token(token).await
    }
}

#[async_trait]
impl AlbumStore for StalePrecheckStore {
    async fn insert_album(&self, album: &Album) -> StoreResult<()> {
        self.inner.insert_album(album).await
    }

    async fn get_albums(&self) -> StoreResult<Vec<Album>> {
        self.inner.get_albums().await
    }

    async fn get_album_by_id(&self, album_id: &str) -> StoreResult<Option<Album>> {
        self.inner.get_album_by_id(album_id).await
    }

    async fn update_album(&self, album_id: &str, name: &str, year: i32) -> StoreResult<bool> {
        self.inner.update_album(album_id, name, year).await
    }

    async fn update_album_cover(&self, album_id: &str, cover_url: &str) -> StoreResult<bool> {
        self.inner.update_album_cover(album_id, cover_url).await
    }

    async fn delete_album_by_id(&self, album_id: &str) -> StoreResult<bool> {
        self.inner.delete_album_by_id(album_id).await
    }
}

#[async_trait]
impl SongStore for StalePrecheckStore {
    async fn insert_song(&self, song: &Song) -> StoreResult<()> {
        self.inner.insert_song(song).await
    }

    async fn get_songs(&self, filter: &SongFilter) -> StoreResult<Vec<SongSummary>> {
        self.inner.get_songs(filter).await
    }

    async fn get_song_by_id(&self, song_id: &str) -> StoreResult<Option<Song>> {
        self.inner.get_song_by_id(song_id).await
    }

    async fn get_songs_by_album_id(&self, album_id: &str) -> StoreResult<Vec<SongSummary>> {
        self.inner.get_songs_by_album_id(album_id).await
    }

    async fn update_song(&self, song: &Song) -> StoreResult<bool> {
        self.inner.update_song(song).await
    }

    async fn delete_song_by_id(&self, song_id: &str) -> StoreResult<bool> {
        self.inner.delete_song_by_id(song_id).await
    }
}

#[async_trait]
impl PlaylistStore for StalePrecheckStore {
    async fn insert_playlist(&self, playlist: &Playlist) -> StoreResult<()> {
        self.inner.insert_playlist(playlist).await
    }

    async fn get_playlist_by_id(&self, playlist_id: &str) -> StoreResult<Option<Playlist>> {
        self.inner.get_playlist_by_id(playlist_id).await
    }

    async fn get_playlist_summary(
        &self,
        playlist_id: &str,
    ) -> StoreResult<Option<PlaylistSummary>> {
        self.inner.get_playlist_summary(playlist_id).await
    }

    async fn get_playlists_for_user(&self, user_id: &str) -> StoreResult<Vec<PlaylistSummary>> {
        self.inner.get_playlists_for_user(user_id).await
    }

    async fn delete_playlist_by_id(&self, playlist_id: &str) -> StoreResult<bool> {
        self.inner.delete_playlist_by_id(playlist_id).await
    }

    async fn insert_playlist_song(&self, entry: &PlaylistSong) -> StoreResult<()> {
        self.inner.insert_playlist_song(entry).await
    }

    async fn delete_playlist_song(&self, playlist_id: &str, song_id: &str) -> StoreResult<bool> {
        self.inner.delete_playlist_song(playlist_id, song_id).await
    }

    async fn get_songs_by_playlist_id(&self, playlist_id: &str) -> StoreResult<Vec<SongSummary>> {
        self.inner.get_songs_by_playlist_id(playlist_id).await
    }
}

#[async_trait]
impl CollaborationStore for StalePrecheckStore {
    async fn insert_collaboration(&self, collaboration: &Collaboration) -> StoreResult<()> {
        self.inner.insert_collaboration(collaboration).await
    }

    async fn delete_collaboration(&self, playlist_id: &str, user_id: &str) -> StoreResult<bool> {
        self.inner.delete_collaboration(playlist_id, user_id).await
    }

    async fn collaboration_exists(&self, playlist_id: &str, user_id: &str) -> StoreResult<bool> {
        self.inner.collaboration_exists(playlist_id, user_id).await
    }
}

#[async_trait]
impl ActivityStore for StalePrecheckStore {
    async fn insert_activity(&self, activity: &PlaylistActivity) -> StoreResult<()> {
        self.inner.insert_activity(activity).await
    }

    async fn get_activities_by_playlist_id(
        &self,
        playlist_id: &str,
    ) -> StoreResult<Vec<ActivityEntry>> {
        self.inner.get_activities_by_playlist_id(playlist_id).await
    }
}
