//! In-process store that mirrors the constraints of the PostgreSQL schema:
//! the same unique keys, foreign keys and delete cascades.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use entities::activity::{ActivityEntry, PlaylistActivity};
use entities::album::Album;
use entities::album_like::AlbumLike;
use entities::collaboration::Collaboration;
use entities::playlist::{Playlist, PlaylistSong, PlaylistSummary};
use entities::song::{Song, SongFilter, SongSummary};
use entities::user::User;

use crate::{
    ActivityStore, AlbumLikeStore, AlbumStore, AuthenticationStore, CollaborationStore,
    PlaylistStore, SongStore, StoreError, StoreResult, UserStore,
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    authentications: Vec<String>,
    albums: Vec<Album>,
    songs: Vec<Song>,
    playlists: Vec<Playlist>,
    playlists_songs: Vec<PlaylistSong>,
    collaborations: Vec<Collaboration>,
    activities: Vec<PlaylistActivity>,
    albums_users: Vec<AlbumLike>,
}

impl Tables {
    fn user_exists(&self, user_id: &str) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }

    fn album_exists(&self, album_id: &str) -> bool {
        self.albums.iter().any(|a| a.id == album_id)
    }

    fn song_exists(&self, song_id: &str) -> bool {
        self.songs.iter().any(|s| s.id == song_id)
    }

    fn playlist_exists(&self, playlist_id: &str) -> bool {
        self.playlists.iter().any(|p| p.id == playlist_id)
    }

    fn username_of(&self, user_id: &str) -> Option<String> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username.to_owned())
    }

    fn summary_of(&self, playlist: &Playlist) -> PlaylistSummary {
        PlaylistSummary {
            id: playlist.id.to_owned(),
            name: playlist.name.to_owned(),
            username: self.username_of(&playlist.owner),
        }
    }

    fn check_album_reference(&self, album_id: Option<&str>) -> StoreResult<()> {
        match album_id {
            Some(album_id) if !self.album_exists(album_id) => Err(
                StoreError::ForeignKeyViolation("fk-songs-album_id".to_string()),
            ),
            _ => Ok(()),
        }
    }
}

fn check(condition: bool, err: impl FnOnce() -> StoreError) -> StoreResult<()> {
    if condition {
        Ok(())
    } else {
        Err(err())
    }
}

fn unique(constraint: &str) -> impl FnOnce() -> StoreError + '_ {
    move || StoreError::UniqueViolation(constraint.to_string())
}

fn foreign_key(constraint: &str) -> impl FnOnce() -> StoreError + '_ {
    move || StoreError::ForeignKeyViolation(constraint.to_string())
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        let mut tables = self.write();
        check(
            !tables.users.iter().any(|u| u.username == user.username),
            unique("users_username_key"),
        )?;
        check(!tables.user_exists(&user.id), unique("users_pkey"))?;
        tables.users.push(user.clone());
        Ok(())
    }

    async fn username_exists(&self, username: &str) -> StoreResult<bool> {
        Ok(self.read().users.iter().any(|u| u.username == username))
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self
            .read()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_user_by_id(&self, user_id: &str) -> StoreResult<Option<User>> {
        Ok(self.read().users.iter().find(|u| u.id == user_id).cloned())
    }
}

#[async_trait]
impl AuthenticationStore for MemoryStore {
    async fn insert_refresh_token(&self, token: &str) -> StoreResult<()> {
        self.write().authentications.push(token.to_string());
        Ok(())
    }

    async fn refresh_token_exists(&self, token: &str) -> StoreResult<bool> {
        Ok(self.read().authentications.iter().any(|t| t == token))
    }

    async fn delete_refresh_token(&self, token: &str) -> StoreResult<bool> {
        let mut tables = self.write();
        let before = tables.authentications.len();
        tables.authentications.retain(|t| t != token);
        Ok(tables.authentications.len() < before)
    }
}

#[async_trait]
impl AlbumStore for MemoryStore {
    async fn insert_album(&self, album: &Album) -> StoreResult<()> {
        let mut tables = self.write();
        check(!tables.album_exists(&album.id), unique("albums_pkey"))?;
        tables.albums.push(album.clone());
        Ok(())
    }

    async fn get_albums(&self) -> StoreResult<Vec<Album>> {
        Ok(self.read().albums.clone())
    }

    async fn get_album_by_id(&self, album_id: &str) -> StoreResult<Option<Album>> {
        Ok(self.read().albums.iter().find(|a| a.id == album_id).cloned())
    }

    async fn update_album(&self, album_id: &str, name: &str, year: i32) -> StoreResult<bool> {
        let mut tables = self.write();
        match tables.albums.iter_mut().find(|a| a.id == album_id) {
            Some(album) => {
                album.name = name.to_string();
                album.year = year;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_album_cover(&self, album_id: &str, cover_url: &str) -> StoreResult<bool> {
        let mut tables = self.write();
        match tables.albums.iter_mut().find(|a| a.id == album_id) {
            Some(album) => {
                album.cover_url = Some(cover_url.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_album_by_id(&self, album_id: &str) -> StoreResult<bool> {
        let mut tables = self.write();
        if !tables.album_exists(album_id) {
            return Ok(false);
        }
        tables.albums.retain(|a| a.id != album_id);
        tables.albums_users.retain(|l| l.album_id != album_id);
        for song in tables.songs.iter_mut() {
            if song.album_id.as_deref() == Some(album_id) {
                song.album_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl SongStore for MemoryStore {
    async fn insert_song(&self, song: &Song) -> StoreResult<()> {
        let mut tables = self.write();
        check(!tables.song_exists(&song.id), unique("songs_pkey"))?;
        tables.check_album_reference(song.album_id.as_deref())?;
        tables.songs.push(song.clone());
        Ok(())
    }

    async fn get_songs(&self, filter: &SongFilter) -> StoreResult<Vec<SongSummary>> {
        Ok(self
            .read()
            .songs
            .iter()
            .filter(|s| filter.matches(s))
            .map(SongSummary::from)
            .collect())
    }

    async fn get_song_by_id(&self, song_id: &str) -> StoreResult<Option<Song>> {
        Ok(self.read().songs.iter().find(|s| s.id == song_id).cloned())
    }

    async fn get_songs_by_album_id(&self, album_id: &str) -> StoreResult<Vec<SongSummary>> {
        Ok(self
            .read()
            .songs
            .iter()
            .filter(|s| s.album_id.as_deref() == Some(album_id))
            .map(SongSummary::from)
            .collect())
    }

    async fn update_song(&self, song: &Song) -> StoreResult<bool> {
        let mut tables = self.write();
        tables.check_album_reference(song.album_id.as_deref())?;
        match tables.songs.iter_mut().find(|s| s.id == song.id) {
            Some(existing) => {
                *existing = song.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_song_by_id(&self, song_id: &str) -> StoreResult<bool> {
        let mut tables = self.write();
        if !tables.song_exists(song_id) {
            return Ok(false);
        }
        tables.songs.retain(|s| s.id != song_id);
        tables.playlists_songs.retain(|e| e.song_id != song_id);
        Ok(true)
    }
}

#[async_trait]
impl PlaylistStore for MemoryStore {
    async fn insert_playlist(&self, playlist: &Playlist) -> StoreResult<()> {
        let mut tables = self.write();
        check(!tables.playlist_exists(&playlist.id), unique("playlists_pkey"))?;
        check(
            tables.user_exists(&playlist.owner),
            foreign_key("fk_playlists_owner"),
        )?;
        tables.playlists.push(playlist.clone());
        Ok(())
    }

    async fn get_playlist_by_id(&self, playlist_id: &str) -> StoreResult<Option<Playlist>> {
        Ok(self
            .read()
            .playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .cloned())
    }

    async fn get_playlist_summary(
        &self,
        playlist_id: &str,
    ) -> StoreResult<Option<PlaylistSummary>> {
        let tables = self.read();
        Ok(tables
            .playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .map(|p| tables.summary_of(p)))
    }

    async fn get_playlists_for_user(&self, user_id: &str) -> StoreResult<Vec<PlaylistSummary>> {
        let tables = self.read();
        Ok(tables
            .playlists
            .iter()
            .filter(|p| {
                p.owner == user_id
                    || tables
                        .collaborations
                        .iter()
                        .any(|c| c.playlist_id == p.id && c.user_id == user_id)
            })
            .map(|p| tables.summary_of(p))
            .collect())
    }

    async fn delete_playlist_by_id(&self, playlist_id: &str) -> StoreResult<bool> {
        let mut tables = self.write();
        if !tables.playlist_exists(playlist_id) {
            return Ok(false);
        }
        tables.playlists.retain(|p| p.id != playlist_id);
        tables.playlists_songs.retain(|e| e.playlist_id != playlist_id);
        tables.collaborations.retain(|c| c.playlist_id != playlist_id);
        tables.activities.retain(|a| a.playlist_id != playlist_id);
        Ok(true)
    }

    async fn insert_playlist_song(&self, entry: &PlaylistSong) -> StoreResult<()> {
        let mut tables = self.write();
        check(
            tables.playlist_exists(&entry.playlist_id),
            foreign_key("fk_playlists_songs_playlist"),
        )?;
        check(
            tables.song_exists(&entry.song_id),
            foreign_key("fk_playlists_songs_song"),
        )?;
        check(
            !tables
                .playlists_songs
                .iter()
                .any(|e| e.playlist_id == entry.playlist_id && e.song_id == entry.song_id),
            unique("unique_playlist_id_and_song_id"),
        )?;
        tables.playlists_songs.push(entry.clone());
        Ok(())
    }

    async fn delete_playlist_song(&self, playlist_id: &str, song_id: &str) -> StoreResult<bool> {
        let mut tables = self.write();
        let before = tables.playlists_songs.len();
        tables
            .playlists_songs
            .retain(|e| !(e.playlist_id == playlist_id && e.song_id == song_id));
        Ok(tables.playlists_songs.len() < before)
    }

    async fn get_songs_by_playlist_id(&self, playlist_id: &str) -> StoreResult<Vec<SongSummary>> {
        let tables = self.read();
        Ok(tables
            .playlists_songs
            .iter()
            .filter(|e| e.playlist_id == playlist_id)
            .filter_map(|e| tables.songs.iter().find(|s| s.id == e.song_id))
            .map(SongSummary::from)
            .collect())
    }
}

#[async_trait]
impl CollaborationStore for MemoryStore {
    async fn insert_collaboration(&self, collaboration: &Collaboration) -> StoreResult<()> {
        let mut tables = self.write();
        check(
            tables.playlist_exists(&collaboration.playlist_id),
            foreign_key("fk_collaborations_playlist"),
        )?;
        check(
            tables.user_exists(&collaboration.user_id),
            foreign_key("fk_collaborations_user"),
        )?;
        check(
            !tables.collaborations.iter().any(|c| {
                c.playlist_id == collaboration.playlist_id && c.user_id == collaboration.user_id
            }),
            unique("unique_playlist_id_and_user_id"),
        )?;
        tables.collaborations.push(collaboration.clone());
        Ok(())
    }

    async fn delete_collaboration(&self, playlist_id: &str, user_id: &str) -> StoreResult<bool> {
        let mut tables = self.write();
        let before = tables.collaborations.len();
        tables
            .collaborations
            .retain(|c| !(c.playlist_id == playlist_id && c.user_id == user_id));
        Ok(tables.collaborations.len() < before)
    }

    async fn collaboration_exists(&self, playlist_id: &str, user_id: &str) -> StoreResult<bool> {
        Ok(self
            .read()
            .collaborations
            .iter()
            .any(|c| c.playlist_id == playlist_id && c.user_id == user_id))
    }
}

#[async_trait]
impl ActivityStore for MemoryStore {
    async fn insert_activity(&self, activity: &PlaylistActivity) -> StoreResult<()> {
        let mut tables = self.write();
        check(
            tables.playlist_exists(&activity.playlist_id),
            foreign_key("fk_playlists_activities_playlist"),
        )?;
        tables.activities.push(activity.clone());
        Ok(())
    }

    async fn get_activities_by_playlist_id(
        &self,
        playlist_id: &str,
    ) -> StoreResult<Vec<ActivityEntry>> {
        let tables = self.read();
        let mut entries: Vec<ActivityEntry> = tables
            .activities
            .iter()
            .filter(|a| a.playlist_id == playlist_id)
            .map(|a| ActivityEntry {
                username: tables.username_of(&a.user_id),
                title: tables
                    .songs
                    .iter()
                    .find(|s| s.id == a.song_id)
                    .map(|s| s.title.to_owned()),
                action: a.action.to_string(),
                time: a.time,
            })
            .collect();
        // stable, so equal timestamps keep insertion order
        entries.sort_by_key(|e| e.time);
        Ok(entries)
    }
}

#[async_trait]
impl AlbumLikeStore for MemoryStore {
    async fn album_like_exists(&self, album_id: &str, user_id: &str) -> StoreResult<bool> {
        Ok(self
            .read()
            .albums_users
            .iter()
            .any(|l| l.album_id == album_id && l.user_id == user_id))
    }

    async fn insert_album_like(&self, like: &AlbumLike) -> StoreResult<()> {
        let mut tables = self.write();
        check(
            tables.album_exists(&like.album_id),
            foreign_key("fk_albums_users_album"),
        )?;
        check(
            tables.user_exists(&like.user_id),
            foreign_key("fk_albums_users_user"),
        )?;
        check(
            !tables
                .albums_users
                .iter()
                .any(|l| l.album_id == like.album_id && l.user_id == like.user_id),
            unique("unique_album_id_and_user_id"),
        )?;
        tables.albums_users.push(like.clone());
        Ok(())
    }

    async fn delete_album_like(&self, album_id: &str, user_id: &str) -> StoreResult<bool> {
        let mut tables = self.write();
        let before = tables.albums_users.len();
        tables
            .albums_users
            .retain(|l| !(l.album_id == album_id && l.user_id == user_id));
        Ok(tables.albums_users.len() < before)
    }

    async fn count_album_likes(&self, album_id: &str) -> StoreResult<i64> {
        let total = self
            .read()
            .albums_users
            .iter()
            .filter(|l| l.album_id == album_id)
            .count();
        Ok(total as i64)
    }
}
