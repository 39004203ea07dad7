use std::sync::Arc;

use entities::playlist::{Playlist, PlaylistSong, PlaylistSummary, PlaylistWithSongs};
use log::warn;
use queries::{Store, StoreError};

use crate::error::{ApiError, ApiResult, ClientError};
use crate::services::{prefixed_id, random_id, CollaborationsService};

fn playlist_not_found() -> ClientError {
    ClientError::NotFound("Playlist not found".to_string())
}

fn not_owner() -> ClientError {
    ClientError::Authorization("You are not allowed to access this resource".to_string())
}

/// Playlists, their songs and the access rules around them.
#[derive(Clone)]
pub struct PlaylistsService {
    store: Arc<dyn Store>,
    collaborations: CollaborationsService,
}

impl PlaylistsService {
    pub fn new(store: Arc<dyn Store>, collaborations: CollaborationsService) -> Self {
        Self {
            store,
            collaborations,
        }
    }

    pub async fn add_playlist(&self, name: &str, owner: &str) -> ApiResult<String> {
        let playlist = Playlist {
            id: prefixed_id("playlist"),
            name: name.to_string(),
            owner: owner.to_string(),
        };
        match self.store.insert_playlist(&playlist).await {
            Ok(()) => Ok(playlist.id),
            Err(StoreError::ForeignKeyViolation(_)) => {
                Err(ClientError::NotFound("User not found".to_string()).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_playlists(&self, user_id: &str) -> ApiResult<Vec<PlaylistSummary>> {
        Ok(self.store.get_playlists_for_user(user_id).await?)
    }

    pub async fn get_playlist_with_songs(&self, playlist_id: &str) -> ApiResult<PlaylistWithSongs> {
        let summary = self
            .store
            .get_playlist_summary(playlist_id)
            .await?
            .ok_or_else(playlist_not_found)?;
        let songs = self.store.get_songs_by_playlist_id(playlist_id).await?;
        Ok(PlaylistWithSongs::from_summary(summary, songs))
    }

    pub async fn delete_playlist_by_id(&self, playlist_id: &str) -> ApiResult<()> {
        if !self.store.delete_playlist_by_id(playlist_id).await? {
            return Err(playlist_not_found().into());
        }
        Ok(())
    }

    pub async fn add_song_to_playlist(&self, playlist_id: &str, song_id: &str) -> ApiResult<()> {
        if self.store.get_song_by_id(song_id).await?.is_none() {
            return Err(ClientError::NotFound("Song not found".to_string()).into());
        }
        let entry = PlaylistSong {
            id: random_id(),
            playlist_id: playlist_id.to_string(),
            song_id: song_id.to_string(),
        };
        match self.store.insert_playlist_song(&entry).await {
            Ok(()) => Ok(()),
            Err(StoreError::UniqueViolation(_)) => Err(ClientError::Invariant(
                "Song is already in the playlist".to_string(),
            )
            .into()),
            Err(StoreError::ForeignKeyViolation(_)) => Err(playlist_not_found().into()),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete_song_from_playlist(&self, playlist_id: &str, song_id: &str) -> ApiResult<()> {
        if !self.store.delete_playlist_song(playlist_id, song_id).await? {
            return Err(ClientError::NotFound("Song is not in the playlist".to_string()).into());
        }
        Ok(())
    }

    /// Succeeds only for the playlist's owner. A missing playlist is
    /// NotFound, any other user gets Authorization.
    pub async fn verify_playlist_owner(&self, playlist_id: &str, user_id: &str) -> ApiResult<()> {
        let playlist = self
            .store
            .get_playlist_by_id(playlist_id)
            .await?
            .ok_or_else(playlist_not_found)?;
        if playlist.owner != user_id {
            return Err(not_owner().into());
        }
        Ok(())
    }

    /// Owner or collaborator. NotFound is returned as is; when the caller
    /// is not the owner the collaboration registry decides, and without a
    /// collaboration the ownership failure is what the caller sees.
    pub async fn verify_playlist_access(&self, playlist_id: &str, user_id: &str) -> ApiResult<()> {
        let ownership = match self.verify_playlist_owner(playlist_id, user_id).await {
            Ok(()) => return Ok(()),
            Err(ApiError::Client(err @ ClientError::Authorization(_))) => err,
            Err(err) => return Err(err),
        };
        match self
            .collaborations
            .collaboration_exists(playlist_id, user_id)
            .await
        {
            Ok(true) => Ok(()),
            Ok(false) => Err(ownership.into()),
            Err(err) => {
                warn!(
                    "Collaboration check for playlist {} failed: {}",
                    playlist_id, err
                );
                Err(ownership.into())
            }
        }
    }
}
