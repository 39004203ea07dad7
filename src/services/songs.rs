use std::sync::Arc;

use entities::song::{Song, SongDetails, SongFilter, SongSummary};
use queries::{Store, StoreError};

use crate::error::{ApiError, ApiResult, ClientError};
use crate::services::prefixed_id;

fn song_not_found() -> ClientError {
    ClientError::NotFound("Song not found".to_string())
}

fn map_album_reference(err: StoreError) -> ApiError {
    match err {
        StoreError::ForeignKeyViolation(_) => {
            ClientError::NotFound("Album not found".to_string()).into()
        }
        err => err.into(),
    }
}

#[derive(Clone)]
pub struct SongsService {
    store: Arc<dyn Store>,
}

impl SongsService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn add_song(&self, details: SongDetails) -> ApiResult<String> {
        let song = details.into_song(prefixed_id("song"));
        self.store
            .insert_song(&song)
            .await
            .map_err(map_album_reference)?;
        Ok(song.id)
    }

    pub async fn get_songs(&self, filter: &SongFilter) -> ApiResult<Vec<SongSummary>> {
        Ok(self.store.get_songs(filter).await?)
    }

    pub async fn get_song_by_id(&self, song_id: &str) -> ApiResult<Song> {
        self.store
            .get_song_by_id(song_id)
            .await?
            .ok_or_else(|| song_not_found().into())
    }

    pub async fn edit_song_by_id(&self, song_id: &str, details: SongDetails) -> ApiResult<()> {
        let song = details.into_song(song_id.to_string());
        let updated = self
            .store
            .update_song(&song)
            .await
            .map_err(map_album_reference)?;
        if !updated {
            return Err(song_not_found().into());
        }
        Ok(())
    }

    pub async fn delete_song_by_id(&self, song_id: &str) -> ApiResult<()> {
        if !self.store.delete_song_by_id(song_id).await? {
            return Err(song_not_found().into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok};
    use pretty_assertions::assert_eq;
    use queries::MemoryStore;

    use super::*;

    fn details(title: &str, performer: &str) -> SongDetails {
        SongDetails {
            title: title.to_string(),
            year: 2008,
            genre: "Rock".to_string(),
            performer: performer.to_string(),
            duration: Some(240),
            album_id: None,
        }
    }

    async fn seeded() -> SongsService {
        let songs = SongsService::new(Arc::new(MemoryStore::new()));
        for (title, performer) in [
            ("Viva la Vida", "Coldplay"),
            ("Life in Technicolor", "Coldplay"),
            ("Technicolor Yawn", "Tame Impala"),
            ("Lost!", "Coldplay"),
        ] {
            assert_ok!(songs.add_song(details(title, performer)).await);
        }
        songs
    }

    async fn titles(songs: &SongsService, title: &str, performer: &str) -> Vec<String> {
        let filter = SongFilter::new(Some(title.to_string()), Some(performer.to_string()));
        let mut titles: Vec<String> = assert_ok!(songs.get_songs(&filter).await)
            .into_iter()
            .map(|song| song.title)
            .collect();
        titles.sort();
        titles
    }

    #[tokio::test]
    async fn search_filters_combine() {
        let songs = seeded().await;
        assert_eq!(titles(&songs, "", "").await.len(), 4);
        assert_eq!(
            titles(&songs, "TECHNICOLOR", "").await,
            vec!["Life in Technicolor", "Technicolor Yawn"]
        );
        assert_eq!(
            titles(&songs, "", "cold").await,
            vec!["Life in Technicolor", "Lost!", "Viva la Vida"]
        );
        assert_eq!(
            titles(&songs, "technicolor", "coldplay").await,
            vec!["Life in Technicolor"]
        );
        assert!(titles(&songs, "yellow", "coldplay").await.is_empty());
    }

    #[tokio::test]
    async fn unknown_album_reference_is_not_found() {
        let songs = SongsService::new(Arc::new(MemoryStore::new()));
        let mut song = details("Yellow", "Coldplay");
        song.album_id = Some("album-missing".to_string());
        let err = assert_err!(songs.add_song(song).await);
        assert!(matches!(err, ApiError::Client(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn blank_album_id_means_no_album() {
        let songs = SongsService::new(Arc::new(MemoryStore::new()));
        let mut song = details("Yellow", "Coldplay");
        song.album_id = Some(String::new());
        let id = assert_ok!(songs.add_song(song).await);
        assert_eq!(assert_ok!(songs.get_song_by_id(&id).await).album_id, None);
    }

    #[tokio::test]
    async fn edit_and_delete() {
        let songs = SongsService::new(Arc::new(MemoryStore::new()));
        let id = assert_ok!(songs.add_song(details("Yelow", "Coldplay")).await);
        assert_ok!(songs.edit_song_by_id(&id, details("Yellow", "Coldplay")).await);
        assert_eq!(assert_ok!(songs.get_song_by_id(&id).await).title, "Yellow");

        assert_ok!(songs.delete_song_by_id(&id).await);
        let err = assert_err!(songs.delete_song_by_id(&id).await);
        assert!(matches!(err, ApiError::Client(ClientError::NotFound(_))));
        let err = assert_err!(songs.edit_song_by_id(&id, details("Yellow", "Coldplay")).await);
        assert!(matches!(err, ApiError::Client(ClientError::NotFound(_))));
    }
}
