use std::sync::Arc;

use entities::album::{Album, AlbumWithSongs};
use entities::album_like::AlbumLike;
use log::{debug, warn};
use queries::{Store, StoreError};

use crate::cache::{CacheLookup, CacheStore};
use crate::error::{ApiResult, ClientError};
use crate::services::{prefixed_id, random_id};

fn album_not_found() -> ClientError {
    ClientError::NotFound("Album not found".to_string())
}

fn already_liked() -> ClientError {
    ClientError::BadRequest("You have already liked this album".to_string())
}

pub fn like_cache_key(album_id: &str) -> String {
    format!("albumLike:{}", album_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSource {
    Cache,
    Computed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeCount {
    pub likes: i64,
    pub source: CountSource,
}

/// Album catalog plus the per-album like counter. The counter is cached
/// under `albumLike:{albumId}` and every like, unlike or album delete drops
/// that key; the next read recomputes it.
#[derive(Clone)]
pub struct AlbumsService {
    store: Arc<dyn Store>,
    cache: Arc<dyn CacheStore>,
}

impl AlbumsService {
    pub fn new(store: Arc<dyn Store>, cache: Arc<dyn CacheStore>) -> Self {
        Self { store, cache }
    }

    pub async fn add_album(&self, name: &str, year: i32) -> ApiResult<String> {
        let album = Album {
            id: prefixed_id("album"),
            name: name.to_string(),
            year,
            cover_url: None,
        };
        self.store.insert_album(&album).await?;
        Ok(album.id)
    }

    pub async fn get_albums(&self) -> ApiResult<Vec<Album>> {
        Ok(self.store.get_albums().await?)
    }

    pub async fn get_album_by_id(&self, album_id: &str) -> ApiResult<AlbumWithSongs> {
        let album = self
            .store
            .get_album_by_id(album_id)
            .await?
            .ok_or_else(album_not_found)?;
        let songs = self.store.get_songs_by_album_id(album_id).await?;
        Ok(AlbumWithSongs::from_album(album, songs))
    }

    pub async fn edit_album_by_id(&self, album_id: &str, name: &str, year: i32) -> ApiResult<()> {
        if !self.store.update_album(album_id, name, year).await? {
            return Err(album_not_found().into());
        }
        Ok(())
    }

    pub async fn update_album_cover(&self, album_id: &str, cover_url: &str) -> ApiResult<()> {
        if !self.store.update_album_cover(album_id, cover_url).await? {
            return Err(album_not_found().into());
        }
        Ok(())
    }

    pub async fn delete_album_by_id(&self, album_id: &str) -> ApiResult<()> {
        if !self.store.delete_album_by_id(album_id).await? {
            return Err(album_not_found().into());
        }
        self.cache.delete(&like_cache_key(album_id)).await?;
        Ok(())
    }

    pub async fn verify_album_exists(&self, album_id: &str) -> ApiResult<()> {
        self.store
            .get_album_by_id(album_id)
            .await?
            .ok_or_else(album_not_found)?;
        Ok(())
    }

    pub async fn like_album(&self, album_id: &str, user_id: &str) -> ApiResult<()> {
        self.verify_album_exists(album_id).await?;
        if self.store.album_like_exists(album_id, user_id).await? {
            return Err(already_liked().into());
        }
        let like = AlbumLike {
            id: random_id(),
            album_id: album_id.to_string(),
            user_id: user_id.to_string(),
        };
        match self.store.insert_album_like(&like).await {
            Ok(()) => {}
            // Two concurrent likes by the same user: the database keeps one.
            Err(StoreError::UniqueViolation(_)) => return Err(already_liked().into()),
            // The album or user disappeared after the checks above.
            Err(StoreError::ForeignKeyViolation(_)) => return Err(album_not_found().into()),
            Err(err) => return Err(err.into()),
        }
        self.cache.delete(&like_cache_key(album_id)).await?;
        Ok(())
    }

    pub async fn unlike_album(&self, album_id: &str, user_id: &str) -> ApiResult<()> {
        self.verify_album_exists(album_id).await?;
        if !self.store.delete_album_like(album_id, user_id).await? {
            return Err(ClientError::Invariant(
                "You have not liked this album".to_string(),
            )
            .into());
        }
        self.cache.delete(&like_cache_key(album_id)).await?;
        Ok(())
    }

    pub async fn get_like_count(&self, album_id: &str) -> ApiResult<LikeCount> {
        self.verify_album_exists(album_id).await?;
        let key = like_cache_key(album_id);
        if let CacheLookup::Hit(value) = self.cache.get(&key).await? {
            match value.parse::<i64>() {
                Ok(likes) => {
                    return Ok(LikeCount {
                        likes,
                        source: CountSource::Cache,
                    })
                }
                Err(err) => warn!("Ignoring cached like count {:?} for {}: {}", value, key, err),
            }
        }
        let likes = self.store.count_album_likes(album_id).await?;
        self.cache.set(&key, &likes.to_string()).await?;
        debug!("Cached {} likes under {}", likes, key);
        Ok(LikeCount {
            likes,
            source: CountSource::Computed,
        })
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok};
    use entities::song::Song;
    use entities::user::User;
    use pretty_assertions::assert_eq;
    use queries::{AlbumLikeStore, MemoryStore, SongStore, UserStore};

    use super::*;
    use crate::cache::MemoryCache;
    use crate::error::ApiError;
    use crate::services::stale_store::StalePrecheckStore;

    struct Fixture {
        albums: AlbumsService,
        store: Arc<MemoryStore>,
        cache: Arc<MemoryCache>,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(MemoryCache::new());
        for id in ["user-1", "user-2"] {
            assert_ok!(
                store
                    .insert_user(&User {
                        id: id.to_string(),
                        username: id.to_string(),
                        password: "digest".to_string(),
                        fullname: id.to_string(),
                    })
                    .await
            );
        }
        Fixture {
            albums: AlbumsService::new(store.clone(), cache.clone()),
            store,
            cache,
        }
    }

    fn computed(likes: i64) -> LikeCount {
        LikeCount {
            likes,
            source: CountSource::Computed,
        }
    }

    fn cached(likes: i64) -> LikeCount {
        LikeCount {
            likes,
            source: CountSource::Cache,
        }
    }

    #[tokio::test]
    async fn every_write_forces_a_recount() {
        let f = fixture().await;
        let album = assert_ok!(f.albums.add_album("Viva la Vida", 2008).await);

        assert_eq!(assert_ok!(f.albums.get_like_count(&album).await), computed(0));
        assert_eq!(assert_ok!(f.albums.get_like_count(&album).await), cached(0));

        assert_ok!(f.albums.like_album(&album, "user-1").await);
        assert_eq!(assert_ok!(f.albums.get_like_count(&album).await), computed(1));
        assert_eq!(assert_ok!(f.albums.get_like_count(&album).await), cached(1));

        assert_ok!(f.albums.like_album(&album, "user-2").await);
        assert_ok!(f.albums.unlike_album(&album, "user-1").await);
        assert_eq!(assert_ok!(f.albums.get_like_count(&album).await), computed(1));
    }

    #[tokio::test]
    async fn double_like_is_a_client_error() {
        let f = fixture().await;
        let album = assert_ok!(f.albums.add_album("Parachutes", 2000).await);
        assert_ok!(f.albums.like_album(&album, "user-1").await);
        let err = assert_err!(f.albums.like_album(&album, "user-1").await);
        assert!(matches!(err, ApiError::Client(ClientError::BadRequest(_))));
        assert_eq!(assert_ok!(f.store.count_album_likes(&album).await), 1);
    }

    #[tokio::test]
    async fn racing_like_loses_cleanly() {
        let store = Arc::new(StalePrecheckStore::new());
        assert_ok!(
            store
                .insert_user(&User {
                    id: "user-1".to_string(),
                    username: "dicoding".to_string(),
                    password: "digest".to_string(),
                    fullname: "Dicoding".to_string(),
                })
                .await
        );
        let albums = AlbumsService::new(store.clone(), Arc::new(MemoryCache::new()));
        let album = assert_ok!(albums.add_album("Parachutes", 2000).await);

        assert_ok!(albums.like_album(&album, "user-1").await);
        // The pre-check passes again, the unique key has the final say.
        let err = assert_err!(albums.like_album(&album, "user-1").await);
        assert!(matches!(err, ApiError::Client(ClientError::BadRequest(_))));
        assert_eq!(assert_ok!(store.count_album_likes(&album).await), 1);
        assert_eq!(assert_ok!(albums.get_like_count(&album).await), computed(1));
    }

    #[tokio::test]
    async fn unlike_without_like_is_invariant() {
        let f = fixture().await;
        let album = assert_ok!(f.albums.add_album("Parachutes", 2000).await);
        let err = assert_err!(f.albums.unlike_album(&album, "user-1").await);
        assert!(matches!(err, ApiError::Client(ClientError::Invariant(_))));
    }

    #[tokio::test]
    async fn missing_album_is_not_found() {
        let f = fixture().await;
        for err in [
            assert_err!(f.albums.like_album("album-missing", "user-1").await),
            assert_err!(f.albums.get_like_count("album-missing").await),
            assert_err!(f.albums.get_album_by_id("album-missing").await),
            assert_err!(f.albums.delete_album_by_id("album-missing").await),
            assert_err!(f.albums.edit_album_by_id("album-missing", "X", 2000).await),
        ] {
            assert!(matches!(err, ApiError::Client(ClientError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn garbage_in_cache_is_recomputed() {
        let f = fixture().await;
        let album = assert_ok!(f.albums.add_album("X&Y", 2005).await);
        assert_ok!(f.cache.set(&like_cache_key(&album), "lots").await);
        assert_eq!(assert_ok!(f.albums.get_like_count(&album).await), computed(0));
        assert_eq!(
            assert_ok!(f.cache.get(&like_cache_key(&album)).await),
            CacheLookup::Hit("0".to_string())
        );
    }

    #[tokio::test]
    async fn delete_drops_cached_count() {
        let f = fixture().await;
        let album = assert_ok!(f.albums.add_album("Ghost Stories", 2014).await);
        assert_ok!(f.albums.get_like_count(&album).await);
        assert_ok!(f.albums.delete_album_by_id(&album).await);
        assert_eq!(
            assert_ok!(f.cache.get(&like_cache_key(&album)).await),
            CacheLookup::Miss
        );
    }

    #[tokio::test]
    async fn album_lists_its_songs() {
        let f = fixture().await;
        let album = assert_ok!(f.albums.add_album("Ghost Stories", 2014).await);
        assert_ok!(
            f.store
                .insert_song(&Song {
                    id: "song-1".to_string(),
                    title: "Magic".to_string(),
                    year: 2014,
                    genre: "Pop".to_string(),
                    performer: "Coldplay".to_string(),
                    duration: Some(285),
                    album_id: Some(album.clone()),
                })
                .await
        );
        let found = assert_ok!(f.albums.get_album_by_id(&album).await);
        assert_eq!(found.songs.len(), 1);
        assert_eq!(found.songs[0].title, "Magic");
        assert_eq!(found.cover_url, None);
    }
}
