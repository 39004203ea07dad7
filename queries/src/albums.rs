use async_trait::async_trait;
use entities::album::Album;

use crate::{PgStore, StoreResult};

#[async_trait]
pub trait AlbumStore: Send + Sync {
    async fn insert_album(&self, album: &Album) -> StoreResult<()>;

    async fn get_albums(&self) -> StoreResult<Vec<Album>>;

    async fn get_album_by_id(&self, album_id: &str) -> StoreResult<Option<Album>>;

    /// Returns false when no album has the given id.
    async fn update_album(&self, album_id: &str, name: &str, year: i32) -> StoreResult<bool>;

    async fn update_album_cover(&self, album_id: &str, cover_url: &str) -> StoreResult<bool>;

    /// Songs of the album keep existing with their album reference cleared,
    /// likes of the album are deleted.
    async fn delete_album_by_id(&self, album_id: &str) -> StoreResult<bool>;
}

#[async_trait]
impl AlbumStore for PgStore {
    async fn insert_album(&self, album: &Album) -> StoreResult<()> {
        sqlx::query("insert into albums (id, name, year, cover_url) values ($1, $2, $3, $4)")
            .bind(&album.id)
            .bind(&album.name)
            .bind(album.year)
            .bind(&album.cover_url)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_albums(&self) -> StoreResult<Vec<Album>> {
        let albums = sqlx::query_as::<_, Album>("select * from albums")
            .fetch_all(&self.pool)
            .await?;
        Ok(albums)
    }

    async fn get_album_by_id(&self, album_id: &str) -> StoreResult<Option<Album>> {
        let album = sqlx::query_as::<_, Album>("select * from albums where id = $1")
            .bind(album_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(album)
    }

    async fn update_album(&self, album_id: &str, name: &str, year: i32) -> StoreResult<bool> {
        let ret = sqlx::query("update albums set name = $1, year = $2 where id = $3")
            .bind(name)
            .bind(year)
            .bind(album_id)
            .execute(&self.pool)
            .await?;
        Ok(ret.rows_affected() > 0)
    }

    async fn update_album_cover(&self, album_id: &str, cover_url: &str) -> StoreResult<bool> {
        let ret = sqlx::query("update albums set cover_url = $1 where id = $2")
            .bind(cover_url)
            .bind(album_id)
            .execute(&self.pool)
            .await?;
        Ok(ret.rows_affected() > 0)
    }

    async fn delete_album_by_id(&self, album_id: &str) -> StoreResult<bool> {
        let ret = sqlx::query("delete from albums where id = $1")
            .bind(album_id)
            .execute(&self.pool)
            .await?;
        Ok(ret.rows_affected() > 0)
    }
}
