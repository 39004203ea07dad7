use async_trait::async_trait;
use entities::album_like::AlbumLike;

use crate::{PgStore, StoreResult};

#[async_trait]
pub trait AlbumLikeStore: Send + Sync {
    async fn album_like_exists(&self, album_id: &str, user_id: &str) -> StoreResult<bool>;

    async fn insert_album_like(&self, like: &AlbumLike) -> StoreResult<()>;

    async fn delete_album_like(&self, album_id: &str, user_id: &str) -> StoreResult<bool>;

    async fn count_album_likes(&self, album_id: &str) -> StoreResult<i64>;
}

#[async_trait]
impl AlbumLikeStore for PgStore {
    async fn album_like_exists(&self, album_id: &str, user_id: &str) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "select exists(select 1 from albums_users where album_id = $1 and user_id = $2)",
        )
        .bind(album_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn insert_album_like(&self, like: &AlbumLike) -> StoreResult<()> {
        sqlx::query("insert into albums_users (id, album_id, user_id) values ($1, $2, $3)")
            .bind(&like.id)
            .bind(&like.album_id)
            .bind(&like.user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_album_like(&self, album_id: &str, user_id: &str) -> StoreResult<bool> {
        let ret = sqlx::query("delete from albums_users where album_id = $1 and user_id = $2")
            .bind(album_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(ret.rows_affected() > 0)
    }

    async fn count_album_likes(&self, album_id: &str) -> StoreResult<i64> {
        let total: i64 = sqlx::query_scalar("select count(id) from albums_users where album_id = $1")
            .bind(album_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
