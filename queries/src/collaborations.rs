use async_trait::async_trait;
use entities::collaboration::Collaboration;

use crate::{PgStore, StoreResult};

#[async_trait]
pub trait CollaborationStore: Send + Sync {
    async fn insert_collaboration(&self, collaboration: &Collaboration) -> StoreResult<()>;

    async fn delete_collaboration(&self, playlist_id: &str, user_id: &str) -> StoreResult<bool>;

    async fn collaboration_exists(&self, playlist_id: &str, user_id: &str) -> StoreResult<bool>;
}

#[async_trait]
impl CollaborationStore for PgStore {
    async fn insert_collaboration(&self, collaboration: &Collaboration) -> StoreResult<()> {
        sqlx::query("insert into collaborations (id, playlist_id, user_id) values ($1, $2, $3)")
            .bind(&collaboration.id)
            .bind(&collaboration.playlist_id)
            .bind(&collaboration.user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_collaboration(&self, playlist_id: &str, user_id: &str) -> StoreResult<bool> {
        let ret = sqlx::query("delete from collaborations where playlist_id = $1 and user_id = $2")
            .bind(playlist_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(ret.rows_affected() > 0)
    }

    async fn collaboration_exists(&self, playlist_id: &str, user_id: &str) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "select exists(select 1 from collaborations where playlist_id = $1 and user_id = $2)",
        )
        .bind(playlist_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
