use async_trait::async_trait;

use crate::{PgStore, StoreResult};

/// Refresh tokens that are currently valid.
#[async_trait]
pub trait AuthenticationStore: Send + Sync {
    async fn insert_refresh_token(&self, token: &str) -> StoreResult<()>;

    async fn refresh_token_exists(&self, token: &str) -> StoreResult<bool>;

    async fn delete_refresh_token(&self, token: &str) -> StoreResult<bool>;
}

#[async_trait]
impl AuthenticationStore for PgStore {
    async fn insert_refresh_token(&self, token: &str) -> StoreResult<()> {
        sqlx::query("insert into authentications (token) values ($1)")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn refresh_token_exists(&self, token: &str) -> StoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("select exists(select 1 from authentications where token = $1)")
                .bind(token)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn delete_refresh_token(&self, token: &str) -> StoreResult<bool> {
        let ret = sqlx::query("delete from authentications where token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(ret.rows_affected() > 0)
    }
}
