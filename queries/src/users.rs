use async_trait::async_trait;
use entities::user::User;

use crate::{PgStore, StoreResult};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: &User) -> StoreResult<()>;

    async fn username_exists(&self, username: &str) -> StoreResult<bool>;

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    async fn get_user_by_id(&self, user_id: &str) -> StoreResult<Option<User>>;
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        sqlx::query("insert into users (id, username, password, fullname) values ($1, $2, $3, $4)")
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.password)
            .bind(&user.fullname)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn username_exists(&self, username: &str) -> StoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("select exists(select 1 from users where username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("select * from users where username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn get_user_by_id(&self, user_id: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("select * from users where id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}
