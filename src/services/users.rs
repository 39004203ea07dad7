use std::sync::Arc;

use entities::user::User;
use log::{info, warn};
use queries::{Store, StoreError};

use crate::error::{ApiResult, ClientError};
use crate::services::prefixed_id;

fn username_taken() -> ClientError {
    ClientError::Invariant("Failed to add user. Username is already taken".to_string())
}

fn invalid_credentials() -> ClientError {
    ClientError::Authentication("The credentials you provided are wrong".to_string())
}

/// Registration and credential checks.
#[derive(Clone)]
pub struct UsersService {
    store: Arc<dyn Store>,
    hash_cost: u32,
}

impl UsersService {
    pub fn new(store: Arc<dyn Store>, hash_cost: u32) -> Self {
        Self { store, hash_cost }
    }

    pub async fn add_user(&self, username: &str, password: &str, fullname: &str) -> ApiResult<String> {
        if self.store.username_exists(username).await? {
            return Err(username_taken().into());
        }
        let password = password.to_string();
        let cost = self.hash_cost;
        let digest = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        let user = User {
            id: prefixed_id("user"),
            username: username.to_string(),
            password: digest,
            fullname: fullname.to_string(),
        };
        match self.store.insert_user(&user).await {
            Ok(()) => {
                info!("Registered user {}", user.id);
                Ok(user.id)
            }
            // Lost a race against another registration of the same name.
            Err(StoreError::UniqueViolation(_)) => Err(username_taken().into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Returns the user id when the password matches. Unknown users and wrong
    /// passwords fail the same way.
    pub async fn verify_user_credential(&self, username: &str, password: &str) -> ApiResult<String> {
        let user = self
            .store
            .get_user_by_username(username)
            .await?
            .ok_or_else(invalid_credentials)?;
        let password = password.to_string();
        let digest = user.password.clone();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest))
            .await?
            .unwrap_or_else(|err| {
                warn!("Unreadable password digest for {}: {}", user.id, err);
                false
            });
        if !matches {
            return Err(invalid_credentials().into());
        }
        Ok(user.id)
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> ApiResult<User> {
        self.store
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| ClientError::NotFound("User not found".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok};
    use queries::MemoryStore;

    use super::*;
    use crate::error::ApiError;
    use crate::services::stale_store::StalePrecheckStore;

    fn service() -> UsersService {
        UsersService::new(Arc::new(MemoryStore::new()), 4)
    }

    #[tokio::test]
    async fn duplicate_username_keeps_first_user() {
        let users = service();
        let first = assert_ok!(users.add_user("dicoding", "secret", "Dicoding Indonesia").await);
        let err = assert_err!(users.add_user("dicoding", "other", "Someone Else").await);
        assert!(matches!(err, ApiError::Client(ClientError::Invariant(_))));

        let stored = assert_ok!(users.get_user_by_id(&first).await);
        assert_eq!(stored.fullname, "Dicoding Indonesia");
        assert_ne!(stored.password, "secret");
        assert_eq!(
            assert_ok!(users.verify_user_credential("dicoding", "secret").await),
            first
        );
    }

    #[tokio::test]
    async fn racing_registration_loses_cleanly() {
        let users = UsersService::new(Arc::new(StalePrecheckStore::new()), 4);
        let first = assert_ok!(users.add_user("dicoding", "secret", "Dicoding Indonesia").await);
        // The pre-check passes again, the unique key has the final say.
        let err = assert_err!(users.add_user("dicoding", "other", "Someone Else").await);
        assert!(matches!(err, ApiError::Client(ClientError::Invariant(_))));
        assert_eq!(
            assert_ok!(users.verify_user_credential("dicoding", "secret").await),
            first
        );
    }

    #[tokio::test]
    async fn credential_failures_look_alike() {
        let users = service();
        assert_ok!(users.add_user("dicoding", "secret", "Dicoding Indonesia").await);
        let wrong_password = assert_err!(users.verify_user_credential("dicoding", "nope").await);
        let unknown_user = assert_err!(users.verify_user_credential("nobody", "secret").await);
        assert_eq!(wrong_password.client_error(), unknown_user.client_error());
        assert!(matches!(
            wrong_password.client_error(),
            Some(ClientError::Authentication(_))
        ));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let err = assert_err!(service().get_user_by_id("user-missing").await);
        assert!(matches!(err, ApiError::Client(ClientError::NotFound(_))));
    }
}
