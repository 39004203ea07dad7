use std::sync::Arc;

use log::info;
use queries::Store;

use crate::error::{ApiResult, ClientError};
use crate::services::UsersService;
use crate::token_manager::TokenManager;

fn invalid_refresh_token() -> ClientError {
    ClientError::Invariant("Refresh token is not valid".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Login, access token refresh and logout. A refresh token is only honoured
/// while it is stored.
#[derive(Clone)]
pub struct AuthenticationsService {
    store: Arc<dyn Store>,
    users: UsersService,
    tokens: TokenManager,
}

impl AuthenticationsService {
    pub fn new(store: Arc<dyn Store>, users: UsersService, tokens: TokenManager) -> Self {
        Self {
            store,
            users,
            tokens,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> ApiResult<IssuedTokens> {
        let user_id = self.users.verify_user_credential(username, password).await?;
        let access_token = self.tokens.generate_access_token(&user_id)?;
        let refresh_token = self.tokens.generate_refresh_token(&user_id)?;
        self.store.insert_refresh_token(&refresh_token).await?;
        info!("User {} logged in", user_id);
        Ok(IssuedTokens {
            access_token,
            refresh_token,
        })
    }

    /// Issues a new access token for a stored refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> ApiResult<String> {
        self.verify_refresh_token_stored(refresh_token).await?;
        let claims = self
            .tokens
            .verify_refresh_token(refresh_token)
            .ok_or_else(invalid_refresh_token)?;
        Ok(self.tokens.generate_access_token(&claims.id)?)
    }

    pub async fn logout(&self, refresh_token: &str) -> ApiResult<()> {
        self.verify_refresh_token_stored(refresh_token).await?;
        self.store.delete_refresh_token(refresh_token).await?;
        Ok(())
    }

    async fn verify_refresh_token_stored(&self, refresh_token: &str) -> ApiResult<()> {
        if !self.store.refresh_token_exists(refresh_token).await? {
            return Err(invalid_refresh_token().into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok, assert_some};
    use queries::MemoryStore;

    use super::*;
    use crate::error::ApiError;

    fn service() -> (AuthenticationsService, TokenManager) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let tokens = TokenManager::new("access", "refresh", 1800);
        let users = UsersService::new(store.clone(), 4);
        (
            AuthenticationsService::new(store, users, tokens.clone()),
            tokens,
        )
    }

    #[tokio::test]
    async fn refresh_token_lifecycle() {
        let (auth, tokens) = service();
        let user_id = assert_ok!(auth.users.add_user("dicoding", "secret", "Dicoding").await);
        let issued = assert_ok!(auth.login("dicoding", "secret").await);
        assert_eq!(
            assert_some!(tokens.verify_access_token(&issued.access_token)).id,
            user_id
        );

        let access = assert_ok!(auth.refresh(&issued.refresh_token).await);
        assert_eq!(assert_some!(tokens.verify_access_token(&access)).id, user_id);

        assert_ok!(auth.logout(&issued.refresh_token).await);
        let err = assert_err!(auth.refresh(&issued.refresh_token).await);
        assert!(matches!(err, ApiError::Client(ClientError::Invariant(_))));
        let err = assert_err!(auth.logout(&issued.refresh_token).await);
        assert!(matches!(err, ApiError::Client(ClientError::Invariant(_))));
    }

    #[tokio::test]
    async fn unsigned_stored_token_is_rejected() {
        let (auth, _) = service();
        assert_ok!(auth.store.insert_refresh_token("forged").await);
        let err = assert_err!(auth.refresh("forged").await);
        assert!(matches!(err, ApiError::Client(ClientError::Invariant(_))));
    }

    #[tokio::test]
    async fn wrong_password_does_not_issue_tokens() {
        let (auth, _) = service();
        assert_ok!(auth.users.add_user("dicoding", "secret", "Dicoding").await);
        let err = assert_err!(auth.login("dicoding", "guess").await);
        assert!(matches!(err, ApiError::Client(ClientError::Authentication(_))));
    }
}
