use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Signs and checks the two token kinds. Access tokens expire after
/// `access_token_age` seconds, refresh tokens carry no expiry and are
/// only valid while stored.
#[derive(Clone)]
pub struct TokenManager {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_token_age: i64,
}

impl TokenManager {
    pub fn new(access_key: &str, refresh_key: &str, access_token_age: i64) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_key.as_bytes()),
            access_decoding: DecodingKey::from_secret(access_key.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_key.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(refresh_key.as_bytes()),
            access_token_age,
        }
    }

    pub fn generate_access_token(&self, user_id: &str) -> jsonwebtoken::errors::Result<String> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            id: user_id.to_string(),
            iat: now,
            exp: Some(now + self.access_token_age),
        };
        encode(&Header::default(), &claims, &self.access_encoding)
    }

    pub fn generate_refresh_token(&self, user_id: &str) -> jsonwebtoken::errors::Result<String> {
        let claims = TokenClaims {
            id: user_id.to_string(),
            iat: Utc::now().timestamp(),
            exp: None,
        };
        encode(&Header::default(), &claims, &self.refresh_encoding)
    }

    pub fn verify_access_token(&self, token: &str) -> Option<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        match decode::<TokenClaims>(token, &self.access_decoding, &validation) {
            Ok(data) => Some(data.claims),
            Err(err) => {
                debug!("Rejected access token: {}", err);
                None
            }
        }
    }

    pub fn verify_refresh_token(&self, token: &str) -> Option<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        match decode::<TokenClaims>(token, &self.refresh_decoding, &validation) {
            Ok(data) => Some(data.claims),
            Err(err) => {
                debug!("Rejected refresh token: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_none, assert_some};

    use super::*;

    fn manager() -> TokenManager {
        TokenManager::new("access-secret", "refresh-secret", 1800)
    }

    #[test]
    fn access_token_carries_user_id() {
        let tokens = manager();
        let token = tokens.generate_access_token("user-abc").unwrap();
        let claims = assert_some!(tokens.verify_access_token(&token));
        assert_eq!(claims.id, "user-abc");
        assert_eq!(claims.exp, Some(claims.iat + 1800));
    }

    #[test]
    fn token_kinds_are_not_interchangeable() {
        let tokens = manager();
        let refresh = tokens.generate_refresh_token("user-abc").unwrap();
        let access = tokens.generate_access_token("user-abc").unwrap();
        assert_none!(tokens.verify_access_token(&refresh));
        assert_none!(tokens.verify_refresh_token(&access));
        assert_eq!(
            assert_some!(tokens.verify_refresh_token(&refresh)).id,
            "user-abc"
        );
    }

    #[test]
    fn expired_access_token_is_rejected() {
        let tokens = TokenManager::new("access-secret", "refresh-secret", -120);
        let token = tokens.generate_access_token("user-abc").unwrap();
        assert_none!(tokens.verify_access_token(&token));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_none!(manager().verify_access_token("not.a.token"));
        assert_none!(manager().verify_refresh_token(""));
    }
}
