use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use entities::song::SongDetails;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, ClientError};

/// Checks a deserialized payload before it reaches a service.
pub trait Validate {
    fn validate(&self) -> Result<(), ClientError>;
}

/// JSON body extractor. Malformed bodies and failed validation are both
/// reported as an invariant error.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ClientError::Invariant(rejection.body_text()))?;
        payload.validate()?;
        Ok(ValidatedJson(payload))
    }
}

/// Parses and validates a raw JSON body, for handlers that must authorize
/// the caller before looking at the payload.
pub fn parse_payload<T>(body: &[u8]) -> Result<T, ClientError>
where
    T: DeserializeOwned + Validate,
{
    let payload: T =
        serde_json::from_slice(body).map_err(|err| ClientError::Invariant(err.to_string()))?;
    payload.validate()?;
    Ok(payload)
}

fn required(field: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::Invariant(format!(
            "\"{}\" is not allowed to be empty",
            field
        )));
    }
    Ok(())
}

fn max_length(field: &str, value: &str, max: usize) -> Result<(), ClientError> {
    if value.chars().count() > max {
        return Err(ClientError::Invariant(format!(
            "\"{}\" length must be less than or equal to {} characters long",
            field, max
        )));
    }
    Ok(())
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl Validate for UserPayload {
    fn validate(&self) -> Result<(), ClientError> {
        required("username", &self.username)?;
        max_length("username", &self.username, 50)?;
        required("password", &self.password)?;
        required("fullname", &self.fullname)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

impl Validate for LoginPayload {
    fn validate(&self) -> Result<(), ClientError> {
        required("username", &self.username)?;
        required("password", &self.password)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RefreshTokenPayload {
    pub refresh_token: String,
}

impl Validate for RefreshTokenPayload {
    fn validate(&self) -> Result<(), ClientError> {
        required("refreshToken", &self.refresh_token)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct AlbumPayload {
    pub name: String,
    pub year: i32,
}

impl Validate for AlbumPayload {
    fn validate(&self) -> Result<(), ClientError> {
        required("name", &self.name)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SongPayload {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

impl Validate for SongPayload {
    fn validate(&self) -> Result<(), ClientError> {
        required("title", &self.title)?;
        required("genre", &self.genre)?;
        required("performer", &self.performer)?;
        if matches!(self.duration, Some(duration) if duration < 0) {
            return Err(ClientError::Invariant(
                "\"duration\" must be greater than or equal to 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<SongPayload> for SongDetails {
    fn from(payload: SongPayload) -> Self {
        SongDetails {
            title: payload.title,
            year: payload.year,
            genre: payload.genre,
            performer: payload.performer,
            duration: payload.duration,
            album_id: payload.album_id,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct PlaylistPayload {
    pub name: String,
}

impl Validate for PlaylistPayload {
    fn validate(&self) -> Result<(), ClientError> {
        required("name", &self.name)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlaylistSongPayload {
    pub song_id: String,
}

impl Validate for PlaylistSongPayload {
    fn validate(&self) -> Result<(), ClientError> {
        required("songId", &self.song_id)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CollaborationPayload {
    pub playlist_id: String,
    pub user_id: String,
}

impl Validate for CollaborationPayload {
    fn validate(&self) -> Result<(), ClientError> {
        required("playlistId", &self.playlist_id)?;
        required("userId", &self.user_id)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExportPlaylistPayload {
    pub target_email: String,
}

impl Validate for ExportPlaylistPayload {
    fn validate(&self) -> Result<(), ClientError> {
        required("targetEmail", &self.target_email)?;
        if !is_email(&self.target_email) {
            return Err(ClientError::Invariant(
                "\"targetEmail\" must be a valid email".to_string(),
            ));
        }
        Ok(())
    }
}
