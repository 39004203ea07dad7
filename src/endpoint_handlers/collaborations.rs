use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::auth_middleware::AuthUser;
use crate::error::ApiResult;
use crate::responses::playlist_response::CollaborationIdData;
use crate::responses::ApiResponse;
use crate::validator::{CollaborationPayload, ValidatedJson};

/// Only the playlist owner may add or remove collaborators.
pub async fn post_collaboration(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<CollaborationPayload>,
) -> ApiResult<impl IntoResponse> {
    state
        .playlists
        .verify_playlist_owner(&payload.playlist_id, &user.id)
        .await?;
    let collaboration_id = state
        .collaborations
        .add_collaboration(&payload.playlist_id, &payload.user_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::from_data(CollaborationIdData { collaboration_id })
                .with_message("Collaboration added"),
        ),
    ))
}

pub async fn delete_collaboration(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<CollaborationPayload>,
) -> ApiResult<impl IntoResponse> {
    state
        .playlists
        .verify_playlist_owner(&payload.playlist_id, &user.id)
        .await?;
    state
        .collaborations
        .delete_collaboration(&payload.playlist_id, &payload.user_id)
        .await?;
    Ok(Json(ApiResponse::from_message("Collaboration deleted")))
}
