use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use log::info;
use serde::Serialize;

use crate::app_state::AppState;
use crate::auth_middleware::AuthUser;
use crate::error::ApiResult;
use crate::responses::ApiResponse;
use crate::validator::{ExportPlaylistPayload, ValidatedJson};

pub const EXPORT_PLAYLIST_QUEUE: &str = "export:playlist";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportPlaylistMessage<'a> {
    playlist_id: &'a str,
    target_email: &'a str,
}

pub async fn post_export_playlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(playlist_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ExportPlaylistPayload>,
) -> ApiResult<impl IntoResponse> {
    state
        .playlists
        .verify_playlist_owner(&playlist_id, &user.id)
        .await?;
    let message = serde_json::to_string(&ExportPlaylistMessage {
        playlist_id: &playlist_id,
        target_email: &payload.target_email,
    })?;
    state
        .producer
        .send_message(EXPORT_PLAYLIST_QUEUE, &message)
        .await?;
    info!("Queued export of playlist {}", playlist_id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::from_message("Your request is being processed")),
    ))
}
