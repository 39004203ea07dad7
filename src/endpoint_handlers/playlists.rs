use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::Utc;
use entities::activity::ActivityAction;
use log::error;

use crate::app_state::AppState;
use crate::auth_middleware::AuthUser;
use crate::error::ApiResult;
use crate::responses::playlist_response::{
    ActivitiesData, PlaylistData, PlaylistIdData, PlaylistsData,
};
use crate::responses::ApiResponse;
use crate::validator::{parse_payload, PlaylistPayload, PlaylistSongPayload, ValidatedJson};

pub async fn post_playlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<PlaylistPayload>,
) -> ApiResult<impl IntoResponse> {
    let playlist_id = state.playlists.add_playlist(&payload.name, &user.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::from_data(PlaylistIdData { playlist_id }).with_message("Playlist added")),
    ))
}

pub async fn get_playlists(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let playlists = state.playlists.get_playlists(&user.id).await?;
    Ok(Json(ApiResponse::from_data(PlaylistsData { playlists })))
}

pub async fn delete_playlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(playlist_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state
        .playlists
        .verify_playlist_owner(&playlist_id, &user.id)
        .await?;
    state.playlists.delete_playlist_by_id(&playlist_id).await?;
    Ok(Json(ApiResponse::from_message("Playlist deleted")))
}

pub async fn post_playlist_song(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(playlist_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<PlaylistSongPayload>,
) -> ApiResult<impl IntoResponse> {
    state
        .playlists
        .verify_playlist_access(&playlist_id, &user.id)
        .await?;
    state
        .playlists
        .add_song_to_playlist(&playlist_id, &payload.song_id)
        .await?;
    record_activity(&state, &playlist_id, &payload.song_id, &user.id, ActivityAction::Add).await;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::from_message("Song added to playlist")),
    ))
}

pub async fn get_playlist_songs(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(playlist_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state
        .playlists
        .verify_playlist_access(&playlist_id, &user.id)
        .await?;
    let playlist = state.playlists.get_playlist_with_songs(&playlist_id).await?;
    Ok(Json(ApiResponse::from_data(PlaylistData { playlist })))
}

/// Access is checked before the body is read, so callers without access
/// get 403 whatever they send.
pub async fn delete_playlist_song(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(playlist_id): Path<String>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    state
        .playlists
        .verify_playlist_access(&playlist_id, &user.id)
        .await?;
    let payload: PlaylistSongPayload = parse_payload(&body)?;
    state
        .playlists
        .delete_song_from_playlist(&playlist_id, &payload.song_id)
        .await?;
    record_activity(
        &state,
        &playlist_id,
        &payload.song_id,
        &user.id,
        ActivityAction::Delete,
    )
    .await;
    Ok(Json(ApiResponse::from_message("Song removed from playlist")))
}

pub async fn get_playlist_activities(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(playlist_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state
        .playlists
        .verify_playlist_access(&playlist_id, &user.id)
        .await?;
    let activities = state.activities.get_activities(&playlist_id).await?;
    Ok(Json(ApiResponse::from_data(ActivitiesData {
        playlist_id,
        activities,
    })))
}

// The membership change already happened, a lost history entry does not undo it.
async fn record_activity(
    state: &AppState,
    playlist_id: &str,
    song_id: &str,
    user_id: &str,
    action: ActivityAction,
) {
    if let Err(err) = state
        .activities
        .record(playlist_id, song_id, user_id, action, Utc::now())
        .await
    {
        error!(
            "Failed to record {} of {} on playlist {}: {}",
            action, song_id, playlist_id, err
        );
    }
}
