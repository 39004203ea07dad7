use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use entities::song::SongFilter;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::responses::catalog_response::{SongData, SongIdData, SongsData};
use crate::responses::ApiResponse;
use crate::validator::{SongPayload, ValidatedJson};

#[derive(Deserialize)]
pub struct SongQuery {
    title: Option<String>,
    performer: Option<String>,
}

pub async fn post_song(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SongPayload>,
) -> ApiResult<impl IntoResponse> {
    let song_id = state.songs.add_song(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::from_data(SongIdData { song_id }).with_message("Song added")),
    ))
}

pub async fn get_songs(
    State(state): State<AppState>,
    Query(query): Query<SongQuery>,
) -> ApiResult<impl IntoResponse> {
    let filter = SongFilter::new(query.title, query.performer);
    let songs = state.songs.get_songs(&filter).await?;
    Ok(Json(ApiResponse::from_data(SongsData { songs })))
}

pub async fn get_song(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let song = state.songs.get_song_by_id(&song_id).await?;
    Ok(Json(ApiResponse::from_data(SongData { song })))
}

pub async fn put_song(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<SongPayload>,
) -> ApiResult<impl IntoResponse> {
    state.songs.edit_song_by_id(&song_id, payload.into()).await?;
    Ok(Json(ApiResponse::from_message("Song updated")))
}

pub async fn delete_song(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.songs.delete_song_by_id(&song_id).await?;
    Ok(Json(ApiResponse::from_message("Song deleted")))
}
