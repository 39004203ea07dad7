use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use log::{info, warn};
use tokio_util::io::ReaderStream;

use crate::app_state::AppState;
use crate::auth_middleware::AuthUser;
use crate::error::{ApiResult, ClientError};
use crate::responses::catalog_response::{AlbumData, AlbumIdData, AlbumsData, LikesData};
use crate::responses::ApiResponse;
use crate::services::albums::CountSource;
use crate::storage::content_type_for;
use crate::validator::{AlbumPayload, ValidatedJson};

pub const MAX_COVER_BYTES: usize = 512_000;

pub async fn post_album(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AlbumPayload>,
) -> ApiResult<impl IntoResponse> {
    let album_id = state.albums.add_album(&payload.name, payload.year).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::from_data(AlbumIdData { album_id }).with_message("Album added")),
    ))
}

pub async fn get_albums(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let albums = state.albums.get_albums().await?;
    Ok(Json(ApiResponse::from_data(AlbumsData { albums })))
}

pub async fn get_album(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let album = state.albums.get_album_by_id(&album_id).await?;
    Ok(Json(ApiResponse::from_data(AlbumData { album })))
}

pub async fn put_album(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AlbumPayload>,
) -> ApiResult<impl IntoResponse> {
    state
        .albums
        .edit_album_by_id(&album_id, &payload.name, payload.year)
        .await?;
    Ok(Json(ApiResponse::from_message("Album updated")))
}

pub async fn delete_album(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.albums.delete_album_by_id(&album_id).await?;
    Ok(Json(ApiResponse::from_message("Album deleted")))
}

pub async fn post_album_cover(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    state.albums.verify_album_exists(&album_id).await?;
    let mut cover = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("cover") {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(ClientError::Invariant("\"cover\" must be an image".to_string()).into());
        }
        let file_name = field.file_name().unwrap_or("cover").to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        cover = Some((file_name, bytes));
        break;
    }
    let (file_name, bytes) =
        cover.ok_or_else(|| ClientError::Invariant("\"cover\" is required".to_string()))?;
    if bytes.len() > MAX_COVER_BYTES {
        return Err(cover_too_large().into());
    }
    let stored_name = state.storage.write_file(&file_name, &bytes).await?;
    let cover_url = state.storage.public_url(&stored_name);
    state.albums.update_album_cover(&album_id, &cover_url).await?;
    info!("Album {} cover set to {}", album_id, cover_url);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::from_message("Cover uploaded")),
    ))
}

fn cover_too_large() -> ClientError {
    ClientError::PayloadTooLarge(format!(
        "Cover must not be larger than {} bytes",
        MAX_COVER_BYTES
    ))
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ClientError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return cover_too_large();
    }
    ClientError::Invariant(err.body_text())
}

pub async fn get_album_cover(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> ApiResult<Response> {
    let not_found = || ClientError::NotFound("Cover not found".to_string());
    let path = state.storage.resolve(&file_name).ok_or_else(not_found)?;
    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(err) => {
            warn!("Cover {} unavailable: {}", path.display(), err);
            return Err(not_found().into());
        }
    };
    let body = Body::from_stream(ReaderStream::new(file));
    Ok(([(header::CONTENT_TYPE, content_type_for(&path))], body).into_response())
}

pub async fn post_album_like(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(album_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.albums.like_album(&album_id, &user.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::from_message("Album liked")),
    ))
}

pub async fn delete_album_like(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(album_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.albums.unlike_album(&album_id, &user.id).await?;
    Ok(Json(ApiResponse::from_message("Album unliked")))
}

/// Like count. Served from the cache when possible, which is advertised
/// with `X-Data-Source: cache`.
pub async fn get_album_likes(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
) -> ApiResult<Response> {
    let count = state.albums.get_like_count(&album_id).await?;
    let mut response =
        Json(ApiResponse::from_data(LikesData { likes: count.likes })).into_response();
    if count.source == CountSource::Cache {
        response
            .headers_mut()
            .insert("x-data-source", HeaderValue::from_static("cache"));
    }
    Ok(response)
}
