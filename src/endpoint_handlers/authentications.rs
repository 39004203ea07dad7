use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::responses::user_response::{AccessTokenData, TokensData};
use crate::responses::ApiResponse;
use crate::validator::{LoginPayload, RefreshTokenPayload, ValidatedJson};

pub async fn post_authentication(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginPayload>,
) -> ApiResult<impl IntoResponse> {
    let issued = state
        .authentications
        .login(&payload.username, &payload.password)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::from_data(TokensData {
                access_token: issued.access_token,
                refresh_token: issued.refresh_token,
            })
            .with_message("Authentication added"),
        ),
    ))
}

pub async fn put_authentication(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenPayload>,
) -> ApiResult<impl IntoResponse> {
    let access_token = state.authentications.refresh(&payload.refresh_token).await?;
    Ok(Json(
        ApiResponse::from_data(AccessTokenData { access_token })
            .with_message("Access token refreshed"),
    ))
}

pub async fn delete_authentication(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenPayload>,
) -> ApiResult<impl IntoResponse> {
    state.authentications.logout(&payload.refresh_token).await?;
    Ok(Json(ApiResponse::from_message("Refresh token deleted")))
}
