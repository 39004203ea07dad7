use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::responses::user_response::{UserData, UserIdData};
use crate::responses::ApiResponse;
use crate::validator::{UserPayload, ValidatedJson};

pub async fn post_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> ApiResult<impl IntoResponse> {
    let user_id = state
        .users
        .add_user(&payload.username, &payload.password, &payload.fullname)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::from_data(UserIdData { user_id }).with_message("User added")),
    ))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let user = state.users.get_user_by_id(&user_id).await?;
    Ok(Json(ApiResponse::from_data(UserData { user })))
}
