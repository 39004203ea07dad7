use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::warn;

use crate::app_state::AppState;
use crate::error::ClientError;

/// Identity of the caller, inserted as a request extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    let Some(token) = token else {
        warn!("Missing bearer token for {}", request.uri().path());
        return ClientError::Authentication("Missing authentication".to_string()).into_response();
    };
    let Some(claims) = state.tokens.verify_access_token(token) else {
        warn!("Invalid access token for {}", request.uri().path());
        return ClientError::Authentication("Invalid access token".to_string()).into_response();
    };
    request.extensions_mut().insert(AuthUser { id: claims.id });
    next.run(request).await
}
