use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::json;

use cda_portal::{
    CoordinationError, SessionUser, login_core, logout_core, seed_default_members_core,
};

use super::error::{ApiError, IntoResponseError};
use super::session::AuthMember;

#[derive(Deserialize)]
pub(super) struct LoginRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<SecretString>,
}

/// `POST /api/login`
pub(super) async fn login(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable login body");
        ApiError::new(
            http::StatusCode::BAD_REQUEST,
            CoordinationError::MissingCredentials.to_string(),
        )
    })?;

    let username = request.username.unwrap_or_default();
    let password = request
        .password
        .unwrap_or_else(|| SecretString::from(String::new()));

    let (session, headers) = login_core(&username, password).await.into_response_error()?;

    Ok((headers, Json(json!({ "success": true, "user": session }))).into_response())
}

/// `POST /api/logout`
pub(super) async fn logout() -> Result<Response, ApiError> {
    let headers = logout_core().into_response_error()?;
    Ok((headers, Json(json!({ "success": true }))).into_response())
}

/// `GET /api/session`
pub(super) async fn session(member: Option<AuthMember>) -> Result<Response, ApiError> {
    let member = member.ok_or_else(ApiError::not_authenticated)?;
    let user = SessionUser::from(&member);

    Ok(Json(json!({ "user": user, "permissions": member.permissions })).into_response())
}

/// `POST /api/create-default-users`
pub(super) async fn create_default_users(
    caller: Option<AuthMember>,
) -> Result<Response, ApiError> {
    let caller = caller.as_ref().map(SessionUser::from);
    let seeded = seed_default_members_core(caller.as_ref())
        .await
        .into_response_error()?;

    Ok(Json(json!({ "success": true, "users": seeded })).into_response())
}
