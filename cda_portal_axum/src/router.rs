//! Router for the portal's JSON endpoints

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::api;

/// Create the router for the login, logout, session and seeding endpoints
///
/// Mount it under `/api`:
/// - `POST {mount}/login`
/// - `POST {mount}/logout`
/// - `GET {mount}/session`
/// - `POST {mount}/create-default-users`
pub fn portal_api_router() -> Router {
    portal_api_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`portal_api_router`] without the HTTP tracing layer
pub fn portal_api_router_no_trace() -> Router {
    Router::new()
        .route("/login", post(api::login))
        .route("/logout", post(api::logout))
        .route("/session", get(api::session))
        .route("/create-default-users", post(api::create_default_users))
}
