use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use cda_portal::{evaluate_route, session_from_cookie_header};

/// Route guard applied to every page request
///
/// Anonymous requests under a protected prefix are sent to the login page and
/// members opening the login page are sent to the landing page, both with
/// `307 Temporary Redirect`. Anything else reaches the next handler unchanged.
///
/// ```no_run
/// use axum::{Router, middleware::from_fn, routing::get};
/// use cda_portal_axum::route_guard;
///
/// let app: Router = Router::new()
///     .route("/dashboard", get(|| async { "dashboard" }))
///     .layer(from_fn(route_guard));
/// ```
pub async fn route_guard(req: Request, next: Next) -> Response {
    let session = session_from_cookie_header(req.headers());
    let decision = evaluate_route(req.uri().path(), session.as_ref());

    match decision.redirect_target() {
        Some(target) => {
            tracing::debug!(
                path = %req.uri().path(),
                ?decision,
                redirect_to = target,
                "Route guard redirect"
            );
            Redirect::temporary(target).into_response()
        }
        None => next.run(req).await,
    }
}
