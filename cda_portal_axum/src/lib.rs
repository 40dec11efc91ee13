//! Axum integration for the CDA 2026 portal session core
//!
//! Provides the [`route_guard`] middleware, the [`AuthMember`] extractor and
//! the JSON endpoints behind [`portal_api_router`].

mod api;
mod error;
mod middleware;
mod router;
mod session;

#[cfg(test)]
mod test_utils;

pub use error::{ApiError, IntoResponseError};
pub use middleware::route_guard;
pub use router::{portal_api_router, portal_api_router_no_trace};
pub use session::{AuthMember, AuthRedirect};

// Re-export what applications need from the core crate
pub use cda_portal::{
    CDA_LANDING_PATH, CDA_LOGIN_PATH, PROTECTED_PATH_PREFIXES, Permission, SessionUser,
    has_permission, init,
};
