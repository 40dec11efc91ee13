//! Central configuration for the cda_portal crate

use std::sync::LazyLock;

/// Path of the login page
///
/// Anonymous requests to protected paths are redirected here.
/// Default: "/auth/login"
pub static CDA_LOGIN_PATH: LazyLock<String> =
    LazyLock::new(|| std::env::var("CDA_LOGIN_PATH").unwrap_or_else(|_| "/auth/login".to_string()));

/// Default landing path for authenticated members
///
/// Authenticated requests to the login path are redirected here.
/// Default: "/dashboard"
pub static CDA_LANDING_PATH: LazyLock<String> = LazyLock::new(|| {
    std::env::var("CDA_LANDING_PATH").unwrap_or_else(|_| "/dashboard".to_string())
});

/// Password given to the seeded `admin` member
pub(crate) static CDA_DEFAULT_ADMIN_PASSWORD: LazyLock<String> = LazyLock::new(|| {
    std::env::var("CDA_DEFAULT_ADMIN_PASSWORD").unwrap_or_else(|_| "CDA2026admin!".to_string())
});

/// Password given to the seeded `miembro` member
pub(crate) static CDA_DEFAULT_MEMBER_PASSWORD: LazyLock<String> = LazyLock::new(|| {
    std::env::var("CDA_DEFAULT_MEMBER_PASSWORD").unwrap_or_else(|_| "CDA2026member!".to_string())
});
