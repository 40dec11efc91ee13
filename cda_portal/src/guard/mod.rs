//! Per-request route guard decision
//!
//! The guard itself is stateless: given a path and the decoded session it
//! says whether the web layer should redirect or let the request through.

use crate::config::{CDA_LANDING_PATH, CDA_LOGIN_PATH};
use crate::session::SessionUser;

/// Route roots that require an authenticated member
///
/// Matching is by plain prefix. A new feature area has to be added here to be
/// protected.
pub const PROTECTED_PATH_PREFIXES: [&str; 9] = [
    "/dashboard",
    "/gastos",
    "/calendario",
    "/cargos",
    "/normas",
    "/votaciones",
    "/documentos",
    "/estadisticas",
    "/asistencias",
];

/// Outcome of the route guard for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Anonymous request to a protected path
    RedirectToLogin,
    /// Authenticated request to the login path
    RedirectToLanding,
    /// Hand the request to the next handler unchanged
    PassThrough,
}

impl GuardDecision {
    /// Where to redirect, `None` for [`GuardDecision::PassThrough`]
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectToLogin => Some(CDA_LOGIN_PATH.as_str()),
            GuardDecision::RedirectToLanding => Some(CDA_LANDING_PATH.as_str()),
            GuardDecision::PassThrough => None,
        }
    }
}

pub fn is_protected_path(path: &str) -> bool {
    PROTECTED_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Decide what to do with a request for `path`
pub fn evaluate_route(path: &str, session: Option<&SessionUser>) -> GuardDecision {
    decide(path, session.is_some(), CDA_LOGIN_PATH.as_str())
}

fn decide(path: &str, authenticated: bool, login_path: &str) -> GuardDecision {
    if !authenticated && is_protected_path(path) {
        return GuardDecision::RedirectToLogin;
    }

    if authenticated && path == login_path {
        return GuardDecision::RedirectToLanding;
    }

    GuardDecision::PassThrough
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionUser {
        SessionUser::new("u1", "anna")
    }

    #[test]
    fn test_anonymous_protected_paths_redirect_to_login() {
        for prefix in PROTECTED_PATH_PREFIXES {
            assert_eq!(
                evaluate_route(prefix, None),
                GuardDecision::RedirectToLogin,
                "{prefix} should be protected"
            );
        }
        assert_eq!(
            evaluate_route("/gastos/2026/03", None),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            evaluate_route("/calendario/abc-123", None),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_anonymous_unprotected_paths_pass() {
        for path in ["/", "/auth/login", "/auth/error", "/informacion", "/api/session"] {
            assert_eq!(evaluate_route(path, None), GuardDecision::PassThrough, "{path}");
        }
    }

    #[test]
    fn test_authenticated_login_redirects_to_landing() {
        let session = session();
        assert_eq!(
            evaluate_route("/auth/login", Some(&session)),
            GuardDecision::RedirectToLanding
        );
    }

    #[test]
    fn test_authenticated_requests_pass() {
        let session = session();
        for path in ["/", "/dashboard", "/gastos", "/auth/login/help", "/auth/error"] {
            assert_eq!(
                evaluate_route(path, Some(&session)),
                GuardDecision::PassThrough,
                "{path}"
            );
        }
    }

    #[test]
    fn test_prefix_matching_is_plain() {
        // Plain prefix: anything starting with a protected root is protected
        assert!(is_protected_path("/dashboards"));
        assert!(!is_protected_path("/Dashboard"));
        assert!(!is_protected_path("/api/dashboard"));
    }

    #[test]
    fn test_decide_with_custom_login_path() {
        assert_eq!(decide("/entrar", true, "/entrar"), GuardDecision::RedirectToLanding);
        assert_eq!(decide("/auth/login", true, "/entrar"), GuardDecision::PassThrough);
        assert_eq!(decide("/entrar", false, "/entrar"), GuardDecision::PassThrough);
    }

    #[test]
    fn test_redirect_targets() {
        assert_eq!(
            GuardDecision::RedirectToLogin.redirect_target(),
            Some(CDA_LOGIN_PATH.as_str())
        );
        assert_eq!(
            GuardDecision::RedirectToLanding.redirect_target(),
            Some(CDA_LANDING_PATH.as_str())
        );
        assert_eq!(GuardDecision::PassThrough.redirect_target(), None);
    }
}
