use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use http::{Method, StatusCode, request::Parts};

use cda_portal::{
    CDA_LOGIN_PATH, Permission, SessionUser, permissions_for, resolve_current_session,
};

pub struct AuthRedirect {
    method: Method,
}

impl AuthRedirect {
    fn new(method: Method) -> Self {
        Self { method }
    }

    fn into_response_with_method(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", CDA_LOGIN_PATH.as_str());
            Redirect::temporary(CDA_LOGIN_PATH.as_str()).into_response()
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        self.into_response_with_method()
    }
}

/// The member behind the request, available as an Axum extractor
///
/// Extraction decodes the session cookie and resolves the member's
/// permissions once. Without a usable session, GET requests are redirected
/// to the login page and other methods get `401 Unauthorized`. Use
/// `Option<AuthMember>` where anonymous access is allowed.
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use cda_portal_axum::{AuthMember, Permission};
///
/// async fn expenses(member: AuthMember) -> String {
///     if member.can(Permission::ManageExpenses) {
///         format!("{} can manage expenses", member.username)
///     } else {
///         "read only".to_string()
///     }
/// }
///
/// let app: Router = Router::new().route("/gastos", get(expenses));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthMember {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub position: Option<String>,
    /// Every permission the member holds, in token order
    pub permissions: Vec<Permission>,
}

impl AuthMember {
    pub fn can(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Name to greet the member with
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

impl From<SessionUser> for AuthMember {
    fn from(session_user: SessionUser) -> Self {
        let permissions = permissions_for(Some(&session_user));
        AuthMember {
            id: session_user.id,
            username: session_user.username,
            display_name: session_user.display_name,
            role: session_user.role,
            position: session_user.position,
            permissions,
        }
    }
}

impl From<&AuthMember> for SessionUser {
    fn from(member: &AuthMember) -> Self {
        SessionUser {
            id: member.id.clone(),
            username: member.username.clone(),
            display_name: member.display_name.clone(),
            role: member.role.clone(),
            position: member.position.clone(),
        }
    }
}

impl<S> FromRequestParts<S> for AuthMember
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        match resolve_current_session(&parts.headers).await {
            Some(session_user) => Ok(AuthMember::from(session_user)),
            None => {
                tracing::debug!(path = %parts.uri.path(), "No usable session cookie");
                Err(AuthRedirect::new(parts.method.clone()))
            }
        }
    }
}

impl<S> OptionalFromRequestParts<S> for AuthMember
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthMember as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cda_portal::{ROLE_ADMIN, ROLE_MEMBER, SESSION_COOKIE_NAME, encode_session};
    use http::{Request, header::COOKIE};

    fn parts_with_cookie(method: Method, cookie: Option<String>) -> Parts {
        let mut builder = Request::builder().method(method).uri("/gastos");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    fn treasurer() -> SessionUser {
        let mut user = SessionUser::new("m-7", "jordi");
        user.display_name = Some("Jordi Ferrer".to_string());
        user.role = Some(ROLE_MEMBER.to_string());
        user.position = Some("Tresorer".to_string());
        user
    }

    #[test]
    fn test_from_session_user_resolves_permissions() {
        let member = AuthMember::from(treasurer());

        assert_eq!(member.id, "m-7");
        assert_eq!(member.name(), "Jordi Ferrer");
        assert_eq!(
            member.permissions,
            vec![Permission::ManagePositions, Permission::ManageExpenses]
        );
        assert!(member.can(Permission::ManageExpenses));
        assert!(!member.can(Permission::ManageConfig));
    }

    #[test]
    fn test_admin_member_holds_everything() {
        let mut user = SessionUser::new("a-1", "admin");
        user.role = Some(ROLE_ADMIN.to_string());

        let member = AuthMember::from(user);
        assert_eq!(member.permissions, Permission::ALL.to_vec());
        assert_eq!(member.name(), "admin");
    }

    #[test]
    fn test_round_trip_to_session_user() {
        let original = treasurer();
        let member = AuthMember::from(original.clone());
        assert_eq!(SessionUser::from(&member), original);
    }

    #[test]
    fn test_auth_redirect_into_response_with_method() {
        let response = AuthRedirect::new(Method::GET).into_response_with_method();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(http::header::LOCATION).unwrap(),
            CDA_LOGIN_PATH.as_str()
        );

        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let response = AuthRedirect::new(method).into_response_with_method();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn test_extract_from_cookie() {
        let cookie = format!(
            "theme=dark; {}={}",
            *SESSION_COOKIE_NAME,
            encode_session(&treasurer())
        );
        let mut parts = parts_with_cookie(Method::GET, Some(cookie));

        let member = <AuthMember as FromRequestParts<()>>::from_request_parts(&mut parts, &())
            .await
            .unwrap_or_else(|_| panic!("Expected a member"));
        assert_eq!(member.username, "jordi");
    }

    #[tokio::test]
    async fn test_extract_without_cookie_is_rejected() {
        let mut parts = parts_with_cookie(Method::POST, None);
        let rejection = <AuthMember as FromRequestParts<()>>::from_request_parts(&mut parts, &())
            .await
            .err()
            .expect("Expected a rejection");
        assert_eq!(
            rejection.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_optional_extract_with_garbage_cookie() {
        let cookie = format!("{}=%7Bnot%20json", *SESSION_COOKIE_NAME);
        let mut parts = parts_with_cookie(Method::GET, Some(cookie));

        let member =
            <AuthMember as OptionalFromRequestParts<()>>::from_request_parts(&mut parts, &())
                .await
                .unwrap_or_else(|_| panic!("Optional extraction never rejects"));
        assert_eq!(member, None);
    }
}
