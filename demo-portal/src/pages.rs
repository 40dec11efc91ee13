use askama::Template;
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use cda_portal_axum::{AuthMember, CDA_LANDING_PATH, CDA_LOGIN_PATH, Permission};

/// A feature area of the portal
pub(crate) struct Area {
    pub(crate) path: &'static str,
    pub(crate) title: &'static str,
    /// Permission needed to manage the area, `None` for read-only areas
    pub(crate) manage: Option<Permission>,
}

pub(crate) static AREAS: [Area; 8] = [
    Area {
        path: "/gastos",
        title: "Gastos",
        manage: Some(Permission::ManageExpenses),
    },
    Area {
        path: "/calendario",
        title: "Calendario",
        manage: Some(Permission::ManageCalendar),
    },
    Area {
        path: "/cargos",
        title: "Cargos",
        manage: Some(Permission::ManagePositions),
    },
    Area {
        path: "/normas",
        title: "Normas",
        manage: Some(Permission::ManageRules),
    },
    Area {
        path: "/votaciones",
        title: "Votaciones",
        manage: Some(Permission::ManageVotes),
    },
    Area {
        path: "/documentos",
        title: "Documentos",
        manage: Some(Permission::ManageDocuments),
    },
    Area {
        path: "/estadisticas",
        title: "Estadisticas",
        manage: None,
    },
    Area {
        path: "/asistencias",
        title: "Asistencias",
        manage: None,
    },
];

struct AreaLink {
    path: &'static str,
    title: &'static str,
    can_manage: bool,
}

#[derive(Template)]
#[template(path = "index.j2")]
struct IndexTemplate<'a> {
    name: Option<&'a str>,
    login_path: &'a str,
    landing_path: &'a str,
}

#[derive(Template)]
#[template(path = "login.j2")]
struct LoginTemplate<'a> {
    landing_path: &'a str,
}

#[derive(Template)]
#[template(path = "dashboard.j2")]
struct DashboardTemplate<'a> {
    name: &'a str,
    position: Option<&'a str>,
    permissions: Vec<&'static str>,
    areas: Vec<AreaLink>,
}

#[derive(Template)]
#[template(path = "feature.j2")]
struct FeatureTemplate<'a> {
    title: &'a str,
    name: &'a str,
    can_manage: bool,
    landing_path: &'a str,
}

fn render(template: impl Template) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Page routes; the route guard sits in front of them in `main`
pub(crate) fn router() -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route(CDA_LOGIN_PATH.as_str(), get(login))
        .route("/dashboard", get(dashboard));

    for area in &AREAS {
        router = router.route(area.path, get(move |member: AuthMember| feature(area, member)));
    }
    router
}

async fn index(member: Option<AuthMember>) -> Response {
    render(IndexTemplate {
        name: member.as_ref().map(AuthMember::name),
        login_path: CDA_LOGIN_PATH.as_str(),
        landing_path: CDA_LANDING_PATH.as_str(),
    })
}

async fn login() -> Response {
    render(LoginTemplate {
        landing_path: CDA_LANDING_PATH.as_str(),
    })
}

async fn dashboard(member: AuthMember) -> Response {
    let areas = AREAS
        .iter()
        .map(|area| AreaLink {
            path: area.path,
            title: area.title,
            can_manage: area.manage.is_some_and(|p| member.can(p)),
        })
        .collect();

    render(DashboardTemplate {
        name: member.name(),
        position: member.position.as_deref(),
        permissions: member.permissions.iter().map(|p| p.as_str()).collect(),
        areas,
    })
}

async fn feature(area: &'static Area, member: AuthMember) -> Response {
    tracing::debug!(area = area.path, username = %member.username, "Feature page");
    render(FeatureTemplate {
        title: area.title,
        name: member.name(),
        can_manage: area.manage.is_some_and(|p| member.can(p)),
        landing_path: CDA_LANDING_PATH.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cda_portal_axum::PROTECTED_PATH_PREFIXES;

    #[test]
    fn test_every_area_is_protected() {
        for area in &AREAS {
            assert!(
                PROTECTED_PATH_PREFIXES.contains(&area.path),
                "{} has no guard prefix",
                area.path
            );
        }
    }

    #[test]
    fn test_dashboard_template_renders() {
        let html = DashboardTemplate {
            name: "Anna",
            position: Some("Tresorer"),
            permissions: vec!["gastos:manage"],
            areas: vec![AreaLink {
                path: "/gastos",
                title: "Gastos",
                can_manage: true,
            }],
        }
        .render()
        .unwrap();

        assert!(html.contains("Anna"));
        assert!(html.contains("gastos:manage"));
        assert!(html.contains("href=\"/gastos\""));
    }
}
