//! # Route Authorizer
//!
//! Maps (current session, requested path) to a navigation outcome.
//! Callers must evaluate it on every navigation; the session can change
//! between two requests.

use crate::models::{Role, SessionUser};

pub const LANDING_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/signin";
pub const SIGN_UP_PATH: &str = "/signup";

/// A recognised destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    SignIn,
    SignUp,
    Dashboard(Role),
}

impl Route {
    /// Parses a request path. Query strings must already be stripped;
    /// one trailing slash is ignored. Returns `None` for anything unknown.
    pub fn parse(path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        match path {
            LANDING_PATH => Some(Route::Landing),
            SIGN_IN_PATH => Some(Route::SignIn),
            SIGN_UP_PATH => Some(Route::SignUp),
            other => {
                let segment = other.strip_prefix('/')?;
                segment.parse::<Role>().ok().map(Route::Dashboard)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Landing => "landing",
            Route::SignIn => "signin",
            Route::SignUp => "signup",
            Route::Dashboard(_) => "dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(String),
}

impl Navigation {
    fn redirect(path: impl Into<String>) -> Self {
        Navigation::Redirect(path.into())
    }
}

/// Decides whether `path` may be rendered for `session`.
///
/// * unknown paths go to `/`
/// * signed-in users never see the public pages; they land on `/{role}`
/// * a dashboard renders only for its own role, everyone else goes to `/signin`
pub fn authorize(session: Option<&SessionUser>, path: &str) -> Navigation {
    let Some(route) = Route::parse(path) else {
        return Navigation::redirect(LANDING_PATH);
    };

    match (route, session) {
        (Route::Landing | Route::SignIn | Route::SignUp, Some(user)) => {
            Navigation::redirect(user.role.home_path())
        }
        (Route::Landing | Route::SignIn | Route::SignUp, None) => Navigation::Render(route),
        (Route::Dashboard(role), Some(user)) if user.role == role => Navigation::Render(route),
        (Route::Dashboard(_), _) => Navigation::redirect(SIGN_IN_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> SessionUser {
        SessionUser {
            id: "s1".into(),
            name: "Test".into(),
            email: "test@x.com".into(),
            role,
            avatar: None,
        }
    }

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Landing));
        assert_eq!(Route::parse("/signin"), Some(Route::SignIn));
        assert_eq!(Route::parse("/signup/"), Some(Route::SignUp));
        assert_eq!(Route::parse("/moderator"), Some(Route::Dashboard(Role::Moderator)));
        assert_eq!(Route::parse("/citizen/"), Some(Route::Dashboard(Role::Citizen)));
        assert_eq!(Route::parse("/citizen/issues"), None);
        assert_eq!(Route::parse("/Admin"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn role_mismatch_goes_to_sign_in() {
        let user = session(Role::Politician);
        assert_eq!(authorize(Some(&user), "/admin"), Navigation::redirect("/signin"));
    }

    #[test]
    fn anonymous_dashboard_goes_to_sign_in() {
        assert_eq!(authorize(None, "/citizen"), Navigation::redirect("/signin"));
    }

    #[test]
    fn signed_in_landing_goes_home() {
        let user = session(Role::Admin);
        assert_eq!(authorize(Some(&user), "/"), Navigation::redirect("/admin"));
        assert_eq!(authorize(Some(&user), "/signin"), Navigation::redirect("/admin"));
        assert_eq!(authorize(Some(&user), "/signup"), Navigation::redirect("/admin"));
    }

    #[test]
    fn own_dashboard_renders() {
        let user = session(Role::Moderator);
        assert_eq!(
            authorize(Some(&user), "/moderator"),
            Navigation::Render(Route::Dashboard(Role::Moderator))
        );
    }

    #[test]
    fn public_pages_render_when_signed_out() {
        assert_eq!(authorize(None, "/"), Navigation::Render(Route::Landing));
        assert_eq!(authorize(None, "/signup"), Navigation::Render(Route::SignUp));
    }

    #[test]
    fn unknown_paths_go_to_landing() {
        assert_eq!(authorize(None, "/nope"), Navigation::redirect("/"));
        let user = session(Role::Citizen);
        assert_eq!(authorize(Some(&user), "/admin/users"), Navigation::redirect("/"));
    }
}
