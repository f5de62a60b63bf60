//! # cc-api
//!
//! HTTP surface for CitizenConnect. GET requests return JSON page data or a
//! `303 See Other`; POST requests drive the session store and the role
//! dashboards.

pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use cc_core::dashboards::Dashboards;
use cc_core::i18n::Language;
use cc_core::session::SessionStore;
use tokio::sync::Mutex;

/// State shared by every request.
pub struct AppState {
    pub session: Mutex<SessionStore>,
    pub dashboards: Mutex<Dashboards>,
    pub default_language: Language,
}

impl AppState {
    pub fn new(session: SessionStore, dashboards: Dashboards, default_language: Language) -> Self {
        Self {
            session: Mutex::new(session),
            dashboards: Mutex::new(dashboards),
            default_language,
        }
    }
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::navigate))
        .route("/signin", get(handlers::navigate).post(handlers::sign_in))
        .route("/signup", get(handlers::navigate).post(handlers::sign_up))
        .route("/signout", post(handlers::sign_out))
        .route("/citizen/issues", post(handlers::report_issue))
        .route("/citizen/issues/{id}/upvote", post(handlers::upvote_issue))
        .route("/politician/issues/{id}/status", post(handlers::set_issue_status))
        .route("/politician/issues/{id}/responses", post(handlers::respond_to_issue))
        .route("/moderator/flagged/{id}/{action}", post(handlers::moderate_content))
        .route("/admin/users/{id}/toggle-suspend", post(handlers::toggle_user_suspension))
        // Dashboards, trailing slashes, unknown paths and wrong methods all go through the authorizer
        .fallback(handlers::navigate)
        .method_not_allowed_fallback(handlers::navigate)
        .layer(middleware::cors_policy())
        .layer(middleware::trace_layer())
        .with_state(state)
}
