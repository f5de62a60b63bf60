//! # cc-api Handlers
//!
//! Every request is run through the route authorizer against the current
//! session before anything else happens. Handlers take the session lock
//! first and the dashboards lock second, never the other way round.

use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use cc_core::dashboards::{DashboardView, Dashboards, ModerationAction};
use cc_core::forms::check_sign_up_form;
use cc_core::i18n::{translations, Language, Translations};
use cc_core::routing::{authorize, Navigation, Route, LANDING_PATH, SIGN_IN_PATH};
use cc_core::session::{SignInRequest, SignUpRequest};
use cc_core::{AppError, IssueDraft, IssueStatus, RecordId, Role, SessionUser};
use chrono::Utc;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::{AppState, SharedState};

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: IssueStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponseForm {
    pub content: String,
}

/// What the sign-in, sign-up and landing pages need to render.
#[derive(Debug, Serialize)]
pub struct PublicPage {
    pub page: &'static str,
    pub language: Language,
    pub languages: &'static [Language],
    pub strings: &'static Translations,
}

#[derive(Debug, Serialize)]
pub struct DashboardPage<'a> {
    pub page: &'static str,
    pub language: Language,
    pub user: &'a SessionUser,
    pub role_label: &'static str,
    pub dashboard: DashboardView<'a>,
}

fn language(state: &AppState, query: &LangQuery) -> Language {
    query
        .lang
        .as_deref()
        .and_then(|code| code.parse().ok())
        .unwrap_or(state.default_language)
}

// A blank or unrecognised role counts as "no role picked".
fn picked_role(raw: Option<&str>) -> Option<Role> {
    raw.filter(|role| !role.is_empty()).and_then(|role| role.parse().ok())
}

fn render_dashboard(user: &SessionUser, dashboards: &Dashboards, lang: Language) -> Response {
    Json(DashboardPage {
        page: Route::Dashboard(user.role).name(),
        language: lang,
        user,
        role_label: translations(lang).auth.roles.label(user.role),
        dashboard: dashboards.view(user),
    })
    .into_response()
}

/// Handles every GET: redirect, public page or the caller's dashboard.
pub async fn navigate(
    State(state): State<SharedState>,
    uri: Uri,
    Query(query): Query<LangQuery>,
) -> Response {
    let lang = language(&state, &query);
    let session = state.session.lock().await;

    match authorize(session.current(), uri.path()) {
        Navigation::Redirect(to) => {
            debug!(from = %uri.path(), to = %to, "redirecting");
            Redirect::to(&to).into_response()
        }
        Navigation::Render(Route::Dashboard(_)) => match session.current() {
            Some(user) => {
                let dashboards = state.dashboards.lock().await;
                render_dashboard(user, &dashboards, lang)
            }
            None => Redirect::to(SIGN_IN_PATH).into_response(),
        },
        Navigation::Render(route) => Json(PublicPage {
            page: route.name(),
            language: lang,
            languages: &Language::ALL,
            strings: translations(lang),
        })
        .into_response(),
    }
}

pub async fn sign_in(
    State(state): State<SharedState>,
    Query(query): Query<LangQuery>,
    Json(form): Json<SignInForm>,
) -> ApiResult<Redirect> {
    let lang = language(&state, &query);

    // 1. The page insists on a role before anything else
    let Some(role) = picked_role(form.role.as_deref()) else {
        return Err(AppError::validation(translations(lang).auth.role_error).into());
    };

    // 2. Presence checks and session creation
    let mut session = state.session.lock().await;
    let user = session
        .sign_in(SignInRequest {
            email: form.email,
            password: SecretString::from(form.password),
            role: Some(role),
        })
        .await?;

    Ok(Redirect::to(&user.role.home_path()))
}

pub async fn sign_up(
    State(state): State<SharedState>,
    Query(query): Query<LangQuery>,
    Json(form): Json<SignUpForm>,
) -> ApiResult<Redirect> {
    let lang = language(&state, &query);

    // 1. Role
    let Some(role) = picked_role(form.role.as_deref()) else {
        return Err(AppError::validation(translations(lang).auth.role_error).into());
    };

    // 2. Confirmation and length
    check_sign_up_form(&form.password, &form.confirm_password)?;

    // 3. Presence checks and session creation
    let mut session = state.session.lock().await;
    let user = session
        .sign_up(SignUpRequest {
            name: form.name,
            email: form.email,
            password: SecretString::from(form.password),
            role: Some(role),
        })
        .await?;

    Ok(Redirect::to(&user.role.home_path()))
}

pub async fn sign_out(State(state): State<SharedState>) -> ApiResult<Redirect> {
    state.session.lock().await.sign_out().await?;
    Ok(Redirect::to(LANDING_PATH))
}

/// Lets the request through only if the current session may view `role`'s
/// dashboard. Returns a copy of the signed-in user.
async fn require_role(state: &AppState, role: Role) -> ApiResult<SessionUser> {
    let session = state.session.lock().await;
    match (authorize(session.current(), &role.home_path()), session.current()) {
        (Navigation::Render(_), Some(user)) => Ok(user.clone()),
        _ => Err(AppError::Unauthorized(format!("Sign in as {role} to continue.")).into()),
    }
}

pub async fn report_issue(
    State(state): State<SharedState>,
    Query(query): Query<LangQuery>,
    Json(draft): Json<IssueDraft>,
) -> ApiResult<Response> {
    let user = require_role(&state, Role::Citizen).await?;
    let mut dashboards = state.dashboards.lock().await;

    dashboards.citizen.report_issue(draft, Utc::now().date_naive())?;
    Ok(render_dashboard(&user, &dashboards, language(&state, &query)))
}

pub async fn upvote_issue(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> ApiResult<Response> {
    let user = require_role(&state, Role::Citizen).await?;
    let mut dashboards = state.dashboards.lock().await;

    dashboards.citizen.upvote(&RecordId::from(id));
    Ok(render_dashboard(&user, &dashboards, language(&state, &query)))
}

pub async fn set_issue_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
    Json(form): Json<StatusForm>,
) -> ApiResult<Response> {
    let user = require_role(&state, Role::Politician).await?;
    let mut dashboards = state.dashboards.lock().await;

    dashboards.politician.set_status(&RecordId::from(id), form.status);
    Ok(render_dashboard(&user, &dashboards, language(&state, &query)))
}

pub async fn respond_to_issue(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
    Json(form): Json<ResponseForm>,
) -> ApiResult<Response> {
    let user = require_role(&state, Role::Politician).await?;
    let mut dashboards = state.dashboards.lock().await;

    dashboards.politician.add_response(
        &RecordId::from(id),
        &user.name,
        &form.content,
        Utc::now().date_naive(),
    )?;
    Ok(render_dashboard(&user, &dashboards, language(&state, &query)))
}

pub async fn moderate_content(
    State(state): State<SharedState>,
    Path((id, action)): Path<(String, ModerationAction)>,
    Query(query): Query<LangQuery>,
) -> ApiResult<Response> {
    let user = require_role(&state, Role::Moderator).await?;
    let mut dashboards = state.dashboards.lock().await;

    dashboards.moderator.moderate(&RecordId::from(id), action);
    Ok(render_dashboard(&user, &dashboards, language(&state, &query)))
}

pub async fn toggle_user_suspension(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(query): Query<LangQuery>,
) -> ApiResult<Response> {
    let user = require_role(&state, Role::Admin).await?;
    let mut dashboards = state.dashboards.lock().await;

    dashboards.admin.toggle_suspend(&RecordId::from(id));
    Ok(render_dashboard(&user, &dashboards, language(&state, &query)))
}
