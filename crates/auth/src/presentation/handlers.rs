//! HTTP Handlers

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::extract_cookie;
use platform::flash::Flash;

use crate::application::config::AuthConfig;
use crate::application::{LogInInput, LogInUseCase, LogOutUseCase};
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::error::AuthError;
use crate::presentation::dto::LoginForm;
use crate::presentation::views;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_form(headers: HeaderMap) -> Response {
    render_with_flash(&headers, views::login_page)
}

/// POST /login
pub async fn login_submit<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LogInInput {
        username: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = state.config.session_cookie().build_set_cookie(&output.session_token);

            (
                AppendHeaders([(header::SET_COOKIE, cookie)]),
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(AuthError::InvalidCredentials) => {
            // One generic message, whatever was wrong
            let flash = Flash::danger("Usuario o contraseña incorrectos.");

            (
                AppendHeaders([(header::SET_COOKIE, flash.set_cookie())]),
                Redirect::to("/login"),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout (protected by the session guard)
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = LogOutUseCase::new(state.repo.clone(), state.config.clone());
        // Clear the cookie regardless of whether the row still existed
        if let Err(e) = use_case.execute(&token).await {
            tracing::debug!(error = %e, "Logout with dead session token");
        }
    }

    let clear_session = state.config.session_cookie().build_delete_cookie();
    let flash = Flash::info("Has cerrado sesión correctamente.");

    (
        AppendHeaders([
            (header::SET_COOKIE, clear_session),
            (header::SET_COOKIE, flash.set_cookie()),
        ]),
        Redirect::to("/logout_message"),
    )
        .into_response()
}

/// GET /logout_message
pub async fn logout_message(headers: HeaderMap) -> Response {
    render_with_flash(&headers, views::logout_page)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Render a view, consuming (and clearing) any pending flash message.
fn render_with_flash(headers: &HeaderMap, view: fn(Option<&Flash>) -> String) -> Response {
    let flash = Flash::from_headers(headers);
    let html = Html(view(flash.as_ref()));

    match flash {
        Some(_) => (
            AppendHeaders([(header::SET_COOKIE, Flash::clear_cookie())]),
            html,
        )
            .into_response(),
        None => html.into_response(),
    }
}
