//! Auth Routers
//!
//! Split into the public routes (`/login`, `/logout_message`) and the
//! protected `/logout` route; the caller layers the session guard over the
//! latter when assembling the application.

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Public auth routes: login form/submit and the logout confirmation page.
pub fn auth_router<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route(
            "/login",
            get(handlers::login_form).post(handlers::login_submit::<R>),
        )
        .route("/logout_message", get(handlers::logout_message))
        .with_state(state)
}

/// Protected logout route. Must be placed behind `require_session`.
pub fn logout_router<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: AccountRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/logout", get(handlers::logout::<R>))
        .with_state(state)
}
