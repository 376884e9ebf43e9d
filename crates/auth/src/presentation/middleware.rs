//! Session Guard Middleware
//!
//! Wraps protected routes. Anonymous requests are redirected to `/login`
//! before the handler runs, so an unauthenticated request can never cause a
//! partial mutation.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::extract_cookie;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;

/// Guard state shared by all protected routes
#[derive(Clone)]
pub struct SessionGuardState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<S>,
    pub config: Arc<AuthConfig>,
}

/// Authenticated operator, inserted into request extensions by the guard
#[derive(Debug, Clone, Copy)]
pub struct CurrentOperator {
    pub account_id: i64,
}

/// Middleware requiring a live session.
///
/// On success the wrapped handler runs with [`CurrentOperator`] available in
/// extensions; otherwise the response is a redirect to the login page and
/// the handler is never invoked.
pub async fn require_session<S>(
    State(state): State<SessionGuardState<S>>,
    mut req: Request,
    next: Next,
) -> Response
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match token {
        Some(token) => use_case.get_session(&token).await.ok(),
        None => None,
    };

    match session {
        Some(session) => {
            req.extensions_mut().insert(CurrentOperator {
                account_id: session.account_id,
            });
            next.run(req).await
        }
        None => {
            tracing::debug!(path = %req.uri().path(), "Anonymous request to protected route");
            Redirect::to("/login").into_response()
        }
    }
}
