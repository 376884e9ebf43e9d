//! Check Session Use Case
//!
//! Resolves a cookie token to a live session, if any.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_session_token;
use crate::domain::entity::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Verify the token signature and load the session.
    ///
    /// Expired sessions are deleted on sight and reported as invalid.
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = verify_session_token(&self.config.session_secret, session_token)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }
}
