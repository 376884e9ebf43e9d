//! Log Out Use Case
//!
//! Destroys the session behind a token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_session_token;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Log out use case
pub struct LogOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session referenced by `session_token`.
    ///
    /// Deleting an already-absent session is not an error; the outcome the
    /// caller wants (no live session) holds either way.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = verify_session_token(&self.config.session_secret, session_token)?;
        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "Operator logged out");
        Ok(())
    }
}
