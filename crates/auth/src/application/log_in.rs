//! Log In Use Case
//!
//! Authenticates the operator and creates a session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_id;
use crate::domain::entity::Session;
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub username: String,
    pub password: String,
}

/// Log in output
pub struct LogInOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    pub account_id: i64,
}

/// Log in use case
pub struct LogInUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    account_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<A, S> LogInUseCase<A, S>
where
    A: AccountRepository,
    S: SessionRepository,
{
    pub fn new(account_repo: Arc<A>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            session_repo,
            config,
        }
    }

    /// Verify credentials and establish a session.
    ///
    /// Every failure path returns `InvalidCredentials`: an unknown username,
    /// an empty password, and a wrong password are indistinguishable to the
    /// caller.
    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        let account = self
            .account_repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !account.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::new(account.id, self.config.session_ttl);
        self.session_repo.create(&session).await?;

        let session_token = sign_session_id(&self.config.session_secret, session.session_id);

        tracing::info!(
            username = %account.username,
            session_id = %session.session_id,
            "Operator logged in"
        );

        Ok(LogInOutput {
            session_token,
            account_id: account.id,
        })
    }
}
