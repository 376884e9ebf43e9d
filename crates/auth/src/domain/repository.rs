//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infra layer.

use crate::domain::entity::{Account, Session};
use crate::error::AuthResult;
use platform::password::HashedPassword;
use uuid::Uuid;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Find an account by username
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Account>>;

    /// Create a new account; fails with `UsernameTaken` on conflict
    async fn create(&self, username: &str, password_hash: &HashedPassword)
    -> AuthResult<Account>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Persist a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find a session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Delete expired sessions, returning how many were removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
