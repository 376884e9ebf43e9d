//! Seed Admin Use Case
//!
//! Creates the single operator account at startup if it does not exist.
//! Re-running is a no-op: an existing `admin` account is never touched,
//! so a changed password survives restarts.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;

/// Username of the seeded operator account
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Initial password of the seeded account, hashed before storage
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Seed admin use case
pub struct SeedAdminUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
}

impl<A> SeedAdminUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>) -> Self {
        Self { account_repo }
    }

    /// Create the admin account if absent. Returns whether it was created.
    pub async fn execute(&self) -> AuthResult<bool> {
        if self
            .account_repo
            .find_by_username(DEFAULT_ADMIN_USERNAME)
            .await?
            .is_some()
        {
            tracing::debug!("Admin account already present, skipping seed");
            return Ok(false);
        }

        let password = ClearTextPassword::new(DEFAULT_ADMIN_PASSWORD.to_string())?;
        let hash = password.hash()?;

        let account = self
            .account_repo
            .create(DEFAULT_ADMIN_USERNAME, &hash)
            .await?;

        tracing::info!(account_id = account.id, "Seeded default admin account");
        Ok(true)
    }
}
