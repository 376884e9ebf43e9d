//! Auth Entities
//!
//! The operator account and the server-side session it authenticates.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use std::time::Duration;
use uuid::Uuid;

/// Operator account
///
/// `username` is unique and immutable after creation; the credential is
/// stored only as an Argon2id PHC string.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

/// Server-side session
///
/// Created on successful login, destroyed on logout. The cookie carries the
/// session id plus an HMAC signature; the row here is what makes the token
/// mean anything.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4), the signed part of the cookie token
    pub session_id: Uuid,
    /// Owning account
    pub account_id: i64,
    /// Expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Issue timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session for `account_id`, expiring after `ttl`.
    pub fn new(account_id: i64, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            account_id,
            expires_at_ms: now.timestamp_millis() + ttl.as_millis() as i64,
            created_at: now,
        }
    }

    /// Check if the session has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}
