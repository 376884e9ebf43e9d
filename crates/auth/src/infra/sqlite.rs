//! SQLite Repository Implementation

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::entity::{Account, Session};
use crate::domain::repository::{AccountRepository, SessionRepository};
use crate::error::{AuthError, AuthResult};

/// SQLite-backed auth repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for SqliteAuthRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn create(
        &self,
        username: &str,
        password_hash: &HashedPassword,
    ) -> AuthResult<Account> {
        let created_at = Utc::now();

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO accounts (username, password_hash, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(password_hash.as_phc_string())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::UsernameTaken,
            _ => AuthError::Database(e),
        })?;

        Ok(Account {
            id,
            username: username.to_string(),
            password_hash: password_hash.clone(),
            created_at,
        })
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for SqliteAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (session_id, account_id, expires_at_ms, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.session_id.to_string())
        .bind(session.account_id)
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT session_id, account_id, expires_at_ms, created_at
            FROM sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_session()).transpose()
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored password hash: {}", e)))?;

        Ok(Account {
            id: self.id,
            username: self.username,
            password_hash,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: String,
    account_id: i64,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> AuthResult<Session> {
        let session_id = Uuid::parse_str(&self.session_id)
            .map_err(|e| AuthError::Internal(format!("Invalid session_id: {}", e)))?;

        Ok(Session {
            session_id,
            account_id: self.account_id,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        })
    }
}
