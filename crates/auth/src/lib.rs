//! Auth (Operator Authentication) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - SQLite repository implementation
//! - `presentation/` - HTTP handlers, views, middleware guard, routers
//!
//! ## Features
//! - Single seeded operator account (created at startup if absent)
//! - Server-side sessions referenced by an HMAC-signed cookie token
//! - `require_session` middleware redirecting anonymous requests to `/login`
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, plaintext zeroized after use
//! - Session ids are only honored with a valid HMAC-SHA256 signature
//! - Login failures report one generic message (no username probing)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::middleware::{CurrentOperator, SessionGuardState, require_session};
pub use presentation::router::{auth_router, logout_router};
