//! Application Layer
//!
//! Use cases and configuration.

pub mod check_session;
pub mod config;
pub mod log_in;
pub mod log_out;
pub mod seed_admin;
pub mod token;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use log_out::LogOutUseCase;
pub use seed_admin::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, SeedAdminUseCase};
