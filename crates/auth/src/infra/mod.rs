//! Infrastructure Layer
//!
//! SQLite repository implementation.

pub mod sqlite;

pub use sqlite::SqliteAuthRepository;
