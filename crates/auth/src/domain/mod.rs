//! Domain Layer
//!
//! Entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{Account, Session};
pub use repository::{AccountRepository, SessionRepository};
