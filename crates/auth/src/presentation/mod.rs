//! Presentation Layer
//!
//! HTTP handlers, DTOs, views, middleware, and routers.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;

pub use handlers::AuthAppState;
pub use middleware::{CurrentOperator, SessionGuardState, require_session};
pub use router::{auth_router, logout_router};
