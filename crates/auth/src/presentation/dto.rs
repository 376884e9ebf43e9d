//! Form DTOs

use serde::Deserialize;

/// Fields of the login form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
