//! Form DTOs
//!
//! Field names match the original form (`marca`, `origen`); they are mapped
//! to the domain vocabulary at the handler boundary.

use serde::Deserialize;

/// Fields of the add-car form
#[derive(Debug, Deserialize)]
pub struct AddCarForm {
    #[serde(default)]
    pub marca: String,
    #[serde(default)]
    pub origen: String,
}
