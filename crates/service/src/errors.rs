use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input-shape failure: field name mapped to its message.
    #[error("validation error")]
    Invalid(HashMap<String, String>),
    /// A referenced foreign entity id did not resolve; raised before any write.
    #[error("{0}")]
    MissingReference(String),
    /// The primary id targeted by an update/delete was not located.
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    pub fn missing_machine(id: Uuid) -> Self {
        Self::MissingReference(format!("Machine not found with ID: {}", id))
    }

    pub fn missing_product(id: Uuid) -> Self {
        Self::MissingReference(format!("Product not found with ID: {}", id))
    }

    pub fn order_not_found(id: Uuid) -> Self {
        Self::NotFound(format!("Manufacturing order not found with ID: {}", id))
    }
}
