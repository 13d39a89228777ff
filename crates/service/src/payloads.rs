//! Input shapes accepted by the entity services, distinct from the
//! persisted entity shapes. Enum fields are typed, so a malformed literal
//! is rejected at deserialization with the accepted variants named; the
//! remaining rules live in `validate()` and report a field-keyed map.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::employee::EmployeePosition;
use models::machine::MachineStatus;
use models::manufacturing_order::OrderStatus;
use models::product::ProductType;

use crate::errors::ServiceError;

fn require_text(errors: &mut HashMap<String, String>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), message.to_string());
    }
}

fn finish(errors: HashMap<String, String>) -> Result<(), ServiceError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Invalid(errors))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MachinePayload {
    pub name: String,
    pub status: MachineStatus,
    #[serde(default)]
    pub last_maintenance_date: Option<DateTime<FixedOffset>>,
}

impl MachinePayload {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = HashMap::new();
        require_text(&mut errors, "name", &self.name, "Name is required");
        finish(errors)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductType,
    pub stock: i32,
    pub supplier: String,
}

impl ProductPayload {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = HashMap::new();
        require_text(&mut errors, "name", &self.name, "Name is required");
        if self.stock < 0 {
            errors.insert("stock".to_string(), "Stock cannot be less than 0".to_string());
        }
        require_text(&mut errors, "supplier", &self.supplier, "Supplier is required");
        finish(errors)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmployeePayload {
    pub name: String,
    pub position: EmployeePosition,
    pub machine_id: Uuid,
}

impl EmployeePayload {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = HashMap::new();
        require_text(&mut errors, "name", &self.name, "Name is required");
        finish(errors)
    }
}

/// Creation payload carries no status: new orders always start awaiting
/// approval, and any status-like field in the request body is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateOrderPayload {
    pub project: String,
    pub quantity: i32,
    pub date: DateTime<FixedOffset>,
    pub product_id: Uuid,
    pub machine_id: Uuid,
}

impl CreateOrderPayload {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = HashMap::new();
        require_text(&mut errors, "project", &self.project, "Project name is required");
        if self.quantity < 1 {
            errors.insert("quantity".to_string(), "Quantity must be at least 1".to_string());
        }
        finish(errors)
    }
}

/// Update is full-replace: every mutable field must be present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateOrderPayload {
    pub project: String,
    pub status: OrderStatus,
    pub quantity: i32,
    pub date: DateTime<FixedOffset>,
    pub product_id: Uuid,
    pub machine_id: Uuid,
}

impl UpdateOrderPayload {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let mut errors = HashMap::new();
        require_text(&mut errors, "project", &self.project, "Project name is required");
        if self.quantity < 1 {
            errors.insert("quantity".to_string(), "Quantity must be at least 1".to_string());
        }
        finish(errors)
    }
}
