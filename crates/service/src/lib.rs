//! Service layer providing business-oriented CRUD operations on top of models.
//! - Payload validation and foreign-key resolution happen here, before any write.
//! - Timestamps are set explicitly on every create/update path.
//! - Read-then-write mutations run inside a single store transaction.

pub mod errors;
pub mod payloads;

pub mod employee_service;
pub mod kpi_service;
pub mod machine_service;
pub mod order_service;
pub mod product_service;

#[cfg(test)]
pub mod test_support;
