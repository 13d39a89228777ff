use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::error;

use service::errors::ServiceError;

pub type ErrorResponse = (StatusCode, Json<Value>);

/// Machine/product/employee routes report a missing primary id as 404.
pub fn entity_error(e: ServiceError) -> ErrorResponse {
    respond(e, StatusCode::NOT_FOUND)
}

/// Manufacturing-order routes report a missing order as 400, the same way
/// a failed reference is reported.
pub fn order_error(e: ServiceError) -> ErrorResponse {
    respond(e, StatusCode::BAD_REQUEST)
}

fn respond(e: ServiceError, not_found_status: StatusCode) -> ErrorResponse {
    match e {
        ServiceError::Invalid(fields) => (StatusCode::BAD_REQUEST, Json(json!(fields))),
        ServiceError::MissingReference(msg) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
        }
        ServiceError::NotFound(msg) => (not_found_status, Json(json!({ "error": msg }))),
        ServiceError::Db(msg) => {
            error!(error = %msg, "store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": msg })))
        }
    }
}

/// Body rejections (malformed JSON, missing field, unknown enum literal)
/// surface as 400; serde's message already names the accepted variants.
pub fn bad_body(rej: JsonRejection) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": rej.body_text() })))
}
