//! Success response envelope.
//!
//! Every successful response with a body uses `{ "success": true, "data": ... }`.
//! Responses without a body (deletion) carry no envelope at all.

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(ApiResponse::ok(event))))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
