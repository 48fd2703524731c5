use serde::Serialize;

/// Confirmation envelope for update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
