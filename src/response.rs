//! Message response body helpers.

use serde::Serialize;

#[derive(Serialize)]
pub struct Message {
    pub message: String,
}

/// `{"message": "..."}` body used by mutation and favorite endpoints.
pub fn message(text: impl Into<String>) -> Message {
    Message {
        message: text.into(),
    }
}
