use serde_json::Value;
use thiserror::Error;

/// Failures talking to the classifieds backend.
///
/// Authorization is carried by the status code, never by message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Not signed in")]
    Unauthorized,
    #[error("Not authorized")]
    Forbidden,
    #[error("Not found")]
    NotFound,
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-success response to an error, keeping the backend's message.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            _ => ApiError::Status {
                status,
                message: extract_message(body),
            },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Forbidden)
    }
}

// Error bodies look like {"message": "..."} or {"message": ["...", "..."]}.
fn extract_message(body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok();

    let message = match parsed.as_ref().and_then(|v| v.get("message")) {
        Some(Value::String(msg)) => Some(msg.clone()),
        Some(Value::Array(items)) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    };

    message.unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            "(no body)".to_string()
        } else {
            body.to_string()
        }
    })
}
