// errors.rs
use thiserror::Error;

/// Errors that stop a request before a page can be rendered
/// (routing, malformed input). Backend failures are shown inline instead.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Form body too large")]
    PayloadTooLarge,
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge => 413,
            ServerError::InternalError => 500,
        }
    }
}
