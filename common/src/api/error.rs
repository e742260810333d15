use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error, please retry";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Server rejected request ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Rejected { status: u16, message: Option<String> },

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for an inline form error. Only a rejection carries server text;
    /// every other failure collapses into the generic network message.
    pub fn form_message(&self, rejected_fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(message), .. } => message.clone(),
            ApiError::Rejected { message: None, .. } => rejected_fallback.to_string(),
            ApiError::Network(_) | ApiError::Decode(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401, .. })
    }
}
