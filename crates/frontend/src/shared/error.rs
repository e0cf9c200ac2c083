use contracts::shared::validation::ValidationError;
use thiserror::Error;

/// Everything a client call can fail with.
///
/// Each variant ends up as one blocking alert; [`ClientError::user_message`]
/// is that alert's text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Request never got a response (offline, DNS, CORS ...)
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Backend answered `success: false`
    #[error("{0}")]
    Application(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Rejected locally before anything was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ClientError::Http { status, message } if message.trim().is_empty() => {
                format!("Server error ({})", status)
            }
            ClientError::Http { message, .. } => message.clone(),
            ClientError::Parse(_) => "Unexpected response from the server.".to_string(),
            ClientError::NotAuthenticated => "Your session has expired. Sign in again.".to_string(),
            other => other.to_string(),
        }
    }

    /// Worth offering "try again" for
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Transport(_) | ClientError::Http { .. } | ClientError::Parse(_)
        )
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            ClientError::Validation(err) => Some(err.field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keeps_field_and_message() {
        let err: ClientError = ValidationError::new("binId", "Bin ID is required").into();
        assert_eq!(err.field(), Some("binId"));
        assert_eq!(err.user_message(), "Bin ID is required");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_application_message_is_shown_verbatim() {
        let err = ClientError::Application("Bin BIN-1 already exists".to_string());
        assert_eq!(err.user_message(), "Bin BIN-1 already exists");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_http_without_message() {
        let err = ClientError::Http {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Server error (502)");
        assert!(err.is_retryable());
    }
}
