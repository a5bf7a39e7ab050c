//! Error taxonomy for configuration, transport, and provider failures. Messages
//! may reach the console log, so variants never carry request bodies or
//! credentials.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_errors_render_status_and_provider_message() {
        let err = AppError::Http {
            status: 422,
            message: "User already registered".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Request failed (422): User already registered"
        );
    }

    #[test]
    fn config_errors_render_their_message() {
        assert_eq!(
            AppError::Config("Auth URL is not configured.".to_string()).to_string(),
            "Config error: Auth URL is not configured."
        );
    }
}
