use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Email API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ContactError {
    fn from(error: reqwest::Error) -> Self {
        ContactError::Http(error.to_string())
    }
}

impl From<anyhow::Error> for ContactError {
    fn from(error: anyhow::Error) -> Self {
        ContactError::InvalidRequest(error.to_string())
    }
}
