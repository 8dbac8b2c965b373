use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request timeout - Please check your internet connection")]
    Timeout,

    #[error("Network error - Please check your internet connection")]
    Network,

    #[error("Server error: HTTP {code}")]
    Status { code: u16 },

    #[error("Invalid response payload: {0}")]
    Decode(String),

    #[error("{0}")]
    Unknown(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ClientError::Timeout;
        }
        if let Some(status) = err.status() {
            return ClientError::Status {
                code: status.as_u16(),
            };
        }
        if err.is_decode() {
            return ClientError::Decode(err.to_string());
        }
        if err.is_connect() || err.is_request() {
            return ClientError::Network;
        }
        ClientError::Unknown(err.to_string())
    }
}
