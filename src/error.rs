use thiserror::Error;

pub type Result<T> = core::result::Result<T, ClientError>;

/// Everything that can go wrong between a form and the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server unreachable, CORS rejection, request could not be built
    #[error("{0}")]
    Transport(String),
    /// Response body was not the JSON we expected
    #[error("invalid JSON response: {0}")]
    Decode(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for ClientError {
    fn from(e: gloo_net::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

