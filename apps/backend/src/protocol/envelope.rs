use serde::{Deserialize, Serialize};

/// Outcome marker carried in every response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// The `{message, status}` document returned by every endpoint.
///
/// `message` is either a human-readable string or, for listing endpoints,
/// the listed structure itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: T,
    pub status: ResponseStatus,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: T) -> Self {
        Self {
            message,
            status: ResponseStatus::Ok,
        }
    }
}

impl<'a> ApiResponse<&'a str> {
    pub fn error(message: &'a str) -> Self {
        Self {
            message,
            status: ResponseStatus::Error,
        }
    }
}
