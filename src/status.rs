use reqwest::StatusCode;
use serde::Deserialize;

use crate::{ApiError, Method, utils::deserialize_to_option_string};

/// Code the API uses for a successful call.
pub const SUCCESS: &str = "1";
/// Code the record listing uses for a valid request with no results.
pub const NO_RECORDS: &str = "10";

/// Status block carried by every response envelope.
///
/// Codes are numeric strings and are only ever compared for equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Status {
    #[serde(default, deserialize_with = "deserialize_to_option_string")]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Status {
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn is_success(&self) -> bool {
        self.code() == SUCCESS
    }

    /// Returns an [ApiError] unless the code is one of `accepted`.
    pub(crate) fn ensure(&self, method: Method, accepted: &[&str]) -> Result<(), ApiError> {
        if accepted.contains(&self.code()) {
            return Ok(());
        }

        log::warn!(
            "{method} rejected with status {}: {}",
            self.code(),
            self.message()
        );
        Err(ApiError {
            method,
            code: self.code().to_string(),
            message: self.message().to_string(),
        })
    }
}

/// Transport-level reply, with the body decoded into the caller's envelope.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    pub http_status: StatusCode,
    pub body: T,
}

/// Response returned by operations that leave status checking to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub http_status: StatusCode,
    pub status: Status,
}

/// Envelope for methods whose only payload of interest is the status.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusEnvelope {
    #[serde(default)]
    pub(crate) status: Status,
}
