use reqwest::{StatusCode, blocking::Response};
use thiserror::Error;

use crate::Method;

/// The HTTP call succeeded but the envelope status code reported a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("DNSPod API error on {method}: {code} - {message}")]
pub struct ApiError {
    pub method: Method,
    pub code: String,
    pub message: String,
}

/// The server answered with a non-success HTTP status.
#[derive(Error, Debug)]
#[error("HTTP error: {status} - {body}")]
pub struct HttpError {
    pub status: StatusCode,
    pub body: String,
}

impl HttpError {
    pub(crate) fn from_response(resp: Response) -> Self {
        let status = resp.status();
        let body = resp
            .text()
            .unwrap_or_else(|e| format!("unable to read response body: {e}"));

        Self { status, body }
    }
}

/// Errors returned by the API calls.
///
/// # Errors
///
/// - `Reqwest`, `Http`, `Json` and `UrlParse` come from the transport, and
///   nothing in the response is interpreted after them.
/// - `Api` is returned when the envelope status code isn't an accepted one.
/// - `MissingField` is a check made before any request is sent. Only
///   [DomainService::create](crate::domain::DomainService::create) returns
///   it, when the domain has no name.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error("missing field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
