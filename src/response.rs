use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{body::decode_json, RequestError, RequestListener, Result};

#[cfg(feature = "raw-body")]
use crate::raw::RawBody;

/// Status and drained body of the attempt that produced a well-formed
/// HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseResult {
    pub status: u16,
    /// Line-normalized body text, `None` when the payload was empty.
    pub body: Option<String>,
    #[cfg(feature = "raw-body")]
    pub raw: Option<RawBody>,
}

impl ResponseResult {
    /// Whether the status is exactly `200 OK`.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        decode_json(self.body.as_deref().unwrap_or_default())
    }
}

/// Final result of one request.
#[derive(Debug)]
pub enum Outcome {
    /// The server answered `200 OK`.
    Success(String),
    /// The server answered with any other status. Never retried.
    Failure { status: u16, body: String },
    /// No well-formed response was obtained.
    Error(RequestError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Success(_) => Some(StatusCode::OK.as_u16()),
            Self::Failure { status, .. } => Some(*status),
            Self::Error(_) => None,
        }
    }

    /// Response body, if a response was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Success(body) | Self::Failure { body, .. } => Some(body),
            Self::Error(_) => None,
        }
    }

    /// Decodes a successful body as JSON.
    ///
    /// Non-200 responses become [`RequestError::Decode`] carrying the status
    /// and body; transport errors are returned as-is.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Success(body) => decode_json(&body),
            Self::Failure { status, body } => Err(RequestError::Decode(format!(
                "expected status 200, got {status}; body: {body}"
            ))),
            Self::Error(err) => Err(err),
        }
    }

    /// Hands the outcome to exactly one of the listener's result callbacks.
    pub fn deliver<L: RequestListener + ?Sized>(self, listener: &mut L) {
        match self {
            Self::Success(body) => listener.on_success(body),
            Self::Failure { status, body } => listener.on_failure(status, body),
            Self::Error(err) => listener.on_error(err),
        }
    }
}

impl From<ResponseResult> for Outcome {
    fn from(response: ResponseResult) -> Self {
        let body = response.body.unwrap_or_default();
        if response.status == StatusCode::OK.as_u16() {
            Self::Success(body)
        } else {
            Self::Failure {
                status: response.status,
                body,
            }
        }
    }
}

impl From<Result<ResponseResult>> for Outcome {
    fn from(result: Result<ResponseResult>) -> Self {
        match result {
            Ok(response) => response.into(),
            Err(err) => Self::Error(err),
        }
    }
}
