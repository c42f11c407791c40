/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Method string is not one of `GET`, `POST`, `PUT`, `DELETE`.
    #[error("invalid http method '{0}'")]
    InvalidMethod(String),
    /// The underlying `reqwest` client could not be constructed.
    #[error("http client build error: {0}")]
    Build(reqwest::Error),
    /// JSON request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(serde_json::Error),
    /// Response body could not be decoded into the requested type.
    #[error("decode error: {0}")]
    Decode(String),
    /// Request failure that is never retried (invalid URL, redirect loop,
    /// request builder error).
    #[error("request failed: {0}")]
    Fatal(reqwest::Error),
    /// Every attempt failed before a well-formed HTTP response was read.
    #[error("transport error after {attempts} attempts: {source}")]
    Exhausted {
        /// Number of attempts made.
        attempts: usize,
        /// Failure of the last attempt.
        #[source]
        source: reqwest::Error,
    },
    /// The background worker panicked before producing a result.
    #[error("background worker failed: {0}")]
    Worker(String),
}

/// How a failed attempt is handled by the retry loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FailureKind {
    /// Connect, timeout or send failure. Retried without delay.
    Network,
    /// The response started but its body could not be drained. Retried after
    /// the flat runtime delay.
    Interrupted,
    /// Anything else. Surfaced immediately.
    Fatal,
}

impl FailureKind {
    pub(crate) fn classify(err: &reqwest::Error) -> Self {
        if err.is_builder() || err.is_redirect() || err.is_status() {
            Self::Fatal
        } else if err.is_connect() || err.is_timeout() || err.is_request() {
            Self::Network
        } else if err.is_body() || err.is_decode() {
            Self::Interrupted
        } else {
            Self::Fatal
        }
    }

    pub(crate) fn is_retryable(self) -> bool {
        !matches!(self, Self::Fatal)
    }
}

#[cfg(test)]
mod tests {
    use super::{FailureKind, RequestError};

    #[test]
    fn invalid_url_is_fatal() {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("url must be rejected");
        let kind = FailureKind::classify(&err);
        assert_eq!(kind, FailureKind::Fatal);
        assert!(!kind.is_retryable());
    }

    #[test]
    fn network_and_interrupted_are_retryable() {
        assert!(FailureKind::Network.is_retryable());
        assert!(FailureKind::Interrupted.is_retryable());
    }

    #[test]
    fn invalid_method_message_names_the_input() {
        let err = RequestError::InvalidMethod("PATCH".to_owned());
        assert_eq!(err.to_string(), "invalid http method 'PATCH'");
    }
}
