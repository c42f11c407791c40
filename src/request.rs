use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::RequestError;

/// JSON parameter type.
pub const TYPE_JSON: &str = "text/json; charset=UTF-8";
/// XML parameter type.
pub const TYPE_XML: &str = "text/xml; charset=UTF-8";

/// REST verb of a request.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        [Self::Get, Self::Post, Self::Put, Self::Delete]
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RequestError::InvalidMethod(value.to_owned()))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Immutable description of one HTTP call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    /// Absolute request URL.
    pub path: String,
    /// HTTP method.
    pub method: Method,
    /// MIME type sent as `Content-Type` when a body is present.
    pub content_type: String,
    /// Optional request payload.
    pub body: Option<Vec<u8>>,
}

impl RequestSpec {
    /// Creates a body-less request with the default JSON content type.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            content_type: TYPE_JSON.to_owned(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Builds a request from loosely typed parts.
    ///
    /// `method` is parsed case-insensitively; `body` may be absent.
    pub fn from_parts(
        method: &str,
        path: impl Into<String>,
        content_type: impl Into<String>,
        body: Option<String>,
    ) -> Result<Self, RequestError> {
        let method = method.parse()?;
        Ok(Self {
            path: path.into(),
            method,
            content_type: content_type.into(),
            body: body.map(String::into_bytes),
        })
    }

    /// Creates a request whose body is `value` serialized as JSON.
    pub fn json<T: Serialize + ?Sized>(
        method: Method,
        path: impl Into<String>,
        value: &T,
    ) -> Result<Self, RequestError> {
        let body = serde_json::to_vec(value).map_err(RequestError::Encode)?;
        Ok(Self::new(method, path).body(body))
    }

    /// Sets the MIME type of the payload.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Attaches a payload.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}
