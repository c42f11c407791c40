//! `rest-executor` issues REST calls on a background tokio task with a fixed
//! retry ceiling and connection-level timeouts.
//!
//! Two entry points:
//! - [`RequestExecutor::send`] returns a tagged [`Outcome`].
//! - [`RequestExecutor::execute`] is fire-and-forget and reports through a
//!   [`RequestListener`] on the caller's `LocalSet`.
//!
//! Transport failures are retried; any well-formed HTTP response, whatever
//! its status, ends the request.

mod body;
mod error;
mod executor;
mod listener;
mod options;
mod request;
mod response;

#[cfg(feature = "raw-body")]
pub mod raw;

pub use error::RequestError;
pub use executor::RequestExecutor;
pub use listener::RequestListener;
pub use options::ExecutorOptions;
pub use request::{Method, RequestSpec, TYPE_JSON, TYPE_XML};
pub use response::{Outcome, ResponseResult};

pub type Result<T> = std::result::Result<T, RequestError>;
