use std::time::Duration;

use reqwest::header;
use tokio::{task::JoinHandle, time::sleep};

use crate::{
    body::drain_to_text, error::FailureKind, ExecutorOptions, Outcome, RequestError,
    RequestListener, RequestSpec, ResponseResult, Result,
};

#[cfg(feature = "raw-body")]
use crate::raw::RawBody;

/// Performs REST calls on a background task with a fixed retry ceiling.
///
/// Cloning is cheap; clones share the underlying connection machinery.
#[derive(Clone, Debug)]
pub struct RequestExecutor {
    http: reqwest::Client,
    options: ExecutorOptions,
}

impl RequestExecutor {
    /// Creates an executor with [`ExecutorOptions::default`].
    pub fn new() -> Result<Self> {
        Self::from_options(ExecutorOptions::default())
    }

    /// Creates an executor whose client enforces `options.connect_timeout_ms`
    /// and `options.read_timeout_ms`.
    pub fn from_options(options: ExecutorOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(options.connect_timeout())
            .read_timeout(options.read_timeout())
            .build()
            .map_err(RequestError::Build)?;
        Ok(Self::from_client(http, options))
    }

    /// Wraps an existing client.
    ///
    /// Connect and read timeouts are whatever `http` was built with; only the
    /// retry settings come from `options`.
    pub fn from_client(http: reqwest::Client, options: ExecutorOptions) -> Self {
        Self { http, options }
    }

    pub fn options(&self) -> &ExecutorOptions {
        &self.options
    }

    /// Fire-and-forget form of [`send`](Self::send).
    ///
    /// `on_pre_execute` runs before this returns. The exchange then runs on a
    /// spawned tokio task and the outcome is delivered to `listener` from a
    /// local task, so the listener only ever runs on the caller's
    /// `LocalSet` and does not need to be `Send`.
    ///
    /// Dropping the returned handle does not cancel the request.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a [`tokio::task::LocalSet`].
    pub fn execute<L>(&self, spec: RequestSpec, mut listener: L) -> JoinHandle<()>
    where
        L: RequestListener + 'static,
    {
        listener.on_pre_execute();

        let executor = self.clone();
        // The worker is spawned from the local task so that a missing
        // LocalSet panics before any network work starts.
        tokio::task::spawn_local(async move {
            let worker = tokio::spawn(async move { executor.fetch(&spec).await });
            let outcome = match worker.await {
                Ok(result) => Outcome::from(result),
                Err(err) => Outcome::Error(RequestError::Worker(err.to_string())),
            };
            outcome.deliver(&mut listener);
        })
    }

    /// Performs the request and folds the result into an [`Outcome`].
    pub async fn send(&self, spec: &RequestSpec) -> Outcome {
        self.fetch(spec).await.into()
    }

    /// Performs the request, retrying transport failures.
    ///
    /// The first well-formed HTTP response is returned whatever its status
    /// code. Only failures before a response could be read count against
    /// `max_attempts`.
    pub async fn fetch(&self, spec: &RequestSpec) -> Result<ResponseResult> {
        let ceiling = self.options.attempt_ceiling();
        let mut attempt = 0usize;
        loop {
            #[cfg(feature = "tracing")]
            tracing::info!(
                path = %spec.path,
                method = %spec.method,
                attempt = attempt + 1,
                "sending request"
            );

            let err = match self.attempt(spec).await {
                Ok(response) => return Ok(response),
                Err(err) => err,
            };

            let kind = FailureKind::classify(&err);
            if !kind.is_retryable() {
                #[cfg(feature = "tracing")]
                tracing::warn!(path = %spec.path, error = %err, "request failed, not retrying");
                return Err(RequestError::Fatal(err));
            }

            attempt += 1;
            if attempt >= ceiling {
                #[cfg(feature = "tracing")]
                tracing::warn!(path = %spec.path, attempts = attempt, error = %err, "giving up");
                return Err(RequestError::Exhausted {
                    attempts: attempt,
                    source: err,
                });
            }

            self.wait_before_retry(kind).await;
        }
    }

    async fn attempt(
        &self,
        spec: &RequestSpec,
    ) -> std::result::Result<ResponseResult, reqwest::Error> {
        let mut request = self.http.request(spec.method.into(), spec.path.as_str());

        // Content-Length is derived by reqwest from the sized body.
        if let Some(body) = &spec.body {
            request = request
                .header(header::CONTENT_TYPE, spec.content_type.as_str())
                .body(body.clone());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        Ok(ResponseResult {
            status,
            body: drain_to_text(&bytes),
            #[cfg(feature = "raw-body")]
            raw: Some(RawBody(bytes.to_vec())),
        })
    }

    /// Network failures retry immediately; interrupted reads pause for the
    /// flat runtime delay.
    async fn wait_before_retry(&self, kind: FailureKind) {
        let delay = match kind {
            FailureKind::Interrupted => self.options.runtime_retry_delay(),
            _ => Duration::ZERO,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(kind = ?kind, delay_ms = delay.as_millis() as u64, "retrying request");

        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}
