use std::time::Duration;

/// Configures retry ceiling and timeout behavior of a [`RequestExecutor`].
///
/// [`RequestExecutor`]: crate::RequestExecutor
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutorOptions {
    /// Maximum number of attempts per request, initial attempt included.
    ///
    /// `0` is treated as `1`.
    pub max_attempts: usize,
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds.
    ///
    /// Bounds the wait for each read from the connection, not the whole
    /// exchange; a body that keeps arriving never times out.
    pub read_timeout_ms: u64,
    /// Flat pause before retrying an attempt whose response body could not
    /// be drained.
    pub runtime_retry_delay_ms: u64,
}

impl ExecutorOptions {
    pub(crate) fn attempt_ceiling(&self) -> usize {
        self.max_attempts.max(1)
    }

    pub(crate) fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub(crate) fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub(crate) fn runtime_retry_delay(&self) -> Duration {
        Duration::from_millis(self.runtime_retry_delay_ms)
    }
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            connect_timeout_ms: 5_000,
            read_timeout_ms: 10_000,
            runtime_retry_delay_ms: 100,
        }
    }
}
