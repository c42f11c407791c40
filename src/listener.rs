use crate::RequestError;

/// Callbacks for [`RequestExecutor::execute`].
///
/// `on_pre_execute` runs once before any network activity. Afterwards exactly
/// one of `on_success`, `on_failure` or `on_error` runs, on the caller's
/// `LocalSet`.
///
/// [`RequestExecutor::execute`]: crate::RequestExecutor::execute
pub trait RequestListener {
    fn on_pre_execute(&mut self) {}

    /// The final attempt answered `200 OK`.
    fn on_success(&mut self, body: String);

    /// The final attempt answered with any other status.
    fn on_failure(&mut self, status: u16, body: String);

    /// No attempt produced a well-formed response, or the request was
    /// rejected before sending.
    fn on_error(&mut self, error: RequestError);
}
