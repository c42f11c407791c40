//! Raw response capture.
//!
//! Enabled with the `raw-body` feature.

/// Undecoded payload of the final response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBody(pub Vec<u8>);

impl RawBody {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
