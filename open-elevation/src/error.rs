use thiserror::Error;

/// Errors surfaced by [`ElevationClient`](crate::ElevationClient).
#[derive(Debug, Error)]
pub enum ElevationError {
    /// A requested location is outside the valid latitude/longitude
    /// range. Detected before any network I/O and never retried.
    #[error("invalid location ({lat}, {lon})")]
    InvalidLocation {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
    },

    /// Every attempt failed with a transient transport error.
    #[error("lookup failed after {attempts} attempts: {source}")]
    LookupFailed {
        /// Number of attempts made, including the first.
        attempts: u32,
        /// The final attempt's transport error.
        source: TransportError,
    },

    /// The remote service answered with a permanent (non-transient)
    /// status. Not retried.
    #[error("remote service returned status {0}")]
    RemoteStatus(u16),

    /// The response carried a different number of results than
    /// locations requested. Positional correspondence can no longer
    /// be trusted, so the whole lookup fails.
    #[error("response contains {actual} results for {expected} locations")]
    ProtocolMismatch {
        /// Number of locations requested.
        expected: usize,
        /// Number of results returned.
        actual: usize,
    },

    /// The lookup's cancel token was triggered between attempts.
    #[error("lookup cancelled")]
    Cancelled,
}

/// Errors from a single transport round trip.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The connection failed before a response was received.
    #[error("connection error: {0}")]
    Connection(String),

    /// The service answered with a non-200 status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Body(String),
}

impl TransportError {
    /// Whether retrying the request could plausibly succeed.
    ///
    /// Timeouts, connection failures, and 5xx statuses are
    /// transient; any other status is permanent.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Connection(_) | Self::Status(500..=599)
        )
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::Body(error.to_string())
        } else {
            Self::Connection(error.to_string())
        }
    }
}
