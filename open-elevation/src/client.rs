use crate::{
    retry::{BackoffEvent, BackoffHook, CancelToken, RetryPolicy},
    transport::{ElevationResult, HttpTransport, Location, LookupRequest, LookupTransport},
    ElevationError, TransportError,
};
use log::warn;

/// The public Open-Elevation lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.open-elevation.com/api/v1/lookup";

/// Batched elevation lookup client.
///
/// Sends one logical lookup per call and drives the retry schedule
/// around it: transient transport failures are retried per the
/// configured [`RetryPolicy`], permanent failures surface
/// immediately. The client holds no state across calls beyond its
/// configuration, so a shared reference may serve concurrent
/// lookups.
pub struct ElevationClient<T = HttpTransport> {
    transport: T,
    retry: RetryPolicy,
    on_backoff: Option<BackoffHook>,
    cancel: CancelToken,
}

impl ElevationClient<HttpTransport> {
    /// Client for the public Open-Elevation endpoint.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client for an alternate deployment or proxy of the lookup
    /// service.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new(endpoint)?))
    }
}

impl<T> ElevationClient<T>
where
    T: LookupTransport,
{
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            retry: RetryPolicy::default(),
            on_backoff: None,
            cancel: CancelToken::new(),
        }
    }

    #[must_use]
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Hook invoked once per backoff, before the sleep.
    #[must_use]
    pub fn on_backoff<F>(mut self, hook: F) -> Self
    where
        F: Fn(BackoffEvent) + Send + Sync + 'static,
    {
        self.on_backoff = Some(Box::new(hook));
        self
    }

    /// Token checked before each attempt and each backoff sleep.
    #[must_use]
    pub fn cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Resolves elevations for `locations` in a single batched
    /// lookup.
    ///
    /// The returned results correspond positionally to `locations`;
    /// a response with a different count is a
    /// [`ProtocolMismatch`](ElevationError::ProtocolMismatch).
    /// Locations are range-checked before any network I/O.
    pub fn lookup(&self, locations: &[Location]) -> Result<Vec<ElevationResult>, ElevationError> {
        for location in locations {
            if !location.is_valid() {
                return Err(ElevationError::InvalidLocation {
                    lat: location.latitude,
                    lon: location.longitude,
                });
            }
        }

        let request = LookupRequest {
            locations: locations.to_vec(),
        };

        let mut attempt = 1;
        loop {
            if self.cancel.is_cancelled() {
                return Err(ElevationError::Cancelled);
            }

            let error = match self.transport.post_lookup(&request) {
                Ok(response) => {
                    if response.results.len() != request.locations.len() {
                        return Err(ElevationError::ProtocolMismatch {
                            expected: request.locations.len(),
                            actual: response.results.len(),
                        });
                    }
                    return Ok(response.results);
                }
                Err(error) => error,
            };

            if !error.is_transient() {
                return Err(match error {
                    TransportError::Status(code) => ElevationError::RemoteStatus(code),
                    other => ElevationError::LookupFailed {
                        attempts: attempt,
                        source: other,
                    },
                });
            }

            if attempt >= self.retry.max_attempts {
                return Err(ElevationError::LookupFailed {
                    attempts: attempt,
                    source: error,
                });
            }

            let delay = self.retry.delay(attempt);
            warn!("backing off {delay:?} after {attempt} tries: {error}");
            if let Some(hook) = &self.on_backoff {
                hook(BackoffEvent { attempt, delay });
            }
            if self.cancel.is_cancelled() {
                return Err(ElevationError::Cancelled);
            }
            std::thread::sleep(delay);
            attempt += 1;
        }
    }
}
