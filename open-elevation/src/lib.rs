//! Batched elevation lookup against the [Open-Elevation API].
//!
//! One POST of `{"locations": [{"latitude": f, "longitude": f},
//! ...]}` resolves elevations for a whole path; results correspond
//! positionally to the request. Transient transport failures are
//! retried with exponential backoff (no jitter), permanent failures
//! surface immediately with their status code.
//!
//! [Open-Elevation API]: https://github.com/Jorl17/open-elevation/blob/master/docs/api.md

mod client;
mod error;
mod retry;
mod transport;

pub use crate::{
    client::{ElevationClient, DEFAULT_ENDPOINT},
    error::{ElevationError, TransportError},
    retry::{BackoffEvent, BackoffHook, CancelToken, RetryPolicy},
    transport::{ElevationResult, HttpTransport, Location, LookupRequest, LookupResponse, LookupTransport},
};
