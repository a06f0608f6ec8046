use crate::TransportError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request timeout for the production HTTP transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A latitude/longitude pair as submitted to the lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this location is within the valid WGS 84 range.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One resolved elevation, positionally matched to the requested
/// location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationResult {
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation above sea level in meters.
    pub elevation: f64,
}

/// Wire shape of a batched lookup request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupRequest {
    pub locations: Vec<Location>,
}

/// Wire shape of a successful lookup response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LookupResponse {
    pub results: Vec<ElevationResult>,
}

/// A single request/response round trip to the lookup service.
///
/// [`ElevationClient`](crate::ElevationClient) drives retries around
/// this seam; implementations perform exactly one exchange per call.
pub trait LookupTransport {
    fn post_lookup(&self, request: &LookupRequest) -> Result<LookupResponse, TransportError>;
}

/// Production transport: a blocking HTTP POST of the JSON request
/// body to the configured endpoint.
#[derive(Debug)]
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LookupTransport for HttpTransport {
    fn post_lookup(&self, request: &LookupRequest) -> Result<LookupResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(response.json()?)
    }
}
