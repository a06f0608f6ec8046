use open_elevation::{ElevationClient, ElevationError, ElevationResult, Location, LookupTransport};

/// Source of elevations for a batch of locations.
///
/// Implementations must return exactly one result per requested
/// location, in request order. [`ElevationClient`] enforces that
/// contract against the remote service; test doubles stand in here
/// without any network.
pub trait ElevationSource {
    fn elevations(&self, locations: &[Location]) -> Result<Vec<ElevationResult>, ElevationError>;
}

impl<T> ElevationSource for ElevationClient<T>
where
    T: LookupTransport,
{
    fn elevations(&self, locations: &[Location]) -> Result<Vec<ElevationResult>, ElevationError> {
        self.lookup(locations)
    }
}
