use open_elevation::ElevationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("missing required parameters")]
    Builder,

    #[error("sample count must be at least 1, got {0}")]
    InvalidPoints(usize),

    #[error("coordinate ({lat}, {lon}) is out of range")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("{0}")]
    Elevation(#[from] ElevationError),
}
