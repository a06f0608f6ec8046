//! Elevation (terrain) profiles along the great-circle path between
//! two points, with optional earth-curvature correction.

mod error;
mod lookup;
pub mod path;
mod profile;

pub use crate::{
    error::ProfileError,
    lookup::ElevationSource,
    profile::{Profile, ProfileBuilder, ProfileSample},
};
pub use geodesy::{self, geo, C};
