use crate::{lookup::ElevationSource, path, ProfileError};
use geo::{Coord, Point};
use geodesy::C;
use log::debug;
use open_elevation::Location;

/// An elevation profile along the great-circle route from `start`
/// to `end`.
///
/// All per-sample vectors have length `n_points + 1` and correspond
/// by index; index 0 is the start endpoint and the last index is the
/// end endpoint. Built once per request and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Total distance from `start` to `end` in meters.
    pub distance_m: C,

    /// Cumulative distance of each step along the route, in meters.
    /// The first entry is 0 and the last equals `distance_m`
    /// exactly.
    pub distances_m: Vec<C>,

    /// Location of each step along the great circle route.
    pub great_circle: Vec<Point<C>>,

    /// Elevation above sea level at each step, in meters.
    pub elevations_m: Vec<C>,

    /// Earth-curvature correction at each step, in meters. Zero at
    /// both endpoints, maximal near the midpoint.
    pub curvature_m: Vec<C>,
}

/// Per-index view of one profile step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub distance_m: C,
    pub point: Point<C>,
    pub elevation_m: C,
    pub curvature_m: C,
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder {
            start: None,
            end: None,
            points: None,
        }
    }

    /// Number of samples (`n_points + 1`).
    pub fn len(&self) -> usize {
        self.great_circle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.great_circle.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ProfileSample> {
        Some(ProfileSample {
            distance_m: *self.distances_m.get(index)?,
            point: *self.great_circle.get(index)?,
            elevation_m: *self.elevations_m.get(index)?,
            curvature_m: *self.curvature_m.get(index)?,
        })
    }

    /// Iterates the profile in path order.
    pub fn samples(&self) -> impl Iterator<Item = ProfileSample> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }
}

pub struct ProfileBuilder {
    start: Option<Coord<C>>,

    end: Option<Coord<C>>,

    /// Number of path segments; the profile has `points + 1`
    /// samples.
    points: Option<usize>,
}

impl ProfileBuilder {
    #[must_use]
    pub fn start(mut self, coord: Coord<C>) -> Self {
        self.start = Some(coord);
        self
    }

    #[must_use]
    pub fn end(mut self, coord: Coord<C>) -> Self {
        self.end = Some(coord);
        self
    }

    #[must_use]
    pub fn points(mut self, n_points: usize) -> Self {
        self.points = Some(n_points);
        self
    }

    /// Samples the path and resolves its elevations in one batched
    /// lookup against `source`.
    ///
    /// Arguments are validated before any lookup: a missing field,
    /// an out-of-range endpoint, or a zero sample count fails fast
    /// with no network I/O. Any lookup failure aborts the whole
    /// build; no partial profile is returned.
    pub fn build<S>(&self, source: &S) -> Result<Profile, ProfileError>
    where
        S: ElevationSource,
    {
        let (Some(start), Some(end), Some(n_points)) = (self.start, self.end, self.points) else {
            return Err(ProfileError::Builder);
        };

        for coord in [start, end] {
            if !Location::new(coord.y, coord.x).is_valid() {
                return Err(ProfileError::InvalidCoordinate {
                    lat: coord.y,
                    lon: coord.x,
                });
            }
        }

        let start_point = Point::from(start);
        let end_point = Point::from(end);

        let (great_circle, distances_m, path_runtime) = {
            let now = std::time::Instant::now();
            let (great_circle, distances_m) = path::sample_path(start_point, end_point, n_points)?;
            (great_circle, distances_m, now.elapsed())
        };

        let (elevations_m, lookup_runtime) = {
            let now = std::time::Instant::now();
            let locations: Vec<Location> = great_circle
                .iter()
                .map(|point| Location::new(point.y(), point.x()))
                .collect();
            let results = source.elevations(&locations)?;
            let elevations_m = results.iter().map(|result| result.elevation).collect();
            (elevations_m, now.elapsed())
        };

        // Interior corrections, padded with 0 at both endpoints so
        // every vector shares one length.
        let curvature_m = {
            let mut curvature_m = Vec::with_capacity(n_points + 1);
            curvature_m.push(0.0);
            curvature_m.extend(path::curvature_profile(start_point, end_point, n_points)?);
            curvature_m.push(0.0);
            curvature_m
        };

        debug!(
            "profile; len: {}, path_exec: {:?}, lookup_exec: {:?}",
            great_circle.len(),
            path_runtime,
            lookup_runtime
        );

        let distance_m = *distances_m.last().unwrap_or(&0.0);

        Ok(Profile {
            distance_m,
            distances_m,
            great_circle,
            elevations_m,
            curvature_m,
        })
    }
}
