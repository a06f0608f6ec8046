//! Equally spaced sampling of the great-circle path between two
//! points.

use crate::ProfileError;
use geo::Point;
use geodesy::{bearing, curvature_drop, destination, distance, C};

/// Returns `n_points + 1` coordinates equally spaced along the great
/// circle from `start` to `end`, with their cumulative distances in
/// meters.
///
/// Index 0 is `start` at distance 0; the last index is `end` itself
/// at the true total distance (not `step * n_points`, which may
/// differ by floating rounding). Interior points are reached from
/// `start` at the initial bearing and `step * i` meters.
pub fn sample_path(
    start: Point<C>,
    end: Point<C>,
    n_points: usize,
) -> Result<(Vec<Point<C>>, Vec<C>), ProfileError> {
    if n_points == 0 {
        return Err(ProfileError::InvalidPoints(n_points));
    }

    let total = distance(start, end);
    let brng = bearing(start, end);
    let step = total / n_points as C;

    let mut great_circle = Vec::with_capacity(n_points + 1);
    let mut distances = Vec::with_capacity(n_points + 1);

    great_circle.push(start);
    distances.push(0.0);
    for i in 1..n_points {
        let d = step * i as C;
        great_circle.push(destination(start, brng, d));
        distances.push(d);
    }
    great_circle.push(end);
    distances.push(total);

    Ok((great_circle, distances))
}

/// Returns the earth-curvature correction, in meters, for the
/// `n_points - 1` interior samples of the path from `start` to
/// `end`.
///
/// The drop is maximal at the path midpoint
/// (`curvature_drop(total / 2)`) and each interior sample gets
/// `h_max - curvature_drop(distance_from_midpoint)`, a downward
/// bowing curve that callers overlay on the terrain to depict
/// line-of-sight obstruction. Endpoints are excluded; they sit on
/// the tangent line at correction 0.
pub fn curvature_profile(
    start: Point<C>,
    end: Point<C>,
    n_points: usize,
) -> Result<Vec<C>, ProfileError> {
    if n_points == 0 {
        return Err(ProfileError::InvalidPoints(n_points));
    }

    let total = distance(start, end);
    let half = total / 2.0;
    let h_max = curvature_drop(half);
    let step = total / n_points as C;

    let mut corrections = Vec::with_capacity(n_points.saturating_sub(1));
    for i in 1..n_points {
        let from_midpoint = (step * i as C - half).abs();
        corrections.push(h_max - curvature_drop(from_midpoint));
    }

    Ok(corrections)
}

#[cfg(test)]
mod tests {
    use super::{curvature_profile, sample_path};
    use crate::ProfileError;
    use geo::point;
    use geodesy::distance;

    #[test]
    fn test_sample_path_counts_and_endpoints() {
        let start = point!(x: 10.7650043, y: 46.1617322);
        let end = point!(x: 11.003402, y: 46.1661363);

        let (great_circle, distances) = sample_path(start, end, 20).unwrap();

        assert_eq!(great_circle.len(), 21);
        assert_eq!(distances.len(), 21);
        assert_eq!(great_circle[0], start);
        assert_eq!(great_circle[20], end);
        assert_eq!(distances[0], 0.0);
        assert_eq!(distances[20], distance(start, end));
    }

    #[test]
    fn test_sample_path_distances_non_decreasing() {
        let start = point!(x: -71.30830716441369, y: 44.28309806603165);
        let end = point!(x: -71.2972073283768, y: 44.25628098424278);

        let (_, distances) = sample_path(start, end, 35).unwrap();

        for pair in distances.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_sample_path_single_step() {
        let start = point!(x: 0.0, y: 0.0);
        let end = point!(x: 1.0, y: 1.0);

        let (great_circle, distances) = sample_path(start, end, 1).unwrap();

        assert_eq!(great_circle, vec![start, end]);
        assert_eq!(distances, vec![0.0, distance(start, end)]);
    }

    #[test]
    fn test_sample_path_rejects_zero_points() {
        let p = point!(x: 0.0, y: 0.0);
        assert!(matches!(
            sample_path(p, p, 0),
            Err(ProfileError::InvalidPoints(0))
        ));
    }

    #[test]
    fn test_curvature_profile_interior_only() {
        let start = point!(x: 11.796718, y: 42.087076);
        let end = point!(x: 13.888322, y: 42.947266);

        let corrections = curvature_profile(start, end, 100).unwrap();

        assert_eq!(corrections.len(), 99);
    }

    #[test]
    fn test_curvature_profile_peaks_at_midpoint() {
        let start = point!(x: 11.796718, y: 42.087076);
        let end = point!(x: 13.888322, y: 42.947266);
        let n_points = 20;

        let corrections = curvature_profile(start, end, n_points).unwrap();

        // Interior sample i lives at vec index i - 1; the midpoint
        // is i = n_points / 2.
        let midpoint = n_points / 2 - 1;
        let max = corrections
            .iter()
            .cloned()
            .fold(f64::MIN, f64::max);
        assert_eq!(corrections[midpoint], max);
        assert!(corrections[midpoint] > corrections[0]);
    }

    #[test]
    fn test_curvature_profile_rejects_zero_points() {
        let p = point!(x: 0.0, y: 0.0);
        assert!(matches!(
            curvature_profile(p, p, 0),
            Err(ProfileError::InvalidPoints(0))
        ));
    }
}
