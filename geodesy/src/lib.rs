//! Great-circle navigation math on a mean-radius spherical earth.
//!
//! All functions take and return [`geo`] points, where `x` is
//! longitude and `y` is latitude, both in degrees.

pub use geo;
use geo::Point;

/// Base floating point type used for all coordinates and calculations.
///
/// Note: this _could_ be a generic parameter, but doing so makes the
/// library more complicated, and walking profile paths shows no
/// measurable benefit from `f32`.
pub type C = f64;

/// Mean earth radius in meters.
pub const MEAN_EARTH_RADIUS: C = 6_371_008.8;

/// Returns the great-circle (haversine) distance between `a` and
/// `b`, in meters.
///
/// Symmetric in its arguments, and exactly 0 when `a == b`.
pub fn distance(a: Point<C>, b: Point<C>) -> C {
    let two = 2.0;

    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let k = ((dlat / two).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlon / two).sin().powi(2))
    .sqrt();

    two * k.asin() * MEAN_EARTH_RADIUS
}

/// Returns the initial compass bearing from `a` towards `b` along
/// the great circle, in degrees `[0, 360)`.
///
/// Degenerate when `a == b`: the bearing is undefined there, and
/// this function returns `0.0`.
pub fn bearing(a: Point<C>, b: Point<C>) -> C {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let (lat1_sin, lat1_cos) = lat1.sin_cos();
    let (lat2_sin, lat2_cos) = lat2.sin_cos();

    let y = dlon.sin() * lat2_cos;
    let x = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Returns the point reached from `origin` travelling `distance_m`
/// meters at the initial bearing `bearing_deg`.
///
/// Inverse of [`distance`]/[`bearing`]:
/// `distance(origin, destination(origin, b, d)) ≈ d` and
/// `bearing(origin, destination(origin, b, d)) ≈ b`.
pub fn destination(origin: Point<C>, bearing_deg: C, distance_m: C) -> Point<C> {
    let brng = bearing_deg.to_radians();
    let frac = distance_m / MEAN_EARTH_RADIUS;

    let lat1 = origin.y().to_radians();
    let lon1 = origin.x().to_radians();

    let (lat1_sin, lat1_cos) = lat1.sin_cos();
    let (frac_sin, frac_cos) = frac.sin_cos();

    let lat2 = (lat1_sin * frac_cos + lat1_cos * frac_sin * brng.cos()).asin();
    let lon2 = lon1
        + (brng.sin() * frac_sin * lat1_cos).atan2(frac_cos - lat1_sin * lat2.sin());

    Point::new(lon2.to_degrees(), lat2.to_degrees())
}

/// Returns the sagitta (earth-curvature drop), in meters, between a
/// straight line of sight and the curved surface for two points
/// `distance_m` meters apart.
///
/// `R * (1 - cos(d / R))`; monotonically non-decreasing for
/// `distance_m` in `[0, πR]`.
pub fn curvature_drop(distance_m: C) -> C {
    MEAN_EARTH_RADIUS * (1.0 - (distance_m / MEAN_EARTH_RADIUS).cos())
}

#[cfg(test)]
mod tests {
    use super::{bearing, curvature_drop, destination, distance, MEAN_EARTH_RADIUS};
    use approx::assert_relative_eq;
    use geo::point;

    #[test]
    fn test_distance_symmetric() {
        let pinzolo = point!(x: 10.7650043, y: 46.1617322);
        let andalo = point!(x: 11.003402, y: 46.1661363);
        assert_eq!(distance(pinzolo, andalo), distance(andalo, pinzolo));
        // ~18.4 km per flat-earth approximation at this latitude.
        assert_relative_eq!(distance(pinzolo, andalo), 18_367.0, max_relative = 1e-3);
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = point!(x: -71.30830716441369, y: 44.28309806603165);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn test_cardinal_bearings() {
        let origin = point!(x: 0.0, y: 0.0);
        assert_relative_eq!(bearing(origin, point!(x: 0.0, y: 1.0)), 0.0, epsilon = 1e-9);
        assert_relative_eq!(bearing(origin, point!(x: 1.0, y: 0.0)), 90.0, epsilon = 1e-9);
        assert_relative_eq!(bearing(origin, point!(x: 0.0, y: -1.0)), 180.0, epsilon = 1e-9);
        assert_relative_eq!(bearing(origin, point!(x: -1.0, y: 0.0)), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bearing_degenerate_is_zero() {
        let p = point!(x: 10.7650043, y: 46.1617322);
        assert_eq!(bearing(p, p), 0.0);
    }

    #[test]
    fn test_destination_round_trip() {
        let origin = point!(x: -0.5, y: -0.5);
        for brng in [0.0, 45.0, 123.4, 271.0] {
            for dist in [1.0, 1_000.0, 250_000.0] {
                let dest = destination(origin, brng, dist);
                assert_relative_eq!(distance(origin, dest), dist, max_relative = 1e-6);
                assert_relative_eq!(bearing(origin, dest), brng, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn test_curvature_drop_zero_at_zero() {
        assert_eq!(curvature_drop(0.0), 0.0);
    }

    #[test]
    fn test_curvature_drop_matches_sagitta_approximation() {
        // h ≈ d²/2R for short distances.
        let d = 1_000.0;
        assert_relative_eq!(
            curvature_drop(d),
            d * d / (2.0 * MEAN_EARTH_RADIUS),
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_curvature_drop_monotonic() {
        let half_circumference = std::f64::consts::PI * MEAN_EARTH_RADIUS;
        let mut prev = 0.0;
        for i in 1..=100 {
            let d = half_circumference * f64::from(i) / 100.0;
            let h = curvature_drop(d);
            assert!(h >= prev, "curvature drop decreased at {d}");
            prev = h;
        }
    }
}
