use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use geo::geometry::Coord;
use std::str::FromStr;

/// Generate point-to-point elevation profiles from a remote
/// elevation service.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Elevation lookup endpoint.
    #[arg(long, default_value = open_elevation::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Number of path segments between start and destination.
    #[arg(short, long, default_value_t = 100)]
    pub points: usize,

    /// Maximum lookup attempts on transient failure.
    #[arg(long, default_value_t = 8)]
    pub max_retries: u32,

    /// Overlay the earth-curvature correction on plotted output.
    #[arg(short, long, default_value_t = false)]
    pub earth_curve: bool,

    /// Start "lat,lon".
    #[arg(long)]
    pub start: LatLon,

    /// Destination "lat,lon".
    #[arg(long)]
    pub dest: LatLon,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Debug, Copy)]
pub struct LatLon(pub Coord<f64>);

impl FromStr for LatLon {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("not a valid lat,lon"))?;
        let lat = f64::from_str(lat_str)?;
        let lon = f64::from_str(lon_str)?;
        Ok(Self(Coord { y: lat, x: lon }))
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print profile values to stdout.
    Csv,

    /// Print profile values to stdout as JSON.
    Json,

    /// Plot to terminal.
    Plot,
}

#[cfg(test)]
mod tests {
    use super::LatLon;
    use std::str::FromStr;

    #[test]
    fn test_lat_lon_from_str() {
        let LatLon(coord) = LatLon::from_str("46.1617322,10.7650043").unwrap();
        assert_eq!(coord.y, 46.1617322);
        assert_eq!(coord.x, 10.7650043);
        assert!(LatLon::from_str("46.1617322").is_err());
        assert!(LatLon::from_str("north,east").is_err());
    }
}
