use std::fmt;
use std::str::FromStr;

/// Reference ellipsoid used for length measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ellipsoid {
    #[default]
    Grs80,
    Wgs84,
    /// Planar measurement in layer units.
    None,
}

impl Ellipsoid {
    /// Semi-major axis in metres and flattening, or `None` for planar measurement.
    #[must_use]
    pub fn parameters(self) -> Option<(f64, f64)> {
        match self {
            Ellipsoid::Grs80 => Some((6_378_137.0, 1.0 / 298.257_222_101)),
            Ellipsoid::Wgs84 => Some((6_378_137.0, 1.0 / 298.257_223_563)),
            Ellipsoid::None => None,
        }
    }

    #[must_use]
    pub fn acronym(self) -> &'static str {
        match self {
            Ellipsoid::Grs80 => "GRS80",
            Ellipsoid::Wgs84 => "WGS84",
            Ellipsoid::None => "NONE",
        }
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym())
    }
}

impl FromStr for Ellipsoid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GRS80" | "EPSG:7019" => Ok(Ellipsoid::Grs80),
            "WGS84" | "EPSG:7030" => Ok(Ellipsoid::Wgs84),
            "NONE" => Ok(Ellipsoid::None),
            _ => Err(format!(
                "unknown ellipsoid '{s}', expected one of GRS80, WGS84, NONE"
            )),
        }
    }
}
