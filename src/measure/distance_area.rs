use super::{Ellipsoid, LengthUnit};
use geo::{LineString, MultiLineString};
use geographiclib_rs::{Geodesic, InverseGeodesic};
use std::fmt;

/// Length measurement context.
///
/// With an ellipsoid set, lengths are geodesics on that ellipsoid in metres,
/// with coordinates read as longitude/latitude degrees. Without one,
/// lengths are planar in the layer's own units.
pub struct DistanceArea {
    ellipsoid: Ellipsoid,
    geodesic: Option<Geodesic>,
}

impl DistanceArea {
    #[must_use]
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        let geodesic = ellipsoid
            .parameters()
            .map(|(a, f)| Geodesic::new(a, f));
        Self {
            ellipsoid,
            geodesic,
        }
    }

    /// Unit of the values returned by [`Self::measure_length`].
    #[must_use]
    pub fn length_units(&self) -> LengthUnit {
        if self.geodesic.is_some() {
            LengthUnit::Meters
        } else {
            LengthUnit::Degrees
        }
    }

    /// Total length of every member line.
    #[must_use]
    pub fn measure_length(&self, geometry: &MultiLineString<f64>) -> f64 {
        geometry.iter().map(|line| self.measure_line(line)).sum()
    }

    #[must_use]
    pub fn measure_line(&self, line: &LineString<f64>) -> f64 {
        match &self.geodesic {
            Some(geodesic) => line
                .lines()
                .map(|segment| -> f64 {
                    geodesic.inverse(segment.start.y, segment.start.x, segment.end.y, segment.end.x)
                })
                .sum(),
            None => line
                .lines()
                .map(|segment| segment.dx().hypot(segment.dy()))
                .sum(),
        }
    }

    /// Converts a value from [`Self::length_units`] into `to`.
    #[must_use]
    pub fn convert_length_measurement(&self, length: f64, to: LengthUnit) -> f64 {
        length * self.length_units().factor_to(to)
    }
}

impl Default for DistanceArea {
    fn default() -> Self {
        Self::new(Ellipsoid::default())
    }
}

impl fmt::Debug for DistanceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceArea")
            .field("ellipsoid", &self.ellipsoid)
            .finish_non_exhaustive()
    }
}
