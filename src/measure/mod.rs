pub mod distance_area;
pub mod ellipsoid;
pub mod units;

pub use distance_area::DistanceArea;
pub use ellipsoid::Ellipsoid;
pub use units::LengthUnit;
