use std::fmt;

/// Distance units a measurement can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Feet,
    NauticalMiles,
    Yards,
    Miles,
    Degrees,
    Centimeters,
    Millimeters,
}

// Length of one degree along the equator, used for degree conversions.
const METERS_PER_DEGREE: f64 = 111_319.490_793_273_58;

impl LengthUnit {
    #[must_use]
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => 1000.0,
            LengthUnit::Feet => 0.3048,
            LengthUnit::NauticalMiles => 1852.0,
            LengthUnit::Yards => 0.9144,
            LengthUnit::Miles => 1609.344,
            LengthUnit::Degrees => METERS_PER_DEGREE,
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Millimeters => 0.001,
        }
    }

    /// Factor that converts a value in `self` into `to`.
    #[must_use]
    pub fn factor_to(self, to: LengthUnit) -> f64 {
        if self == to {
            return 1.0;
        }
        self.meters_per_unit() / to.meters_per_unit()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Kilometers => "kilometers",
            LengthUnit::Feet => "feet",
            LengthUnit::NauticalMiles => "nautical miles",
            LengthUnit::Yards => "yards",
            LengthUnit::Miles => "miles",
            LengthUnit::Degrees => "degrees",
            LengthUnit::Centimeters => "centimeters",
            LengthUnit::Millimeters => "millimeters",
        };
        f.write_str(name)
    }
}
