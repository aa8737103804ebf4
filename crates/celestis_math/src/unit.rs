//! Linear-scale units of length, mass and speed.

use crate::error::{MathError, Result};
use std::{fmt, str::FromStr};

macro_rules! define_unit {
    (
        $(#[$attr:meta])*
        $name:ident, $kind:literal, $to_base:ident {
            $($variant:ident => ($text:literal, $scale:expr)),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All units of this kind.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// How many of this unit make up one SI base unit.
            #[inline]
            pub const fn scale(self) -> f64 {
                match self {
                    $(Self::$variant => $scale),+
                }
            }

            /// Converts `value` given in the `source` unit into this unit.
            #[inline]
            pub fn convert(self, source: Self, value: f64) -> f64 {
                value / source.scale() * self.scale()
            }

            /// Converts `value` given in this unit into the SI base unit.
            #[inline]
            pub fn $to_base(self, value: f64) -> f64 {
                value / self.scale()
            }

            /// The lowercase name of the unit.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = MathError;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|unit| unit.name() == s)
                    .ok_or_else(|| MathError::Format(format!("Unknown {} unit: {s}", $kind)))
            }
        }
    };
}

define_unit!(
    /// A unit of length.
    LengthUnit, "length", to_meters {
        Micrometer => ("micrometer", 1e6),
        Millimeter => ("millimeter", 1e3),
        Centimeter => ("centimeter", 1e2),
        Inch => ("inch", 39.3701),
        Yard => ("yard", 1.09361),
        Meter => ("meter", 1.0),
        Kilometer => ("kilometer", 1e-3),
        LightYear => ("light_year", 1.057e-13),
    }
);

define_unit!(
    /// A unit of mass.
    MassUnit, "mass", to_kilograms {
        Microgram => ("microgram", 1e9),
        Milligram => ("milligram", 1e6),
        Grain => ("grain", 15432.358),
        Gram => ("gram", 1e3),
        Pound => ("pound", 2.20462),
        Kilogram => ("kilogram", 1.0),
        Ton => ("ton", 1e-3),
        ImperialTon => ("imperial_ton", 0.000984207),
    }
);

define_unit!(
    /// A unit of speed.
    SpeedUnit, "speed", to_meters_per_second {
        KilometersPerHour => ("kilometers_per_hour", 3.6),
        FeetPerSecond => ("feet_per_second", 3.28084),
        MilesPerHour => ("miles_per_hour", 2.23694),
        MetersPerSecond => ("meters_per_second", 1.0),
        LightSpeed => ("light_speed", 3.33555704e-9),
    }
);
