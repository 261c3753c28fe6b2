// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Units a ruler can measure in.
///
/// Every unit carries its length in meters and a short abbreviation used for
/// display (for example `cm` for centimeters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RulerUnit {
    /// Micrometers.
    Micrometer,
    /// Millimeters.
    Millimeter,
    /// Centimeters.
    #[default]
    Centimeter,
    /// Steps of two centimeters.
    TwoCentimeter,
    /// Decimeters.
    Decimeter,
    /// Meters.
    Meter,
    /// Inches.
    Inch,
    /// Feet.
    Foot,
    /// Yards.
    Yard,
}

impl RulerUnit {
    /// All units, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Micrometer,
        Self::Millimeter,
        Self::Centimeter,
        Self::TwoCentimeter,
        Self::Decimeter,
        Self::Meter,
        Self::Inch,
        Self::Foot,
        Self::Yard,
    ];

    /// Length of one unit in meters.
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::Micrometer => 0.0001,
            Self::Millimeter => 0.001,
            Self::Centimeter => 0.01,
            Self::TwoCentimeter => 0.02,
            Self::Decimeter => 0.1,
            Self::Meter => 1.0,
            Self::Inch => 0.0254,
            Self::Foot => 0.3048,
            Self::Yard => 0.9144,
        }
    }

    /// Short display text for the unit.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Micrometer => "my",
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::TwoCentimeter => "2cm",
            Self::Decimeter => "dm",
            Self::Meter => "m",
            Self::Inch => "in",
            Self::Foot => "ft",
            Self::Yard => "yd",
        }
    }
}

impl fmt::Display for RulerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Direction along which a ruler measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RulerOrientation {
    /// Measures along X; thickness extends along Y.
    #[default]
    Horizontal,
    /// Measures along Y; thickness extends along X.
    Vertical,
}
