//! Eight-point compass classification of wind directions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::WindSample;

/// Label used when a wind direction is not available
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Eight 45° compass sectors centred on 0°, 45°, ..., 315°
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CardinalDirection {
    /// Sectors in cyclic order starting at 0°
    pub const ALL: [CardinalDirection; 8] = [
        CardinalDirection::North,
        CardinalDirection::NorthEast,
        CardinalDirection::East,
        CardinalDirection::SouthEast,
        CardinalDirection::South,
        CardinalDirection::SouthWest,
        CardinalDirection::West,
        CardinalDirection::NorthWest,
    ];

    /// Classify any finite bearing; values outside [0, 360) wrap around.
    ///
    /// Boundaries round towards the next sector clockwise, so 22.5° is
    /// North-East and -22.5° is North.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        let sectors = degrees.rem_euclid(360.0) / 45.0;
        let whole = sectors.floor();
        let index = if sectors - whole >= 0.5 { whole + 1.0 } else { whole };
        Self::ALL[(index as usize) % Self::ALL.len()]
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardinalDirection::North => "North",
            CardinalDirection::NorthEast => "North-East",
            CardinalDirection::East => "East",
            CardinalDirection::SouthEast => "South-East",
            CardinalDirection::South => "South",
            CardinalDirection::SouthWest => "South-West",
            CardinalDirection::West => "West",
            CardinalDirection::NorthWest => "North-West",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a wind origin bearing into its cardinal sector
#[must_use]
pub fn classify(degrees: f64) -> CardinalDirection {
    CardinalDirection::from_degrees(degrees)
}

/// Display label for an optional sample, [`UNKNOWN_LABEL`] when the direction is absent
#[must_use]
pub fn direction_label(wind: Option<&WindSample>) -> String {
    wind.and_then(|sample| sample.deg)
        .map_or_else(|| UNKNOWN_LABEL.to_string(), |deg| classify(deg).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "North")]
    #[case(45.0, "North-East")]
    #[case(90.0, "East")]
    #[case(135.0, "South-East")]
    #[case(180.0, "South")]
    #[case(225.0, "South-West")]
    #[case(270.0, "West")]
    #[case(315.0, "North-West")]
    #[case(359.9, "North")]
    #[case(22.4, "North")]
    #[case(22.5, "North-East")]
    #[case(337.5, "North")]
    fn test_classify(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(classify(degrees).as_str(), expected);
    }

    #[rstest]
    #[case(-90.0, "West")]
    #[case(-22.5, "North")]
    #[case(-45.0, "North-West")]
    #[case(450.0, "East")]
    #[case(720.0, "North")]
    fn test_classify_unnormalized(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(classify(degrees).as_str(), expected);
    }

    #[test]
    fn test_periodicity() {
        for step in 0..720 {
            let degrees = f64::from(step) * 0.5 - 180.0;
            assert_eq!(classify(degrees), classify(degrees + 360.0), "at {degrees}");
        }
    }

    #[test]
    fn test_huge_inputs_wrap_instead_of_saturating() {
        for degrees in [1e300, -1e300, f64::MAX] {
            assert_eq!(classify(degrees), classify(degrees.rem_euclid(360.0)));
        }
    }

    #[test]
    fn test_sector_centres() {
        for (index, direction) in CardinalDirection::ALL.into_iter().enumerate() {
            assert_eq!(classify(index as f64 * 45.0), direction);
        }
    }

    #[rstest]
    #[case(22.499_999_999_999_996, "North")]
    #[case(67.499_999_999_999_99, "North-East")]
    #[case(-22.500_000_000_000_1, "North-West")]
    #[case(360.0 * 1e12 + 90.0, "East")]
    #[case(-360.0 * 1e12 + 270.0, "West")]
    fn test_classify_near_boundaries(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(classify(degrees).as_str(), expected);
    }

    #[test]
    fn test_direction_label() {
        assert_eq!(direction_label(Some(&WindSample::new(270.0, 3.0))), "West");
        assert_eq!(direction_label(Some(&WindSample::new(0.0, 3.0))), "North");
        assert_eq!(direction_label(Some(&WindSample::default())), UNKNOWN_LABEL);
        assert_eq!(direction_label(None), UNKNOWN_LABEL);
    }
}
