//! Tailwind/headwind favorability scoring
//!
//! Compares the direction a wind is blowing towards with the travel bearing of
//! a segment and maps the angle (and, for tailwinds, the speed) onto a 1-5
//! rating. Missing data always scores as the worst rating so that segments
//! without a forecast never outrank segments with a known poor forecast.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::WindSample;

/// Half-width of the cone treated as tailwind, in degrees
pub const TAILWIND_CONE_DEG: f64 = 45.0;
/// Angles beyond this are a headwind or strong crosswind
pub const HEADWIND_THRESHOLD_DEG: f64 = 90.0;
/// Angles beyond this are a full headwind
pub const STRONG_HEADWIND_THRESHOLD_DEG: f64 = 135.0;
/// Tailwinds faster than this (m/s) count as strong
pub const STRONG_WIND_MS: f64 = 5.0;

/// Favorability rating, 1 (worst) to 5 (best)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    /// Create a rating, `None` outside 1..=5
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(Rating(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Five-star rendering, filled stars first
    #[must_use]
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX.0) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("rating must be between 1 and 5, got {value}"))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the wind relates to the direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindRelation {
    /// Within the tailwind cone and above the strong-wind threshold
    StrongTailwind,
    /// Within the tailwind cone at or below the strong-wind threshold
    LightTailwind,
    /// 45°-90° off the travel bearing
    Crosswind,
    /// 90°-135° off, a headwind or strong crosswind
    Headwind,
    /// More than 135° off
    StrongHeadwind,
    /// Bearing or wind direction not available
    Unknown,
}

impl WindRelation {
    /// Classify a wind sample against a travel bearing
    #[must_use]
    pub fn assess(bearing: Option<f64>, wind: Option<&WindSample>) -> Self {
        let (Some(bearing), Some(wind)) = (bearing, wind) else {
            return WindRelation::Unknown;
        };
        let Some(wind_travel) = wind.travel_bearing() else {
            return WindRelation::Unknown;
        };

        let angle = angular_difference(bearing, wind_travel);
        let speed = wind.speed_ms();

        match angle {
            a if a <= TAILWIND_CONE_DEG && speed > STRONG_WIND_MS => WindRelation::StrongTailwind,
            a if a <= TAILWIND_CONE_DEG => WindRelation::LightTailwind,
            a if a > STRONG_HEADWIND_THRESHOLD_DEG => WindRelation::StrongHeadwind,
            a if a > HEADWIND_THRESHOLD_DEG => WindRelation::Headwind,
            _ => WindRelation::Crosswind,
        }
    }

    #[must_use]
    pub fn rating(self) -> Rating {
        match self {
            WindRelation::StrongTailwind => Rating(5),
            WindRelation::LightTailwind => Rating(4),
            WindRelation::Crosswind => Rating(3),
            WindRelation::Headwind => Rating(2),
            WindRelation::StrongHeadwind | WindRelation::Unknown => Rating(1),
        }
    }
}

impl fmt::Display for WindRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindRelation::StrongTailwind => write!(f, "Strong tailwind"),
            WindRelation::LightTailwind => write!(f, "Light tailwind"),
            WindRelation::Crosswind => write!(f, "Crosswind"),
            WindRelation::Headwind => write!(f, "Headwind"),
            WindRelation::StrongHeadwind => write!(f, "Strong headwind"),
            WindRelation::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Shortest angular distance between two bearings (0-180°)
#[must_use]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Rate how favorable `wind` is for travelling along `bearing`
#[must_use]
pub fn score(bearing: Option<f64>, wind: Option<&WindSample>) -> Rating {
    WindRelation::assess(bearing, wind).rating()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn wind(deg: f64, speed: f64) -> WindSample {
        WindSample::new(deg, speed)
    }

    #[test]
    fn test_angular_difference() {
        assert_eq!(angular_difference(0.0, 0.0), 0.0);
        assert_eq!(angular_difference(0.0, 90.0), 90.0);
        assert_eq!(angular_difference(0.0, 180.0), 180.0);
        assert_eq!(angular_difference(0.0, 270.0), 90.0);
        assert_eq!(angular_difference(0.0, 350.0), 10.0);
        assert_eq!(angular_difference(10.0, 350.0), 20.0);
        assert_eq!(angular_difference(350.0, 10.0), 20.0);
    }

    #[test]
    fn test_missing_data_scores_worst() {
        assert_eq!(score(None, Some(&wind(90.0, 10.0))), Rating::MIN);
        assert_eq!(score(Some(90.0), None), Rating::MIN);
        assert_eq!(score(None, None), Rating::MIN);

        let no_direction = WindSample {
            speed: Some(9.0),
            ..Default::default()
        };
        assert_eq!(score(Some(90.0), Some(&no_direction)), Rating::MIN);
    }

    #[test]
    fn test_bearing_zero_is_a_real_bearing() {
        // Wind from the south pushes a northbound rider
        assert_eq!(score(Some(0.0), Some(&wind(180.0, 8.0))).value(), 5);
    }

    #[rstest]
    #[case(0.0)]
    #[case(45.0)]
    #[case(90.0)]
    #[case(179.0)]
    #[case(270.0)]
    #[case(359.0)]
    fn test_perfect_tailwind(#[case] bearing: f64) {
        let from = (bearing + 180.0) % 360.0;
        assert_eq!(score(Some(bearing), Some(&wind(from, 6.0))).value(), 5);
    }

    #[rstest]
    #[case(0.0)]
    #[case(90.0)]
    #[case(200.0)]
    #[case(359.0)]
    fn test_wind_from_travel_bearing_is_headwind(#[case] bearing: f64) {
        assert_eq!(score(Some(bearing), Some(&wind(bearing, 10.0))).value(), 1);
    }

    #[rstest]
    // bearing, wind from, speed, expected
    #[case(90.0, 270.0, 8.0, 5)]
    #[case(90.0, 270.0, 5.0, 4)]
    #[case(90.0, 315.0, 5.1, 5)] // 45° off, edge of the cone
    #[case(90.0, 316.0, 9.0, 3)] // 46° off
    #[case(90.0, 0.0, 9.0, 3)] // 90° off
    #[case(90.0, 1.0, 9.0, 2)] // 91° off
    #[case(90.0, 45.0, 9.0, 2)] // 135° off
    #[case(90.0, 46.0, 9.0, 1)] // 136° off
    #[case(90.0, 90.0, 0.0, 1)]
    fn test_rating_table(
        #[case] bearing: f64,
        #[case] from: f64,
        #[case] speed: f64,
        #[case] expected: u8,
    ) {
        assert_eq!(score(Some(bearing), Some(&wind(from, speed))).value(), expected);
    }

    #[test]
    fn test_missing_speed_counts_as_light() {
        let calm = WindSample {
            deg: Some(270.0),
            ..Default::default()
        };
        assert_eq!(WindRelation::assess(Some(90.0), Some(&calm)), WindRelation::LightTailwind);
    }

    #[test]
    fn test_rating_always_in_range() {
        for bearing in (0..360).step_by(15) {
            for from in (0..360).step_by(15) {
                for speed in [0.0, 2.5, 5.0, 5.01, 12.0] {
                    let rating =
                        score(Some(f64::from(bearing)), Some(&wind(f64::from(from), speed)));
                    assert!((Rating::MIN..=Rating::MAX).contains(&rating));
                }
            }
        }
    }

    #[test]
    fn test_rating_bounds_and_serde() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(3).unwrap().to_string(), "3");
        assert_eq!(serde_json::to_string(&Rating::MAX).unwrap(), "5");
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_stars() {
        assert_eq!(Rating::new(3).unwrap().stars(), "★★★☆☆");
        assert_eq!(Rating::MAX.stars(), "★★★★★");
    }
}
