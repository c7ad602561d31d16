//! Wind sample model and unit conversion

use serde::{Deserialize, Serialize};

/// Factor from meters per second to kilometers per hour
pub const MS_TO_KMH: f64 = 3.6;

/// A single forecast wind observation
///
/// Every field is optional because upstream providers omit values freely.
/// A missing `speed` counts as calm; a missing `deg` leaves the sample unratable.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct WindSample {
    /// Direction the wind is coming from, degrees clockwise from North
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deg: Option<f64>,
    /// Wind speed in m/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Gust speed in m/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gust: Option<f64>,
}

impl WindSample {
    /// Create a sample with both direction and speed present
    #[must_use]
    pub fn new(deg: f64, speed: f64) -> Self {
        Self {
            deg: Some(deg),
            speed: Some(speed),
            gust: None,
        }
    }

    /// Wind speed in m/s, zero when absent
    #[must_use]
    pub fn speed_ms(&self) -> f64 {
        self.speed.unwrap_or(0.0)
    }

    /// Wind speed in km/h, zero when absent
    #[must_use]
    pub fn speed_kmh(&self) -> f64 {
        ms_to_kmh(self.speed_ms())
    }

    /// Bearing the wind is blowing towards, if the direction is known
    #[must_use]
    pub fn travel_bearing(&self) -> Option<f64> {
        self.deg.map(|deg| (deg + 180.0).rem_euclid(360.0))
    }
}

/// Convert m/s to km/h without rounding
#[must_use]
pub fn ms_to_kmh(speed_ms: f64) -> f64 {
    speed_ms * MS_TO_KMH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_conversion() {
        assert_eq!(WindSample::new(270.0, 8.0).speed_kmh(), 28.8);
        assert_eq!(ms_to_kmh(0.0), 0.0);
        assert!((ms_to_kmh(4.0) - 14.4).abs() < 1e-12);
    }

    #[test]
    fn test_missing_speed_is_calm() {
        let sample = WindSample {
            deg: Some(90.0),
            ..Default::default()
        };
        assert_eq!(sample.speed_ms(), 0.0);
        assert_eq!(sample.speed_kmh(), 0.0);
    }

    #[test]
    fn test_travel_bearing() {
        assert_eq!(WindSample::new(270.0, 1.0).travel_bearing(), Some(90.0));
        assert_eq!(WindSample::new(180.0, 1.0).travel_bearing(), Some(0.0));
        assert_eq!(WindSample::default().travel_bearing(), None);
    }

    #[test]
    fn test_deserialize_partial_sample() {
        let sample: WindSample = serde_json::from_str(r#"{"speed": 3.2}"#).unwrap();
        assert_eq!(sample.deg, None);
        assert_eq!(sample.speed, Some(3.2));
    }
}
