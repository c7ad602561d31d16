//! Geographic coordinate model for segment endpoints

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair, serialized as a `[lat, lon]` array
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl From<[f64; 2]> for LatLng {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(point: LatLng) -> Self {
        [point.latitude, point.longitude]
    }
}

impl LatLng {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both values are finite and within the valid geographic ranges
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Initial great-circle bearing from `self` towards `other`, in [0, 360)
    #[must_use]
    pub fn bearing_to(&self, other: &LatLng) -> f64 {
        let delta_lon = (other.longitude - self.longitude).to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let x = delta_lon.sin() * lat2.cos();
        let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

        x.atan2(y).to_degrees().rem_euclid(360.0)
    }

    /// Haversine distance to `other` in kilometers
    #[must_use]
    pub fn distance_km(&self, other: &LatLng) -> f64 {
        haversine::distance(
            haversine::Location {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            haversine::Location {
                latitude: other.latitude,
                longitude: other.longitude,
            },
            haversine::Units::Kilometers,
        )
    }

    /// Format as a coordinate string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("[{:.4}, {:.4}]", self.latitude, self.longitude)
    }
}
