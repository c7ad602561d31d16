//! Route segment models, raw and ranked

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Forecast, LatLng};
use crate::favorability::Rating;

/// Segment identifier; upstream ids are usually numeric but strings are accepted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentId::Numeric(id) => write!(f, "{id}"),
            SegmentId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for SegmentId {
    fn from(id: u64) -> Self {
        SegmentId::Numeric(id)
    }
}

impl From<&str> for SegmentId {
    fn from(id: &str) -> Self {
        SegmentId::Text(id.to_string())
    }
}

/// A directional route segment together with its wind forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Travel bearing in degrees clockwise from North
    #[serde(default)]
    pub bearing: Option<f64>,
    #[serde(default)]
    pub start_latlng: Option<LatLng>,
    #[serde(default)]
    pub end_latlng: Option<LatLng>,
    #[serde(default)]
    pub forecast: Forecast,
    /// Upstream fields this crate does not interpret, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Segment {
    /// Create a segment with no coordinates and an empty forecast
    #[must_use]
    pub fn new(id: impl Into<SegmentId>, name: impl Into<String>, bearing: Option<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: None,
            bearing,
            start_latlng: None,
            end_latlng: None,
            forecast: Forecast::new(),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_forecast(mut self, forecast: Forecast) -> Self {
        self.forecast = forecast;
        self
    }

    #[must_use]
    pub fn with_endpoints(mut self, start: LatLng, end: LatLng) -> Self {
        self.start_latlng = Some(start);
        self.end_latlng = Some(end);
        self
    }

    /// Bearing from the start to the end coordinate, when both are known
    #[must_use]
    pub fn endpoint_bearing(&self) -> Option<f64> {
        match (&self.start_latlng, &self.end_latlng) {
            (Some(start), Some(end)) => Some(start.bearing_to(end)),
            _ => None,
        }
    }

    /// Straight-line length between the endpoints in km
    #[must_use]
    pub fn length_km(&self) -> Option<f64> {
        match (&self.start_latlng, &self.end_latlng) {
            (Some(start), Some(end)) => Some(start.distance_km(end)),
            _ => None,
        }
    }
}

/// A segment annotated with its favorability for one forecast day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSegment {
    #[serde(flatten)]
    pub segment: Segment,
    pub rating: Rating,
    /// Cardinal label of the wind origin, or `"Unknown"`
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "windSpeedKmh")]
    pub wind_speed_kmh: f64,
}
