//! Segment dataset loading and boundary validation
//!
//! The scoring engine assumes finite, in-range numbers. This module is the
//! place where raw JSON from the fetch layer is checked before it reaches the
//! engine, and where missing bearings are filled in from segment endpoints.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::DatasetConfig;
use crate::favorability::{self, direction_label};
use crate::models::{RankedSegment, Segment, WindSample};
use crate::{Result, SegwindError};

/// Wind summary for one forecast day, taken from the first segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOverview {
    pub day: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "windSpeedKmh")]
    pub wind_speed_kmh: f64,
}

/// A validated snapshot of segments ready for ranking
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    segments: Vec<Segment>,
}

impl Dataset {
    /// Validate a list of segments, deriving missing bearings when enabled
    pub fn from_segments(segments: Vec<Segment>, options: &DatasetConfig) -> Result<Self> {
        let mut segments = segments;
        for segment in &mut segments {
            validate_segment(segment)?;
            if options.derive_bearings {
                derive_bearing(segment);
            }
            if segment.bearing.is_none() {
                warn!(
                    "Segment {} ({}) has no bearing and will be rated 1",
                    segment.id, segment.name
                );
            }
        }

        debug!("Loaded {} segments", segments.len());
        Ok(Self { segments })
    }

    /// Parse a JSON array of segments
    pub fn from_json_str(json: &str, options: &DatasetConfig) -> Result<Self> {
        let segments: Vec<Segment> = serde_json::from_str(json)?;
        Self::from_segments(segments, options)
    }

    /// Parse a JSON array of segments from any reader
    pub fn from_reader<R: Read>(reader: R, options: &DatasetConfig) -> Result<Self> {
        let segments: Vec<Segment> = serde_json::from_reader(reader)?;
        Self::from_segments(segments, options)
    }

    /// Load a JSON file of segments
    pub fn load(path: &Path, options: &DatasetConfig) -> Result<Self> {
        info!("Loading segments from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), options)
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First forecast day of the first segment
    #[must_use]
    pub fn default_day(&self) -> Option<&str> {
        self.segments
            .first()
            .and_then(|segment| segment.forecast.first_day())
    }

    /// Every day label seen in the dataset, in order of first appearance
    #[must_use]
    pub fn day_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for label in self.segments.iter().flat_map(|s| s.forecast.labels()) {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }

    /// Pick the requested day, or the default day when none is given
    ///
    /// A requested day that no segment forecasts is an error; an empty dataset
    /// has no default day and yields an empty label.
    pub fn resolve_day(&self, requested: Option<&str>) -> Result<String> {
        let labels = self.day_labels();
        match requested {
            Some(day) if labels.contains(&day) => Ok(day.to_string()),
            Some(day) => Err(SegwindError::unknown_day(day, &labels)),
            None => Ok(self.default_day().unwrap_or_default().to_string()),
        }
    }

    /// Rank the dataset for one day
    #[must_use]
    pub fn rank(&self, day: &str) -> Vec<RankedSegment> {
        favorability::rank(&self.segments, day)
    }

    /// Per-day wind summary using the first segment's forecast
    #[must_use]
    pub fn forecast_overview(&self) -> Vec<DayOverview> {
        let Some(first) = self.segments.first() else {
            return Vec::new();
        };

        first
            .forecast
            .days()
            .map(|day| {
                let wind = day.representative();
                DayOverview {
                    day: day.label.clone(),
                    wind_direction: direction_label(wind),
                    wind_speed_kmh: wind.map_or(0.0, WindSample::speed_kmh),
                }
            })
            .collect()
    }
}

/// Reject non-finite or out-of-range numbers and normalize the bearing
fn validate_segment(segment: &mut Segment) -> Result<()> {
    let id = segment.id.to_string();

    if let Some(bearing) = segment.bearing {
        if !bearing.is_finite() {
            return Err(SegwindError::validation(format!(
                "segment {id}: bearing must be a finite number"
            )));
        }
        segment.bearing = Some(bearing.rem_euclid(360.0));
    }

    let endpoints = [
        ("start_latlng", &segment.start_latlng),
        ("end_latlng", &segment.end_latlng),
    ];
    for (field, point) in endpoints {
        if let Some(point) = point {
            if !point.is_valid() {
                return Err(SegwindError::validation(format!(
                    "segment {id}: {field} {} is not a valid coordinate",
                    point.format_coordinates()
                )));
            }
        }
    }

    for day in segment.forecast.days() {
        for sample in day.samples.iter().flatten() {
            validate_sample(&id, &day.label, sample)?;
        }
    }

    Ok(())
}

fn validate_sample(id: &str, day: &str, sample: &WindSample) -> Result<()> {
    if sample.deg.is_some_and(|deg| !deg.is_finite()) {
        return Err(SegwindError::validation(format!(
            "segment {id}, {day}: wind direction must be a finite number"
        )));
    }

    for (field, value) in [("speed", sample.speed), ("gust", sample.gust)] {
        if value.is_some_and(|v| !v.is_finite() || v < 0.0) {
            return Err(SegwindError::validation(format!(
                "segment {id}, {day}: wind {field} must be a non-negative number"
            )));
        }
    }

    Ok(())
}

fn derive_bearing(segment: &mut Segment) {
    if segment.bearing.is_some() {
        return;
    }
    if let Some(bearing) = segment.endpoint_bearing() {
        debug!(
            "Derived bearing {:.2} for segment {} from its endpoints",
            bearing, segment.id
        );
        segment.bearing = Some(bearing);
    }
}
