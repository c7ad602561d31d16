//! Data models for segwind
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates of segment endpoints
//! - Wind: Single forecast wind samples and unit conversion
//! - Forecast: Ordered per-day wind samples
//! - Segment: Raw and ranked route segments

pub mod forecast;
pub mod location;
pub mod segment;
pub mod wind;

// Re-export all public types for convenient access
pub use forecast::{Forecast, ForecastDay, day_display_name};
pub use location::LatLng;
pub use segment::{RankedSegment, Segment, SegmentId};
pub use wind::{MS_TO_KMH, WindSample, ms_to_kmh};
