//! `segwind` - Wind favorability ranking for directional route segments
//!
//! This library scores how favorable a forecast wind is for riding a segment
//! in its direction of travel, and ranks whole segment collections for a
//! selected forecast day.

pub mod config;
pub mod dataset;
pub mod error;
pub mod favorability;
pub mod logging;
pub mod models;
pub mod report;

// Re-export core types for public API
pub use config::SegwindConfig;
pub use dataset::{Dataset, DayOverview};
pub use error::SegwindError;
pub use favorability::{CardinalDirection, Rating, WindRelation, classify, rank, score};
pub use models::{Forecast, LatLng, RankedSegment, Segment, SegmentId, WindSample};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SegwindError>;
