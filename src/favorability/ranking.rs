//! Ranking of segments by wind favorability for one forecast day

use tracing::{debug, instrument};

use super::direction::direction_label;
use super::scorer::score;
use crate::models::{RankedSegment, Segment};

/// Output keys written by [`RankedSegment`]; stale copies in the input are dropped
const ANNOTATION_KEYS: [&str; 3] = ["rating", "windDirection", "windSpeedKmh"];

impl RankedSegment {
    /// Annotate a copy of `segment` with its favorability for `day`
    ///
    /// The first sample of the day is representative; a missing day, an empty
    /// day or a null first entry all count as no wind data.
    #[must_use]
    pub fn annotate(segment: &Segment, day: &str) -> Self {
        let wind = segment.forecast.first_sample(day);

        let mut segment_copy = segment.clone();
        for key in ANNOTATION_KEYS {
            segment_copy.extra.remove(key);
        }

        Self {
            segment: segment_copy,
            rating: score(segment.bearing, wind),
            wind_direction: direction_label(wind),
            wind_speed_kmh: wind.map_or(0.0, |sample| sample.speed_kmh()),
        }
    }
}

/// Rank segments from most to least favorable for `day`
///
/// Segments with equal ratings keep their input order.
#[must_use]
#[instrument(level = "debug", skip(segments), fields(count = segments.len()))]
pub fn rank(segments: &[Segment], day: &str) -> Vec<RankedSegment> {
    let mut ranked: Vec<RankedSegment> = segments
        .iter()
        .map(|segment| RankedSegment::annotate(segment, day))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.rating.cmp(&a.rating));

    if let Some(best) = ranked.first() {
        debug!(
            "Best segment for {}: {} (rating {})",
            day, best.segment.name, best.rating
        );
    }

    ranked
}

/// Split a ranked list into the leading `n` segments and the rest
#[must_use]
pub fn split_top(ranked: &[RankedSegment], n: usize) -> (&[RankedSegment], &[RankedSegment]) {
    ranked.split_at(n.min(ranked.len()))
}
