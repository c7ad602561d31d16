//! Wind favorability engine
//!
//! This module holds the only domain logic in the crate:
//! - Direction classification of wind bearings into compass sectors
//! - Tailwind/headwind scoring of a wind sample against a travel bearing
//! - Ranking of whole segment collections for a selected forecast day
//!
//! Everything here is pure and synchronous. Missing data never fails; it
//! degrades to the worst rating and an `"Unknown"` direction label.

pub mod direction;
pub mod ranking;
pub mod scorer;

pub use direction::{CardinalDirection, UNKNOWN_LABEL, classify, direction_label};
pub use ranking::{rank, split_top};
pub use scorer::{Rating, WindRelation, angular_difference, score};
