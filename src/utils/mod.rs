//! Utility modules for scoring
//!
//! Contains shared functionality used across multiple metrics:
//! - Normalization: unit scaling, severity clamp, cent rounding
//! - Lookup tables: built-in region and event multipliers

pub mod normalization;
pub mod lookup_tables;

// Re-export commonly used items
pub use normalization::{normalize, percent_of_scale, clamp_severity, round_to_cents, MIN_SEVERITY, MAX_SEVERITY};
pub use lookup_tables::{Multiplier, to_map, REGION_MULTIPLIERS, EVENT_MULTIPLIERS, DEFAULT_MULTIPLIER};
