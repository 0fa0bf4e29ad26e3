//! ECONOMIC IMPACT ESTIMATE
//!
//! impact = round(severity × 0.3 × regionMultiplier × eventMultiplier, 2)
//!
//! **Region lookup**: the key is everything before the first comma of the
//! region string ("Mumbai, Maharashtra" → "Mumbai"), matched exactly and
//! case-sensitively with no trimming. Anything not in the table, including
//! "mumbai" or " Mumbai", falls back to multiplier 1.0.

use rustc_hash::FxHashMap;
use crate::utils::{round_to_cents, DEFAULT_MULTIPLIER};

/// Currency units per severity point before multipliers
pub const BASE_COST_PER_SEVERITY: f64 = 0.3;

/// City component of a "City, State" region string
pub fn city_key(region: &str) -> &str {
    region.split(',').next().unwrap_or(region)
}

/// Multiplier for the region's city, or 1.0 when the city is not listed
pub fn region_multiplier(region: &str, table: &FxHashMap<String, f64>) -> f64 {
    let city = city_key(region);
    match table.get(city) {
        Some(factor) => *factor,
        None => {
            tracing::debug!("No region multiplier for city '{}' (region '{}'), using default", city, region);
            DEFAULT_MULTIPLIER
        }
    }
}

/// Multiplier for the event type, or 1.0 when the event type is not listed
pub fn event_multiplier(event_type: &str, table: &FxHashMap<String, f64>) -> f64 {
    match table.get(event_type) {
        Some(factor) => *factor,
        None => {
            tracing::debug!("No event multiplier for '{}', using default", event_type);
            DEFAULT_MULTIPLIER
        }
    }
}

/// Calculate the economic impact for a severity in a region/event context.
///
/// Negative severities are floored at zero so the estimate is never negative.
pub fn compute_economic_impact(
    severity: f64,
    region: &str,
    event_type: &str,
    region_multipliers: &FxHashMap<String, f64>,
    event_multipliers: &FxHashMap<String, f64>,
) -> f64 {
    let base_cost = severity.max(0.0) * BASE_COST_PER_SEVERITY;
    let impact = base_cost
        * region_multiplier(region, region_multipliers)
        * event_multiplier(event_type, event_multipliers);

    round_to_cents(impact)
}
