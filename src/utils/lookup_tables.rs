//! Economic Multiplier Lookup Tables
//!
//! Built-in defaults for the region and event-type multipliers applied to the
//! base cost of an event. `ScoringConfig` copies these into owned maps at
//! startup; a config file may replace either table wholesale.
//!
//! Region keys are the city part of a "City, State" region string.

use rustc_hash::FxHashMap;

/// A single multiplier entry
#[derive(Debug, Clone, Copy)]
pub struct Multiplier {
    pub key: &'static str,
    pub factor: f64,
}

/// Applied when a city or event type is not in its table
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

// ============================================================================
// EMBEDDED MULTIPLIER DATA
// ============================================================================

/// Exposure of the city's economy (density of insured assets and commerce)
pub static REGION_MULTIPLIERS: &[Multiplier] = &[
    Multiplier { key: "Mumbai", factor: 2.5 },
    Multiplier { key: "Chennai", factor: 2.0 },
    Multiplier { key: "Kolkata", factor: 1.8 },
    Multiplier { key: "Bhubaneswar", factor: 1.5 },
    Multiplier { key: "Visakhapatnam", factor: 1.6 },
    Multiplier { key: "Kochi", factor: 1.4 },
];

/// Relative damage potential of the hazard type
pub static EVENT_MULTIPLIERS: &[Multiplier] = &[
    Multiplier { key: "Cyclone", factor: 2.0 },
    Multiplier { key: "Flood", factor: 1.5 },
    Multiplier { key: "Drought", factor: 1.2 },
    Multiplier { key: "Heatwave", factor: 1.0 },
    Multiplier { key: "Heavy Rainfall", factor: 1.3 },
    Multiplier { key: "Storm Surge", factor: 1.8 },
];

/// Owned, exact-match map of an embedded table (keys stay case-sensitive)
pub fn to_map(table: &[Multiplier]) -> FxHashMap<String, f64> {
    table.iter().map(|m| (m.key.to_string(), m.factor)).collect()
}
