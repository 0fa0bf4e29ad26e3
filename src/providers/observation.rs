//! Observation providers
//!
//! Where raw conditions come from before scoring. The fixture provider serves
//! fixed conditions (optionally per region); the simulated provider draws
//! seeded random readings for demos and load tests.

use std::sync::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use crate::error::ScoringError;
use crate::observation::Observation;

/// Source of current conditions for a region/event pair
pub trait ObservationProvider: Send + Sync {
    fn observe(&self, region: &str, event_type: &str) -> Result<Observation, ScoringError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

// ============================================================================
// Fixture provider
// ============================================================================

/// Fixed conditions, `Observation::FALLBACK` unless a region override exists
#[derive(Debug, Clone)]
pub struct FixtureObservationProvider {
    default: Observation,
    regions: FxHashMap<String, Observation>,
}

impl FixtureObservationProvider {
    pub fn new() -> Self {
        Self {
            default: Observation::FALLBACK,
            regions: FxHashMap::default(),
        }
    }

    pub fn with_region(mut self, region: &str, observation: Observation) -> Self {
        self.regions.insert(region.to_string(), observation);
        self
    }
}

impl Default for FixtureObservationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationProvider for FixtureObservationProvider {
    fn observe(&self, region: &str, _event_type: &str) -> Result<Observation, ScoringError> {
        Ok(self.regions.get(region).copied().unwrap_or(self.default))
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

// ============================================================================
// Simulated provider
// ============================================================================

/// Seeded random readings within plausible monsoon-season ranges
pub struct SimulatedObservationProvider {
    rng: Mutex<StdRng>,
}

impl SimulatedObservationProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ObservationProvider for SimulatedObservationProvider {
    fn observe(&self, region: &str, event_type: &str) -> Result<Observation, ScoringError> {
        let mut rng = self.rng.lock().map_err(|e| ScoringError::Provider {
            region: region.to_string(),
            event_type: event_type.to_string(),
            message: format!("random source poisoned: {}", e),
        })?;

        Ok(Observation {
            temperature: rng.gen_range(35.0..45.0),
            humidity: rng.gen_range(70.0..90.0),
            wind_speed: rng.gen_range(15.0..40.0),
            pressure: rng.gen_range(1000.0..1020.0),
            cloud_cover: rng.gen_range(0.0..100.0),
            precipitation_intensity: rng.gen_range(0.0..50.0),
            storm_activity: rng.gen_range(0.0..100.0),
        })
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
