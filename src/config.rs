//! Scoring configuration
//!
//! Weights, normalization scales, thresholds and multiplier tables are data,
//! not code: a `ScoringConfig` is built once at startup (defaults, or a JSON
//! file layered over the defaults) and handed to the engine.
//!
//! Server settings are read from environment variables by `ServerSettings`.

use serde::{Deserialize, Serialize};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::providers::store::DEFAULT_MAX_RECORDS;
use crate::utils::lookup_tables::{to_map, REGION_MULTIPLIERS, EVENT_MULTIPLIERS};

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    pub weights: SeverityWeights,
    pub scales: NormalizationScales,
    pub risk_thresholds: RiskThresholds,
    pub alert_thresholds: AlertThresholds,
    /// City name → multiplier. Replaces the built-in table when present in a file.
    pub region_multipliers: FxHashMap<String, f64>,
    /// Event type → multiplier. Replaces the built-in table when present in a file.
    pub event_multipliers: FxHashMap<String, f64>,
    /// Append a Humidity risk factor after the four fixed ones (dashboard variant)
    pub include_humidity_factor: bool,
}

/// Weight of each normalized reading in the severity sum (sum to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeverityWeights {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub storm_activity: f64,
}

/// Full-scale value each reading is divided by before weighting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizationScales {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub storm_activity: f64,
}

/// Readings strictly above these values escalate a risk factor's status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskThresholds {
    pub wind_speed_high: f64,
    pub storm_activity_critical: f64,
    pub precipitation_high: f64,
    pub temperature_extreme: f64,
    pub humidity_high: f64,
}

/// Severity cut-offs (inclusive lower bounds) for alert levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertThresholds {
    pub critical: f64,
    pub warning: f64,
    /// Disabled by default: severities below `warning` classify as None
    pub watch: Option<f64>,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            temperature: 0.20,
            humidity: 0.15,
            wind_speed: 0.25,
            precipitation: 0.20,
            storm_activity: 0.20,
        }
    }
}

impl SeverityWeights {
    fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("windSpeed", self.wind_speed),
            ("precipitation", self.precipitation),
            ("stormActivity", self.storm_activity),
        ]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().map(|(_, w)| w).sum()
    }
}

impl Default for NormalizationScales {
    fn default() -> Self {
        Self {
            temperature: 50.0,
            humidity: 100.0,
            wind_speed: 100.0,
            precipitation: 50.0,
            storm_activity: 100.0,
        }
    }
}

impl NormalizationScales {
    fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("windSpeed", self.wind_speed),
            ("precipitation", self.precipitation),
            ("stormActivity", self.storm_activity),
        ]
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            wind_speed_high: 30.0,
            storm_activity_critical: 70.0,
            precipitation_high: 25.0,
            temperature_extreme: 40.0,
            humidity_high: 80.0,
        }
    }
}

impl RiskThresholds {
    fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("windSpeedHigh", self.wind_speed_high),
            ("stormActivityCritical", self.storm_activity_critical),
            ("precipitationHigh", self.precipitation_high),
            ("temperatureExtreme", self.temperature_extreme),
            ("humidityHigh", self.humidity_high),
        ]
    }
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            critical: 7.0,
            warning: 5.0,
            watch: None,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: SeverityWeights::default(),
            scales: NormalizationScales::default(),
            risk_thresholds: RiskThresholds::default(),
            alert_thresholds: AlertThresholds::default(),
            region_multipliers: to_map(REGION_MULTIPLIERS),
            event_multipliers: to_map(EVENT_MULTIPLIERS),
            include_humidity_factor: false,
        }
    }
}

impl ScoringConfig {
    /// Load configuration from a JSON file.
    ///
    /// Missing keys keep their defaults; a present multiplier table replaces
    /// the built-in one entirely.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring config: {:?}", path))?;

        Self::from_json(&contents)
            .with_context(|| format!("Invalid scoring config: {:?}", path))
    }

    /// Parse and check configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScoringConfig = serde_json::from_str(json)
            .with_context(|| "Failed to parse scoring config JSON")?;
        config.check()?;
        Ok(config)
    }

    /// Verify the invariants the engine relies on.
    ///
    /// Non-negative weights keep severity monotonic in every reading;
    /// non-negative multipliers keep economic impact non-negative.
    pub fn check(&self) -> Result<()> {
        for (name, weight) in self.weights.as_array() {
            if !weight.is_finite() || weight < 0.0 {
                anyhow::bail!("Weight for {} must be a non-negative number, got {}", name, weight);
            }
        }

        let total = self.weights.total();
        if (total - 1.0).abs() > 1e-6 {
            tracing::warn!("Severity weights sum to {:.4}, not 1.0", total);
        }

        for (name, scale) in self.scales.as_array() {
            if !scale.is_finite() || scale <= 0.0 {
                anyhow::bail!("Normalization scale for {} must be positive, got {}", name, scale);
            }
        }

        for (name, threshold) in self.risk_thresholds.as_array() {
            if !threshold.is_finite() {
                anyhow::bail!("Risk threshold {} must be a finite number, got {}", name, threshold);
            }
        }

        let t = &self.alert_thresholds;
        let alert_cutoffs = [("critical", Some(t.critical)), ("warning", Some(t.warning)), ("watch", t.watch)];
        for (name, cutoff) in alert_cutoffs {
            if let Some(value) = cutoff.filter(|v| !v.is_finite()) {
                anyhow::bail!("Alert threshold {} must be a finite number, got {}", name, value);
            }
        }

        if t.critical < t.warning {
            anyhow::bail!(
                "Critical threshold ({}) must not be below warning threshold ({})",
                t.critical, t.warning
            );
        }
        if let Some(watch) = t.watch {
            if watch > t.warning {
                anyhow::bail!(
                    "Watch threshold ({}) must not be above warning threshold ({})",
                    watch, t.warning
                );
            }
        }

        for (key, factor) in self.region_multipliers.iter().chain(self.event_multipliers.iter()) {
            if !factor.is_finite() || *factor < 0.0 {
                anyhow::bail!("Multiplier for '{}' must be a non-negative number, got {}", key, factor);
            }
        }

        Ok(())
    }
}

// ============================================================================
// Server settings
// ============================================================================

/// Where the server gets observations when a request does not carry one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationSource {
    /// Fixed fallback conditions
    Fixture,
    /// Seeded random conditions in the dashboard's ranges
    Simulated,
}

impl ObservationSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fixture" => Some(ObservationSource::Fixture),
            "simulated" => Some(ObservationSource::Simulated),
            _ => None,
        }
    }
}

/// Server configuration read from the environment
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    /// Optional JSON file layered over the default `ScoringConfig`
    pub scoring_config: Option<PathBuf>,
    /// Optional JSON file replacing the built-in localization catalog
    pub localization: Option<PathBuf>,
    pub observation_source: ObservationSource,
    pub simulation_seed: u64,
    /// Predictions retained for the history endpoint
    pub history_capacity: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            scoring_config: None,
            localization: None,
            observation_source: ObservationSource::Fixture,
            simulation_seed: 42,
            history_capacity: DEFAULT_MAX_RECORDS,
        }
    }
}

impl ServerSettings {
    /// Read settings from PORT, SCORING_CONFIG, LOCALIZATION_FILE,
    /// OBSERVATION_SOURCE, SIMULATION_SEED and HISTORY_CAPACITY
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let observation_source = match lookup("OBSERVATION_SOURCE") {
            Some(raw) => ObservationSource::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("Unknown OBSERVATION_SOURCE '{}', using fixture data", raw);
                ObservationSource::Fixture
            }),
            None => defaults.observation_source,
        };

        let simulation_seed = lookup("SIMULATION_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.simulation_seed);

        let history_capacity = lookup("HISTORY_CAPACITY")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.history_capacity);

        Self {
            port,
            scoring_config: lookup("SCORING_CONFIG").map(PathBuf::from),
            localization: lookup("LOCALIZATION_FILE").map(PathBuf::from),
            observation_source,
            simulation_seed,
            history_capacity,
        }
    }
}
