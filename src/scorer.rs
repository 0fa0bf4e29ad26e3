//! Scoring Engine - Main coordinator for weather severity scoring
//!
//! Integrates the four metrics (severity, risk factors, economic impact,
//! alert level) behind a single interface. Includes both single-request and
//! parallel (Rayon) batch implementations.
//!
//! The engine holds only immutable configuration, so one instance can be
//! shared across request handlers and threads without coordination.

use serde::{Deserialize, Serialize};
use rayon::prelude::*;
use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::metrics::*;
use crate::observation::{Observation, ObservationInput};

/// Main scoring engine
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

/// A region/event pair with its observation, as received at the boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub region: String,
    pub event_type: String,
    pub observation: ObservationInput,
    /// Preferred language for any localized output (ISO 639 code)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Score result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Severity on [1, 10]
    pub severity_score: f64,
    /// Ordered risk breakdown (display contract)
    pub risk_factors: RiskFactors,
    /// Estimated impact in currency units, >= 0, two decimals
    pub economic_impact: f64,
    pub alert_level: AlertLevel,
}

impl ScoringEngine {
    /// Create an engine over a checked configuration
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Severity score on [1, 10] for a validated observation
    pub fn compute_severity(&self, observation: &Observation) -> f64 {
        compute_severity(observation, &self.config.weights, &self.config.scales)
    }

    /// Ordered risk breakdown for a validated observation
    pub fn compute_risk_factors(&self, observation: &Observation) -> RiskFactors {
        compute_risk_factors(
            observation,
            &self.config.risk_thresholds,
            self.config.include_humidity_factor,
        )
    }

    /// Economic impact for a severity in a region/event context
    pub fn compute_economic_impact(&self, severity: f64, region: &str, event_type: &str) -> f64 {
        compute_economic_impact(
            severity,
            region,
            event_type,
            &self.config.region_multipliers,
            &self.config.event_multipliers,
        )
    }

    /// Alert level for a severity score
    pub fn classify_alert_level(&self, severity: f64) -> AlertLevel {
        classify_alert_level(severity, &self.config.alert_thresholds)
    }

    /// Score an observation for a region/event pair.
    ///
    /// Rejects non-finite readings before any metric runs.
    pub fn score_observation(
        &self,
        observation: &Observation,
        region: &str,
        event_type: &str,
    ) -> Result<ScoreResult, ScoringError> {
        observation.validate()?;

        let severity_score = self.compute_severity(observation);
        let risk_factors = self.compute_risk_factors(observation);
        let economic_impact = self.compute_economic_impact(severity_score, region, event_type);
        let alert_level = self.classify_alert_level(severity_score);

        tracing::debug!(
            region,
            event_type,
            severity_score,
            economic_impact,
            alert_level = alert_level.as_str(),
            "Scored observation"
        );

        Ok(ScoreResult {
            severity_score,
            risk_factors,
            economic_impact,
            alert_level,
        })
    }

    /// Validate a boundary request and score it
    pub fn score(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoringError> {
        let observation = Observation::try_from(request.observation)?;
        self.score_observation(&observation, &request.region, &request.event_type)
    }

    /// Score many requests IN PARALLEL
    ///
    /// Each request is independent; results keep the input order and a
    /// rejected request does not affect the others.
    pub fn score_batch_parallel(&self, requests: &[ScoreRequest]) -> Vec<Result<ScoreResult, ScoringError>> {
        requests
            .par_iter()
            .map(|request| self.score(request))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn request(region: &str, event: &str, obs: Observation) -> ScoreRequest {
        ScoreRequest {
            region: region.to_string(),
            event_type: event.to_string(),
            observation: obs.into(),
            language: None,
        }
    }

    #[test]
    fn test_score_fallback_in_mumbai() {
        // 0.128 + 0.1125 + 0.0375 + 0.08 + 0.06 = 0.418 → 4.18
        let engine = ScoringEngine::default();
        let result = engine.score(&request("Mumbai, Maharashtra", "Cyclone", Observation::FALLBACK)).unwrap();

        assert_relative_eq!(result.severity_score, 4.18, epsilon = 1e-9);
        assert_eq!(result.economic_impact, 6.27);
        assert_eq!(result.alert_level, AlertLevel::None);
        assert_eq!(result.risk_factors.len(), 4);
    }

    #[test]
    fn test_score_critical() {
        let obs = Observation {
            temperature: 45.0,
            humidity: 90.0,
            wind_speed: 120.0,
            pressure: 970.0,
            cloud_cover: 100.0,
            precipitation_intensity: 60.0,
            storm_activity: 95.0,
        };
        let engine = ScoringEngine::default();
        let result = engine.score_observation(&obs, "Chennai, Tamil Nadu", "Flood").unwrap();

        assert_eq!(result.severity_score, 10.0);
        assert_eq!(result.economic_impact, 9.0);
        assert_eq!(result.alert_level, AlertLevel::Critical);
    }

    #[test]
    fn test_rejects_before_scoring() {
        let engine = ScoringEngine::default();
        let mut req = request("Kochi, Kerala", "Flood", Observation::FALLBACK);
        req.observation.humidity = None;

        let err = engine.score(&req).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidObservation { field: "humidity", .. }));

        let bad = Observation { wind_speed: f64::NAN, ..Observation::FALLBACK };
        assert!(engine.score_observation(&bad, "Kochi, Kerala", "Flood").is_err());
    }

    #[test]
    fn test_idempotent() {
        let engine = ScoringEngine::default();
        let req = request("Kolkata, West Bengal", "Storm Surge", Observation::FALLBACK);
        let a = engine.score(&req).unwrap();
        let b = engine.score(&req).unwrap();

        assert_eq!(a.severity_score.to_bits(), b.severity_score.to_bits());
        assert_eq!(a.economic_impact.to_bits(), b.economic_impact.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_errors() {
        let engine = ScoringEngine::default();
        let mut broken = request("Kochi, Kerala", "Flood", Observation::FALLBACK);
        broken.observation.storm_activity = None;

        let requests = vec![
            request("Mumbai, Maharashtra", "Cyclone", Observation::FALLBACK),
            broken,
            request("Unknown City, Nowhere", "Unknown", Observation::FALLBACK),
        ];
        let results = engine.score_batch_parallel(&requests);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().economic_impact, 6.27);
        assert!(results[1].is_err());
        // 4.18 * 0.3 = 1.254 → 1.25
        assert_eq!(results[2].as_ref().unwrap().economic_impact, 1.25);
    }

    #[test]
    fn test_humidity_variant_from_config() {
        let config = ScoringConfig { include_humidity_factor: true, ..ScoringConfig::default() };
        let engine = ScoringEngine::new(config);
        let factors = engine.compute_risk_factors(&Observation::FALLBACK);
        assert_eq!(factors.len(), 5);
        assert_eq!(factors[4].name, RiskFactorKind::Humidity);
    }

    #[test]
    fn test_response_shape() {
        let engine = ScoringEngine::default();
        let result = engine.score(&request("Mumbai, Maharashtra", "Cyclone", Observation::FALLBACK)).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["severityScore"].is_number());
        assert!(json["economicImpact"].is_number());
        assert_eq!(json["alertLevel"], "None");
        assert_eq!(json["riskFactors"].as_array().unwrap().len(), 4);
    }
}
