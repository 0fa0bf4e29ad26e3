//! Recommendation providers
//!
//! Structured, localized guidance derived from a score result. The localized
//! provider builds two blocks:
//! - Immediate actions (0-6 hours): up to three event-specific actions
//! - Preparedness (6-24 hours): supplies and shelter reminders

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::localization::LocalizationCatalog;
use crate::metrics::AlertLevel;
use crate::scorer::ScoreResult;

const IMMEDIATE_ACTION_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Localized priority phrase ("High Risk" etc.)
    pub priority: String,
    pub category: String,
    pub actions: Vec<String>,
    pub timeline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_context: Option<String>,
}

/// Produces guidance for a scored region/event pair
pub trait RecommendationProvider: Send + Sync {
    fn recommend(
        &self,
        result: &ScoreResult,
        region: &str,
        event_type: &str,
        language: &str,
    ) -> Vec<Recommendation>;
}

/// Recommendations assembled from the localization catalog
pub struct LocalizedRecommendationProvider {
    catalog: Arc<LocalizationCatalog>,
}

impl LocalizedRecommendationProvider {
    pub fn new(catalog: Arc<LocalizationCatalog>) -> Self {
        Self { catalog }
    }
}

impl RecommendationProvider for LocalizedRecommendationProvider {
    fn recommend(
        &self,
        result: &ScoreResult,
        region: &str,
        event_type: &str,
        language: &str,
    ) -> Vec<Recommendation> {
        let catalog = &self.catalog;

        let mut immediate = catalog.localized_recommendations(event_type, language);
        immediate.truncate(IMMEDIATE_ACTION_COUNT);
        if immediate.is_empty() {
            immediate.push(catalog.translate("stayIndoors", language));
        }

        // Preparedness never ranks above the immediate block
        let preparedness_level = result.alert_level.min(AlertLevel::Warning);

        vec![
            Recommendation {
                priority: catalog.translate_phrase(result.alert_level.risk_phrase(), language),
                category: catalog.translate("immediateActions", language),
                actions: immediate,
                timeline: "0-6 hours".to_string(),
                regional_context: catalog.regional_alert(region, event_type, language),
            },
            Recommendation {
                priority: catalog.translate_phrase(preparedness_level.risk_phrase(), language),
                category: catalog.translate("preparedness", language),
                actions: vec![
                    catalog.translate("emergencySupplies", language),
                    catalog.translate("stayIndoors", language),
                ],
                timeline: "6-24 hours".to_string(),
                regional_context: None,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::Observation;
    use crate::scorer::ScoringEngine;

    fn provider() -> LocalizedRecommendationProvider {
        LocalizedRecommendationProvider::new(Arc::new(LocalizationCatalog::builtin()))
    }

    fn critical_result() -> ScoreResult {
        let obs = Observation {
            temperature: 45.0,
            humidity: 90.0,
            wind_speed: 120.0,
            pressure: 970.0,
            cloud_cover: 100.0,
            precipitation_intensity: 60.0,
            storm_activity: 95.0,
        };
        ScoringEngine::default()
            .score_observation(&obs, "Chennai, Tamil Nadu", "Cyclone")
            .unwrap()
    }

    #[test]
    fn test_two_blocks_in_tamil() {
        let recs = provider().recommend(&critical_result(), "Chennai, Tamil Nadu", "Cyclone", "ta");

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].priority, "அதிக ஆபத்து");
        assert_eq!(recs[0].actions.len(), 3);
        assert_eq!(recs[0].timeline, "0-6 hours");
        assert!(recs[0].regional_context.as_deref().unwrap().contains("சென்னை"));

        assert_eq!(recs[1].priority, "நடுத்தர ஆபத்து");
        assert_eq!(recs[1].timeline, "6-24 hours");
        assert_eq!(recs[1].actions.len(), 2);
    }

    #[test]
    fn test_unknown_event_falls_back_to_shelter() {
        let result = ScoringEngine::default()
            .score_observation(&Observation::FALLBACK, "Pune, Maharashtra", "Hailstorm")
            .unwrap();
        let recs = provider().recommend(&result, "Pune, Maharashtra", "Hailstorm", "en");

        assert_eq!(recs[0].priority, "Low Risk");
        assert_eq!(recs[0].actions, vec!["Stay indoors and safe".to_string()]);
        assert!(recs[0].regional_context.is_none());
        assert_eq!(recs[1].priority, "Low Risk");
    }
}
