//! Community guidance
//!
//! Localized ethical considerations and a community impact profile attached
//! to a prediction. Everything is looked up from the catalog; nothing here
//! depends on the observation beyond its alert level.

use serde::{Deserialize, Serialize};
use crate::localization::LocalizationCatalog;
use crate::metrics::AlertLevel;

/// Aspects covered, in response order
const ETHICAL_ASPECTS: [&str; 3] = ["vulnerablePopulations", "resourceAllocation", "communitySupport"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthicalConsideration {
    pub aspect: String,
    pub consideration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityImpact {
    /// Localized risk phrase for the alert level
    pub infrastructure_risk: String,
    pub economic_sectors: Vec<String>,
    pub community_resources: Vec<String>,
}

pub fn ethical_considerations(language: &str, catalog: &LocalizationCatalog) -> Vec<EthicalConsideration> {
    ETHICAL_ASPECTS
        .iter()
        .map(|aspect| EthicalConsideration {
            aspect: catalog.translate(aspect, language),
            consideration: catalog.ethical_guidance(aspect, language),
        })
        .collect()
}

pub fn community_impact(
    level: AlertLevel,
    region: &str,
    language: &str,
    catalog: &LocalizationCatalog,
) -> CommunityImpact {
    CommunityImpact {
        infrastructure_risk: catalog.translate_phrase(level.risk_phrase(), language),
        economic_sectors: catalog.economic_sectors(region, language),
        community_resources: catalog.community_resources(language),
    }
}
