//! Alert generation
//!
//! Turns an alert level into community-facing alert messages. Critical
//! alerts prefer the region's own alert text and carry every localized
//! safety action; warnings carry a generic message and the first two.

use serde::{Deserialize, Serialize};
use crate::localization::LocalizationCatalog;
use crate::metrics::AlertLevel;

pub const CRITICAL_COLOR: &str = "#FF6A00";
pub const WARNING_COLOR: &str = "#D89F7B";

/// Number of localized actions attached to a warning
const WARNING_ACTION_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub color: String,
    pub actions: Vec<String>,
    pub language: String,
}

/// Alerts for an already classified level. Only Warning and Critical alert.
pub fn generate_alerts(
    level: AlertLevel,
    event_type: &str,
    region: &str,
    language: &str,
    catalog: &LocalizationCatalog,
) -> Vec<Alert> {
    match level {
        AlertLevel::Critical => {
            let message = catalog
                .regional_alert(region, event_type, language)
                .unwrap_or_else(|| {
                    format!("High-risk {} approaching {}. Community action required.", event_type, region)
                });

            vec![Alert {
                level,
                message,
                color: CRITICAL_COLOR.to_string(),
                actions: catalog.localized_recommendations(event_type, language),
                language: language.to_string(),
            }]
        }
        AlertLevel::Warning => {
            let mut actions = catalog.localized_recommendations(event_type, language);
            actions.truncate(WARNING_ACTION_COUNT);

            vec![Alert {
                level,
                message: format!("Moderate {} risk for {}. Stay prepared.", event_type, region),
                color: WARNING_COLOR.to_string(),
                actions,
                language: language.to_string(),
            }]
        }
        AlertLevel::Watch | AlertLevel::None => Vec::new(),
    }
}
