//! ALERT LEVEL CLASSIFICATION
//!
//! Hard severity cut-offs: >= 7 Critical, >= 5 Warning, otherwise None.
//! Only Warning and Critical produce downstream alert messages. Watch is
//! emitted only when a watch threshold is configured.

use serde::{Deserialize, Serialize};
use crate::config::AlertThresholds;

/// Alert level, in ascending order of urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertLevel {
    None,
    Watch,
    Warning,
    Critical,
}

impl AlertLevel {
    /// Whether this level generates alert messages
    pub fn is_alerting(&self) -> bool {
        matches!(self, AlertLevel::Warning | AlertLevel::Critical)
    }

    /// English risk phrase ("High Risk" etc.), the key for phrase translation
    pub fn risk_phrase(&self) -> &'static str {
        match self {
            AlertLevel::Critical => "High Risk",
            AlertLevel::Warning | AlertLevel::Watch => "Medium Risk",
            AlertLevel::None => "Low Risk",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::None => "None",
            AlertLevel::Watch => "Watch",
            AlertLevel::Warning => "Warning",
            AlertLevel::Critical => "Critical",
        }
    }
}

/// Classify a severity score against the thresholds
pub fn classify_alert_level(severity: f64, thresholds: &AlertThresholds) -> AlertLevel {
    if severity >= thresholds.critical {
        AlertLevel::Critical
    } else if severity >= thresholds.warning {
        AlertLevel::Warning
    } else if thresholds.watch.is_some_and(|watch| severity >= watch) {
        AlertLevel::Watch
    } else {
        AlertLevel::None
    }
}
