//! Metric modules for weather scoring
//!
//! Each metric is implemented in its own module as a pure function over an
//! observation (or severity) and the relevant slice of `ScoringConfig`.

pub mod severity;
pub mod risk_factors;
pub mod economic_impact;
pub mod alert_level;

// Re-export metric functions
pub use severity::compute_severity;
pub use risk_factors::{compute_risk_factors, RiskFactor, RiskFactorKind, RiskFactors, RiskStatus};
pub use economic_impact::{compute_economic_impact, city_key, region_multiplier, event_multiplier};
pub use alert_level::{classify_alert_level, AlertLevel};
