//! Climate Scorer
//!
//! Weather severity and economic impact scoring for Indian regions.
//!
//! Module layout:
//! - `utils/`: Normalization helpers and multiplier lookup tables
//! - `metrics/`: Severity, risk factors, economic impact, alert level
//! - `scorer`: `ScoringEngine` tying the metrics together (single + Rayon batch)
//! - `localization/`: Translation catalog for the supported languages
//! - `alerts`: Alert messages for Warning/Critical levels
//! - `guidance`: Ethical considerations and community impact profile
//! - `providers/`: Observation sources, recommendations, prediction history
//! - `api_server`: Axum REST API (feature `api`)

pub mod error;
pub mod observation;
pub mod config;
pub mod utils;
pub mod metrics;
pub mod scorer;
pub mod localization;
pub mod alerts;
pub mod guidance;
pub mod providers;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::ScoringError;
pub use observation::{Observation, ObservationInput};
pub use config::{ScoringConfig, ServerSettings, ObservationSource};
pub use metrics::*;
pub use scorer::{ScoringEngine, ScoreRequest, ScoreResult};
pub use localization::LocalizationCatalog;
pub use alerts::{Alert, generate_alerts};
pub use guidance::{CommunityImpact, EthicalConsideration};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
