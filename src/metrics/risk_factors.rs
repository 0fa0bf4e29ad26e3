//! RISK FACTOR BREAKDOWN
//!
//! Per-dimension risk values (0-100 display scale) with a status label.
//! Order is a display contract: Wind Speed, Storm Activity, Precipitation,
//! Temperature, then Humidity when the dashboard variant is enabled.
//!
//! **Values are not all capped**: storm activity is passed through and
//! precipitation is doubled, so an out-of-range reading shows as > 100.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use crate::config::RiskThresholds;
use crate::observation::Observation;
use crate::utils::percent_of_scale;

/// Wind speed (km/h) shown as 100% on the display scale
pub const WIND_SPEED_FULL_SCALE: f64 = 50.0;

/// Temperature (°C) shown as 100% on the display scale
pub const TEMPERATURE_FULL_SCALE: f64 = 45.0;

/// Risk factors for one observation (at most five, kept on the stack)
pub type RiskFactors = SmallVec<[RiskFactor; 5]>;

/// Named dimension of a risk breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactorKind {
    #[serde(rename = "Wind Speed")]
    WindSpeed,
    #[serde(rename = "Storm Activity")]
    StormActivity,
    #[serde(rename = "Precipitation")]
    Precipitation,
    #[serde(rename = "Temperature")]
    Temperature,
    #[serde(rename = "Humidity")]
    Humidity,
}

impl RiskFactorKind {
    /// Chart color used by the dashboard
    pub fn color(&self) -> &'static str {
        match self {
            RiskFactorKind::WindSpeed => "#FF6A00",
            RiskFactorKind::StormActivity => "#D89F7B",
            RiskFactorKind::Precipitation => "#BFA2DB",
            RiskFactorKind::Temperature => "#A3C9A8",
            RiskFactorKind::Humidity => "#7FB7BE",
        }
    }
}

/// Status label attached to a risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    Low,
    Moderate,
    High,
    Critical,
    Extreme,
    Normal,
}

/// One entry of the risk breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub name: RiskFactorKind,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub status: RiskStatus,
}

impl RiskFactor {
    fn new(kind: RiskFactorKind, value: f64, status: RiskStatus) -> Self {
        Self {
            name: kind,
            value,
            color: Some(kind.color().to_string()),
            status,
        }
    }
}

/// Pick `above` when `reading` is strictly greater than `threshold`
fn status_for(reading: f64, threshold: f64, above: RiskStatus, otherwise: RiskStatus) -> RiskStatus {
    if reading > threshold { above } else { otherwise }
}

/// Calculate the ordered risk breakdown for an observation
pub fn compute_risk_factors(
    observation: &Observation,
    thresholds: &RiskThresholds,
    include_humidity: bool,
) -> RiskFactors {
    let mut factors = RiskFactors::new();

    factors.push(RiskFactor::new(
        RiskFactorKind::WindSpeed,
        percent_of_scale(observation.wind_speed, WIND_SPEED_FULL_SCALE),
        status_for(observation.wind_speed, thresholds.wind_speed_high, RiskStatus::High, RiskStatus::Moderate),
    ));

    factors.push(RiskFactor::new(
        RiskFactorKind::StormActivity,
        observation.storm_activity,
        status_for(observation.storm_activity, thresholds.storm_activity_critical, RiskStatus::Critical, RiskStatus::Moderate),
    ));

    factors.push(RiskFactor::new(
        RiskFactorKind::Precipitation,
        observation.precipitation_intensity * 2.0,
        status_for(observation.precipitation_intensity, thresholds.precipitation_high, RiskStatus::High, RiskStatus::Low),
    ));

    factors.push(RiskFactor::new(
        RiskFactorKind::Temperature,
        percent_of_scale(observation.temperature, TEMPERATURE_FULL_SCALE),
        status_for(observation.temperature, thresholds.temperature_extreme, RiskStatus::Extreme, RiskStatus::Normal),
    ));

    if include_humidity {
        factors.push(RiskFactor::new(
            RiskFactorKind::Humidity,
            observation.humidity.min(100.0),
            status_for(observation.humidity, thresholds.humidity_high, RiskStatus::High, RiskStatus::Normal),
        ));
    }

    factors
}
