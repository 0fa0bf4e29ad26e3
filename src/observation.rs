//! Observation definition and boundary validation
//!
//! An `Observation` is the fully-resolved set of weather and satellite readings
//! for one region/event request. Values arrive over the wire as
//! `ObservationInput` (every field optional) and only become an `Observation`
//! once every field is present and finite.

use serde::{Deserialize, Serialize};
use crate::error::ScoringError;

/// Weather and satellite conditions for a single scoring request.
///
/// Ranges are typical, not enforced: out-of-range values saturate the
/// severity clamp rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    // ========================================================================
    // Surface conditions
    // ========================================================================

    /// Air temperature (°C), typically 0-50
    pub temperature: f64,

    /// Relative humidity (%), 0-100
    pub humidity: f64,

    /// Sustained wind speed (km/h), >= 0
    pub wind_speed: f64,

    /// Sea-level pressure (hPa), typically 950-1050
    pub pressure: f64,

    // ========================================================================
    // Satellite-derived
    // ========================================================================

    /// Cloud cover (%), 0-100
    pub cloud_cover: f64,

    /// Precipitation intensity (mm/h equivalent), >= 0
    pub precipitation_intensity: f64,

    /// Storm activity index, 0-100
    pub storm_activity: f64,
}

impl Observation {
    /// Conditions used when no live reading is available for a region.
    pub const FALLBACK: Observation = Observation {
        temperature: 32.0,
        humidity: 75.0,
        wind_speed: 15.0,
        pressure: 1013.0,
        cloud_cover: 60.0,
        precipitation_intensity: 20.0,
        storm_activity: 30.0,
    };

    /// Field values paired with their wire names, in declaration order
    fn named_fields(&self) -> [(&'static str, f64); 7] {
        [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("windSpeed", self.wind_speed),
            ("pressure", self.pressure),
            ("cloudCover", self.cloud_cover),
            ("precipitationIntensity", self.precipitation_intensity),
            ("stormActivity", self.storm_activity),
        ]
    }

    /// Reject NaN and infinite readings. Reports the first offending field.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for (field, value) in self.named_fields() {
            if !value.is_finite() {
                return Err(ScoringError::non_finite(field));
            }
        }
        Ok(())
    }
}

/// Wire form of an observation.
///
/// Every field is optional so that a missing reading surfaces as
/// `InvalidObservation` naming the field, not as a generic parse failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationInput {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub precipitation_intensity: Option<f64>,
    pub storm_activity: Option<f64>,
}

fn require(value: Option<f64>, field: &'static str) -> Result<f64, ScoringError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(ScoringError::non_finite(field)),
        None => Err(ScoringError::missing(field)),
    }
}

impl TryFrom<ObservationInput> for Observation {
    type Error = ScoringError;

    fn try_from(input: ObservationInput) -> Result<Self, Self::Error> {
        Ok(Observation {
            temperature: require(input.temperature, "temperature")?,
            humidity: require(input.humidity, "humidity")?,
            wind_speed: require(input.wind_speed, "windSpeed")?,
            pressure: require(input.pressure, "pressure")?,
            cloud_cover: require(input.cloud_cover, "cloudCover")?,
            precipitation_intensity: require(input.precipitation_intensity, "precipitationIntensity")?,
            storm_activity: require(input.storm_activity, "stormActivity")?,
        })
    }
}

impl From<Observation> for ObservationInput {
    fn from(obs: Observation) -> Self {
        ObservationInput {
            temperature: Some(obs.temperature),
            humidity: Some(obs.humidity),
            wind_speed: Some(obs.wind_speed),
            pressure: Some(obs.pressure),
            cloud_cover: Some(obs.cloud_cover),
            precipitation_intensity: Some(obs.precipitation_intensity),
            storm_activity: Some(obs.storm_activity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_input_converts() {
        let input = ObservationInput::from(Observation::FALLBACK);
        let obs = Observation::try_from(input).unwrap();
        assert_eq!(obs, Observation::FALLBACK);
    }

    #[test]
    fn test_missing_field_is_named() {
        let input = ObservationInput {
            wind_speed: None,
            ..ObservationInput::from(Observation::FALLBACK)
        };
        match Observation::try_from(input) {
            Err(ScoringError::InvalidObservation { field, reason }) => {
                assert_eq!(field, "windSpeed");
                assert_eq!(reason, "is missing");
            }
            other => panic!("expected InvalidObservation, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let obs = Observation { storm_activity: f64::NAN, ..Observation::FALLBACK };
        let err = obs.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("stormActivity"));

        let input = ObservationInput {
            temperature: Some(f64::INFINITY),
            ..ObservationInput::default()
        };
        assert!(matches!(
            Observation::try_from(input),
            Err(ScoringError::InvalidObservation { field: "temperature", .. })
        ));
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = serde_json::to_value(Observation::FALLBACK).unwrap();
        assert_eq!(json["windSpeed"], 15.0);
        assert_eq!(json["precipitationIntensity"], 20.0);
        assert!(json.get("wind_speed").is_none());

        let input: ObservationInput = serde_json::from_str(r#"{"temperature": 30}"#).unwrap();
        assert_eq!(input.temperature, Some(30.0));
        assert_eq!(input.humidity, None);
    }
}
