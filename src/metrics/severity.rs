//! SEVERITY SCORE
//!
//! Weighted sum of five normalized readings, scaled to 0-10 and clamped to
//! [1, 10]. Pressure and cloud cover are observed but do not contribute.
//!
//! | Reading                | Full scale | Weight |
//! |------------------------|-----------:|-------:|
//! | temperature            |         50 |   0.20 |
//! | humidity               |        100 |   0.15 |
//! | windSpeed              |        100 |   0.25 |
//! | precipitationIntensity |         50 |   0.20 |
//! | stormActivity          |        100 |   0.20 |

use crate::config::{NormalizationScales, SeverityWeights};
use crate::observation::Observation;
use crate::utils::{clamp_severity, normalize};

/// Calculate the severity score for an observation.
///
/// Assumes a validated observation. Never fails; readings outside their
/// typical range saturate at the clamp boundary.
pub fn compute_severity(
    observation: &Observation,
    weights: &SeverityWeights,
    scales: &NormalizationScales,
) -> f64 {
    let weighted_sum = normalize(observation.temperature, scales.temperature) * weights.temperature
        + normalize(observation.humidity, scales.humidity) * weights.humidity
        + normalize(observation.wind_speed, scales.wind_speed) * weights.wind_speed
        + normalize(observation.precipitation_intensity, scales.precipitation) * weights.precipitation
        + normalize(observation.storm_activity, scales.storm_activity) * weights.storm_activity;

    clamp_severity(weighted_sum * 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn severity(obs: &Observation) -> f64 {
        compute_severity(obs, &SeverityWeights::default(), &NormalizationScales::default())
    }

    fn calm() -> Observation {
        Observation {
            temperature: 0.0,
            humidity: 0.0,
            wind_speed: 0.0,
            pressure: 1013.0,
            cloud_cover: 0.0,
            precipitation_intensity: 0.0,
            storm_activity: 0.0,
        }
    }

    #[test]
    fn test_reference_arithmetic() {
        // 0.2*0.7 + 0.15*0.7 + 0.25*0.15 = 0.2825 → 2.825
        let obs = Observation {
            temperature: 35.0,
            humidity: 70.0,
            wind_speed: 15.0,
            pressure: 1005.0,
            cloud_cover: 0.0,
            precipitation_intensity: 0.0,
            storm_activity: 0.0,
        };
        assert_relative_eq!(severity(&obs), 2.825, epsilon = 1e-12);
    }

    #[test]
    fn test_all_zero_clamps_to_one() {
        assert_eq!(severity(&calm()), 1.0);
    }

    #[test]
    fn test_extreme_clamps_to_ten() {
        let obs = Observation {
            temperature: 60.0,
            humidity: 100.0,
            wind_speed: 250.0,
            pressure: 950.0,
            cloud_cover: 100.0,
            precipitation_intensity: 120.0,
            storm_activity: 100.0,
        };
        assert_eq!(severity(&obs), 10.0);
    }

    #[test]
    fn test_midpoints_in_range() {
        let obs = Observation {
            temperature: 25.0,
            humidity: 50.0,
            wind_speed: 50.0,
            pressure: 1000.0,
            cloud_cover: 50.0,
            precipitation_intensity: 25.0,
            storm_activity: 50.0,
        };
        let s = severity(&obs);
        assert!((1.0..=10.0).contains(&s));
        assert_relative_eq!(s, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pressure_and_cloud_cover_ignored() {
        let base = Observation::FALLBACK;
        let shifted = Observation { pressure: 960.0, cloud_cover: 5.0, ..base };
        assert_eq!(severity(&base), severity(&shifted));
    }

    #[test]
    fn test_monotonic_in_each_reading() {
        let base = Observation::FALLBACK;
        let steps = [0.0, 5.0, 10.0, 20.0, 40.0, 80.0, 160.0];

        let bumps: [fn(Observation, f64) -> Observation; 5] = [
            |o, v| Observation { temperature: o.temperature + v, ..o },
            |o, v| Observation { humidity: o.humidity + v, ..o },
            |o, v| Observation { wind_speed: o.wind_speed + v, ..o },
            |o, v| Observation { precipitation_intensity: o.precipitation_intensity + v, ..o },
            |o, v| Observation { storm_activity: o.storm_activity + v, ..o },
        ];

        for bump in bumps {
            let mut previous = f64::MIN;
            for step in steps {
                let s = severity(&bump(base, step));
                assert!(s >= previous, "severity decreased: {} < {}", s, previous);
                previous = s;
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let obs = Observation::FALLBACK;
        assert_eq!(severity(&obs).to_bits(), severity(&obs).to_bits());
    }
}
