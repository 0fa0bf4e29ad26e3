//! Prediction persistence
//!
//! Records served predictions so recent history can be queried per region.
//! The in-memory store keeps a bounded window, dropping the oldest records
//! first; anything durable plugs in behind `PersistenceStore`.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::error::ScoringError;
use crate::metrics::AlertLevel;
use crate::observation::Observation;

/// A stored prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub id: u64,
    pub region: String,
    pub event_type: String,
    pub severity_score: f64,
    pub economic_impact: f64,
    pub alert_level: AlertLevel,
    pub observation: Observation,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller; the store assigns id and timestamp
#[derive(Debug, Clone)]
pub struct NewPrediction {
    pub region: String,
    pub event_type: String,
    pub severity_score: f64,
    pub economic_impact: f64,
    pub alert_level: AlertLevel,
    pub observation: Observation,
    pub language: String,
}

pub trait PersistenceStore: Send + Sync {
    fn store_prediction(&self, prediction: NewPrediction) -> Result<PredictionRecord, ScoringError>;

    /// Most recent predictions first, optionally for one region only
    fn recent_predictions(&self, region: Option<&str>, limit: usize) -> Result<Vec<PredictionRecord>, ScoringError>;
}

/// Records kept by `InMemoryStore::new()`
pub const DEFAULT_MAX_RECORDS: usize = 10_000;

#[derive(Debug)]
pub struct InMemoryStore {
    records: RwLock<VecDeque<PredictionRecord>>,
    max_records: usize,
    next_id: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_max_records(DEFAULT_MAX_RECORDS)
    }

    /// Keep at most `max_records` (at least one), evicting the oldest
    pub fn with_max_records(max_records: usize) -> Self {
        Self {
            records: RwLock::new(VecDeque::new()),
            max_records: max_records.max(1),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    pub fn len(&self) -> Result<usize, ScoringError> {
        self.records
            .read()
            .map(|r| r.len())
            .map_err(|e| ScoringError::Store(format!("lock poisoned: {}", e)))
    }

    pub fn is_empty(&self) -> Result<bool, ScoringError> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistenceStore for InMemoryStore {
    fn store_prediction(&self, prediction: NewPrediction) -> Result<PredictionRecord, ScoringError> {
        let record = PredictionRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            region: prediction.region,
            event_type: prediction.event_type,
            severity_score: prediction.severity_score,
            economic_impact: prediction.economic_impact,
            alert_level: prediction.alert_level,
            observation: prediction.observation,
            language: prediction.language,
            created_at: Utc::now(),
        };

        let mut records = self
            .records
            .write()
            .map_err(|e| ScoringError::Store(format!("lock poisoned: {}", e)))?;
        records.push_back(record.clone());
        while records.len() > self.max_records {
            records.pop_front();
        }

        tracing::debug!("Stored prediction {} for {}", record.id, record.region);
        Ok(record)
    }

    fn recent_predictions(&self, region: Option<&str>, limit: usize) -> Result<Vec<PredictionRecord>, ScoringError> {
        let records = self
            .records
            .read()
            .map_err(|e| ScoringError::Store(format!("lock poisoned: {}", e)))?;

        // Insertion order is chronological, so newest-first is a reverse walk
        Ok(records
            .iter()
            .rev()
            .filter(|r| region.map_or(true, |region| r.region == region))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(region: &str, severity: f64) -> NewPrediction {
        NewPrediction {
            region: region.to_string(),
            event_type: "Cyclone".to_string(),
            severity_score: severity,
            economic_impact: 0.0,
            alert_level: AlertLevel::None,
            observation: Observation::FALLBACK,
            language: "en".to_string(),
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let store = InMemoryStore::new();
        let a = store.store_prediction(prediction("Mumbai, Maharashtra", 4.0)).unwrap();
        let b = store.store_prediction(prediction("Mumbai, Maharashtra", 5.0)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_recent_newest_first_with_filter() {
        let store = InMemoryStore::new();
        store.store_prediction(prediction("Mumbai, Maharashtra", 1.0)).unwrap();
        store.store_prediction(prediction("Kochi, Kerala", 2.0)).unwrap();
        store.store_prediction(prediction("Mumbai, Maharashtra", 3.0)).unwrap();

        let mumbai = store.recent_predictions(Some("Mumbai, Maharashtra"), 10).unwrap();
        assert_eq!(mumbai.len(), 2);
        assert_eq!(mumbai[0].severity_score, 3.0);
        assert_eq!(mumbai[1].severity_score, 1.0);

        let all = store.recent_predictions(None, 2).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].severity_score, 3.0);
        assert_eq!(all[1].region, "Kochi, Kerala");
    }

    #[test]
    fn test_oldest_records_are_evicted() {
        let store = InMemoryStore::with_max_records(3);
        for severity in 1..=5 {
            store.store_prediction(prediction("Kochi, Kerala", severity as f64)).unwrap();
        }

        assert_eq!(store.len().unwrap(), 3);
        let recent = store.recent_predictions(None, 10).unwrap();
        let ids: Vec<u64> = recent.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let store = InMemoryStore::with_max_records(0);
        store.store_prediction(prediction("Kochi, Kerala", 1.0)).unwrap();
        store.store_prediction(prediction("Kochi, Kerala", 2.0)).unwrap();

        assert_eq!(store.max_records(), 1);
        assert_eq!(store.recent_predictions(None, 5).unwrap()[0].severity_score, 2.0);
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryStore::new();
        assert!(store.is_empty().unwrap());
        assert!(store.recent_predictions(Some("Kochi, Kerala"), 5).unwrap().is_empty());
    }
}
