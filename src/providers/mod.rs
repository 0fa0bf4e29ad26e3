//! Collaborators around the scoring engine
//!
//! - `observation`: where conditions come from
//! - `recommendation`: localized guidance for a score
//! - `store`: prediction history

pub mod observation;
pub mod recommendation;
pub mod store;

pub use observation::{ObservationProvider, FixtureObservationProvider, SimulatedObservationProvider};
pub use recommendation::{Recommendation, RecommendationProvider, LocalizedRecommendationProvider};
pub use store::{PersistenceStore, InMemoryStore, PredictionRecord, NewPrediction};
