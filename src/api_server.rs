// Axum API Server Module
//
// Purpose: REST API over the scoring engine, localized alerts and
// recommendations, and prediction history.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::alerts::generate_alerts;
use crate::guidance::{community_impact, ethical_considerations};
use crate::config::{ObservationSource, ScoringConfig, ServerSettings};
use crate::error::ScoringError;
use crate::localization::LocalizationCatalog;
use crate::observation::{Observation, ObservationInput};
use crate::providers::{
    FixtureObservationProvider, InMemoryStore, LocalizedRecommendationProvider, NewPrediction,
    ObservationProvider, PersistenceStore, RecommendationProvider, SimulatedObservationProvider,
};
use crate::scorer::{ScoreRequest, ScoreResult, ScoringEngine};

/// Provider observations are reused for this long per region/event pair
const OBSERVATION_TTL_SECS: u64 = 30 * 60;
const DEFAULT_HISTORY_LIMIT: usize = 20;
const MAX_HISTORY_LIMIT: usize = 100;
/// Horizon reported with every prediction
const PREDICTION_TIMEFRAME: &str = "48-72 hours";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScoringEngine>,
    pub catalog: Arc<LocalizationCatalog>,
    pub observations: Arc<dyn ObservationProvider>,
    pub recommendations: Arc<dyn RecommendationProvider>,
    pub store: Arc<dyn PersistenceStore>,
    /// `weather:{region}:{eventType}` → provider observation
    pub cache: Cache<String, Observation>,
}

impl AppState {
    pub fn new(settings: &ServerSettings) -> anyhow::Result<Self> {
        tracing::info!("Loading scoring configuration...");
        let config = match &settings.scoring_config {
            Some(path) => ScoringConfig::load(path)?,
            None => ScoringConfig::default(),
        };

        tracing::info!("Loading localization catalog...");
        let catalog = match &settings.localization {
            Some(path) => LocalizationCatalog::load(path)?,
            None => LocalizationCatalog::builtin(),
        };
        tracing::info!("Loaded {} languages", catalog.languages().len());

        let observations: Arc<dyn ObservationProvider> = match settings.observation_source {
            ObservationSource::Fixture => Arc::new(FixtureObservationProvider::new()),
            ObservationSource::Simulated => {
                Arc::new(SimulatedObservationProvider::new(settings.simulation_seed))
            }
        };
        tracing::info!("Observation provider: {}", observations.name());

        tracing::info!("Prediction history capacity: {}", settings.history_capacity);
        let store = Arc::new(InMemoryStore::with_max_records(settings.history_capacity));

        Ok(Self::from_parts(ScoringEngine::new(config), catalog, observations).with_store(store))
    }

    /// Assemble state from ready-made parts, with an empty in-memory store
    pub fn from_parts(
        engine: ScoringEngine,
        catalog: LocalizationCatalog,
        observations: Arc<dyn ObservationProvider>,
    ) -> Self {
        let catalog = Arc::new(catalog);

        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(OBSERVATION_TTL_SECS))
            .build();

        Self {
            engine: Arc::new(engine),
            recommendations: Arc::new(LocalizedRecommendationProvider::new(catalog.clone())),
            catalog,
            observations,
            store: Arc::new(InMemoryStore::new()),
            cache,
        }
    }

    /// Replace the prediction store
    pub fn with_store(mut self, store: Arc<dyn PersistenceStore>) -> Self {
        self.store = store;
        self
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Scoring endpoints
        .route("/api/weather/score", post(score_weather))
        .route("/api/weather/score/batch", post(score_weather_batch))

        // Full prediction (alerts, recommendations, history record)
        .route("/api/weather/predict", post(predict_weather))
        .route("/api/weather/history", get(prediction_history))

        .route("/api/languages", get(list_languages))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// JSON body extractor whose rejections render as `{"error": ...}`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, Deserialize)]
pub struct BatchScoreRequest {
    pub requests: Vec<ScoreRequest>,
}

/// One batch entry: a score, or the reason the request was rejected
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BatchItem {
    Scored(ScoreResult),
    Rejected { error: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub region: String,
    pub event_type: String,
    /// Omitted: conditions come from the observation provider
    #[serde(default)]
    pub observation: Option<ObservationInput>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub region: Option<String>,
    pub limit: Option<usize>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "observationSource": state.observations.name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn score_weather(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    let engine = state.engine.clone();

    tracing::info!("Scoring {} for {}", payload.event_type, payload.region);

    let result = tokio::task::spawn_blocking(move || engine.score(&payload))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(result))
}

async fn score_weather_batch(
    State(state): State<AppState>,
    AppJson(payload): AppJson<BatchScoreRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let engine = state.engine.clone();
    let batch_size = payload.requests.len();

    tracing::info!("Scoring batch of {} requests", batch_size);

    // CPU-bound work: run Rayon on the blocking thread pool
    let results = tokio::task::spawn_blocking(move || engine.score_batch_parallel(&payload.requests))
        .await
        .map_err(|e| AppError::Internal(format!("Rayon task failed: {}", e)))?;

    let items: Vec<BatchItem> = results
        .into_iter()
        .map(|result| match result {
            Ok(score) => BatchItem::Scored(score),
            Err(e) => BatchItem::Rejected { error: e.to_string() },
        })
        .collect();

    Ok(Json(serde_json::json!({
        "count": batch_size,
        "results": items,
    })))
}

async fn predict_weather(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PredictRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let language = state.catalog.resolve_language(payload.language.as_deref()).to_string();

    let observation = match payload.observation {
        Some(input) => Observation::try_from(input)?,
        None => observe_cached(&state, &payload.region, &payload.event_type).await?,
    };

    tracing::info!("Predicting {} for {} ({})", payload.event_type, payload.region, language);

    let engine = state.engine.clone();
    let (region, event_type) = (payload.region.clone(), payload.event_type.clone());
    let result = tokio::task::spawn_blocking(move || engine.score_observation(&observation, &region, &event_type))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    let region = payload.region.as_str();
    let event_type = payload.event_type.as_str();

    let alerts = generate_alerts(result.alert_level, event_type, region, &language, &state.catalog);
    let recommendations = state.recommendations.recommend(&result, region, event_type, &language);

    let record = state.store.store_prediction(NewPrediction {
        region: payload.region.clone(),
        event_type: payload.event_type.clone(),
        severity_score: result.severity_score,
        economic_impact: result.economic_impact,
        alert_level: result.alert_level,
        observation,
        language: language.clone(),
    })?;

    Ok(Json(serde_json::json!({
        "prediction": {
            "id": record.id,
            "region": region,
            "eventType": event_type,
            "severityScore": result.severity_score,
            "economicImpact": result.economic_impact,
            "alertLevel": result.alert_level,
            "timeframe": PREDICTION_TIMEFRAME,
            "createdAt": record.created_at.to_rfc3339(),
        },
        "observation": observation,
        "riskFactors": result.risk_factors,
        "alerts": alerts,
        "recommendations": recommendations,
        "ethicalConsiderations": ethical_considerations(&language, &state.catalog),
        "communityImpact": community_impact(result.alert_level, region, &language, &state.catalog),
        "regionalAlert": state.catalog.regional_alert(region, event_type, &language),
        "regionalFactors": state.catalog.regional_factors(region),
        "language": language,
        "direction": state.catalog.language_direction(&language),
    })))
}

/// Provider observation for a region/event pair, cached for 30 minutes
async fn observe_cached(state: &AppState, region: &str, event_type: &str) -> Result<Observation, AppError> {
    let cache_key = format!("weather:{}:{}", region, event_type);

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(cached);
    }

    let provider = state.observations.clone();
    let (region, event_type) = (region.to_string(), event_type.to_string());
    let observation = tokio::task::spawn_blocking(move || provider.observe(&region, &event_type))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    state.cache.insert(cache_key, observation).await;

    Ok(observation)
}

async fn prediction_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT).min(MAX_HISTORY_LIMIT);
    let records = state.store.recent_predictions(params.region.as_deref(), limit)?;

    Ok(Json(serde_json::json!({
        "rows": records.len(),
        "data": records,
    })))
}

async fn list_languages(State(state): State<AppState>) -> impl IntoResponse {
    let languages: Vec<serde_json::Value> = state
        .catalog
        .languages()
        .iter()
        .map(|l| {
            serde_json::json!({
                "code": l.code,
                "name": l.name,
                "nativeName": l.native_name,
                "direction": state.catalog.language_direction(&l.code),
            })
        })
        .collect();

    Json(serde_json::json!({ "languages": languages }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    /// Well-formed request with unusable content (422)
    Validation(String),
    /// Body is not valid JSON (400)
    BadRequest(String),
    /// Any other extractor rejection, with its own status
    Rejected(StatusCode, String),
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::Validation(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => AppError::BadRequest(e.body_text()),
            other => AppError::Rejected(other.status(), other.body_text()),
        }
    }
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        if err.is_validation() {
            AppError::Validation(err.to_string())
        } else {
            tracing::error!("{}", err);
            AppError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Rejected(status, msg) => (status, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
