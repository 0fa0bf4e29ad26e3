// API Integration Tests
//
// Purpose: Exercise every endpoint through the router with in-memory state
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use climate_scorer::providers::{FixtureObservationProvider, InMemoryStore};
    use climate_scorer::{create_router, AppState, LocalizationCatalog, Observation, ScoringEngine};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt; // for oneshot

    fn storm_conditions() -> Observation {
        Observation {
            temperature: 45.0,
            humidity: 90.0,
            wind_speed: 120.0,
            pressure: 970.0,
            cloud_cover: 100.0,
            precipitation_intensity: 60.0,
            storm_activity: 95.0,
        }
    }

    fn test_state() -> AppState {
        let provider = FixtureObservationProvider::new()
            .with_region("Chennai, Tamil Nadu", storm_conditions());
        AppState::from_parts(
            ScoringEngine::default(),
            LocalizationCatalog::builtin(),
            Arc::new(provider),
        )
    }

    // Helper: Create test app with fixture observations
    fn create_test_app() -> axum::Router {
        create_router(test_state())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn fallback_observation() -> Value {
        json!({
            "temperature": 32.0,
            "humidity": 75.0,
            "windSpeed": 15.0,
            "pressure": 1013.0,
            "cloudCover": 60.0,
            "precipitationIntensity": 20.0,
            "stormActivity": 30.0
        })
    }

    // =========================================================================
    // Section 1: Health + Languages
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["observationSource"], "fixture");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_languages() {
        let response = create_test_app().oneshot(get("/api/languages")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let languages = body["languages"].as_array().unwrap();
        assert_eq!(languages.len(), 10);

        let kashmiri = languages.iter().find(|l| l["code"] == "ks").unwrap();
        assert_eq!(kashmiri["direction"], "rtl");
    }

    // =========================================================================
    // Section 2: Scoring
    // =========================================================================

    #[tokio::test]
    async fn test_score_fallback_conditions() {
        let request = json!({
            "region": "Mumbai, Maharashtra",
            "eventType": "Cyclone",
            "observation": fallback_observation()
        });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/score", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert!((body["severityScore"].as_f64().unwrap() - 4.18).abs() < 1e-9);
        assert_eq!(body["economicImpact"].as_f64().unwrap(), 6.27);
        assert_eq!(body["alertLevel"], "None");

        let factors = body["riskFactors"].as_array().unwrap();
        let names: Vec<&str> = factors.iter().map(|f| f["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Wind Speed", "Storm Activity", "Precipitation", "Temperature"]);
    }

    #[tokio::test]
    async fn test_score_warning() {
        let request = json!({
            "region": "Mumbai, Maharashtra",
            "eventType": "Cyclone",
            "observation": {
                "temperature": 40.0,
                "humidity": 80.0,
                "windSpeed": 50.0,
                "pressure": 1000.0,
                "cloudCover": 90.0,
                "precipitationIntensity": 25.0,
                "stormActivity": 60.0
            }
        });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/score", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert!((body["severityScore"].as_f64().unwrap() - 6.25).abs() < 1e-9);
        assert_eq!(body["alertLevel"], "Warning");
    }

    #[tokio::test]
    async fn test_score_missing_field_is_unprocessable() {
        let mut observation = fallback_observation();
        observation.as_object_mut().unwrap().remove("stormActivity");

        let request = json!({
            "region": "Kochi, Kerala",
            "eventType": "Flood",
            "observation": observation
        });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/score", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("stormActivity"));
    }

    #[tokio::test]
    async fn test_score_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/weather/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"region\": "))
            .unwrap();
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = json_response(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_score_wrong_field_type_is_json_error() {
        let mut observation = fallback_observation();
        observation["temperature"] = json!("hot");

        let request = json!({
            "region": "Mumbai, Maharashtra",
            "eventType": "Cyclone",
            "observation": observation
        });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/score", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = json_response(response).await;
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert!(body["error"].as_str().unwrap().contains("temperature"));
    }

    #[tokio::test]
    async fn test_predict_wrong_field_type_is_json_error() {
        let request = json!({ "region": "Kochi, Kerala", "eventType": 7 });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/predict", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("eventType"));
    }

    #[tokio::test]
    async fn test_score_batch() {
        let request = json!({
            "requests": [
                { "region": "Mumbai, Maharashtra", "eventType": "Cyclone", "observation": fallback_observation() },
                { "region": "Kochi, Kerala", "eventType": "Flood", "observation": { "temperature": 30.0 } },
                { "region": "Unknown City, Nowhere", "eventType": "Unknown", "observation": fallback_observation() }
            ]
        });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/score/batch", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["economicImpact"].as_f64().unwrap(), 6.27);
        assert!(results[1]["error"].as_str().unwrap().contains("humidity"));
        assert_eq!(results[2]["economicImpact"].as_f64().unwrap(), 1.25);
    }

    // =========================================================================
    // Section 3: Prediction + History
    // =========================================================================

    #[tokio::test]
    async fn test_predict_from_provider_is_critical() {
        let request = json!({ "region": "Chennai, Tamil Nadu", "eventType": "Flood", "language": "ta" });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/predict", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["prediction"]["severityScore"].as_f64().unwrap(), 10.0);
        assert_eq!(body["prediction"]["economicImpact"].as_f64().unwrap(), 9.0);
        assert_eq!(body["prediction"]["alertLevel"], "Critical");
        assert_eq!(body["observation"]["windSpeed"].as_f64().unwrap(), 120.0);
        assert_eq!(body["language"], "ta");

        let alerts = body["alerts"].as_array().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["color"], "#FF6A00");
        assert!(alerts[0]["message"].as_str().unwrap().contains("சென்னை"));

        assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
        assert!(body["regionalAlert"].is_string());
        assert!(body["regionalFactors"].is_array());
    }

    #[tokio::test]
    async fn test_predict_includes_community_guidance() {
        let request = json!({ "region": "Chennai, Tamil Nadu", "eventType": "Cyclone", "language": "ta" });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/predict", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["prediction"]["timeframe"], "48-72 hours");

        let considerations = body["ethicalConsiderations"].as_array().unwrap();
        assert_eq!(considerations.len(), 3);
        assert_eq!(considerations[0]["aspect"], "Vulnerable Populations");
        let text = considerations[0]["consideration"].as_str().unwrap();
        assert_ne!(text, "Follow ethical guidelines");

        let impact = &body["communityImpact"];
        assert_eq!(impact["infrastructureRisk"], "அதிக ஆபத்து");
        assert_eq!(impact["economicSectors"][0], "வாகனத் தொழில்");
        assert_eq!(impact["communityResources"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_predict_community_guidance_defaults() {
        let request = json!({
            "region": "Pune, Maharashtra",
            "eventType": "Hailstorm",
            "observation": fallback_observation(),
            "language": "ks"
        });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/predict", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let impact = &body["communityImpact"];
        assert_eq!(impact["economicSectors"], json!(["Agriculture", "Services", "Manufacturing"]));
        assert_eq!(impact["communityResources"][0], "Community Centers");
    }

    #[tokio::test]
    async fn test_predict_unsupported_language_falls_back() {
        let request = json!({
            "region": "Mumbai, Maharashtra",
            "eventType": "Cyclone",
            "observation": fallback_observation(),
            "language": "fr"
        });
        let response = create_test_app()
            .oneshot(post_json("/api/weather/predict", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["language"], "en");
        assert!(body["alerts"].as_array().unwrap().is_empty());
        assert_eq!(body["regionalFactors"][0], "Urban heat islands");
    }

    #[tokio::test]
    async fn test_history_records_predictions() {
        let app = create_test_app();

        for region in ["Mumbai, Maharashtra", "Kochi, Kerala", "Mumbai, Maharashtra"] {
            let request = json!({ "region": region, "eventType": "Cyclone" });
            let response = app
                .clone()
                .oneshot(post_json("/api/weather/predict", request))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .clone()
            .oneshot(get("/api/weather/history?region=Mumbai,%20Maharashtra&limit=5"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["rows"], 2);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data[0]["id"], 3);
        assert_eq!(data[1]["id"], 1);

        let response = app.oneshot(get("/api/weather/history?limit=1")).await.unwrap();
        let body = json_response(response).await;
        assert_eq!(body["rows"], 1);
    }

    #[tokio::test]
    async fn test_history_is_bounded_by_store_capacity() {
        let state = test_state().with_store(Arc::new(InMemoryStore::with_max_records(2)));
        let app = create_router(state);

        for region in ["Mumbai, Maharashtra", "Kochi, Kerala", "Chennai, Tamil Nadu"] {
            let request = json!({ "region": region, "eventType": "Flood" });
            let response = app
                .clone()
                .oneshot(post_json("/api/weather/predict", request))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(get("/api/weather/history?limit=10")).await.unwrap();
        let body = json_response(response).await;
        assert_eq!(body["rows"], 2);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data[0]["id"], 3);
        assert_eq!(data[1]["id"], 2);
    }
}
