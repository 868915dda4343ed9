//! HTTP Endpoints
//!
//! REST API for the car advisor. The GET routes expose each tool
//! directly for quick checks; `POST /process_query` is the main entry
//! point and runs the full intent dispatch.

use std::time::Duration;

use axum::{
    extract::{Json, Path, State},
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use car_advisor_core::{AffordabilityVerdict, CarRecord, EmiBreakdown, QueryResult, UserQuery};
use car_advisor_tools::{calculate_emi, check_affordability};

use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.config.server.cors_origins,
        state.config.server.cors_enabled,
    );

    Router::new()
        .route("/", get(root))
        .route("/cars", get(list_cars))
        // Direct tool endpoints
        .route("/emi/:principal/:rate/:tenure", get(emi_quote))
        .route("/car/:name", get(car_by_name))
        .route("/cars/budget/:max_price", get(cars_by_budget))
        .route("/rules/:emi/:income", get(affordability))
        // Main dispatch endpoint
        .route("/process_query", post(process_query))
        // Health check
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.server.timeout_seconds,
        )))
        .layer(CompressionLayer::new())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000 for safety
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(true)
}

/// Service banner with the catalog size
async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Car Advisor Backend is ready",
        "cars_count": state.catalog.len(),
    }))
}

/// Full catalog dump
async fn list_cars(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "cars": state.catalog.all() }))
}

/// EMI quote for arbitrary loan terms
async fn emi_quote(
    Path((principal, rate, tenure)): Path<(f64, f64, f64)>,
) -> Result<Json<EmiBreakdown>, ServerError> {
    let breakdown = calculate_emi(principal, rate, tenure)?;
    Ok(Json(breakdown))
}

/// Name lookup. A miss is not an HTTP error; it answers 200 with an
/// error sentinel and callers inspect the body.
async fn car_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<serde_json::Value> {
    match state.catalog.find_by_name(&name) {
        Some(car) => Json(serde_json::json!(car)),
        None => Json(serde_json::json!({ "error": "Car not found" })),
    }
}

/// Cars at or below a price, as a bare array
async fn cars_by_budget(
    State(state): State<AppState>,
    Path(max_price): Path<f64>,
) -> Json<Vec<CarRecord>> {
    Json(state.catalog.cars_within_budget(max_price))
}

/// Affordability rule for an explicit installment and income
async fn affordability(
    State(state): State<AppState>,
    Path((emi, income)): Path<(f64, f64)>,
) -> Json<AffordabilityVerdict> {
    Json(check_affordability(
        emi,
        Some(income),
        state.config.loan.affordable_income_share,
    ))
}

/// Main endpoint: classify the query and run the matching tool
async fn process_query(
    State(state): State<AppState>,
    Json(request): Json<UserQuery>,
) -> Json<QueryResult> {
    Json(state.advisor.process(&request))
}

/// Health check
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "cars_count": state.catalog.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use car_advisor_config::Settings;
    use car_advisor_tools::CarCatalog;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let catalog = CarCatalog::new(vec![
            CarRecord {
                name: "Maruti Alto".to_string(),
                price: 450_000.0,
                fuel_type: "Petrol".to_string(),
                seating_capacity: 5,
                safety_rating: "2 Star".to_string(),
                model_year: 2023,
            },
            CarRecord {
                name: "Tata Nexon".to_string(),
                price: 800_000.0,
                fuel_type: "Petrol".to_string(),
                seating_capacity: 5,
                safety_rating: "5 Star".to_string(),
                model_year: 2024,
            },
        ]);
        create_router(AppState::new(Settings::default(), catalog))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(
        router: Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_reports_catalog_size() {
        let (status, body) = get_json(test_router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cars_count"], 2);
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_json(test_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_list_cars_wrapped_in_object() {
        let (status, body) = get_json(test_router(), "/cars").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cars"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_emi_quote() {
        let (status, body) = get_json(test_router(), "/emi/1500000/9.5/5").await;
        assert_eq!(status, StatusCode::OK);
        let emi = body["emi_amount"].as_f64().unwrap();
        assert!((emi - 31_503.0).abs() < 2.0);
        assert!(body["total_payment"].is_number());
        assert!(body["total_interest"].is_number());
    }

    #[tokio::test]
    async fn test_emi_quote_zero_tenure_is_bad_request() {
        let (status, body) = get_json(test_router(), "/emi/1500000/9.5/0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Tenure"));
    }

    #[tokio::test]
    async fn test_car_lookup_case_insensitive() {
        let (status, body) = get_json(test_router(), "/car/ALTO").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Maruti Alto");
    }

    #[tokio::test]
    async fn test_car_lookup_miss_is_sentinel_not_404() {
        let (status, body) = get_json(test_router(), "/car/ferrari").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "Car not found");
    }

    #[tokio::test]
    async fn test_budget_filter_is_bare_array() {
        let (status, body) = get_json(test_router(), "/cars/budget/500000").await;
        assert_eq!(status, StatusCode::OK);
        let cars = body.as_array().unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0]["name"], "Maruti Alto");
    }

    #[tokio::test]
    async fn test_affordability_endpoint() {
        let (status, body) = get_json(test_router(), "/rules/25000/1200000").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["approved"], true);

        let (_, body) = get_json(test_router(), "/rules/40000/1200000").await;
        assert_eq!(body["approved"], false);
    }

    #[tokio::test]
    async fn test_process_query_emi_flow() {
        let (status, body) = post_json(
            test_router(),
            "/process_query",
            serde_json::json!({
                "query": "calculate emi for my car",
                "user_income": 1200000.0,
                "max_budget": 600000.0
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"], "emi_calculation");
        assert_eq!(body["user_query"], "calculate emi for my car");
        assert!(body["tool_output"]["emi_amount"].is_number());
        assert_eq!(body["safety_check"]["approved"], true);
        assert_eq!(
            body["recommended_action"],
            "Processed emi calculation successfully"
        );
    }

    #[tokio::test]
    async fn test_process_query_search_flow() {
        let (status, body) = post_json(
            test_router(),
            "/process_query",
            serde_json::json!({ "query": "find alto" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["intent"], "car_search");
        assert_eq!(body["tool_output"]["name"], "Maruti Alto");
    }

    #[tokio::test]
    async fn test_process_query_unknown_car_gives_null_output() {
        let (_, body) = post_json(
            test_router(),
            "/process_query",
            serde_json::json!({ "query": "find ferrari" }),
        )
        .await;

        assert_eq!(body["intent"], "car_search");
        assert!(body["tool_output"].is_null());
    }

    #[tokio::test]
    async fn test_process_query_general_info() {
        let (_, body) = post_json(
            test_router(),
            "/process_query",
            serde_json::json!({ "query": "hello" }),
        )
        .await;

        assert_eq!(body["intent"], "general_info");
        assert_eq!(body["tool_output"]["cars_count"], 2);
    }
}
