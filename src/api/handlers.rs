//! HTTP request handlers for the Price Point Engine API.
//!
//! This module contains the handler for the price point endpoint and the
//! router construction, including the CORS policy from the process settings.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_price_points;

use super::request::PricePointRequest;
use super::response::{ApiError, ApiErrorResponse, PricePointsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// The CORS policy allows the configured origin for GET and POST with the
/// Content-Type and Authorization headers.
pub fn create_router(state: AppState) -> Router {
    let allow_origin = state
        .settings()
        .cors_origin
        .parse::<HeaderValue>()
        .map(AllowOrigin::exact)
        .unwrap_or_else(|_| AllowOrigin::any());

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/price-points", post(price_points_handler))
        .layer(cors)
        .with_state(state)
}

/// Handler for POST /api/price-points.
///
/// Validates the request body, runs the calculation, and returns the four
/// discount tiers in schedule order.
async fn price_points_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing price point request");

    // Handle JSON parsing errors before validation
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let message = match rejection {
                JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
                JsonRejection::JsonDataError(err) => err.body_text(),
                JsonRejection::MissingJsonContentType(_) => {
                    "Content-Type must be application/json".to_string()
                }
                _ => "Failed to parse request body".to_string(),
            };
            warn!(
                correlation_id = %correlation_id,
                error = %message,
                "Malformed request body"
            );
            return (StatusCode::BAD_REQUEST, Json(ApiError::new(message))).into_response();
        }
    };

    let request = match PricePointRequest::from_value(&body) {
        Ok(request) => request,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error,
                "Request validation failed"
            );
            return ApiErrorResponse::from_error(error, state.settings().is_production())
                .into_response();
        }
    };

    let price_points = calculate_price_points(
        &request.departure_airport_code,
        &request.arrival_airport_code,
        request.price,
    );

    info!(
        correlation_id = %correlation_id,
        departure = %request.departure_airport_code,
        arrival = %request.arrival_airport_code,
        price = %request.price,
        "Price points calculated"
    );

    (StatusCode::OK, Json(PricePointsResponse { price_points })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(Settings::default())
    }

    fn valid_body() -> String {
        json!({
            "DepartureAirportCode": "LHR",
            "ArrivalAirportCode": "LAX",
            "DepartureTime": "2025-10-10T10:00:00Z",
            "ArrivalTime": "2025-10-10T14:00:00Z",
            "Price": 1000,
            "Currency": "GBP"
        })
        .to_string()
    }

    fn post_request(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/price-points")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200_with_four_tiers() {
        let router = create_router(create_test_state());

        let response = router.oneshot(post_request(valid_body())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PricePointsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.price_points.len(), 4);
        let points: Vec<u64> = result
            .price_points
            .iter()
            .map(|p| p.points_required)
            .collect();
        assert_eq!(points, vec![7143, 17858, 25000, 35715]);
    }

    #[tokio::test]
    async fn test_missing_departure_code_returns_400_naming_field() {
        let router = create_router(create_test_state());

        let mut body: Value = serde_json::from_str(&valid_body()).unwrap();
        body.as_object_mut().unwrap().remove("DepartureAirportCode");

        let response = router
            .oneshot(post_request(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.error, "\"DepartureAirportCode\" is required");
        assert!(error.code.is_none());
    }

    #[tokio::test]
    async fn test_string_price_returns_400() {
        let router = create_router(create_test_state());

        let mut body: Value = serde_json::from_str(&valid_body()).unwrap();
        body["Price"] = json!("a lot");

        let response = router
            .oneshot(post_request(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.error, "\"Price\" must be a number");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_request("{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert!(error.error.contains("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_astronomical_price_still_returns_200() {
        // The boundary admits any finite JSON number, so the calculation
        // must absorb extreme prices instead of panicking mid-request.
        let router = create_router(create_test_state());

        let mut body: Value = serde_json::from_str(&valid_body()).unwrap();
        body["Price"] = json!(1e28);

        let response = router
            .oneshot(post_request(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PricePointsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.price_points.len(), 4);
        assert!(result.price_points.iter().all(|p| p.points_required > 0));
    }

    #[tokio::test]
    async fn test_unknown_route_uses_default_rate() {
        let router = create_router(create_test_state());

        let mut body: Value = serde_json::from_str(&valid_body()).unwrap();
        body["DepartureAirportCode"] = json!("XXX");
        body["ArrivalAirportCode"] = json!("YYY");

        let response = router
            .oneshot(post_request(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PricePointsResponse = serde_json::from_slice(&body).unwrap();

        // ceil(200 / 0.02) = 10000 on the default rate
        assert_eq!(result.price_points[0].points_required, 10000);
    }
}
