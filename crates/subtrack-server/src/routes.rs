//! HTTP routes and handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, routing::post, Json, Router};
use serde::Deserialize;
use tracing::error;

use crate::error::ServiceError;
use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/subscription", post(handle_create))
        .route("/subscription/:user_name", get(handle_list))
        .route("/subscription/:user_name/:date", get(handle_status))
        .with_state(state)
}

/// Create-subscription request body.
///
/// Fields are optional so missing ones get a descriptive rejection
/// instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
struct CreateSubscriptionRequest {
    plan_id: Option<String>,
    user_name: Option<String>,
    start_date: Option<String>,
}

async fn handle_health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "UP" })))
}

async fn handle_create(
    State(state): State<AppState>,
    Json(body): Json<CreateSubscriptionRequest>,
) -> Response {
    let Some(user_name) = body.user_name.as_deref().filter(|s| !s.trim().is_empty()) else {
        return failure(StatusCode::BAD_REQUEST, "enter a user name");
    };
    let Some(plan_id) = body.plan_id.as_deref().filter(|s| !s.trim().is_empty()) else {
        return failure(StatusCode::BAD_REQUEST, "enter a plan id");
    };
    let Some(start_date) = body.start_date.as_deref().filter(|s| !s.trim().is_empty()) else {
        return failure(StatusCode::BAD_REQUEST, "enter a start date in YYYY-MM-DD format");
    };

    match state
        .service
        .create_subscription(user_name, plan_id, start_date)
        .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "status": "SUCCESS",
                "amount": created.amount,
            })),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

async fn handle_status(
    State(state): State<AppState>,
    Path((user_name, date)): Path<(String, String)>,
) -> Response {
    match state.service.status_on(&user_name, &date).await {
        Ok(status) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "SUCCESS",
                "data": status,
            })),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

async fn handle_list(State(state): State<AppState>, Path(user_name): Path<String>) -> Response {
    match state.service.history(&user_name).await {
        // An empty history is still a successful, empty listing.
        Ok(periods) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "SUCCESS",
                "data": periods,
            })),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Map a service error onto the wire contract.
fn error_response(err: ServiceError) -> Response {
    match err {
        ServiceError::Validation(_) => failure(StatusCode::BAD_REQUEST, &err.to_string()),
        ServiceError::UserNotFound(_) | ServiceError::NoActivePlan(_) => {
            failure(StatusCode::NOT_FOUND, &err.to_string())
        }
        ServiceError::Persistence { amount, ref source } => {
            error!(error = %source, "subscription persistence failed");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "status": "FAILURE",
                    "msg": err.to_string(),
                    "amount": amount,
                })),
            )
                .into_response()
        }
        ServiceError::Store(ref source) => {
            error!(error = %source, "subscription operation failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

fn failure(code: StatusCode, msg: &str) -> Response {
    (
        code,
        Json(serde_json::json!({
            "status": "FAILURE",
            "msg": msg,
        })),
    )
        .into_response()
}
