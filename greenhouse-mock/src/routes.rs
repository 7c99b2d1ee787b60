use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::device::{Actuator, Command, MockDevice};

#[derive(Clone)]
pub struct AppState {
    pub device: Arc<RwLock<MockDevice>>,
}

/// Same HTTP surface as the real controller. Every successful request
/// answers the full status JSON; the dashboard treats each response as a
/// wholesale replacement.
pub fn create_app(device: Arc<RwLock<MockDevice>>) -> Router {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/:actuator/threshold", get(set_threshold))
        .route("/api/:actuator/:command", get(apply_command))
        .layer(CorsLayer::permissive())
        .with_state(AppState { device })
}

async fn get_status(State(state): State<AppState>) -> Response {
    let device = state.device.read().await;

    Json(device.status()).into_response()
}

async fn apply_command(
    State(state): State<AppState>,
    Path((actuator, command)): Path<(String, String)>,
) -> Response {
    let Some(actuator) = Actuator::parse(&actuator) else {
        return (StatusCode::NOT_FOUND, "unknown actuator").into_response();
    };
    let Some(command) = Command::parse(&command) else {
        return (StatusCode::NOT_FOUND, "unknown command").into_response();
    };

    let mut device = state.device.write().await;
    device.apply(actuator, command);

    tracing::debug!("applied {:?} to {:?}", command, actuator);

    Json(device.status()).into_response()
}

#[derive(Debug, Deserialize)]
struct ThresholdParams {
    value: Option<f64>,
}

async fn set_threshold(
    State(state): State<AppState>,
    Path(actuator): Path<String>,
    Query(params): Query<ThresholdParams>,
) -> Response {
    let Some(actuator) = Actuator::parse(&actuator) else {
        return (StatusCode::NOT_FOUND, "unknown actuator").into_response();
    };
    let Some(value) = params.value.filter(|v| v.is_finite()) else {
        return (StatusCode::BAD_REQUEST, "value must be a finite number").into_response();
    };

    let mut device = state.device.write().await;
    if !device.set_threshold(actuator, value) {
        return (StatusCode::NOT_FOUND, "actuator has no threshold").into_response();
    }

    tracing::debug!("threshold for {:?} set to {}", actuator, value);

    Json(device.status()).into_response()
}
