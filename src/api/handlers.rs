use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::AppState;
use crate::domain::model::{RouteRequest, RouteResponse};
use crate::domain::ports::DirectionsProvider;
use crate::utils::error::{RelayError, Result};

pub async fn optimize_route<D: DirectionsProvider + 'static>(
    State(state): State<AppState<D>>,
    payload: std::result::Result<Json<RouteRequest>, JsonRejection>,
) -> Result<Json<RouteResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejecting undecodable route request: {}", rejection);
        RelayError::MalformedRequestError {
            message: rejection.body_text(),
        }
    })?;

    let response = state.relay.relay(&request).await?;
    Ok(Json(response))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
