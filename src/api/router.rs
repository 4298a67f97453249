use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, optimize_route};
use super::AppState;
use crate::core::relay::RouteRelay;
use crate::domain::ports::DirectionsProvider;

pub fn router<D: DirectionsProvider + 'static>(relay: RouteRelay<D>) -> Router {
    Router::new()
        .route("/optimize-route", post(optimize_route::<D>))
        .route("/health", get(health))
        .with_state(AppState::new(relay))
}
