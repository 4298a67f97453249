use crate::core::summary::summarize;
use crate::domain::model::{RouteRequest, RouteResponse, REQUIRED_POINTS};
use crate::domain::ports::DirectionsProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_exact_len;

/// Forwards a six point route request to a [`DirectionsProvider`] and reshapes the answer.
pub struct RouteRelay<D: DirectionsProvider> {
    provider: D,
}

impl<D: DirectionsProvider> RouteRelay<D> {
    pub fn new(provider: D) -> Self {
        Self { provider }
    }

    pub async fn relay(&self, request: &RouteRequest) -> Result<RouteResponse> {
        let points = validate_exact_len(request.points.as_deref(), REQUIRED_POINTS)
            .inspect_err(|e| tracing::warn!("Rejecting route request: {}", e))?;

        tracing::debug!("Forwarding {} waypoints upstream: {:?}", points.len(), points);
        let route = self
            .provider
            .directions(points)
            .await
            .inspect_err(|e| tracing::error!("Directions request failed: {}", e))?;

        let summary = summarize(&route.summary);
        tracing::info!(
            "Route computed: {}, {}",
            summary.duration_text,
            summary.distance_text
        );

        Ok(RouteResponse {
            status: "OK".to_string(),
            route: route.geometry,
            summary,
        })
    }
}
