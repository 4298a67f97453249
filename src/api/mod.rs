pub mod handlers;
pub mod router;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::core::relay::RouteRelay;
use crate::domain::model::ErrorResponse;
use crate::domain::ports::DirectionsProvider;
use crate::utils::error::RelayError;

pub struct AppState<D: DirectionsProvider> {
    pub relay: Arc<RouteRelay<D>>,
}

impl<D: DirectionsProvider> AppState<D> {
    pub fn new(relay: RouteRelay<D>) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

impl<D: DirectionsProvider> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            relay: Arc::clone(&self.relay),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::new(self.user_friendly_message()))).into_response()
    }
}

/// Resolves on ctrl-c. If the handler cannot be installed it never resolves.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Serves `router` until ctrl-c.
pub async fn serve(listener: tokio::net::TcpListener, router: axum::Router) -> std::io::Result<()> {
    serve_with_shutdown(listener, router, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(
    listener: tokio::net::TcpListener,
    router: axum::Router,
    signal: F,
) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("Shutting down route relay");
    Ok(())
}
