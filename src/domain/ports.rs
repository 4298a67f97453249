use crate::domain::model::{Coordinate, DirectionsRoute};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> &str;
    fn ors_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    /// `None` leaves upstream calls without a timeout.
    fn timeout_seconds(&self) -> Option<u64>;
}

/// A routing service that turns an ordered list of waypoints into one route.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Waypoints must be forwarded in the given order.
    async fn directions(&self, waypoints: &[Coordinate]) -> Result<DirectionsRoute>;
}
