pub mod relay;
pub mod summary;

pub use crate::domain::model::{Coordinate, RouteRequest, RouteResponse, RouteSummary};
pub use crate::domain::ports::{ConfigProvider, DirectionsProvider};
pub use crate::utils::error::Result;
