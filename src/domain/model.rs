use serde::{Deserialize, Serialize};

/// Number of waypoints a route request must carry: driver, four students, school.
pub const REQUIRED_POINTS: usize = 6;

/// Placeholder returned instead of a stop order; the relay never reorders waypoints.
pub const OPTIMIZED_ORDER_PLACEHOLDER: &str =
    "ترتیب بهینه با این API مشخص نشد. نیاز به پیاده‌سازی الگوریتم TSP در بک‌اند است.";

/// A `[longitude, latitude]` pair, serialized as a two element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lng, c.lat]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub points: Option<Vec<Coordinate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub status: String,
    pub route: serde_json::Value,
    pub summary: SummaryText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryText {
    pub duration_text: String,
    pub distance_text: String,
    pub optimized_order: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Body sent to the directions service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsRequest {
    pub coordinates: Vec<Coordinate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsRoute {
    pub geometry: serde_json::Value,
    pub summary: RouteSummary,
}

/// Totals reported by the directions service, in seconds and metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub duration: f64,
    pub distance: f64,
}
