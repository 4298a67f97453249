use crate::domain::model::{Coordinate, DirectionsRequest, DirectionsResponse, DirectionsRoute};
use crate::domain::ports::{ConfigProvider, DirectionsProvider};
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ORS_ENDPOINT: &str =
    "https://api.openrouteservice.org/v2/directions/driving-car/optimized";

const ACCEPT_VALUE: &str =
    "application/json, application/geo+json, application/gpx+xml, application/direction-me+json";
const CONTENT_TYPE_VALUE: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone)]
pub struct OrsClient {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl OrsClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_VALUE));
        let mut auth = HeaderValue::from_str(api_key).map_err(|e| {
            RelayError::InvalidConfigValueError {
                field: "api_key".to_string(),
                value: "<redacted>".to_string(),
                reason: format!("not a valid header value: {}", e),
            }
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
            headers,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.ors_endpoint(),
            config.api_key(),
            config.timeout_seconds().map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DirectionsProvider for OrsClient {
    async fn directions(&self, waypoints: &[Coordinate]) -> Result<DirectionsRoute> {
        let body = DirectionsRequest {
            coordinates: waypoints.to_vec(),
        };

        tracing::debug!("Making directions request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        tracing::debug!("Directions response status: {}", response.status());
        let response = response.error_for_status()?;

        let parsed: DirectionsResponse = response.json().await?;
        parsed
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RelayError::UpstreamResponseError {
                message: "response contains no routes".to_string(),
            })
    }
}
