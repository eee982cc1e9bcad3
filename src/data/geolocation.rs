use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{domain::weather::Coordinates, error::LocationError};

/// One-shot device position lookup.
#[async_trait]
pub trait Geolocator: Send + Sync + std::fmt::Debug {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Resolves the position of this machine from its public IP address.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    client: Client,
    url: String,
}

impl IpGeolocator {
    pub fn new(url: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let unavailable = |detail: String| LocationError::LocationUnavailable(detail);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| unavailable(err.to_string()))?;
        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|err| unavailable(err.to_string()))?;

        let (Some(latitude), Some(longitude)) = (body.latitude, body.longitude) else {
            return Err(unavailable("lookup returned no coordinates".to_string()));
        };
        debug!(city = body.city.as_deref().unwrap_or("?"), "ip geolocation resolved");
        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}

/// Coordinates given up front, e.g. on the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator(pub Coordinates);

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// Stands in for a device without a location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeolocator;

#[async_trait]
impl Geolocator for DisabledGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::LocationUnavailable(
            "geolocation is disabled".to_string(),
        ))
    }
}
