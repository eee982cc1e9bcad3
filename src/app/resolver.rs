use tracing::{info, warn};

use crate::{
    data::{backend::BackendClient, geolocation::Geolocator},
    domain::weather::LocationQuery,
    error::LocationError,
};

/// City search box input. Blank input is rejected before any fetch.
pub fn resolve_search(input: &str) -> Result<LocationQuery, LocationError> {
    let city = input.trim();
    if city.is_empty() {
        return Err(LocationError::EmptyInput);
    }
    Ok(LocationQuery::city(city))
}

/// Explicit "use my location". Failures are returned for the caller to show.
pub async fn resolve_device(geolocator: &dyn Geolocator) -> Result<LocationQuery, LocationError> {
    let coords = geolocator.current_position().await?;
    Ok(LocationQuery::coords(coords))
}

/// Startup resolution: device position when available, otherwise the
/// backend's default city, or its default coordinates when no city is
/// configured. A geolocation failure is not reported here.
pub async fn resolve_startup(
    geolocator: &dyn Geolocator,
    backend: &BackendClient,
) -> Result<LocationQuery, LocationError> {
    match geolocator.current_position().await {
        Ok(coords) => return Ok(LocationQuery::coords(coords)),
        Err(err) => warn!(error = ?err, "geolocation unavailable at startup, using default location"),
    }

    let fallback = backend
        .fetch_default_location()
        .await
        .map_err(|err| LocationError::DefaultUnavailable(err.to_string()))?;
    info!(
        city = %fallback.city,
        country = fallback.country.as_deref().unwrap_or("-"),
        units = ?fallback.units,
        "using backend default location"
    );

    let city = fallback.city.trim();
    if !city.is_empty() {
        return Ok(LocationQuery::city(city));
    }
    fallback.coords.map(LocationQuery::coords).ok_or_else(|| {
        LocationError::DefaultUnavailable("no default city or coordinates configured".to_string())
    })
}
