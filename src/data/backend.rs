use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    domain::weather::{
        ConditionCategory, Coordinates, CurrentConditions, DefaultLocation, ForecastPoint,
        LocationQuery, UnitSystem, WeatherSnapshot,
    },
    error::{Endpoint, FetchError},
};

const CURRENT_PATH: &str = "/api/weather/current";
const FORECAST_PATH: &str = "/api/weather/forecast";
const CONFIG_PATH: &str = "/api/config";

/// Client for the WeatherWise backend proxy.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client failed")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches current conditions and the forecast for `query` concurrently and
    /// joins them. Either side failing fails the whole cycle; no partial
    /// snapshot is ever returned.
    pub async fn fetch_all(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, FetchError> {
        if !query.is_set() {
            return Err(FetchError::MissingLocation);
        }

        let mut params = query.query_pairs();
        params.push(("units", units.as_query().to_string()));

        let (current, forecast) = tokio::join!(
            self.get_text(CURRENT_PATH, &params, Endpoint::Current),
            self.get_text(FORECAST_PATH, &params, Endpoint::Forecast),
        );
        let (current, forecast) = (current?, forecast?);

        let current = parse_body(Endpoint::Current, &current)?;
        let forecast = parse_body(Endpoint::Forecast, &forecast)?;
        if let Some(message) = reported_error(&current).or_else(|| reported_error(&forecast)) {
            warn!(%message, query = %query.label(), "weather service reported an error");
            return Err(FetchError::Api { message });
        }

        let current: CurrentPayload = decode(Endpoint::Current, current)?;
        let forecast: ForecastPayload = decode(Endpoint::Forecast, forecast)?;
        let snapshot = WeatherSnapshot {
            current: current.into_conditions(),
            forecast: forecast.list.into_iter().map(ForecastEntry::into_point).collect(),
            units,
            fetched_at: Utc::now(),
        };
        debug!(
            location = %snapshot.current.location_name,
            points = snapshot.forecast.len(),
            "weather fetch joined"
        );
        Ok(snapshot)
    }

    /// Backend-configured fallback location, used when geolocation is denied at startup.
    pub async fn fetch_default_location(&self) -> Result<DefaultLocation, FetchError> {
        let body = self.get_text(CONFIG_PATH, &[], Endpoint::Config).await?;
        let value = parse_body(Endpoint::Config, &body)?;
        let config: ConfigPayload = decode(Endpoint::Config, value)?;
        Ok(config.into_default_location())
    }

    async fn get_text(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        endpoint: Endpoint,
    ) -> Result<String, FetchError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|err| transport_error(endpoint, &err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_error(endpoint, &format!("status {status}")));
        }

        response
            .text()
            .await
            .map_err(|err| transport_error(endpoint, &err.to_string()))
    }
}

fn transport_error(endpoint: Endpoint, detail: &str) -> FetchError {
    warn!(%endpoint, detail, "weather request failed");
    FetchError::Transport {
        endpoint,
        detail: detail.to_string(),
    }
}

fn parse_body(endpoint: Endpoint, body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Decode {
        endpoint,
        detail: err.to_string(),
    })
}

fn decode<T: DeserializeOwned>(endpoint: Endpoint, value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|err| {
        warn!(%endpoint, error = %err, "unexpected payload shape");
        FetchError::Decode {
            endpoint,
            detail: err.to_string(),
        }
    })
}

// Mirrors the frontend rule: any present, truthy `error` field is a failure.
fn reported_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn pct(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
}

fn first_condition(blocks: Vec<ConditionBlock>) -> (ConditionCategory, String) {
    blocks
        .into_iter()
        .next()
        .map_or((ConditionCategory::Other, String::new()), |block| {
            (ConditionCategory::from_main(&block.main), block.description)
        })
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    sys: SysBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    main: CurrentMain,
    wind: WindBlock,
    #[serde(default)]
    visibility: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct SysBlock {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct CurrentMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

impl CurrentPayload {
    fn into_conditions(self) -> CurrentConditions {
        let (condition, description) = first_condition(self.weather);
        CurrentConditions {
            location_name: self.name,
            country_code: self.sys.country.unwrap_or_default(),
            description,
            condition,
            temp: self.main.temp,
            feels_like: self.main.feels_like,
            humidity_pct: pct(self.main.humidity),
            wind_speed: self.wind.speed,
            pressure_hpa: self.main.pressure.round().max(0.0) as u32,
            visibility_m: self.visibility.unwrap_or_default().round().max(0.0) as u32,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: ForecastMain,
    wind: WindBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
    humidity: f64,
}

impl ForecastEntry {
    fn into_point(self) -> ForecastPoint {
        let (condition, description) = first_condition(self.weather);
        ForecastPoint {
            epoch_seconds: self.dt,
            temp: self.main.temp,
            humidity_pct: pct(self.main.humidity),
            wind_speed: self.wind.speed,
            condition,
            description,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigPayload {
    #[serde(default)]
    default_city: String,
    #[serde(default)]
    default_country: Option<String>,
    #[serde(default)]
    default_lat: Option<f64>,
    #[serde(default)]
    default_lon: Option<f64>,
    #[serde(default)]
    default_units: Option<UnitSystem>,
}

impl ConfigPayload {
    fn into_default_location(self) -> DefaultLocation {
        let coords = match (self.default_lat, self.default_lon) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };
        DefaultLocation {
            city: self.default_city,
            country: self.default_country,
            coords,
            units: self.default_units,
        }
    }
}
