#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use clap::Parser;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use weatherwise::{
    app::{events::AppEvent, preferences::PreferenceStore, state::{AppState, Services}},
    cli::Cli,
    data::{
        backend::BackendClient,
        geolocation::{DisabledGeolocator, Geolocator},
    },
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// 2026-02-12T00:00:00Z, a Thursday.
pub const FIXTURE_START: i64 = 1_770_854_400;
pub const THREE_HOURS: i64 = 3 * 3600;

pub fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["weatherwise", "--no-persist", "--no-geolocation"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

pub fn backend(server: &MockServer) -> BackendClient {
    BackendClient::new(server.uri(), Duration::from_secs(5)).expect("http client")
}

/// Nothing listens on the discard port, so any fetch fails fast.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Services for tests that never reach a backend.
pub fn offline_services() -> Services {
    Services {
        backend: BackendClient::new(UNREACHABLE_API, Duration::from_secs(1)).expect("http client"),
        geolocator: Arc::new(DisabledGeolocator),
        store: PreferenceStore::disabled(),
    }
}

pub fn services(server: &MockServer) -> Services {
    services_with(server, Arc::new(DisabledGeolocator), PreferenceStore::disabled())
}

pub fn services_with(
    server: &MockServer,
    geolocator: Arc<dyn Geolocator>,
    store: PreferenceStore,
) -> Services {
    Services {
        backend: backend(server),
        geolocator,
        store,
    }
}

pub fn current_body(name: &str, temp: f64) -> Value {
    json!({
        "name": name,
        "sys": { "country": "IN", "sunrise": 1_770_857_000, "sunset": 1_770_898_000 },
        "weather": [{ "main": "Haze", "description": "haze" }],
        "main": { "temp": temp, "feels_like": temp + 0.5, "humidity": 61, "pressure": 1014 },
        "wind": { "speed": 2.57 },
        "visibility": 3000
    })
}

pub fn forecast_body(count: usize, base_temp: f64) -> Value {
    let list = (0..count)
        .map(|idx| {
            json!({
                "dt": FIXTURE_START + idx as i64 * THREE_HOURS,
                "main": { "temp": base_temp + (idx % 8) as f64, "humidity": 50 + idx % 8 },
                "wind": { "speed": 3.2 },
                "weather": [{ "main": "Clear", "description": "clear sky" }]
            })
        })
        .collect::<Vec<_>>();
    json!({ "cod": "200", "list": list })
}

/// Mounts both weather endpoints for one `units` value.
pub async fn mount_weather(server: &MockServer, units: &str, current: Value, forecast: Value) {
    Mock::given(method("GET"))
        .and(path("/api/weather/current"))
        .and(query_param("units", units))
        .respond_with(ResponseTemplate::new(200).set_body_json(current))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/forecast"))
        .and(query_param("units", units))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast))
        .mount(server)
        .await;
}

/// Receives the next scheduler event and feeds it back into the state.
pub async fn pump(state: &mut AppState, tx: &mpsc::Sender<AppEvent>, rx: &mut mpsc::Receiver<AppEvent>) {
    let event = tokio::time::timeout(Duration::from_secs(10), rx.recv())
        .await
        .expect("event before timeout")
        .expect("channel open");
    state.handle_event(event, tx).await.expect("handle event");
}
