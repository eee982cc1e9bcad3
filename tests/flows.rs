mod common;

use std::sync::Arc;

use common::{cli, current_body, forecast_body, mount_weather, pump, services, services_with};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use tokio::sync::mpsc;
use weatherwise::{
    app::{
        events::AppEvent,
        preferences::PreferenceStore,
        state::{AppMode, AppState},
    },
    data::geolocation::{DisabledGeolocator, FixedGeolocator},
    domain::weather::{Coordinates, LocationQuery, UnitSystem},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn press(ch: char) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(
        KeyCode::Char(ch),
        KeyModifiers::NONE,
    )))
}

fn press_code(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[tokio::test]
async fn startup_city_renders_then_unit_toggle_refetches_imperial() {
    let server = MockServer::start().await;
    mount_weather(&server, "metric", current_body("Gaya", 24.4), forecast_body(40, 18.0)).await;
    mount_weather(&server, "imperial", current_body("Gaya", 75.9), forecast_body(40, 64.0)).await;

    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::with_services(&cli(&["Gaya"]), services(&server));

    state.handle_event(AppEvent::Bootstrap, &tx).await.expect("bootstrap");
    assert_eq!(state.mode, AppMode::Loading);
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.mode, AppMode::Displaying);
    let dashboard = state.dashboard.as_ref().expect("dashboard");
    assert_eq!(dashboard.current.temp, "24°C");
    assert_eq!(dashboard.cards.len(), 5);
    assert_eq!(dashboard.chart.len(), 8);

    state.handle_event(press('u'), &tx).await.expect("toggle");
    assert_eq!(state.units, UnitSystem::Imperial);
    pump(&mut state, &tx, &mut rx).await;

    let dashboard = state.dashboard.as_ref().expect("dashboard");
    assert_eq!(dashboard.units, UnitSystem::Imperial);
    assert_eq!(dashboard.current.temp, "76°F");
    assert!(dashboard.cards.iter().all(|card| card.temp.ends_with("°F")));
    assert!(dashboard.cards.iter().all(|card| card.wind.ends_with("mph")));
}

#[tokio::test]
async fn search_switches_city() {
    let server = MockServer::start().await;
    for (endpoint, body) in [
        ("/api/weather/current", current_body("Patna", 21.0)),
        ("/api/weather/forecast", forecast_body(40, 15.0)),
    ] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("city", "Patna"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }

    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::with_services(&cli(&[]), services(&server));

    state.handle_event(press('/'), &tx).await.expect("open search");
    for ch in "Patna".chars() {
        state.handle_event(press(ch), &tx).await.expect("type");
    }
    state
        .handle_event(press_code(KeyCode::Enter), &tx)
        .await
        .expect("submit");
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.query, LocationQuery::city("Patna"));
    assert_eq!(state.mode, AppMode::Displaying);
    assert_eq!(
        state.dashboard.as_ref().map(|d| d.city.as_str()),
        Some("Patna")
    );
}

#[tokio::test]
async fn denied_geolocation_falls_back_to_default_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "defaultCity": "Gaya",
            "defaultCountry": "IN"
        })))
        .mount(&server)
        .await;
    mount_weather(&server, "metric", current_body("Gaya", 24.4), forecast_body(40, 18.0)).await;

    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::with_services(
        &cli(&[]),
        services_with(&server, Arc::new(DisabledGeolocator), PreferenceStore::disabled()),
    );

    state.handle_event(AppEvent::Bootstrap, &tx).await.expect("bootstrap");
    pump(&mut state, &tx, &mut rx).await;
    assert_eq!(state.query, LocationQuery::city("Gaya"));
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.mode, AppMode::Displaying);
    assert_eq!(state.last_error, None);
}

#[tokio::test]
async fn device_position_is_used_at_startup() {
    let server = MockServer::start().await;
    for (endpoint, body) in [
        ("/api/weather/current", current_body("Gaya", 24.4)),
        ("/api/weather/forecast", forecast_body(40, 18.0)),
    ] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("lat", "24.79"))
            .and(query_param("lon", "84.99"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }
    let geolocator = Arc::new(FixedGeolocator(Coordinates {
        latitude: 24.79,
        longitude: 84.99,
    }));

    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::with_services(
        &cli(&[]),
        services_with(&server, geolocator, PreferenceStore::disabled()),
    );

    state.handle_event(AppEvent::Bootstrap, &tx).await.expect("bootstrap");
    pump(&mut state, &tx, &mut rx).await;
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.mode, AppMode::Displaying);
    assert_eq!(state.resolved_city.as_deref(), Some("Gaya"));
}

#[tokio::test]
async fn missing_default_location_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::with_services(&cli(&[]), services(&server));

    state.handle_event(AppEvent::Bootstrap, &tx).await.expect("bootstrap");
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(
        state.last_error.as_deref(),
        Some("Failed to load default location")
    );
}

#[tokio::test]
async fn explicit_locate_failure_keeps_previous_dashboard() {
    let server = MockServer::start().await;
    mount_weather(&server, "metric", current_body("Gaya", 24.4), forecast_body(40, 18.0)).await;

    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::with_services(&cli(&["Gaya"]), services(&server));
    state.handle_event(AppEvent::Bootstrap, &tx).await.expect("bootstrap");
    pump(&mut state, &tx, &mut rx).await;
    assert_eq!(state.mode, AppMode::Displaying);

    state.handle_event(press('l'), &tx).await.expect("locate");
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(
        state.last_error.as_deref(),
        Some("Unable to get your location. Please search for a city.")
    );
    assert!(state.dashboard.is_some());
    assert_eq!(state.query, LocationQuery::city("Gaya"));

    state.handle_event(press('x'), &tx).await.expect("dismiss");
    assert_eq!(state.mode, AppMode::Displaying);
}

#[tokio::test]
async fn stale_response_does_not_overwrite_newer_city() {
    let server = MockServer::start().await;
    for (city, delay_ms) in [("Gaya", 400), ("Patna", 0)] {
        for endpoint in ["/api/weather/current", "/api/weather/forecast"] {
            let body = if endpoint.ends_with("current") {
                current_body(city, 20.0)
            } else {
                forecast_body(40, 15.0)
            };
            Mock::given(method("GET"))
                .and(path(endpoint))
                .and(query_param("city", city))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(body)
                        .set_delay(std::time::Duration::from_millis(delay_ms)),
                )
                .mount(&server)
                .await;
        }
    }

    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::with_services(&cli(&["Gaya"]), services(&server));
    state.handle_event(AppEvent::Bootstrap, &tx).await.expect("bootstrap");

    state.handle_event(press('/'), &tx).await.expect("open search");
    for ch in "Patna".chars() {
        state.handle_event(press(ch), &tx).await.expect("type");
    }
    state
        .handle_event(press_code(KeyCode::Enter), &tx)
        .await
        .expect("submit");

    pump(&mut state, &tx, &mut rx).await;
    pump(&mut state, &tx, &mut rx).await;

    assert_eq!(
        state.dashboard.as_ref().map(|d| d.city.as_str()),
        Some("Patna")
    );
    assert_eq!(state.mode, AppMode::Displaying);
}
