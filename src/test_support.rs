use std::{sync::Arc, time::Duration};

use chrono::{TimeZone, Utc};
use clap::Parser;

use crate::{
    app::{preferences::PreferenceStore, state::Services},
    cli::Cli,
    data::{backend::BackendClient, geolocation::DisabledGeolocator},
    domain::weather::{
        ConditionCategory, CurrentConditions, ForecastPoint, UnitSystem, WeatherSnapshot,
    },
};

/// Nothing listens on the discard port, so any fetch fails fast.
pub(crate) const UNREACHABLE_API: &str = "http://127.0.0.1:9";

pub(crate) fn test_cli(args: &[&str]) -> Cli {
    let mut argv = vec!["weatherwise", "--no-persist", "--no-geolocation"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

pub(crate) fn test_services(store: PreferenceStore) -> Services {
    Services {
        backend: BackendClient::new(UNREACHABLE_API, Duration::from_secs(1))
            .expect("http client"),
        geolocator: Arc::new(DisabledGeolocator),
        store,
    }
}

pub(crate) fn sample_current() -> CurrentConditions {
    CurrentConditions {
        location_name: "Gaya".to_string(),
        country_code: "IN".to_string(),
        description: "haze".to_string(),
        condition: ConditionCategory::Haze,
        temp: 24.4,
        feels_like: 24.9,
        humidity_pct: 61,
        wind_speed: 2.57,
        pressure_hpa: 1014,
        visibility_m: 3000,
        sunrise: 1_770_857_000,
        sunset: 1_770_898_000,
    }
}

/// `count` three-hourly points starting 2026-02-12T00:00Z.
pub(crate) fn sample_points(count: usize) -> Vec<ForecastPoint> {
    let start = Utc
        .with_ymd_and_hms(2026, 2, 12, 0, 0, 0)
        .single()
        .expect("valid fixture time")
        .timestamp();
    (0..count)
        .map(|idx| ForecastPoint {
            epoch_seconds: start + idx as i64 * 3 * 3600,
            temp: 18.0 + (idx % 8) as f64,
            humidity_pct: 50 + (idx % 8) as u8,
            wind_speed: 3.2,
            condition: ConditionCategory::Clear,
            description: "clear sky".to_string(),
        })
        .collect()
}

pub(crate) fn snapshot_with_points(units: UnitSystem, count: usize) -> WeatherSnapshot {
    WeatherSnapshot {
        current: sample_current(),
        forecast: sample_points(count),
        units,
        fetched_at: Utc::now(),
    }
}
