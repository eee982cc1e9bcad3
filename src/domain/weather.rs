mod conditions;
mod conversions;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub use conditions::{ConditionCategory, condition_glyph};
pub use conversions::{
    format_card_date, format_chart_label, format_clock_time, format_pressure, format_temp,
    format_visibility, format_wind_speed, local_datetime, round_temp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    #[must_use]
    pub fn temp_suffix(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    #[must_use]
    pub fn wind_suffix(self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }
}

/// The single active query target. Setting one kind replaces the other.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationQuery {
    City {
        name: String,
    },
    Coords {
        lat: f64,
        lon: f64,
    },
    #[default]
    Unset,
}

impl LocationQuery {
    pub fn city(name: impl Into<String>) -> Self {
        Self::City { name: name.into() }
    }

    #[must_use]
    pub fn coords(coords: Coordinates) -> Self {
        Self::Coords {
            lat: coords.latitude,
            lon: coords.longitude,
        }
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Query-string pairs identifying the location, without units.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::City { name } => vec![("city", name.clone())],
            Self::Coords { lat, lon } => vec![("lat", lat.to_string()), ("lon", lon.to_string())],
            Self::Unset => Vec::new(),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::City { name } => name.clone(),
            Self::Coords { lat, lon } => format!("{lat:.4}, {lon:.4}"),
            Self::Unset => "no location".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub location_name: String,
    pub country_code: String,
    pub description: String,
    pub condition: ConditionCategory,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub pressure_hpa: u32,
    pub visibility_m: u32,
    pub sunrise: i64,
    pub sunset: i64,
}

impl CurrentConditions {
    #[must_use]
    pub fn display_location(&self) -> String {
        if self.country_code.is_empty() {
            self.location_name.clone()
        } else {
            format!("{}, {}", self.location_name, self.country_code)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub epoch_seconds: i64,
    pub temp: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub condition: ConditionCategory,
    pub description: String,
}

impl ForecastPoint {
    /// Wall-clock time of the sample in `tz`, or `None` if the epoch is out of range.
    pub fn local_time<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        local_datetime(self.epoch_seconds, tz)
    }
}

pub type ForecastSeries = Vec<ForecastPoint>;

/// Joined result of one successful fetch cycle.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub forecast: ForecastSeries,
    pub units: UnitSystem,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultLocation {
    pub city: String,
    pub country: Option<String>,
    pub coords: Option<Coordinates>,
    pub units: Option<UnitSystem>,
}
