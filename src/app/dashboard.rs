//! Display-ready view of one successful fetch. Everything the UI prints is
//! formatted here, with the unit system the data was fetched in.

use std::fmt::Display;

use chrono::TimeZone;

use crate::domain::{
    digest::{ChartSeries, chart_series, reduce_to_daily_digest},
    weather::{
        ConditionCategory, ForecastPoint, UnitSystem, WeatherSnapshot, format_card_date,
        format_clock_time, format_pressure, format_temp, format_visibility, format_wind_speed,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPanel {
    pub location: String,
    pub description: String,
    pub condition: ConditionCategory,
    pub temp: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
    pub visibility: String,
    pub sunrise: String,
    pub sunset: String,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    pub date: String,
    pub condition: ConditionCategory,
    pub temp: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub units: UnitSystem,
    pub city: String,
    pub current: CurrentPanel,
    pub cards: Vec<ForecastCard>,
    pub chart: ChartSeries,
}

impl Dashboard {
    pub fn build<Tz: TimeZone>(snapshot: &WeatherSnapshot, tz: &Tz) -> Self
    where
        Tz::Offset: Display,
    {
        let units = snapshot.units;
        let current = &snapshot.current;
        let updated = snapshot.fetched_at.with_timezone(tz);

        Self {
            units,
            city: current.location_name.clone(),
            current: CurrentPanel {
                location: current.display_location(),
                description: current.description.clone(),
                condition: current.condition,
                temp: format_temp(current.temp, units),
                feels_like: format_temp(current.feels_like, units),
                humidity: format!("{}%", current.humidity_pct),
                wind: format_wind_speed(current.wind_speed, units),
                pressure: format_pressure(current.pressure_hpa),
                visibility: format_visibility(current.visibility_m),
                sunrise: format_clock_time(current.sunrise, tz),
                sunset: format_clock_time(current.sunset, tz),
                updated: updated.format("%-I:%M:%S %p").to_string(),
            },
            cards: reduce_to_daily_digest(&snapshot.forecast, tz)
                .iter()
                .map(|point| forecast_card(point, units, tz))
                .collect(),
            chart: chart_series(&snapshot.forecast, tz),
        }
    }
}

fn forecast_card<Tz: TimeZone>(point: &ForecastPoint, units: UnitSystem, tz: &Tz) -> ForecastCard
where
    Tz::Offset: Display,
{
    ForecastCard {
        date: format_card_date(point.epoch_seconds, tz),
        condition: point.condition,
        temp: format_temp(point.temp, units),
        description: point.description.clone(),
        humidity: format!("{}%", point.humidity_pct),
        wind: format_wind_speed(point.wind_speed, units),
    }
}
