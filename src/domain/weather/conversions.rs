use chrono::{DateTime, TimeZone};

use super::UnitSystem;

#[must_use]
pub fn round_temp(value: f64) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn format_temp(value: f64, units: UnitSystem) -> String {
    format!("{}{}", round_temp(value), units.temp_suffix())
}

#[must_use]
pub fn format_wind_speed(speed: f64, units: UnitSystem) -> String {
    format!("{} {}", speed.round() as i64, units.wind_suffix())
}

#[must_use]
pub fn format_pressure(hpa: u32) -> String {
    format!("{hpa} hPa")
}

#[must_use]
pub fn format_visibility(meters: u32) -> String {
    format!("{:.1} km", f64::from(meters) / 1000.0)
}

pub fn local_datetime<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::from_timestamp(epoch_seconds, 0).map(|utc| utc.with_timezone(tz))
}

/// `6:30 AM` style clock time, `--:--` when the epoch is unusable.
pub fn format_clock_time<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    local_datetime(epoch_seconds, tz)
        .map_or_else(|| "--:--".to_string(), |t| t.format("%-I:%M %p").to_string())
}

/// Hour-only label used on chart axes, e.g. `3 PM`.
pub fn format_chart_label<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    local_datetime(epoch_seconds, tz)
        .map_or_else(|| "--".to_string(), |t| t.format("%-I %p").to_string())
}

/// Card heading, e.g. `Thu, Feb 12`.
pub fn format_card_date<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    local_datetime(epoch_seconds, tz)
        .map_or_else(|| "--".to_string(), |t| t.format("%a, %b %-d").to_string())
}
