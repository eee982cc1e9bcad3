//! Pure reductions of a 3-hourly forecast series into the views the dashboard
//! draws: one card per day and a short chart window.

use chrono::{NaiveDate, TimeZone, Timelike};

use super::weather::{ForecastPoint, format_chart_label, round_temp};

pub const DIGEST_DAYS: usize = 5;
/// 24 hours at 3-hour spacing.
pub const CHART_POINTS: usize = 8;

const NOON_HOUR: i32 = 12;

pub type DailyDigest = Vec<ForecastPoint>;

/// Collapses `series` into at most five points, one per local calendar date,
/// each the sample whose hour is nearest to noon.
///
/// The input is assumed chronological, so the first five dates seen are the
/// earliest five. A later sample only replaces the kept one when it is strictly
/// closer to noon, which keeps the first-seen sample on ties.
pub fn reduce_to_daily_digest<Tz: TimeZone>(series: &[ForecastPoint], tz: &Tz) -> DailyDigest {
    let mut days: Vec<(NaiveDate, i32, &ForecastPoint)> = Vec::new();

    for point in series {
        let Some(local) = point.local_time(tz) else {
            continue;
        };
        let date = local.date_naive();
        let distance = (local.hour() as i32 - NOON_HOUR).abs();

        match days.iter_mut().find(|(day, _, _)| *day == date) {
            Some(slot) => {
                if distance < slot.1 {
                    *slot = (date, distance, point);
                }
            }
            None => days.push((date, distance, point)),
        }
    }

    days.into_iter()
        .take(DIGEST_DAYS)
        .map(|(_, _, point)| point.clone())
        .collect()
}

/// Prefix of at most `n` points; shorter series are returned whole.
#[must_use]
pub fn first_n_points(series: &[ForecastPoint], n: usize) -> &[ForecastPoint] {
    &series[..series.len().min(n)]
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub temperatures: Vec<i32>,
    pub humidity: Vec<u8>,
}

impl ChartSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(min, max)` of the temperature column.
    #[must_use]
    pub fn temperature_bounds(&self) -> Option<(i32, i32)> {
        let min = self.temperatures.iter().copied().min()?;
        let max = self.temperatures.iter().copied().max()?;
        Some((min, max))
    }
}

/// Short-horizon chart data: the first [`CHART_POINTS`] samples labelled by
/// local time of day.
pub fn chart_series<Tz: TimeZone>(series: &[ForecastPoint], tz: &Tz) -> ChartSeries
where
    Tz::Offset: std::fmt::Display,
{
    let window = first_n_points(series, CHART_POINTS);
    ChartSeries {
        labels: window
            .iter()
            .map(|p| format_chart_label(p.epoch_seconds, tz))
            .collect(),
        temperatures: window.iter().map(|p| round_temp(p.temp)).collect(),
        humidity: window.iter().map(|p| p.humidity_pct).collect(),
    }
}
