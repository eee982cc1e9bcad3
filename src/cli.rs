#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::weather::UnitSystem;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_GEOIP_URL: &str = "https://ipapi.co/json/";
/// Auto-refresh cadence: 15 minutes.
pub const DEFAULT_REFRESH_SECS: u64 = 900;
const MIN_REFRESH_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for UnitSystem {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Metric => Self::Metric,
            UnitsArg::Imperial => Self::Imperial,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weatherwise",
    version,
    about = "Terminal weather dashboard for a WeatherWise backend"
)]
pub struct Cli {
    /// City to show instead of the detected location
    pub city: Option<String>,

    /// Unit system (overrides the saved preference)
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Base URL of the weather backend
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// IP geolocation endpoint used for "use my location"
    #[arg(long, default_value = DEFAULT_GEOIP_URL)]
    pub geoip_url: String,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Treat device geolocation as unavailable
    #[arg(long)]
    pub no_geolocation: bool,

    /// Start from the last city shown in a previous session
    #[arg(long)]
    pub resume: bool,

    /// Auto-refresh interval in seconds
    #[arg(long, default_value_t = DEFAULT_REFRESH_SECS)]
    pub refresh_interval: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Force ASCII weather icons
    #[arg(long)]
    pub ascii_icons: bool,

    /// Do not read or write saved preferences
    #[arg(long)]
    pub no_persist: bool,

    /// Log file path (default: <config dir>/weatherwise.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => {}
        }
        if self.refresh_interval < MIN_REFRESH_SECS {
            anyhow::bail!("--refresh-interval must be at least {MIN_REFRESH_SECS} seconds");
        }
        if self.city.as_deref().is_some_and(|c| c.trim().is_empty()) {
            anyhow::bail!("city argument must not be blank");
        }
        Ok(())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else {
            IconMode::Unicode
        }
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}
