use thiserror::Error;

/// Failures while turning a user action into a location query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Please enter a city name")]
    EmptyInput,
    #[error("Unable to get your location. Please search for a city.")]
    LocationUnavailable(String),
    #[error("Failed to load default location")]
    DefaultUnavailable(String),
}

/// Failures of one joined current + forecast fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Search for a city or use your location first")]
    MissingLocation,
    #[error("Failed to fetch weather data")]
    Transport { endpoint: Endpoint, detail: String },
    #[error("{message}")]
    Api { message: String },
    #[error("Unexpected {endpoint} response from weather service")]
    Decode { endpoint: Endpoint, detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Current,
    Forecast,
    Config,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Current => "current-conditions",
            Self::Forecast => "forecast",
            Self::Config => "default-location",
        })
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preferences file could not be accessed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
