use crate::cli::IconMode;

/// Condition group as reported in `weather[0].main` by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    Other,
}

impl ConditionCategory {
    #[must_use]
    pub fn from_main(main: &str) -> Self {
        match main.trim() {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Snow" => Self::Snow,
            "Mist" => Self::Mist,
            "Fog" => Self::Fog,
            "Haze" => Self::Haze,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn is_wet(self) -> bool {
        matches!(self, Self::Rain | Self::Drizzle | Self::Thunderstorm)
    }

    #[must_use]
    pub fn is_obscured(self) -> bool {
        matches!(self, Self::Mist | Self::Fog | Self::Haze)
    }
}

// Unrecognised groups fall back to the clear-sky glyph.
#[must_use]
pub fn condition_glyph(condition: ConditionCategory, mode: IconMode) -> &'static str {
    match mode {
        IconMode::Ascii => match condition {
            ConditionCategory::Clear | ConditionCategory::Other => "SUN",
            ConditionCategory::Clouds => "CLD",
            ConditionCategory::Rain => "RAN",
            ConditionCategory::Drizzle => "DRZ",
            ConditionCategory::Thunderstorm => "THN",
            ConditionCategory::Snow => "SNW",
            ConditionCategory::Mist | ConditionCategory::Fog | ConditionCategory::Haze => "FOG",
        },
        IconMode::Unicode => match condition {
            ConditionCategory::Clear | ConditionCategory::Other => "☀",
            ConditionCategory::Clouds => "☁",
            ConditionCategory::Rain => "☂",
            ConditionCategory::Drizzle => "⁘",
            ConditionCategory::Thunderstorm => "⚡",
            ConditionCategory::Snow => "❄",
            ConditionCategory::Mist | ConditionCategory::Fog | ConditionCategory::Haze => "░",
        },
    }
}
