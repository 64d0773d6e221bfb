//! WMO weather code classification.
//!
//! Code set and groupings follow <https://open-meteo.com/en/docs>.

/// The closed set of WMO weather codes reported by Open-Meteo's
/// `current_weather` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCode {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    RimeFog,
    DrizzleLight,
    DrizzleModerate,
    DrizzleDense,
    FreezingDrizzleLight,
    FreezingDrizzleDense,
    RainSlight,
    RainModerate,
    RainHeavy,
    FreezingRainLight,
    FreezingRainHeavy,
    SnowFallSlight,
    SnowFallModerate,
    SnowFallHeavy,
    SnowGrains,
    RainShowersSlight,
    RainShowersModerate,
    RainShowersViolent,
    SnowShowersSlight,
    SnowShowersHeavy,
    ThunderstormSlight,
    ThunderstormSlightHail,
    ThunderstormHeavyHail,
}

impl WeatherCode {
    /// Classify a raw weather code. Total over all integers: codes outside
    /// the known set fall back to [`WeatherCode::ClearSky`].
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::RimeFog,
            51 => Self::DrizzleLight,
            53 => Self::DrizzleModerate,
            55 => Self::DrizzleDense,
            56 => Self::FreezingDrizzleLight,
            57 => Self::FreezingDrizzleDense,
            61 => Self::RainSlight,
            63 => Self::RainModerate,
            65 => Self::RainHeavy,
            66 => Self::FreezingRainLight,
            67 => Self::FreezingRainHeavy,
            71 => Self::SnowFallSlight,
            73 => Self::SnowFallModerate,
            75 => Self::SnowFallHeavy,
            77 => Self::SnowGrains,
            80 => Self::RainShowersSlight,
            81 => Self::RainShowersModerate,
            82 => Self::RainShowersViolent,
            85 => Self::SnowShowersSlight,
            86 => Self::SnowShowersHeavy,
            95 => Self::ThunderstormSlight,
            96 => Self::ThunderstormSlightHail,
            99 => Self::ThunderstormHeavyHail,
            _ => Self::ClearSky,
        }
    }

    /// Human-readable category label. Coarser than the code itself except
    /// for codes 0 and 1, which keep distinct labels.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear skies",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy | Self::Overcast => "Cloudy or overcast",
            Self::Fog | Self::RimeFog => "Foggy",
            Self::DrizzleLight | Self::DrizzleModerate | Self::DrizzleDense => "Drizzle",
            Self::FreezingDrizzleLight
            | Self::FreezingDrizzleDense
            | Self::FreezingRainLight
            | Self::FreezingRainHeavy => "Freezing rain",
            Self::RainSlight
            | Self::RainModerate
            | Self::RainHeavy
            | Self::RainShowersSlight
            | Self::RainShowersModerate
            | Self::RainShowersViolent => "Rainy",
            Self::SnowFallSlight
            | Self::SnowFallModerate
            | Self::SnowFallHeavy
            | Self::SnowGrains
            | Self::SnowShowersSlight
            | Self::SnowShowersHeavy => "Snowy",
            Self::ThunderstormSlight | Self::ThunderstormSlightHail | Self::ThunderstormHeavyHail => {
                "Thunderstorms"
            }
        }
    }

    /// Identifier of the icon asset for this condition. Icon grouping is
    /// coarser than the labels: 0 and 1 share `sun`, and freezing rain and
    /// rain share `cloud-drizzle`.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::ClearSky | Self::MainlyClear => "sun",
            Self::PartlyCloudy | Self::Overcast => "cloud-sun",
            Self::Fog | Self::RimeFog => "fog",
            Self::DrizzleLight | Self::DrizzleModerate | Self::DrizzleDense => "drizzle",
            Self::FreezingDrizzleLight
            | Self::FreezingDrizzleDense
            | Self::FreezingRainLight
            | Self::FreezingRainHeavy => "cloud-drizzle",
            Self::RainSlight
            | Self::RainModerate
            | Self::RainHeavy
            | Self::RainShowersSlight
            | Self::RainShowersModerate
            | Self::RainShowersViolent => "cloud-drizzle",
            Self::SnowFallSlight
            | Self::SnowFallModerate
            | Self::SnowFallHeavy
            | Self::SnowGrains
            | Self::SnowShowersSlight
            | Self::SnowShowersHeavy => "snow",
            Self::ThunderstormSlight | Self::ThunderstormSlightHail | Self::ThunderstormHeavyHail => {
                "lightning"
            }
        }
    }
}
