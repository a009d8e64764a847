use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// A weather observation the clock's dial can indicate. Exactly one of these
/// is selected at a time, and the selection is stored by its identifier.
/// Serializes/deserializes as the identifier, for compatibility with the
/// settings file.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Metric {
    RelativeHumidity,
    FeelsLike,
    Dewpoint,
    PrecipToday,
    WindGust,
    Visibility,
}

impl Metric {
    /// Every metric, in the order they're presented to the user
    pub const ALL: &'static [Self] = &[
        Self::RelativeHumidity,
        Self::FeelsLike,
        Self::Dewpoint,
        Self::PrecipToday,
        Self::WindGust,
        Self::Visibility,
    ];

    /// Identifier used in the settings file and the submitted form value
    pub fn id(self) -> &'static str {
        match self {
            Self::RelativeHumidity => "relative_humidity",
            Self::FeelsLike => "feelslike_f",
            Self::Dewpoint => "dewpoint_f",
            Self::PrecipToday => "precip_today_in",
            Self::WindGust => "wind_gust_mph",
            Self::Visibility => "visibility_mi",
        }
    }

    /// Human-readable label, including units
    pub fn label(self) -> &'static str {
        match self {
            Self::RelativeHumidity => "Relative Humidity",
            Self::FeelsLike => "Feels Like (degrees F)",
            Self::Dewpoint => "Dewpoint (degrees F)",
            Self::PrecipToday => "Precipitation Today (inches)",
            Self::WindGust => "Wind Gust (MPH)",
            Self::Visibility => "Visibility (Miles)",
        }
    }
}

/// Exact, case-sensitive match on the identifier. Any normalization of the
/// stored line happens before this.
impl FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|metric| metric.id() == s)
            .ok_or_else(|| anyhow!("Unknown metric: {s:?}"))
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

// These impls are needed for serde
impl TryFrom<String> for Metric {
    type Error = <Metric as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Metric> for String {
    fn from(metric: Metric) -> Self {
        metric.to_string()
    }
}
