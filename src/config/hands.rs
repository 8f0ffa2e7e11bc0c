use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

use super::lenient;

/// Appearance of a single clock hand.
///
/// Shared by the second, minute, and hour hands; each carries its own
/// factory default.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HandConfig {
    /// Hand fill colour.
    pub color: ColorValue,

    /// Hand thickness in points.
    pub width: f64,

    /// Hand length as a percentage of the clock radius.
    pub length_percent: f64,
}

impl HandConfig {
    /// Factory default for the second hand.
    pub const DEFAULT_SECOND: Self = Self {
        color: ColorValue::new(0.85, 0.31, 0.34, 0.90),
        width: 1.5,
        length_percent: 100.0,
    };

    /// Factory default for the minute hand.
    pub const DEFAULT_MINUTE: Self = Self {
        color: ColorValue::new(0.78, 0.78, 0.82, 0.85),
        width: 4.0,
        length_percent: 80.0,
    };

    /// Factory default for the hour hand.
    pub const DEFAULT_HOUR: Self = Self {
        color: ColorValue::new(0.78, 0.78, 0.82, 0.85),
        width: 6.0,
        length_percent: 58.0,
    };
}

/// Lenient mirror of [`HandConfig`]: every field optional, type mismatches
/// decode to `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawHandConfig {
    #[serde(deserialize_with = "lenient")]
    color: Option<ColorValue>,
    #[serde(deserialize_with = "lenient")]
    width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    length_percent: Option<f64>,
}

impl RawHandConfig {
    /// Fills absent fields from the given defaults.
    pub(crate) fn merge(self, defaults: HandConfig) -> HandConfig {
        HandConfig {
            color: self.color.unwrap_or(defaults.color),
            width: self.width.unwrap_or(defaults.width),
            length_percent: self.length_percent.unwrap_or(defaults.length_percent),
        }
    }
}
