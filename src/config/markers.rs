use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

use super::lenient;

/// Appearance of the tick marks around the clock face.
///
/// The face draws 60 ticks per revolution; every fifth tick uses the
/// major style, the rest the minor style.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkerConfig {
    /// Tick fill colour.
    pub color: ColorValue,

    /// Tick thickness in points.
    pub width: f64,

    /// Tick length as a percentage of the clock diameter.
    pub length_percent: f64,
}

impl MarkerConfig {
    /// Factory default for the 12 hour ticks.
    pub const DEFAULT_MAJOR: Self = Self {
        color: ColorValue::new(0.80, 0.80, 0.80, 0.50),
        width: 8.0,
        length_percent: 8.0,
    };

    /// Factory default for the 48 minute ticks.
    pub const DEFAULT_MINOR: Self = Self {
        color: ColorValue::new(0.80, 0.80, 0.80, 0.50),
        width: 2.0,
        length_percent: 2.0,
    };
}

/// Lenient mirror of [`MarkerConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawMarkerConfig {
    #[serde(deserialize_with = "lenient")]
    color: Option<ColorValue>,
    #[serde(deserialize_with = "lenient")]
    width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    length_percent: Option<f64>,
}

impl RawMarkerConfig {
    /// Fills absent fields from the given defaults.
    pub(crate) fn merge(self, defaults: MarkerConfig) -> MarkerConfig {
        MarkerConfig {
            color: self.color.unwrap_or(defaults.color),
            width: self.width.unwrap_or(defaults.width),
            length_percent: self.length_percent.unwrap_or(defaults.length_percent),
        }
    }
}
