use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

use super::lenient;

/// The translucent disc drawn behind the hands and markers.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscConfig {
    /// Disc diameter as a percentage of the clock diameter.
    pub size_percent: f64,

    /// Disc fill colour.
    pub color: ColorValue,

    /// Border stroke thickness in points.
    pub border_width: f64,

    /// Border stroke colour.
    pub border_color: ColorValue,

    /// Background blur radius behind the disc.
    pub blur: f64,
}

impl Default for DiscConfig {
    fn default() -> Self {
        Self {
            size_percent: 95.0,
            color: ColorValue::new(0.0, 0.0, 0.0, 0.25),
            border_width: 1.0,
            border_color: ColorValue::new(1.0, 1.0, 1.0, 0.15),
            blur: 10.0,
        }
    }
}

/// Lenient mirror of [`DiscConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawDiscConfig {
    #[serde(deserialize_with = "lenient")]
    size_percent: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    color: Option<ColorValue>,
    #[serde(deserialize_with = "lenient")]
    border_width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    border_color: Option<ColorValue>,
    #[serde(deserialize_with = "lenient")]
    blur: Option<f64>,
}

impl RawDiscConfig {
    /// Fills absent fields from the given defaults.
    pub(crate) fn merge(self, defaults: DiscConfig) -> DiscConfig {
        DiscConfig {
            size_percent: self.size_percent.unwrap_or(defaults.size_percent),
            color: self.color.unwrap_or(defaults.color),
            border_width: self.border_width.unwrap_or(defaults.border_width),
            border_color: self.border_color.unwrap_or(defaults.border_color),
            blur: self.blur.unwrap_or(defaults.blur),
        }
    }
}
