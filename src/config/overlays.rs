use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

use super::lenient;

/// The circular date badge at the clock centre showing the day of month.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateCenterConfig {
    /// Whether the date badge is drawn at all.
    pub enabled: bool,

    /// Label font size in points.
    pub font_size: f64,

    /// Label text colour.
    pub color: ColorValue,

    /// Badge disc fill colour.
    pub background_color: ColorValue,

    /// Badge border stroke colour.
    pub border_color: ColorValue,

    /// Badge border stroke thickness in points.
    pub border_width: f64,

    /// Badge diameter as a percentage of the clock diameter.
    pub disc_size_percent: f64,

    /// Label font family name.
    pub font_family: String,

    /// Numeric font weight (CSS scale, 100–900).
    pub font_weight: f64,

    /// Background blur radius behind the badge.
    pub blur: f64,
}

impl Default for DateCenterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            font_size: 44.0,
            color: ColorValue::new(0.60, 0.60, 0.60, 0.80),
            background_color: ColorValue::new(0.0, 0.0, 0.0, 0.45),
            border_color: ColorValue::new(1.0, 1.0, 1.0, 0.20),
            border_width: 0.0,
            disc_size_percent: 15.0,
            font_family: "monospace".to_owned(),
            font_weight: 300.0,
            blur: 10.0,
        }
    }
}

/// A text label riding along a clock hand: the weekday name on the minute
/// hand, or the month name on the hour hand.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HandLabelConfig {
    /// Whether the label is drawn at all.
    pub enabled: bool,

    /// Label font size in points.
    pub font_size: f64,

    /// Label text colour.
    pub color: ColorValue,

    /// Label background fill colour.
    pub background_color: ColorValue,

    /// Background corner radius in points.
    pub border_radius: f64,

    /// Padding around the text in points.
    pub padding: f64,

    /// Label position along the hand, as a percentage of the hand length.
    pub offset_percent: f64,

    /// Label font family name.
    pub font_family: String,

    /// Numeric font weight (CSS scale, 100–900).
    pub font_weight: f64,

    /// Uppercase the text; otherwise it is capitalized.
    pub all_caps: bool,

    /// Horizontal scale applied to the text.
    pub stretch_factor: f64,

    /// Additional spacing between letters in points.
    pub letter_spacing: f64,
}

impl HandLabelConfig {
    /// Factory default for the weekday label on the minute hand.
    pub fn default_day() -> Self {
        Self {
            enabled: false,
            font_size: 16.0,
            color: ColorValue::new(0.0, 0.0, 0.0, 0.80),
            background_color: ColorValue::new(0.0, 0.0, 0.0, 0.0),
            border_radius: 8.0,
            padding: 4.0,
            offset_percent: 60.0,
            font_family: "monospace".to_owned(),
            font_weight: 500.0,
            all_caps: true,
            stretch_factor: 1.2,
            letter_spacing: 10.0,
        }
    }

    /// Factory default for the month label on the hour hand.
    pub fn default_month() -> Self {
        Self {
            enabled: false,
            font_size: 20.0,
            color: ColorValue::new(0.0, 0.0, 0.20, 0.60),
            background_color: ColorValue::new(0.0, 0.0, 0.0, 0.0),
            border_radius: 0.0,
            padding: 4.0,
            offset_percent: 60.0,
            font_family: "monospace".to_owned(),
            font_weight: 500.0,
            all_caps: true,
            stretch_factor: 1.1,
            letter_spacing: 2.0,
        }
    }
}

/// Lenient mirror of [`DateCenterConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawDateCenterConfig {
    #[serde(deserialize_with = "lenient")]
    enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    font_size: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    color: Option<ColorValue>,
    #[serde(deserialize_with = "lenient")]
    background_color: Option<ColorValue>,
    #[serde(deserialize_with = "lenient")]
    border_color: Option<ColorValue>,
    #[serde(deserialize_with = "lenient")]
    border_width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    disc_size_percent: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    font_family: Option<String>,
    #[serde(deserialize_with = "lenient")]
    font_weight: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    blur: Option<f64>,
}

impl RawDateCenterConfig {
    /// Fills absent fields from the given defaults.
    pub(crate) fn merge(self, defaults: DateCenterConfig) -> DateCenterConfig {
        DateCenterConfig {
            enabled: self.enabled.unwrap_or(defaults.enabled),
            font_size: self.font_size.unwrap_or(defaults.font_size),
            color: self.color.unwrap_or(defaults.color),
            background_color: self.background_color.unwrap_or(defaults.background_color),
            border_color: self.border_color.unwrap_or(defaults.border_color),
            border_width: self.border_width.unwrap_or(defaults.border_width),
            disc_size_percent: self.disc_size_percent.unwrap_or(defaults.disc_size_percent),
            font_family: self.font_family.unwrap_or(defaults.font_family),
            font_weight: self.font_weight.unwrap_or(defaults.font_weight),
            blur: self.blur.unwrap_or(defaults.blur),
        }
    }
}

/// Lenient mirror of [`HandLabelConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawHandLabelConfig {
    #[serde(deserialize_with = "lenient")]
    enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    font_size: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    color: Option<ColorValue>,
    #[serde(deserialize_with = "lenient")]
    background_color: Option<ColorValue>,
    #[serde(deserialize_with = "lenient")]
    border_radius: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    padding: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    offset_percent: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    font_family: Option<String>,
    #[serde(deserialize_with = "lenient")]
    font_weight: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    all_caps: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    stretch_factor: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    letter_spacing: Option<f64>,
}

impl RawHandLabelConfig {
    /// Fills absent fields from the given defaults.
    pub(crate) fn merge(self, defaults: HandLabelConfig) -> HandLabelConfig {
        HandLabelConfig {
            enabled: self.enabled.unwrap_or(defaults.enabled),
            font_size: self.font_size.unwrap_or(defaults.font_size),
            color: self.color.unwrap_or(defaults.color),
            background_color: self.background_color.unwrap_or(defaults.background_color),
            border_radius: self.border_radius.unwrap_or(defaults.border_radius),
            padding: self.padding.unwrap_or(defaults.padding),
            offset_percent: self.offset_percent.unwrap_or(defaults.offset_percent),
            font_family: self.font_family.unwrap_or(defaults.font_family),
            font_weight: self.font_weight.unwrap_or(defaults.font_weight),
            all_caps: self.all_caps.unwrap_or(defaults.all_caps),
            stretch_factor: self.stretch_factor.unwrap_or(defaults.stretch_factor),
            letter_spacing: self.letter_spacing.unwrap_or(defaults.letter_spacing),
        }
    }
}
