//! Configuration schema for the desktop clock.
//!
//! Defines the complete visual configuration structure, decoded from a
//! JSON document. Decoding is deliberately forgiving: every field at every
//! nesting level is optional, and a field whose value has the wrong type is
//! treated the same as an absent field. Either way the value comes from the
//! factory default configuration, field by field. The only hard failure is
//! a document whose top level is not a JSON object.

mod disc;
mod error;
mod hands;
mod markers;
mod overlays;


pub use disc::DiscConfig;
pub use error::ConfigError;
pub use hands::HandConfig;
pub use markers::MarkerConfig;
pub use overlays::{DateCenterConfig, HandLabelConfig};

use disc::RawDiscConfig;
use hands::RawHandConfig;
use markers::RawMarkerConfig;
use overlays::{RawDateCenterConfig, RawHandLabelConfig};

use schemars::JsonSchema;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{DeserializeOwned, Error as _},
};
use serde_json::Value;

/// Complete visual configuration for the desktop clock.
///
/// The aggregate root of the configuration document. Every field has a
/// factory default; [`ClockConfiguration::default`] is the configuration
/// used when no document exists or the document cannot be decoded.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClockConfiguration {
    /// Clock centre position on screen.
    pub position: Position,

    /// Clock diameter as a percentage of the shortest screen dimension.
    pub size_percent: f64,

    /// Second hand appearance.
    pub second_hand: HandConfig,

    /// Minute hand appearance.
    pub minute_hand: HandConfig,

    /// Hour hand appearance.
    pub hour_hand: HandConfig,

    /// Appearance of the 12 hour ticks.
    pub major_marker: MarkerConfig,

    /// Appearance of the 48 minute ticks.
    pub minor_marker: MarkerConfig,

    /// Background disc appearance.
    pub disc: DiscConfig,

    /// Blur radius applied behind the whole clock.
    pub background_blur: f64,

    /// Centre date badge.
    pub date_center: DateCenterConfig,

    /// Weekday label riding the minute hand.
    pub day_on_minute: HandLabelConfig,

    /// Month label riding the hour hand.
    pub month_on_hour: HandLabelConfig,
}

/// Clock centre position, as percentages of the screen dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Horizontal position as a percentage of the screen width.
    pub x_percent: f64,

    /// Vertical position as a percentage of the screen height.
    pub y_percent: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x_percent: 50.0,
            y_percent: 50.0,
        }
    }
}

impl Default for ClockConfiguration {
    fn default() -> Self {
        Self {
            position: Position::default(),
            size_percent: 50.0,
            second_hand: HandConfig::DEFAULT_SECOND,
            minute_hand: HandConfig::DEFAULT_MINUTE,
            hour_hand: HandConfig::DEFAULT_HOUR,
            major_marker: MarkerConfig::DEFAULT_MAJOR,
            minor_marker: MarkerConfig::DEFAULT_MINOR,
            disc: DiscConfig::default(),
            background_blur: 10.0,
            date_center: DateCenterConfig::default(),
            day_on_minute: HandLabelConfig::default_day(),
            month_on_hour: HandLabelConfig::default_month(),
        }
    }
}

impl ClockConfiguration {
    /// Decodes a configuration document from raw bytes.
    ///
    /// Missing or type-mismatched fields resolve to their factory
    /// defaults. Defaulting is per field, not per object: a partial `disc`
    /// keeps its specified members and defaults only the missing ones.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] if the bytes are not well-formed JSON,
    /// or [`ConfigError::NotAnObject`] if the document's top level is not
    /// an object. Callers are expected to substitute
    /// `ClockConfiguration::default()` on either failure.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Decodes a configuration from an already-parsed JSON value.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotAnObject`] if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::NotAnObject {
                found: json_type_name(&value),
            });
        }

        let raw = RawClockConfiguration::deserialize(value)?;
        Ok(raw.merge(Self::default()))
    }
}

impl<'de> Deserialize<'de> for ClockConfiguration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

/// Deserializes a field into `Some` on success and `None` on any type
/// mismatch, so the merge step can substitute the factory default.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Lenient mirror of [`ClockConfiguration`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawClockConfiguration {
    #[serde(deserialize_with = "lenient")]
    position: Option<RawPosition>,
    #[serde(deserialize_with = "lenient")]
    size_percent: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    second_hand: Option<RawHandConfig>,
    #[serde(deserialize_with = "lenient")]
    minute_hand: Option<RawHandConfig>,
    #[serde(deserialize_with = "lenient")]
    hour_hand: Option<RawHandConfig>,
    #[serde(deserialize_with = "lenient")]
    major_marker: Option<RawMarkerConfig>,
    #[serde(deserialize_with = "lenient")]
    minor_marker: Option<RawMarkerConfig>,
    #[serde(deserialize_with = "lenient")]
    disc: Option<RawDiscConfig>,
    #[serde(deserialize_with = "lenient")]
    background_blur: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    date_center: Option<RawDateCenterConfig>,
    #[serde(deserialize_with = "lenient")]
    day_on_minute: Option<RawHandLabelConfig>,
    #[serde(deserialize_with = "lenient")]
    month_on_hour: Option<RawHandLabelConfig>,
}

/// Lenient mirror of [`Position`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawPosition {
    #[serde(deserialize_with = "lenient")]
    x_percent: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    y_percent: Option<f64>,
}

impl RawPosition {
    fn merge(self, defaults: Position) -> Position {
        Position {
            x_percent: self.x_percent.unwrap_or(defaults.x_percent),
            y_percent: self.y_percent.unwrap_or(defaults.y_percent),
        }
    }
}

impl RawClockConfiguration {
    /// Merges the decoded document over the factory default configuration,
    /// field by field at every nesting level.
    fn merge(self, defaults: ClockConfiguration) -> ClockConfiguration {
        ClockConfiguration {
            position: match self.position {
                Some(p) => p.merge(defaults.position),
                None => defaults.position,
            },
            size_percent: self.size_percent.unwrap_or(defaults.size_percent),
            second_hand: match self.second_hand {
                Some(h) => h.merge(defaults.second_hand),
                None => defaults.second_hand,
            },
            minute_hand: match self.minute_hand {
                Some(h) => h.merge(defaults.minute_hand),
                None => defaults.minute_hand,
            },
            hour_hand: match self.hour_hand {
                Some(h) => h.merge(defaults.hour_hand),
                None => defaults.hour_hand,
            },
            major_marker: match self.major_marker {
                Some(m) => m.merge(defaults.major_marker),
                None => defaults.major_marker,
            },
            minor_marker: match self.minor_marker {
                Some(m) => m.merge(defaults.minor_marker),
                None => defaults.minor_marker,
            },
            disc: match self.disc {
                Some(d) => d.merge(defaults.disc),
                None => defaults.disc,
            },
            background_blur: self.background_blur.unwrap_or(defaults.background_blur),
            date_center: match self.date_center {
                Some(d) => d.merge(defaults.date_center),
                None => defaults.date_center,
            },
            day_on_minute: match self.day_on_minute {
                Some(l) => l.merge(defaults.day_on_minute),
                None => defaults.day_on_minute,
            },
            month_on_hour: match self.month_on_hour {
                Some(l) => l.merge(defaults.month_on_hour),
                None => defaults.month_on_hour,
            },
        }
    }
}
