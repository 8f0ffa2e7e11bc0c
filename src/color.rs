use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use thiserror::Error;

/// A four-channel sRGB colour used throughout the configuration schema.
///
/// Channels are fractions in `[0, 1]` by convention. Out-of-range values
/// pass through unchanged; clamping is the renderer's business, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct ColorValue {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

/// Errors from parsing a hex colour literal.
#[derive(Debug, Error)]
pub enum ColorParseError {
    /// The hex string has the wrong number of digits.
    #[error("invalid hex colour '{value}': expected #RRGGBB or #RRGGBBAA")]
    InvalidLength {
        /// The string that failed to parse.
        value: String,
    },

    /// The string contains characters outside `[0-9a-fA-F]`.
    #[error("cannot parse hex colour '{value}': non-hexadecimal digits")]
    InvalidDigits {
        /// The string that failed to parse.
        value: String,
    },
}

impl ColorValue {
    /// Creates a colour from explicit channel values.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl FromStr for ColorValue {
    type Err = ColorParseError;

    /// Parses `#RRGGBB` or `#RRGGBBAA`, leading `#` optional, any case.
    ///
    /// Six digits yield alpha 1.0; eight digits take alpha from the last
    /// byte, scaled by 255.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength {
                value: s.to_owned(),
            });
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigits {
                value: s.to_owned(),
            });
        }

        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidDigits {
                value: s.to_owned(),
            })?;

        let color = if digits.len() == 8 {
            Self {
                r: f64::from((packed >> 24) & 0xFF) / 255.0,
                g: f64::from((packed >> 16) & 0xFF) / 255.0,
                b: f64::from((packed >> 8) & 0xFF) / 255.0,
                a: f64::from(packed & 0xFF) / 255.0,
            }
        } else {
            Self {
                r: f64::from((packed >> 16) & 0xFF) / 255.0,
                g: f64::from((packed >> 8) & 0xFF) / 255.0,
                b: f64::from(packed & 0xFF) / 255.0,
                a: 1.0,
            }
        };

        Ok(color)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({:.3}, {:.3}, {:.3}, {:.3})",
            self.r, self.g, self.b, self.a
        )
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    /// Accepts either a hex string or an `{r, g, b, a?}` object, with `a`
    /// defaulting to 1.0 when absent.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorRepr {
            Hex(String),
            Rgba {
                r: f64,
                g: f64,
                b: f64,
                a: Option<f64>,
            },
        }

        match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Hex(hex) => hex.parse().map_err(D::Error::custom),
            ColorRepr::Rgba { r, g, b, a } => Ok(Self {
                r,
                g,
                b,
                a: a.unwrap_or(1.0),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn hex_rrggbb_parses() {
        let color: ColorValue = serde_json::from_str(r##""#FF0000""##).unwrap();
        assert_eq!(color, ColorValue::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn hex_rrggbbaa_parses_alpha() {
        let color: ColorValue = serde_json::from_str(r##""#00FF0080""##).unwrap();
        assert_eq!(color.r, 0.0);
        assert_eq!(color.g, 1.0);
        assert_eq!(color.b, 0.0);
        assert!((color.a - 128.0 / 255.0).abs() < 0.01);
    }

    #[test]
    fn hex_without_hash_parses() {
        let color: ColorValue = serde_json::from_str(r#""0000FF""#).unwrap();
        assert_eq!(color, ColorValue::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn hex_lowercase_parses() {
        let color: ColorValue = serde_json::from_str(r##""#ffcc00""##).unwrap();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.b, 0.0);
    }

    #[test]
    fn hex_wrong_length_fails() {
        assert!(matches!(
            "#FF00".parse::<ColorValue>(),
            Err(ColorParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            "#FF00000".parse::<ColorValue>(),
            Err(ColorParseError::InvalidLength { .. })
        ));
    }

    #[test]
    fn hex_bad_digits_fail() {
        assert!(matches!(
            "#GGHHII".parse::<ColorValue>(),
            Err(ColorParseError::InvalidDigits { .. })
        ));
        assert!(matches!(
            "+FF000".parse::<ColorValue>(),
            Err(ColorParseError::InvalidDigits { .. })
        ));
    }

    #[test]
    fn object_form_parses() {
        let color: ColorValue =
            serde_json::from_str(r#"{ "r": 0.5, "g": 0.25, "b": 0.75, "a": 0.8 }"#).unwrap();
        assert_eq!(color, ColorValue::new(0.5, 0.25, 0.75, 0.8));
    }

    #[test]
    fn object_form_alpha_defaults_to_one() {
        let color: ColorValue =
            serde_json::from_str(r#"{ "r": 0.5, "g": 0.25, "b": 0.75 }"#).unwrap();
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn object_round_trip_is_exact() {
        let original = ColorValue::new(0.1, 0.2, 0.3, 0.4);
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: ColorValue = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn out_of_range_channels_pass_through() {
        let color: ColorValue =
            serde_json::from_str(r#"{ "r": 1.5, "g": -0.2, "b": 0.0 }"#).unwrap();
        assert_eq!(color.r, 1.5);
        assert_eq!(color.g, -0.2);
    }
}
