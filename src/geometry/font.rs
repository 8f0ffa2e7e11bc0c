use serde::Serialize;

/// Qualitative font weight, from lightest to heaviest.
///
/// Configuration carries weights on the numeric CSS scale;
/// [`FontWeight::from_numeric`] buckets them for toolkits that only take
/// named weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Below 150.
    UltraLight,
    /// 150 to below 250.
    Thin,
    /// 250 to below 350.
    Light,
    /// 350 to below 450.
    Regular,
    /// 450 to below 550.
    Medium,
    /// 550 to below 650.
    Semibold,
    /// 650 to below 750.
    Bold,
    /// 750 to below 850.
    Heavy,
    /// 850 and above.
    Black,
}

impl FontWeight {
    /// Buckets a numeric weight.
    ///
    /// A value falls into the bucket whose upper bound it is strictly
    /// below; everything from 850 up is `Black`.
    pub fn from_numeric(weight: f64) -> Self {
        match weight {
            w if w < 150.0 => Self::UltraLight,
            w if w < 250.0 => Self::Thin,
            w if w < 350.0 => Self::Light,
            w if w < 450.0 => Self::Regular,
            w if w < 550.0 => Self::Medium,
            w if w < 650.0 => Self::Semibold,
            w if w < 750.0 => Self::Bold,
            w if w < 850.0 => Self::Heavy,
            _ => Self::Black,
        }
    }
}
