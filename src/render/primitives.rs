use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Dash lengths in pixels, alternating on/off. Empty means a solid stroke.
pub type DashPattern = SmallVec<[f64; 2]>;

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a `#rrggbb` (or `#rrggbbaa` when translucent) hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ChartError::InvalidData(format!("invalid hex color `{input}`"));
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        let short_channel = |index: usize| {
            u8::from_str_radix(&digits[index..=index], 16)
                .map(|value| value * 17)
                .map_err(|_| invalid())
        };

        let (red, green, blue, alpha) = match digits.len() {
            3 => (short_channel(0)?, short_channel(1)?, short_channel(2)?, 255),
            6 => (channel(0..2)?, channel(2..4)?, channel(4..6)?, 255),
            8 => (channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?),
            _ => return Err(invalid()),
        };

        Ok(Self::from_rgb8(red, green, blue).with_alpha(f64::from(alpha) / 255.0))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if byte(self.alpha) == 255 {
            rgb
        } else {
            format!("{rgb}{:02x}", byte(self.alpha))
        }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Stroke pattern for band lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
}

impl LineStrokeStyle {
    pub const DASH_LENGTH_PX: f64 = 5.0;

    #[must_use]
    pub fn dash_pattern(self) -> DashPattern {
        match self {
            Self::Solid => DashPattern::new(),
            Self::Dashed => smallvec::smallvec![Self::DASH_LENGTH_PX, Self::DASH_LENGTH_PX],
        }
    }
}
