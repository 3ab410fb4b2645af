use serde::{Deserialize, Serialize};

use crate::core::Candle;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_BAND_LENGTH: usize = 20;
pub const DEFAULT_STD_DEV_MULTIPLIER: f64 = 2.0;
/// Smallest multiplier the settings editor lets through.
pub const EDITOR_MIN_STD_DEV_MULTIPLIER: f64 = 0.1;
/// Largest absolute offset the settings editor lets through.
pub const EDITOR_OFFSET_LIMIT: isize = 50;

/// Moving-average flavour used for the basis band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovingAverageKind {
    #[default]
    #[serde(rename = "SMA")]
    Simple,
}

/// Candle field the bands are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    #[default]
    Close,
}

impl PriceSource {
    #[must_use]
    pub fn value_of(self, candle: &Candle) -> f64 {
        match self {
            Self::Close => candle.close,
        }
    }
}

/// Computation settings for the band engine.
///
/// Field names serialize in camelCase so the settings editor payload
/// (`length`, `maType`, `source`, `stdDevMultiplier`, `offset`) maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandOptions {
    pub length: usize,
    #[serde(default)]
    pub ma_type: MovingAverageKind,
    #[serde(default)]
    pub source: PriceSource,
    pub std_dev_multiplier: f64,
    /// Positive values move band values toward later candles.
    #[serde(default)]
    pub offset: isize,
}

impl Default for BandOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_BAND_LENGTH,
            ma_type: MovingAverageKind::Simple,
            source: PriceSource::Close,
            std_dev_multiplier: DEFAULT_STD_DEV_MULTIPLIER,
            offset: 0,
        }
    }
}

impl BandOptions {
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn with_std_dev_multiplier(mut self, multiplier: f64) -> Self {
        self.std_dev_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: isize) -> Self {
        self.offset = offset;
        self
    }

    /// Rejects options the engine cannot compute with. Values are never clamped.
    pub fn validate(self) -> ChartResult<()> {
        if self.length < 1 {
            return Err(ChartError::InvalidOptions(format!(
                "length must be >= 1, got {}",
                self.length
            )));
        }
        if !self.std_dev_multiplier.is_finite() || self.std_dev_multiplier <= 0.0 {
            return Err(ChartError::InvalidOptions(format!(
                "std dev multiplier must be finite and > 0, got {}",
                self.std_dev_multiplier
            )));
        }
        Ok(())
    }

    /// Pulls raw editor input into the ranges the settings dialog allows.
    ///
    /// A non-finite multiplier falls back to the default rather than a bound.
    #[must_use]
    pub fn clamped_for_editor(self) -> Self {
        let std_dev_multiplier = if self.std_dev_multiplier.is_finite() {
            self.std_dev_multiplier.max(EDITOR_MIN_STD_DEV_MULTIPLIER)
        } else {
            DEFAULT_STD_DEV_MULTIPLIER
        };
        Self {
            length: self.length.max(1),
            std_dev_multiplier,
            offset: self
                .offset
                .clamp(-EDITOR_OFFSET_LIMIT, EDITOR_OFFSET_LIMIT),
            ..self
        }
    }
}
