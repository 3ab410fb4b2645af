use serde::{Deserialize, Serialize};

use crate::core::Candle;
use crate::error::{ChartError, ChartResult};

/// One of the three plotted band series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandKind {
    Upper,
    Middle,
    Lower,
}

impl BandKind {
    /// Line paint order. Later bands overlay earlier ones at equal y.
    pub const DRAW_ORDER: [BandKind; 3] = [Self::Upper, Self::Middle, Self::Lower];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Middle => "middle",
            Self::Lower => "lower",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Upper => "Upper: ",
            Self::Middle => "Middle: ",
            Self::Lower => "Lower: ",
        }
    }
}

/// Band values at a single index. Undefined entries hold NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandValue {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BandValue {
    #[must_use]
    pub fn get(self, kind: BandKind) -> f64 {
        match kind {
            BandKind::Upper => self.upper,
            BandKind::Middle => self.middle,
            BandKind::Lower => self.lower,
        }
    }

    #[must_use]
    pub fn defined(self, kind: BandKind) -> Option<f64> {
        defined(self.get(kind))
    }
}

/// Export row pairing a candle timestamp with its band values.
///
/// Undefined values become `None` (JSON `null`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub timestamp: i64,
    pub upper: Option<f64>,
    pub middle: Option<f64>,
    pub lower: Option<f64>,
}

/// Three index-aligned band series of equal length.
///
/// `series[i]` belongs to `candles[i]` after offset has been applied. Positions
/// without enough history, or shifted out of range, hold NaN.
#[derive(Debug, Clone, Default)]
pub struct BandSeries {
    upper: Vec<f64>,
    middle: Vec<f64>,
    lower: Vec<f64>,
}

impl BandSeries {
    /// Builds a series of `len` undefined entries in every band.
    #[must_use]
    pub fn undefined(len: usize) -> Self {
        Self {
            upper: vec![f64::NAN; len],
            middle: vec![f64::NAN; len],
            lower: vec![f64::NAN; len],
        }
    }

    pub fn from_parts(upper: Vec<f64>, middle: Vec<f64>, lower: Vec<f64>) -> ChartResult<Self> {
        if upper.len() != middle.len() || middle.len() != lower.len() {
            return Err(ChartError::InvalidData(format!(
                "band lengths differ: upper={}, middle={}, lower={}",
                upper.len(),
                middle.len(),
                lower.len()
            )));
        }
        Ok(Self {
            upper,
            middle,
            lower,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    #[must_use]
    pub fn middle(&self) -> &[f64] {
        &self.middle
    }

    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    #[must_use]
    pub fn band(&self, kind: BandKind) -> &[f64] {
        match kind {
            BandKind::Upper => &self.upper,
            BandKind::Middle => &self.middle,
            BandKind::Lower => &self.lower,
        }
    }

    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<BandValue> {
        Some(BandValue {
            upper: *self.upper.get(index)?,
            middle: *self.middle.get(index)?,
            lower: *self.lower.get(index)?,
        })
    }

    #[must_use]
    pub fn defined_count(&self, kind: BandKind) -> usize {
        self.band(kind)
            .iter()
            .filter(|value| defined(**value).is_some())
            .count()
    }

    /// Pairs every index with the timestamp of the candle at the same index.
    ///
    /// Output stops at the shorter of the two sequences.
    #[must_use]
    pub fn points(&self, candles: &[Candle]) -> Vec<BandPoint> {
        candles
            .iter()
            .enumerate()
            .filter_map(|(index, candle)| {
                let value = self.value_at(index)?;
                Some(BandPoint {
                    timestamp: candle.timestamp,
                    upper: value.defined(BandKind::Upper),
                    middle: value.defined(BandKind::Middle),
                    lower: value.defined(BandKind::Lower),
                })
            })
            .collect()
    }
}

/// Maps the undefined sentinel (and any other non-finite value) to `None`.
#[must_use]
pub(crate) fn defined(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
