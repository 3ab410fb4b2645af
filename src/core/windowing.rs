use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::Candle;

/// Half-open candle index interval `[from, to)` currently inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibleRange {
    pub from: usize,
    pub to: usize,
}

impl VisibleRange {
    /// A reversed pair collapses to an empty range at `from`.
    #[must_use]
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to: to.max(from),
        }
    }

    #[must_use]
    pub fn full(len: usize) -> Self {
        Self { from: 0, to: len }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.to.saturating_sub(self.from)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Restricts the range to indices that exist in a series of length `len`.
    #[must_use]
    pub fn clamp_to(self, len: usize) -> Self {
        let to = self.to.min(len);
        Self {
            from: self.from.min(to),
            to,
        }
    }

    #[must_use]
    pub fn indices(self) -> Range<usize> {
        self.from..self.to
    }
}

/// Returns the index range of candles whose timestamp falls inside an
/// inclusive time window. Bounds may arrive in either order.
#[must_use]
pub fn visible_range_for_time_window(candles: &[Candle], start: i64, end: i64) -> VisibleRange {
    let (min_t, max_t) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    let from = candles.partition_point(|candle| candle.timestamp < min_t);
    let to = candles.partition_point(|candle| candle.timestamp <= max_t);
    VisibleRange::new(from, to)
}
