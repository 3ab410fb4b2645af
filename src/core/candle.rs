use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64, unix_millis_to_datetime};
use crate::error::{ChartError, ChartResult};

/// One OHLCV sample. `timestamp` is in Unix milliseconds.
///
/// Candles are plain values: `new` performs no checks so that upstream data
/// (including malformed samples) reaches the band engine untouched. Hosts that
/// want to reject bad input call `validate` or `validate_candle_sequence`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Candle {
    #[must_use]
    pub const fn new(
        timestamp: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Builds a validated candle from strongly-typed temporal/decimal input.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> ChartResult<Self> {
        let candle = Self::new(
            datetime_to_unix_millis(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            volume,
        );
        candle.validate()?;
        Ok(candle)
    }

    /// Checks the OHLC invariants:
    /// - all prices are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn validate(&self) -> ChartResult<()> {
        if !self.open.is_finite()
            || !self.high.is_finite()
            || !self.low.is_finite()
            || !self.close.is_finite()
        {
            return Err(ChartError::InvalidData(format!(
                "candle at {} has non-finite prices",
                self.timestamp
            )));
        }
        if self.low > self.high {
            return Err(ChartError::InvalidData(format!(
                "candle at {} has low > high",
                self.timestamp
            )));
        }
        if self.open < self.low
            || self.open > self.high
            || self.close < self.low
            || self.close > self.high
        {
            return Err(ChartError::InvalidData(format!(
                "candle at {} has open/close outside low/high range",
                self.timestamp
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        unix_millis_to_datetime(self.timestamp)
    }
}

/// Validates every candle and requires strictly increasing timestamps.
pub fn validate_candle_sequence(candles: &[Candle]) -> ChartResult<()> {
    for candle in candles {
        candle.validate()?;
    }
    validate_candle_order(candles)
}

/// Requires strictly increasing timestamps. Prices are not inspected, so a
/// malformed sample still reaches the band engine.
pub fn validate_candle_order(candles: &[Candle]) -> ChartResult<()> {
    if let Some(pair) = candles
        .windows(2)
        .find(|pair| pair[1].timestamp <= pair[0].timestamp)
    {
        return Err(ChartError::InvalidData(format!(
            "candle timestamps must be strictly increasing: {} is followed by {}",
            pair[0].timestamp, pair[1].timestamp
        )));
    }
    Ok(())
}
