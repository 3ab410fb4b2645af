//! Bollinger Bands over a trailing simple-moving-average window.
//!
//! Every index is computed from its own window slice so a malformed sample
//! only affects the windows that contain it. Population standard deviation
//! (divide by `length`) is used, and the configured `length` is always the
//! divisor even when the window holds NaN, which then propagates.
//!
//! Offsets are applied after computation: windows are taken over unshifted
//! data and the resulting series are moved as a whole.

#[cfg(feature = "parallel-compute")]
use rayon::prelude::*;
use tracing::debug;

use crate::core::Candle;
use crate::error::ChartResult;
use crate::indicators::{BandKind, BandOptions, BandSeries};

#[derive(Debug, Clone, Copy)]
struct WindowStats {
    mean: f64,
    std_dev: f64,
}

impl WindowStats {
    const UNDEFINED: Self = Self {
        mean: f64::NAN,
        std_dev: f64::NAN,
    };
}

/// Computes upper/middle/lower bands for `candles`.
///
/// Fails with `ChartError::InvalidOptions` when `options` are out of contract.
/// An empty candle slice yields empty series.
pub fn compute_bollinger_bands(candles: &[Candle], options: BandOptions) -> ChartResult<BandSeries> {
    options.validate()?;

    let source: Vec<f64> = candles
        .iter()
        .map(|candle| options.source.value_of(candle))
        .collect();
    let stats = rolling_window_stats(&source, options.length);

    let multiplier = options.std_dev_multiplier;
    let mut middle = Vec::with_capacity(stats.len());
    let mut upper = Vec::with_capacity(stats.len());
    let mut lower = Vec::with_capacity(stats.len());
    for window in &stats {
        let width = multiplier * window.std_dev;
        middle.push(window.mean);
        upper.push(window.mean + width);
        lower.push(window.mean - width);
    }

    let series = BandSeries::from_parts(
        apply_offset(&upper, options.offset),
        apply_offset(&middle, options.offset),
        apply_offset(&lower, options.offset),
    )?;

    debug!(
        candles = candles.len(),
        length = options.length,
        multiplier,
        offset = options.offset,
        defined = series.defined_count(BandKind::Middle),
        "computed bollinger bands"
    );

    Ok(series)
}

/// Trailing simple moving average. Indices before `length - 1` are NaN.
///
/// A zero `length` yields an all-NaN result.
#[must_use]
pub fn simple_moving_average(values: &[f64], length: usize) -> Vec<f64> {
    rolling_window_stats(values, length)
        .into_iter()
        .map(|window| window.mean)
        .collect()
}

/// Trailing population standard deviation over the same windows as
/// `simple_moving_average`.
#[must_use]
pub fn population_std_dev(values: &[f64], length: usize) -> Vec<f64> {
    rolling_window_stats(values, length)
        .into_iter()
        .map(|window| window.std_dev)
        .collect()
}

/// Moves each value from index `i` to `i + offset`.
///
/// Values landing outside `[0, len)` are dropped and vacated slots become NaN.
#[must_use]
pub fn apply_offset(values: &[f64], offset: isize) -> Vec<f64> {
    if offset == 0 {
        return values.to_vec();
    }

    let len = values.len();
    let shift = offset.unsigned_abs();
    let mut shifted = vec![f64::NAN; len];
    if shift >= len {
        return shifted;
    }

    if offset > 0 {
        shifted[shift..].copy_from_slice(&values[..len - shift]);
    } else {
        shifted[..len - shift].copy_from_slice(&values[shift..]);
    }
    shifted
}

fn rolling_window_stats(values: &[f64], length: usize) -> Vec<WindowStats> {
    if length == 0 {
        return vec![WindowStats::UNDEFINED; values.len()];
    }

    #[cfg(feature = "parallel-compute")]
    {
        (0..values.len())
            .into_par_iter()
            .map(|index| stats_at(values, length, index))
            .collect()
    }

    #[cfg(not(feature = "parallel-compute"))]
    {
        (0..values.len())
            .map(|index| stats_at(values, length, index))
            .collect()
    }
}

fn stats_at(values: &[f64], length: usize, index: usize) -> WindowStats {
    if index + 1 < length {
        return WindowStats::UNDEFINED;
    }
    window_stats(&values[index + 1 - length..=index])
}

fn window_stats(window: &[f64]) -> WindowStats {
    let count = window.len() as f64;
    let mean = window.iter().sum::<f64>() / count;
    let variance = window
        .iter()
        .map(|value| {
            let deviation = value - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / count;
    WindowStats {
        mean,
        std_dev: variance.sqrt(),
    }
}
