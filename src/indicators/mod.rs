//! Indicator computation. Everything here is pure: inputs are borrowed, the
//! result is a freshly allocated value, and nothing outside the arguments is
//! read or written.

mod bollinger;
mod options;
mod series;

pub use bollinger::{
    apply_offset, compute_bollinger_bands, population_std_dev, simple_moving_average,
};
pub use options::{
    BandOptions, DEFAULT_BAND_LENGTH, DEFAULT_STD_DEV_MULTIPLIER, EDITOR_MIN_STD_DEV_MULTIPLIER,
    EDITOR_OFFSET_LIMIT, MovingAverageKind, PriceSource,
};
pub use series::{BandKind, BandPoint, BandSeries, BandValue};
pub(crate) use series::defined;
