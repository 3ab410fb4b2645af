//! chart-bands: Bollinger Bands indicator engine and overlay renderer.
//!
//! The crate splits into a pure computation path (`indicators`) that turns an
//! OHLCV candle sequence into three aligned band series, and a drawing path
//! (`extensions`) that paints those series onto a host-provided surface
//! through the small traits exposed by `render`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod indicators;
pub mod render;
pub mod telemetry;

pub use api::{BandSession, BandSettingsDraft, SessionUpdate};
pub use error::{ChartError, ChartResult};
pub use extensions::{BandStyle, BollingerOverlay, draw_bollinger_bands};
pub use indicators::{BandOptions, BandSeries, compute_bollinger_bands};
