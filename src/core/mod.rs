pub mod candle;
pub mod primitives;
pub mod windowing;

pub use candle::{Candle, validate_candle_order, validate_candle_sequence};
pub use windowing::{VisibleRange, visible_range_for_time_window};
