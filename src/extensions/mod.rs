//! Chart overlays built on top of the indicator engine.
//!
//! Overlays only read band series and style values; they never recompute.

mod band_overlay;
mod overlay;
mod style;

pub use band_overlay::draw_bollinger_bands;
pub use overlay::{
    BOLLINGER_OVERLAY_NAME, BOLLINGER_OVERLAY_PRECISION, BOLLINGER_OVERLAY_SHORT_NAME,
    BollingerOverlay, FigureKind, FigureValues, IndicatorOverlay, OverlayFigure, OverlayHost,
    OverlayPane, OverlayRegistry, OverlaySpec,
};
pub use style::{
    BackgroundStyle, BandLineStyle, BandStyle, DEFAULT_BACKGROUND_OPACITY, EDITOR_MAX_LINE_WIDTH,
    EDITOR_MIN_LINE_WIDTH,
};
