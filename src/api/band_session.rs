use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{Candle, VisibleRange, validate_candle_order};
use crate::error::ChartResult;
use crate::extensions::{BandStyle, BollingerOverlay, draw_bollinger_bands};
use crate::indicators::{BandKind, BandOptions, BandSeries, compute_bollinger_bands};
use crate::render::{CoordinateMapper, DrawingSurface};

/// What a session mutation requires from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionUpdate {
    /// Band series were recomputed and replaced.
    pub recomputed: bool,
    /// The overlay must be redrawn.
    pub redraw: bool,
}

impl SessionUpdate {
    const NONE: Self = Self {
        recomputed: false,
        redraw: false,
    };
    const REDRAW: Self = Self {
        recomputed: false,
        redraw: true,
    };
    const RECOMPUTE: Self = Self {
        recomputed: true,
        redraw: true,
    };

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            recomputed: self.recomputed || other.recomputed,
            redraw: self.redraw || other.redraw,
        }
    }
}

/// One chart session's indicator state, passed around explicitly.
///
/// Series are recomputed into a fresh allocation and swapped in whole, so a
/// draw never observes a partially updated series.
#[derive(Debug, Clone)]
pub struct BandSession {
    candles: Vec<Candle>,
    options: BandOptions,
    style: BandStyle,
    series: Arc<BandSeries>,
    indicator_enabled: bool,
}

impl BandSession {
    /// Creates a session with default options and style. The indicator
    /// starts disabled, as on a fresh chart.
    pub fn new(candles: Vec<Candle>) -> ChartResult<Self> {
        Self::with_config(candles, BandOptions::default(), BandStyle::default())
    }

    pub fn with_config(
        candles: Vec<Candle>,
        options: BandOptions,
        style: BandStyle,
    ) -> ChartResult<Self> {
        validate_candle_order(&candles)?;
        let series = compute_bollinger_bands(&candles, options)?;
        Ok(Self {
            candles,
            options,
            style,
            series: Arc::new(series),
            indicator_enabled: false,
        })
    }

    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    #[must_use]
    pub fn options(&self) -> BandOptions {
        self.options
    }

    #[must_use]
    pub fn style(&self) -> &BandStyle {
        &self.style
    }

    #[must_use]
    pub fn series(&self) -> &BandSeries {
        &self.series
    }

    /// Shared handle to the current series snapshot.
    #[must_use]
    pub fn shared_series(&self) -> Arc<BandSeries> {
        Arc::clone(&self.series)
    }

    #[must_use]
    pub fn is_indicator_enabled(&self) -> bool {
        self.indicator_enabled
    }

    pub fn add_indicator(&mut self) -> SessionUpdate {
        if self.indicator_enabled {
            return SessionUpdate::NONE;
        }
        self.indicator_enabled = true;
        SessionUpdate::REDRAW
    }

    pub fn remove_indicator(&mut self) -> SessionUpdate {
        if !self.indicator_enabled {
            return SessionUpdate::NONE;
        }
        self.indicator_enabled = false;
        SessionUpdate::REDRAW
    }

    /// Replaces the candle sequence and recomputes. On error nothing changes.
    pub fn set_candles(&mut self, candles: Vec<Candle>) -> ChartResult<SessionUpdate> {
        if let Err(err) = validate_candle_order(&candles) {
            warn!(error = %err, "rejecting unordered candle sequence");
            return Err(err);
        }
        let series = compute_bollinger_bands(&candles, self.options)?;
        self.candles = candles;
        self.replace_series(series);
        Ok(SessionUpdate::RECOMPUTE)
    }

    /// Commits a complete options/style pair from the settings editor.
    ///
    /// Options are validated before anything is touched. Changed options
    /// trigger a recompute; a style-only change only needs a redraw.
    pub fn apply(&mut self, options: BandOptions, style: BandStyle) -> ChartResult<SessionUpdate> {
        let update = self.apply_options(options)?;
        Ok(update.merge(self.apply_style(style)))
    }

    pub fn apply_options(&mut self, options: BandOptions) -> ChartResult<SessionUpdate> {
        if let Err(err) = options.validate() {
            warn!(error = %err, "rejecting band options");
            return Err(err);
        }
        if options == self.options {
            return Ok(SessionUpdate::NONE);
        }

        let series = compute_bollinger_bands(&self.candles, options)?;
        self.options = options;
        self.replace_series(series);
        Ok(SessionUpdate::RECOMPUTE)
    }

    pub fn apply_style(&mut self, style: BandStyle) -> SessionUpdate {
        if style == self.style {
            return SessionUpdate::NONE;
        }
        self.style = style;
        SessionUpdate::REDRAW
    }

    /// Overlay for host registration. `None` while the indicator is disabled.
    #[must_use]
    pub fn overlay(&self) -> Option<BollingerOverlay> {
        self.indicator_enabled
            .then(|| BollingerOverlay::new(self.shared_series(), self.style))
    }

    /// Draws the current series; a no-op while the indicator is disabled.
    pub fn draw<S, M>(&self, range: VisibleRange, mapper: &M, surface: &mut S)
    where
        S: DrawingSurface + ?Sized,
        M: CoordinateMapper + ?Sized,
    {
        if !self.indicator_enabled {
            return;
        }
        draw_bollinger_bands(&self.series, &self.style, range, mapper, surface);
    }

    fn replace_series(&mut self, series: BandSeries) {
        debug!(
            candles = self.candles.len(),
            defined = series.defined_count(BandKind::Middle),
            "replaced band series"
        );
        self.series = Arc::new(series);
    }
}
