use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::VisibleRange;
use crate::error::{ChartError, ChartResult};
use crate::extensions::{BandStyle, draw_bollinger_bands};
use crate::indicators::{BandKind, BandSeries};
use crate::render::{CoordinateMapper, DrawingSurface};

pub const BOLLINGER_OVERLAY_NAME: &str = "bollinger_bands";
pub const BOLLINGER_OVERLAY_SHORT_NAME: &str = "BB";
pub const BOLLINGER_OVERLAY_PRECISION: u8 = 2;

/// How a figure is presented by the host legend/tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    #[default]
    Line,
}

/// Pane an overlay is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPane {
    #[default]
    Price,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayFigure {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub kind: FigureKind,
}

/// Registration descriptor handed to the host charting surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySpec {
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub pane: OverlayPane,
    pub precision: u8,
    pub figures: Vec<OverlayFigure>,
}

/// Per-index figure values keyed by figure key, in figure order.
pub type FigureValues = IndexMap<String, Option<f64>>;

/// A `(values, draw)` pair the host can register and redraw.
pub trait IndicatorOverlay {
    fn spec(&self) -> &OverlaySpec;

    /// Values for every index, used by host legends and tooltips.
    fn calc(&self) -> Vec<FigureValues>;

    fn draw(
        &self,
        range: VisibleRange,
        mapper: &dyn CoordinateMapper,
        surface: &mut dyn DrawingSurface,
    );
}

/// Registration capability exposed by a host charting surface.
pub trait OverlayHost {
    fn register_overlay(&mut self, overlay: Box<dyn IndicatorOverlay>) -> ChartResult<()>;

    /// Returns `true` when an overlay with `name` was removed.
    fn remove_overlay(&mut self, name: &str) -> bool;
}

/// Name-keyed overlay table that draws in registration order.
#[derive(Default)]
pub struct OverlayRegistry {
    overlays: IndexMap<String, Box<dyn IndicatorOverlay>>,
}

impl OverlayRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.overlays.contains_key(name)
    }

    pub fn draw_all(
        &self,
        range: VisibleRange,
        mapper: &dyn CoordinateMapper,
        surface: &mut dyn DrawingSurface,
    ) {
        for overlay in self.overlays.values() {
            overlay.draw(range, mapper, surface);
        }
    }
}

impl OverlayHost for OverlayRegistry {
    fn register_overlay(&mut self, overlay: Box<dyn IndicatorOverlay>) -> ChartResult<()> {
        let name = overlay.spec().name.clone();
        if name.is_empty() {
            return Err(ChartError::InvalidData(
                "overlay name must not be empty".to_owned(),
            ));
        }
        if self.overlays.contains_key(&name) {
            return Err(ChartError::InvalidData(format!(
                "overlay `{name}` is already registered"
            )));
        }
        self.overlays.insert(name, overlay);
        Ok(())
    }

    fn remove_overlay(&mut self, name: &str) -> bool {
        self.overlays.shift_remove(name).is_some()
    }
}

/// Bollinger Bands overlay: an immutable series snapshot plus its style.
///
/// The series is shared, so a session can replace its own copy after a
/// recompute without touching overlays already handed to the host.
#[derive(Debug, Clone)]
pub struct BollingerOverlay {
    spec: OverlaySpec,
    series: Arc<BandSeries>,
    style: BandStyle,
}

impl BollingerOverlay {
    #[must_use]
    pub fn new(series: Arc<BandSeries>, style: BandStyle) -> Self {
        Self {
            spec: Self::spec_template(),
            series,
            style,
        }
    }

    #[must_use]
    pub fn spec_template() -> OverlaySpec {
        OverlaySpec {
            name: BOLLINGER_OVERLAY_NAME.to_owned(),
            short_name: BOLLINGER_OVERLAY_SHORT_NAME.to_owned(),
            pane: OverlayPane::Price,
            precision: BOLLINGER_OVERLAY_PRECISION,
            figures: BandKind::DRAW_ORDER
                .iter()
                .map(|kind| OverlayFigure {
                    key: kind.key().to_owned(),
                    title: kind.title().to_owned(),
                    kind: FigureKind::Line,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn series(&self) -> &BandSeries {
        &self.series
    }

    #[must_use]
    pub fn style(&self) -> &BandStyle {
        &self.style
    }

    /// Legend text such as `Upper: 104.00`. `None` when the value is undefined.
    #[must_use]
    pub fn format_figure(&self, index: usize, kind: BandKind) -> Option<String> {
        let value = self.series.value_at(index)?.defined(kind)?;
        Some(format!(
            "{}{:.*}",
            kind.title(),
            usize::from(self.spec.precision),
            value
        ))
    }
}

impl IndicatorOverlay for BollingerOverlay {
    fn spec(&self) -> &OverlaySpec {
        &self.spec
    }

    fn calc(&self) -> Vec<FigureValues> {
        (0..self.series.len())
            .filter_map(|index| self.series.value_at(index))
            .map(|value| {
                BandKind::DRAW_ORDER
                    .iter()
                    .map(|kind| (kind.key().to_owned(), value.defined(*kind)))
                    .collect::<FigureValues>()
            })
            .collect()
    }

    fn draw(
        &self,
        range: VisibleRange,
        mapper: &dyn CoordinateMapper,
        surface: &mut dyn DrawingSurface,
    ) {
        draw_bollinger_bands(&self.series, &self.style, range, mapper, surface);
    }
}
