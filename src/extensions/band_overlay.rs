//! Paints Bollinger Bands onto a host drawing surface.
//!
//! Back-to-front: the translucent fill between upper and lower, then the
//! upper, middle and lower lines. Undefined values are skipped. Nothing here
//! returns an error; bad input degrades to drawing less.

use tracing::trace;

use crate::core::VisibleRange;
use crate::extensions::{BackgroundStyle, BandLineStyle, BandStyle};
use crate::indicators::{BandKind, BandSeries, defined};
use crate::render::{CoordinateMapper, DrawingSurface, SurfaceGuard};

/// Draws `series` over the half-open index window `range`.
///
/// The surface's transient state (colors, width, dash, alpha) is saved on
/// entry and restored on every exit path.
pub fn draw_bollinger_bands<S, M>(
    series: &BandSeries,
    style: &BandStyle,
    range: VisibleRange,
    mapper: &M,
    surface: &mut S,
) where
    S: DrawingSurface + ?Sized,
    M: CoordinateMapper + ?Sized,
{
    let mut surface = SurfaceGuard::new(surface);
    let range = range.clamp_to(series.len());
    if range.is_empty() {
        trace!(len = series.len(), "bollinger overlay has nothing in range");
        return;
    }

    if style.background.visible {
        let vertices = fill_background(series, style, range, mapper, &mut *surface);
        trace!(vertices, "filled bollinger background");
    }

    for kind in BandKind::DRAW_ORDER {
        let line = style.line(kind);
        if !line.visible {
            continue;
        }
        let plotted = stroke_band(series.band(kind), line, range, mapper, &mut *surface);
        trace!(
            band = kind.key(),
            from = range.from,
            to = range.to,
            plotted,
            "stroked bollinger band"
        );
    }
}

/// Traces upper left-to-right then lower right-to-left over every index where
/// both are defined, and fills the closed outline. Returns the vertex count.
fn fill_background<S, M>(
    series: &BandSeries,
    style: &BandStyle,
    range: VisibleRange,
    mapper: &M,
    surface: &mut S,
) -> usize
where
    S: DrawingSurface + ?Sized,
    M: CoordinateMapper + ?Sized,
{
    let (upper, lower) = (series.upper(), series.lower());
    let mut edge = Vec::with_capacity(range.len());
    for index in range.indices() {
        let (Some(top), Some(bottom)) = (defined(upper[index]), defined(lower[index])) else {
            continue;
        };
        let x = mapper.index_to_x(index);
        edge.push((x, mapper.value_to_y(top), mapper.value_to_y(bottom)));
    }

    let Some(&(first_x, first_y, _)) = edge.first() else {
        return 0;
    };

    let mut surface = SurfaceGuard::new(surface);
    surface.set_global_alpha(fill_alpha(style.background));
    surface.set_fill_color(style.upper.color);
    surface.begin_path();
    surface.move_to(first_x, first_y);
    for &(x, top_y, _) in &edge[1..] {
        surface.line_to(x, top_y);
    }
    for &(x, _, bottom_y) in edge.iter().rev() {
        surface.line_to(x, bottom_y);
    }
    surface.close_path();
    surface.fill();

    edge.len() * 2
}

/// Strokes one band as an open polyline. A run of undefined values lifts the
/// pen: the next defined value starts a new sub-path. Returns the number of
/// plotted points; zero means nothing was touched on the surface.
fn stroke_band<S, M>(
    values: &[f64],
    line: &BandLineStyle,
    range: VisibleRange,
    mapper: &M,
    surface: &mut S,
) -> usize
where
    S: DrawingSurface + ?Sized,
    M: CoordinateMapper + ?Sized,
{
    let mut plotted = 0;
    let mut pen_down = false;

    for index in range.indices() {
        let Some(value) = defined(values[index]) else {
            pen_down = false;
            continue;
        };
        let x = mapper.index_to_x(index);
        let y = mapper.value_to_y(value);

        if plotted == 0 {
            surface.set_stroke_color(line.color);
            surface.set_line_width(f64::from(line.line_width));
            surface.set_line_dash(&line.line_style.dash_pattern());
            surface.begin_path();
        }
        if pen_down {
            surface.line_to(x, y);
        } else {
            surface.move_to(x, y);
            pen_down = true;
        }
        plotted += 1;
    }

    if plotted > 0 {
        surface.stroke();
    }
    plotted
}

fn fill_alpha(background: BackgroundStyle) -> f64 {
    if background.opacity.is_finite() {
        background.opacity.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
