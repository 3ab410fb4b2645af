use serde::{Deserialize, Serialize};

use crate::indicators::BandKind;
use crate::render::{Color, LineStrokeStyle};

pub const EDITOR_MIN_LINE_WIDTH: u32 = 1;
pub const EDITOR_MAX_LINE_WIDTH: u32 = 5;
pub const DEFAULT_BACKGROUND_OPACITY: f64 = 0.1;

/// Presentation of a single band line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandLineStyle {
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub color: Color,
    #[serde(default = "default_line_width")]
    pub line_width: u32,
    #[serde(default)]
    pub line_style: LineStrokeStyle,
}

impl BandLineStyle {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            visible: true,
            color,
            line_width: 1,
            line_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStrokeStyle) -> Self {
        self.line_style = line_style;
        self
    }
}

/// Fill between the upper and lower band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStyle {
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_background_opacity")]
    pub opacity: f64,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: DEFAULT_BACKGROUND_OPACITY,
        }
    }
}

/// Presentation state for the whole overlay. Independent of `BandOptions`:
/// changing it only requires a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandStyle {
    pub middle: BandLineStyle,
    pub upper: BandLineStyle,
    pub lower: BandLineStyle,
    pub background: BackgroundStyle,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            middle: BandLineStyle::new(Color::from_rgb8(0x25, 0x63, 0xeb)),
            upper: BandLineStyle::new(Color::from_rgb8(0x16, 0xa3, 0x4a)),
            lower: BandLineStyle::new(Color::from_rgb8(0xdc, 0x26, 0x26)),
            background: BackgroundStyle::default(),
        }
    }
}

impl BandStyle {
    #[must_use]
    pub fn line(&self, kind: BandKind) -> &BandLineStyle {
        match kind {
            BandKind::Upper => &self.upper,
            BandKind::Middle => &self.middle,
            BandKind::Lower => &self.lower,
        }
    }

    pub fn line_mut(&mut self, kind: BandKind) -> &mut BandLineStyle {
        match kind {
            BandKind::Upper => &mut self.upper,
            BandKind::Middle => &mut self.middle,
            BandKind::Lower => &mut self.lower,
        }
    }

    #[must_use]
    pub fn with_line(mut self, kind: BandKind, line: BandLineStyle) -> Self {
        *self.line_mut(kind) = line;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: BackgroundStyle) -> Self {
        self.background = background;
        self
    }

    /// Pulls editor input into the ranges the style tab allows: line widths
    /// in `[1, 5]` and opacity in `[0, 1]`.
    #[must_use]
    pub fn clamped_for_editor(mut self) -> Self {
        for kind in BandKind::DRAW_ORDER {
            let line = self.line_mut(kind);
            line.line_width = line
                .line_width
                .clamp(EDITOR_MIN_LINE_WIDTH, EDITOR_MAX_LINE_WIDTH);
        }
        self.background.opacity = if self.background.opacity.is_finite() {
            self.background.opacity.clamp(0.0, 1.0)
        } else {
            DEFAULT_BACKGROUND_OPACITY
        };
        self
    }
}

fn default_visible() -> bool {
    true
}

fn default_line_width() -> u32 {
    1
}

fn default_background_opacity() -> f64 {
    DEFAULT_BACKGROUND_OPACITY
}
