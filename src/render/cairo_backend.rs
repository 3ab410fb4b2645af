use cairo::Context;
use tracing::warn;

use crate::render::{Color, DrawingSurface};

#[derive(Debug, Clone, Copy, PartialEq)]
struct PaintState {
    stroke_color: Color,
    fill_color: Color,
    global_alpha: f64,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            global_alpha: 1.0,
        }
    }
}

/// `DrawingSurface` adapter over an external Cairo context (for example a
/// GTK `DrawingArea` draw callback or an offscreen `ImageSurface`).
///
/// Cairo has a single source color and no global alpha, so stroke/fill colors
/// and alpha are tracked here and folded into the source right before each
/// paint. Line width and dash live on the Cairo context itself and follow its
/// own save/restore stack.
pub struct CairoSurface<'a> {
    context: &'a Context,
    state: PaintState,
    saved: Vec<PaintState>,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            state: PaintState::default(),
            saved: Vec::new(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    fn apply_source(&self, color: Color) {
        let alpha = color.alpha * self.state.global_alpha.clamp(0.0, 1.0);
        self.context
            .set_source_rgba(color.red, color.green, color.blue, alpha);
    }
}

impl std::fmt::Debug for CairoSurface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CairoSurface")
            .field("state", &self.state)
            .field("save_depth", &self.saved.len())
            .finish_non_exhaustive()
    }
}

impl DrawingSurface for CairoSurface<'_> {
    fn save(&mut self) {
        if let Err(err) = self.context.save() {
            warn!(error = %err, "cairo save failed");
        }
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        if let Err(err) = self.context.restore() {
            warn!(error = %err, "cairo restore failed");
        }
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.context.set_dash(pattern, 0.0);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.global_alpha = alpha;
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self) {
        self.apply_source(self.state.stroke_color);
        if let Err(err) = self.context.stroke_preserve() {
            warn!(error = %err, "cairo stroke failed");
        }
    }

    fn fill(&mut self) {
        self.apply_source(self.state.fill_color);
        if let Err(err) = self.context.fill_preserve() {
            warn!(error = %err, "cairo fill failed");
        }
    }
}
