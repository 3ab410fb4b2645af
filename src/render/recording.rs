use crate::render::{Color, DashPattern, DrawingSurface};

/// One call received by a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    SetStrokeColor(Color),
    SetFillColor(Color),
    SetLineWidth(f64),
    SetLineDash(DashPattern),
    SetGlobalAlpha(f64),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke,
    Fill,
}

/// Transient paint state, with canvas defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
    pub line_dash: DashPattern,
    pub global_alpha: f64,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            line_width: 1.0,
            line_dash: DashPattern::new(),
            global_alpha: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    Stroke,
    Fill,
}

/// Snapshot of the current path taken when it was stroked or filled.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedPath {
    pub op: PaintOp,
    pub subpaths: Vec<Vec<(f64, f64)>>,
    pub closed: bool,
    pub state: SurfaceState,
}

impl PaintedPath {
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(Vec::len).sum()
    }
}

/// Headless drawing surface that records every command, tracks the state
/// stack, and keeps a snapshot of each painted path.
///
/// Used by tests and by hosts that want to inspect overlay output without a
/// real backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    state: SurfaceState,
    saved: Vec<SurfaceState>,
    current_path: Vec<Vec<(f64, f64)>>,
    current_closed: bool,
    painted: Vec<PaintedPath>,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Number of `restore` calls that had no matching `save`.
    #[must_use]
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    #[must_use]
    pub fn painted(&self) -> &[PaintedPath] {
        &self.painted
    }

    #[must_use]
    pub fn strokes(&self) -> Vec<&PaintedPath> {
        self.painted
            .iter()
            .filter(|path| path.op == PaintOp::Stroke)
            .collect()
    }

    #[must_use]
    pub fn fills(&self) -> Vec<&PaintedPath> {
        self.painted
            .iter()
            .filter(|path| path.op == PaintOp::Fill)
            .collect()
    }

    /// Drops recorded output but keeps the current paint state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.painted.clear();
    }

    fn paint(&mut self, op: PaintOp) {
        self.painted.push(PaintedPath {
            op,
            subpaths: self.current_path.clone(),
            closed: self.current_closed,
            state: self.state.clone(),
        });
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => self.unbalanced_restores += 1,
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
        self.state.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
        self.state.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
        self.state.line_width = width;
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        let pattern = DashPattern::from_slice(pattern);
        self.commands.push(DrawCommand::SetLineDash(pattern.clone()));
        self.state.line_dash = pattern;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::SetGlobalAlpha(alpha));
        self.state.global_alpha = alpha;
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
        self.current_path.clear();
        self.current_closed = false;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
        self.current_path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
        match self.current_path.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            None => self.current_path.push(vec![(x, y)]),
        }
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
        self.current_closed = true;
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
        self.paint(PaintOp::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
        self.paint(PaintOp::Fill);
    }
}
