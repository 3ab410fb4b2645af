mod mapping;
mod primitives;
mod recording;
mod surface;

pub use mapping::{LinearScale, ScaleCoordinateMapper};
pub use primitives::{Color, DashPattern, LineStrokeStyle};
pub use recording::{DrawCommand, PaintOp, PaintedPath, RecordingSurface, SurfaceState};
pub use surface::{CoordinateMapper, DrawingSurface, SurfaceGuard};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
