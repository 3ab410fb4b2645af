use std::ops::{Deref, DerefMut};

use crate::render::Color;

/// Path-based drawing sink supplied by the host for one redraw.
///
/// The method set mirrors an immediate-mode 2D canvas: state setters,
/// a save/restore stack, and path construction followed by `stroke`/`fill`.
/// Implementations must not fail; backend errors are the adapter's concern.
pub trait DrawingSurface {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, pattern: &[f64]);
    fn set_global_alpha(&mut self, alpha: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
}

/// Index/value to pixel conversion supplied by the host for one redraw.
///
/// The mapping can change between redraws (pan/zoom), so callers must not
/// cache results across draw calls.
pub trait CoordinateMapper {
    fn index_to_x(&self, index: usize) -> f64;
    fn value_to_y(&self, value: f64) -> f64;
}

impl<T: CoordinateMapper + ?Sized> CoordinateMapper for &T {
    fn index_to_x(&self, index: usize) -> f64 {
        (**self).index_to_x(index)
    }

    fn value_to_y(&self, value: f64) -> f64 {
        (**self).value_to_y(value)
    }
}

/// Saves surface state on creation and restores it on drop, so every exit
/// path (including early returns) leaves the surface as it was found.
pub struct SurfaceGuard<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawingSurface + ?Sized> SurfaceGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawingSurface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
