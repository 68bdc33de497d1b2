//! Null backend for dry runs
//!
//! Emits nothing, but counts draw calls so a dry run can still report
//! what a pass would have produced.

use hyperdraw_math::Vector;

use super::Backend;

/// Backend that discards all primitives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullBackend {
    lines: usize,
    faces: usize,
}

impl NullBackend {
    /// A fresh counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines received since the last reset.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Faces received since the last reset.
    pub fn faces(&self) -> usize {
        self.faces
    }
}

impl<S> Backend<S> for NullBackend {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn draw_line(&mut self, _a: Vector<S, 2>, _b: Vector<S, 2>) {
        self.lines += 1;
    }

    fn draw_face(&mut self, _vertices: &[Vector<S, 2>]) {
        self.faces += 1;
    }
}
