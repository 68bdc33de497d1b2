//! Output backends
//!
//! A backend consumes 2-D primitives and accumulates whatever output it
//! owns: JSON draw-command values, SVG elements, or nothing at all. The
//! contract is small by design, and backends never fail on valid 2-D
//! input.

use hyperdraw_math::Vector;

mod json;
mod null;
mod svg;

pub use json::JsonBackend;
pub use null::NullBackend;
pub use svg::SvgBackend;

/// The draw-call contract a 2-D output backend satisfies.
pub trait Backend<S> {
    /// Clear accumulated output back to the initial state. Idempotent.
    fn reset(&mut self);

    /// Called before a batch of draw calls. No-op by default.
    fn frame_start(&mut self) {}

    /// Called after a batch of draw calls. No-op by default.
    fn frame_end(&mut self) {}

    /// Emit one line segment. A zero-length segment is still emitted.
    fn draw_line(&mut self, a: Vector<S, 2>, b: Vector<S, 2>);

    /// Emit one filled polygon, closing the path back to the first vertex.
    fn draw_face(&mut self, vertices: &[Vector<S, 2>]);
}

impl<'a, S, B: Backend<S> + ?Sized> Backend<S> for &'a mut B {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn frame_start(&mut self) {
        (**self).frame_start();
    }

    fn frame_end(&mut self) {
        (**self).frame_end();
    }

    fn draw_line(&mut self, a: Vector<S, 2>, b: Vector<S, 2>) {
        (**self).draw_line(a, b);
    }

    fn draw_face(&mut self, vertices: &[Vector<S, 2>]) {
        (**self).draw_face(vertices);
    }
}
