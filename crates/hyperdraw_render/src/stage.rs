//! Renderer chain: one stage per dimension level
//!
//! A [`DepthStage`] transforms its N-dimensional input, projects it one
//! dimension down, and hands the result to the stage below it; the
//! terminal [`PlaneStage`] applies the final 2-D transform and emits to a
//! backend. Each stage borrows the transform and camera for its level
//! and owns the next stage by value, so a whole chain is assembled by
//! nesting constructors:
//!
//! ```
//! use hyperdraw_core::Affine;
//! use hyperdraw_render::{DepthStage, NullBackend, PlaneStage, Projection, Stage};
//! use hyperdraw_math::Vector;
//!
//! let t4 = Affine::<f64, 4>::identity();
//! let t3 = Affine::<f64, 3>::identity();
//! let t2 = Affine::<f64, 2>::identity();
//! let p4 = Projection::new(10.0);
//! let p3 = Projection::new(10.0);
//! let mut backend = NullBackend::new();
//!
//! let mut chain = DepthStage::new(&t4, &p4,
//!     DepthStage::new(&t3, &p3,
//!         PlaneStage::new(&t2, &mut backend)));
//! chain.draw_line(Vector::new([0.0; 4]), Vector::new([1.0, 0.0, 0.0, 0.0]));
//! ```
//!
//! Levels are distinct types, so feeding a vector of the wrong dimension
//! into a stage does not compile.

use hyperdraw_core::Affine;
use hyperdraw_math::{Scalar, Vector};

use crate::backend::Backend;
use crate::projection::{Project, Projection};

/// One level of the renderer chain.
pub trait Stage {
    /// Vector type this level consumes.
    type Vector: Copy;

    /// Begin a batch of draw calls.
    fn frame_start(&mut self);

    /// End a batch of draw calls.
    fn frame_end(&mut self);

    /// Draw a line segment.
    fn draw_line(&mut self, a: Self::Vector, b: Self::Vector);

    /// Draw a filled polygon. The loop closes implicitly.
    fn draw_face(&mut self, vertices: &[Self::Vector]);
}

/// Terminal stage: applies the 2-D transform and feeds the backend.
pub struct PlaneStage<'a, S, B> {
    transform: &'a Affine<S, 2>,
    backend: &'a mut B,
}

impl<'a, S: Scalar, B: Backend<S>> PlaneStage<'a, S, B> {
    /// Create the terminal stage over a backend.
    pub fn new(transform: &'a Affine<S, 2>, backend: &'a mut B) -> Self {
        Self { transform, backend }
    }
}

impl<'a, S: Scalar, B: Backend<S>> Stage for PlaneStage<'a, S, B> {
    type Vector = Vector<S, 2>;

    fn frame_start(&mut self) {
        self.backend.frame_start();
    }

    fn frame_end(&mut self) {
        self.backend.frame_end();
    }

    fn draw_line(&mut self, a: Vector<S, 2>, b: Vector<S, 2>) {
        self.backend
            .draw_line(self.transform.apply(a), self.transform.apply(b));
    }

    fn draw_face(&mut self, vertices: &[Vector<S, 2>]) {
        let transformed: Vec<Vector<S, 2>> =
            vertices.iter().map(|&v| self.transform.apply(v)).collect();
        self.backend.draw_face(&transformed);
    }
}

/// Reducing stage: transforms, projects one dimension down, delegates.
pub struct DepthStage<'a, S, const N: usize, L> {
    transform: &'a Affine<S, N>,
    projection: &'a Projection<S>,
    lower: L,
}

impl<'a, S: Scalar, const N: usize, L> DepthStage<'a, S, N, L> {
    /// Create a stage for dimension N over the next-lower stage.
    pub fn new(transform: &'a Affine<S, N>, projection: &'a Projection<S>, lower: L) -> Self {
        Self {
            transform,
            projection,
            lower,
        }
    }
}

impl<'a, S: Scalar, const N: usize, L> Stage for DepthStage<'a, S, N, L>
where
    Vector<S, N>: Project<S>,
    L: Stage<Vector = <Vector<S, N> as Project<S>>::Lower>,
{
    type Vector = Vector<S, N>;

    fn frame_start(&mut self) {
        self.lower.frame_start();
    }

    fn frame_end(&mut self) {
        self.lower.frame_end();
    }

    fn draw_line(&mut self, a: Vector<S, N>, b: Vector<S, N>) {
        self.lower.draw_line(
            self.transform.apply(a).project(self.projection),
            self.transform.apply(b).project(self.projection),
        );
    }

    fn draw_face(&mut self, vertices: &[Vector<S, N>]) {
        let projected: Vec<L::Vector> = vertices
            .iter()
            .map(|&v| self.transform.apply(v).project(self.projection))
            .collect();
        self.lower.draw_face(&projected);
    }
}

/// A 2-D chain: the terminal stage alone.
pub type Stage2<'a, S, B> = PlaneStage<'a, S, B>;
/// A 3-D chain.
pub type Stage3<'a, S, B> = DepthStage<'a, S, 3, Stage2<'a, S, B>>;
/// A 4-D chain.
pub type Stage4<'a, S, B> = DepthStage<'a, S, 4, Stage3<'a, S, B>>;
/// A 5-D chain.
pub type Stage5<'a, S, B> = DepthStage<'a, S, 5, Stage4<'a, S, B>>;
/// A 6-D chain.
pub type Stage6<'a, S, B> = DepthStage<'a, S, 6, Stage5<'a, S, B>>;
