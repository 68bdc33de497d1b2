//! Perspective projection chain: one dimension removed per step
//!
//! Convention, applied identically at every level: the depth axis is the
//! *last* coordinate, and the camera sits at `eye` on the positive depth
//! axis looking toward the origin. A point at depth `z` keeps its
//! remaining coordinates scaled by `eye / (eye - z)`, so geometry nearer
//! the camera grows and geometry behind the origin shrinks.
//!
//! The chain is a sequence of these steps: projecting an N-dimensional
//! vector yields an (N-1)-dimensional one, which the next level projects
//! again, terminating at 2. Each level has its own [`Projection`] config.
//!
//! `depth == eye` puts a point on the camera itself; the scale factor
//! divides by zero and Inf/NaN propagate through to the backend
//! coordinates. The caller keeps the camera outside the object's extent;
//! nothing on the per-vertex path checks for it.

use hyperdraw_math::{Scalar, Vector};
use serde::Serialize;

/// Camera configuration for one dimension level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Projection<S> {
    eye: S,
}

impl<S: Scalar> Projection<S> {
    /// A camera at distance `eye_distance` along the depth axis.
    pub fn new(eye_distance: S) -> Self {
        Self { eye: eye_distance }
    }

    /// The configured eye distance.
    #[inline]
    pub fn eye_distance(&self) -> S {
        self.eye
    }

    /// Perspective scale factor for a point at the given depth.
    #[inline]
    pub fn scale_at(&self, depth: S) -> S {
        self.eye / (self.eye - depth)
    }
}

/// One perspective step: drop the depth axis, scale what remains.
///
/// Implemented for every vector dimension from 3 up to
/// [`hyperdraw_math::MAX_DIMENSION`]; 2-dimensional vectors are already
/// on the drawing plane and have no lower level.
pub trait Project<S: Scalar>: Sized {
    /// Vector type one dimension down.
    type Lower;

    /// Project through the given camera, producing the lower vector.
    fn project(self, projection: &Projection<S>) -> Self::Lower;
}

macro_rules! project_level {
    ($n:literal => $m:literal) => {
        impl<S: Scalar> Project<S> for Vector<S, $n> {
            type Lower = Vector<S, $m>;

            fn project(self, projection: &Projection<S>) -> Vector<S, $m> {
                let scale = projection.scale_at(self[$m]);
                Vector::from_fn(|axis| self[axis] * scale)
            }
        }
    };
}

project_level!(3 => 2);
project_level!(4 => 3);
project_level!(5 => 4);
project_level!(6 => 5);
project_level!(7 => 6);
project_level!(8 => 7);
project_level!(9 => 8);
