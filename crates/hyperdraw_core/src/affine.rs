//! N-dimensional affine transform (linear map plus translation)

use hyperdraw_math::{Matrix, Scalar, Vector};
use serde::Serialize;

/// An affine transform in N-dimensional space.
///
/// Applies the linear part first, then the translation. The renderer
/// chain borrows one of these per dimension level for the duration of a
/// render pass and never mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Affine<S, const N: usize> {
    /// Linear part (rotation, scale, shear).
    pub linear: Matrix<S, N, N>,
    /// Translation applied after the linear part.
    pub translation: Vector<S, N>,
}

impl<S: Scalar, const N: usize> Affine<S, N> {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            linear: Matrix::identity(),
            translation: Vector::zero(),
        }
    }

    /// A transform from its linear part, with no translation.
    pub fn from_linear(linear: Matrix<S, N, N>) -> Self {
        Self {
            linear,
            translation: Vector::zero(),
        }
    }

    /// A pure translation.
    pub fn from_translation(translation: Vector<S, N>) -> Self {
        Self {
            linear: Matrix::identity(),
            translation,
        }
    }

    /// Transform a point.
    #[inline]
    pub fn apply(&self, p: Vector<S, N>) -> Vector<S, N> {
        self.linear.transform(p) + self.translation
    }

    /// Compose two transforms: the result applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            linear: self.linear * other.linear,
            translation: self.apply(other.translation),
        }
    }

    /// True iff applying this transform leaves every point unchanged.
    pub fn is_identity(&self) -> bool {
        self.linear.is_identity() && self.translation == Vector::zero()
    }
}

impl<S: Scalar, const N: usize> Default for Affine<S, N> {
    fn default() -> Self {
        Self::identity()
    }
}
