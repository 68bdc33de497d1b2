//! Euclidean space operations beyond plain vector arithmetic
//!
//! The 3-D cross product and its generalization: the normal of the
//! hyperplane spanned by N-1 vectors in N-dimensional space. Face
//! orientation above three dimensions needs a normal of matching
//! dimensionality, and the cofactor construction below supplies it for
//! every dimension the pipeline supports.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vector;

impl<S: Scalar> Vector<S, 3> {
    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        Self::new([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

/// Normal of the hyperplane spanned by N-1 vectors: component `i` is the
/// determinant of the minor formed by deleting column `i` from the span
/// rows, with the sign alternating by the parity of `i` (positive at 0).
/// At N = 3 this is exactly the cross product.
macro_rules! spanned_normal {
    ($n:literal => $m:literal) => {
        impl<S: Scalar> Vector<S, $n> {
            /// Normal of the hyperplane spanned by the given vectors.
            ///
            /// The result is orthogonal to every input vector. It is the
            /// zero vector when the inputs are linearly dependent.
            pub fn normal(span: &[Vector<S, $n>; $m]) -> Self {
                Vector::from_fn(|axis| {
                    let minor: Matrix<S, $m, $m> =
                        Matrix::from_fn(|r, c| span[r][if c < axis { c } else { c + 1 }]);
                    let det = minor.determinant();
                    if axis % 2 == 0 {
                        det
                    } else {
                        -det
                    }
                })
            }
        }
    };
}

spanned_normal!(3 => 2);
spanned_normal!(4 => 3);
spanned_normal!(5 => 4);
spanned_normal!(6 => 5);
spanned_normal!(7 => 6);
spanned_normal!(8 => 7);
spanned_normal!(9 => 8);
