//! R×C Matrix type
//!
//! Row-major storage: `m.0[row][col]`. Dimensions are part of the type,
//! so mismatched additions or products are rejected at compile time.
//!
//! Determinants exist for every square size up to [`crate::MAX_DIMENSION`]:
//! closed forms for 1×1/2×2/3×3, first-row cofactor expansion above that.
//! Stable Rust cannot spell `N - 1` in a type, so the expansion is
//! generated per size with literal dimensions.

use std::ops::{Add, Mul, Sub};

use serde::Serialize;

use crate::scalar::{RealScalar, Scalar};
use crate::vector::Vector;

/// An R×C matrix of scalars, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<S, const R: usize, const C: usize>(pub [[S; C]; R]);

// serde derives `Serialize` for arrays only per fixed size (0..=32), not
// generically over a const parameter, so a derived impl on the
// const-generic `Matrix` does not compile. This hand-written impl
// reproduces exactly what the derive would emit: a sequence of R rows,
// each a sequence of C entries.
impl<S: Serialize, const R: usize, const C: usize> Serialize for Matrix<S, R, C> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(R))?;
        for row in &self.0 {
            seq.serialize_element(row.as_slice())?;
        }
        seq.end()
    }
}

impl<S: Scalar, const R: usize, const C: usize> Matrix<S, R, C> {
    /// Create a matrix from its rows.
    #[inline]
    pub const fn new(rows: [[S; C]; R]) -> Self {
        Self(rows)
    }

    /// Build a matrix entry-by-entry from `f(row, col)`.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> S) -> Self {
        Self(std::array::from_fn(|r| std::array::from_fn(|c| f(r, c))))
    }

    /// The zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self::from_fn(|_, _| S::zero())
    }

    /// Row `r` as a vector.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<S, C> {
        Vector::new(self.0[r])
    }

    /// Column `c` as a vector.
    #[inline]
    pub fn column(&self, c: usize) -> Vector<S, R> {
        Vector::from_fn(|r| self.0[r][c])
    }

    /// Transpose.
    pub fn transpose(&self) -> Matrix<S, C, R> {
        Matrix::from_fn(|r, c| self.0[c][r])
    }

    /// Copy into a matrix of different dimensions, truncating rows and
    /// columns that do not fit and zero-filling the rest.
    pub fn resized<const R2: usize, const C2: usize>(&self) -> Matrix<S, R2, C2> {
        Matrix::from_fn(|r, c| {
            if r < R && c < C {
                self.0[r][c]
            } else {
                S::zero()
            }
        })
    }

    /// Apply the matrix to a vector: `out[r] = Σ_c m[r][c] * v[c]`.
    pub fn transform(&self, v: Vector<S, C>) -> Vector<S, R> {
        Vector::from_fn(|r| self.row(r).dot(v))
    }
}

impl<S: Scalar, const N: usize> Matrix<S, N, N> {
    /// The identity matrix.
    pub fn identity() -> Self {
        Self::from_fn(|r, c| if r == c { S::one() } else { S::zero() })
    }

    /// True iff every diagonal entry is one and every other entry is zero.
    pub fn is_identity(&self) -> bool {
        for r in 0..N {
            for c in 0..N {
                let expected = if r == c { S::one() } else { S::zero() };
                if self.0[r][c] != expected {
                    return false;
                }
            }
        }
        true
    }
}

impl<S: RealScalar, const N: usize> Matrix<S, N, N> {
    /// Rotation in the plane spanned by axes `p1` and `p2`, turning the
    /// `p1` axis toward the `p2` axis by `angle` radians. All other axes
    /// are unchanged.
    pub fn plane_rotation(angle: S, p1: usize, p2: usize) -> Self {
        debug_assert!(p1 < N && p2 < N && p1 != p2);
        let cs = angle.cos();
        let sn = angle.sin();

        let mut m = Self::identity();
        m.0[p1][p1] = cs;
        m.0[p2][p2] = cs;
        m.0[p1][p2] = -sn;
        m.0[p2][p1] = sn;
        m
    }
}

impl<S: Scalar, const R: usize, const C: usize> Add for Matrix<S, R, C> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::from_fn(|r, c| self.0[r][c] + other.0[r][c])
    }
}

impl<S: Scalar, const R: usize, const C: usize> Sub for Matrix<S, R, C> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::from_fn(|r, c| self.0[r][c] - other.0[r][c])
    }
}

/// Matrix product: `(R×K) * (K×C) -> (R×C)`.
impl<S: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<S, K, C>>
    for Matrix<S, R, K>
{
    type Output = Matrix<S, R, C>;
    #[allow(clippy::needless_range_loop)]
    fn mul(self, other: Matrix<S, K, C>) -> Matrix<S, R, C> {
        let mut out = Matrix::zero();
        for i in 0..R {
            for j in 0..C {
                for k in 0..K {
                    out.0[i][j] = out.0[i][j] + self.0[i][k] * other.0[k][j];
                }
            }
        }
        out
    }
}

impl<S: Scalar> Matrix<S, 1, 1> {
    /// Determinant of a 1×1 matrix.
    #[inline]
    pub fn determinant(&self) -> S {
        self.0[0][0]
    }
}

impl<S: Scalar> Matrix<S, 2, 2> {
    /// Determinant of a 2×2 matrix.
    #[inline]
    pub fn determinant(&self) -> S {
        self.0[0][0] * self.0[1][1] - self.0[1][0] * self.0[0][1]
    }
}

impl<S: Scalar> Matrix<S, 3, 3> {
    /// Determinant of a 3×3 matrix, expanded along the first row.
    pub fn determinant(&self) -> S {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse by the adjugate-over-determinant closed form.
    ///
    /// The division by the determinant is not guarded: inverting a
    /// singular matrix divides by zero and the result propagates per the
    /// scalar type. Callers that cannot rule out singular input should
    /// check `determinant() != 0` first.
    pub fn invert(&self) -> Self {
        let m = &self.0;
        let det = self.determinant();
        let adjugate = [
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                m[0][2] * m[2][1] - m[0][1] * m[2][2],
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                m[0][2] * m[1][0] - m[0][0] * m[1][2],
            ],
            [
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                m[0][1] * m[2][0] - m[0][0] * m[2][1],
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ];
        Self::from_fn(|r, c| adjugate[r][c] / det)
    }
}

/// First-row cofactor expansion: for each column `i`, delete row 0 and
/// column `i`, weight the minor's determinant by `m[0][i]`, and alternate
/// the sign starting positive at `i = 0`.
macro_rules! cofactor_determinant {
    ($n:literal => $m:literal) => {
        impl<S: Scalar> Matrix<S, $n, $n> {
            /// Determinant by cofactor expansion along the first row.
            pub fn determinant(&self) -> S {
                let mut acc = S::zero();
                for i in 0..$n {
                    let minor: Matrix<S, $m, $m> =
                        Matrix::from_fn(|r, c| self.0[r + 1][if c < i { c } else { c + 1 }]);
                    let term = self.0[0][i] * minor.determinant();
                    acc = if i % 2 == 0 { acc + term } else { acc - term };
                }
                acc
            }
        }
    };
}

cofactor_determinant!(4 => 3);
cofactor_determinant!(5 => 4);
cofactor_determinant!(6 => 5);
cofactor_determinant!(7 => 6);
cofactor_determinant!(8 => 7);
cofactor_determinant!(9 => 8);
