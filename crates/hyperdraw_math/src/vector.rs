//! N-dimensional Vector type

use std::array;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use serde::Serialize;

use crate::scalar::{RealScalar, Scalar};

/// An N-dimensional Cartesian vector.
///
/// The dimension is fixed by the type; vectors of different dimensions
/// cannot be mixed in arithmetic, and a wrong-dimension vector cannot
/// reach a pipeline level built for another dimension.
///
/// Multiplying two vectors yields their dot product (a scalar), and
/// dividing one vector by another yields the sum of component-wise
/// quotients (also a scalar); the named methods [`Vector::dot`] and
/// [`Vector::quotient_sum`] are what internal code calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<S, const N: usize>(pub [S; N]);

// serde derives `Serialize` for arrays only per fixed size (0..=32), not
// generically over a const parameter, so a derived impl on the
// const-generic `Vector` does not compile. This hand-written impl
// reproduces exactly what the derive would emit for the inner array: a
// sequence of the N components.
impl<S: Serialize, const N: usize> Serialize for Vector<S, N> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.0.as_slice().serialize(serializer)
    }
}

impl<S: Scalar, const N: usize> Vector<S, N> {
    /// Create a vector from its components.
    #[inline]
    pub const fn new(components: [S; N]) -> Self {
        Self(components)
    }

    /// Build a vector component-by-component.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> S) -> Self {
        Self(array::from_fn(f))
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::from_fn(|_| S::zero())
    }

    /// The unit vector along `axis`.
    ///
    /// `axis` must be less than the dimension.
    #[inline]
    pub fn basis(axis: usize) -> Self {
        debug_assert!(axis < N);
        Self::from_fn(|i| if i == axis { S::one() } else { S::zero() })
    }

    /// Number of components.
    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> S {
        let mut sum = S::zero();
        for i in 0..N {
            sum = sum + self.0[i] * other.0[i];
        }
        sum
    }

    /// Sum of component-wise quotients, `Σ self[i] / other[i]`.
    ///
    /// Division by a zero component propagates per the scalar type
    /// (Inf/NaN for floats); it is not guarded here.
    #[inline]
    pub fn quotient_sum(self, other: Self) -> S {
        let mut sum = S::zero();
        for i in 0..N {
            sum = sum + self.0[i] / other.0[i];
        }
        sum
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> S {
        self.dot(self)
    }
}

impl<S: RealScalar, const N: usize> Vector<S, N> {
    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> S {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > S::zero() {
            self * (S::one() / len)
        } else {
            Self::zero()
        }
    }
}

impl<S: Scalar, const N: usize> Default for Vector<S, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S, const N: usize> Index<usize> for Vector<S, N> {
    type Output = S;
    #[inline]
    fn index(&self, axis: usize) -> &S {
        &self.0[axis]
    }
}

impl<S, const N: usize> IndexMut<usize> for Vector<S, N> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut S {
        &mut self.0[axis]
    }
}

// Operator overloads

impl<S: Scalar, const N: usize> Add for Vector<S, N> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i] + other.0[i])
    }
}

impl<S: Scalar, const N: usize> AddAssign for Vector<S, N> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<S: Scalar, const N: usize> Sub for Vector<S, N> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i] - other.0[i])
    }
}

impl<S: Scalar, const N: usize> SubAssign for Vector<S, N> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<S: Scalar, const N: usize> Neg for Vector<S, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_fn(|i| -self.0[i])
    }
}

impl<S: Scalar, const N: usize> Mul<S> for Vector<S, N> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: S) -> Self {
        Self::from_fn(|i| self.0[i] * scalar)
    }
}

impl<S: Scalar, const N: usize> Div<S> for Vector<S, N> {
    type Output = Self;
    #[inline]
    fn div(self, scalar: S) -> Self {
        Self::from_fn(|i| self.0[i] / scalar)
    }
}

/// `v * w` is the dot product and yields a scalar.
impl<S: Scalar, const N: usize> Mul for Vector<S, N> {
    type Output = S;
    #[inline]
    fn mul(self, other: Self) -> S {
        self.dot(other)
    }
}

/// `v / w` is the component quotient sum and yields a scalar.
impl<S: Scalar, const N: usize> Div for Vector<S, N> {
    type Output = S;
    #[inline]
    fn div(self, other: Self) -> S {
        self.quotient_sum(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Ratio;

    #[test]
    fn test_new_and_index() {
        let v = Vector::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);
        assert_eq!(v.dim(), 4);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = Vector::new([1.0, 2.0]);
        let _ = v[2];
    }

    #[test]
    fn test_dot() {
        let a = Vector::new([1.0, 2.0, 3.0, 4.0]);
        let b = Vector::new([5.0, 6.0, 7.0, 8.0]);
        // 1*5 + 2*6 + 3*7 + 4*8 = 70
        assert_eq!(a.dot(b), 70.0);
        assert_eq!(a * b, 70.0);
    }

    #[test]
    fn test_quotient_sum() {
        let a = Vector::new([1.0, 9.0]);
        let b = Vector::new([2.0, 3.0]);
        // 1/2 + 9/3 = 3.5
        assert_eq!(a.quotient_sum(b), 3.5);
        assert_eq!(a / b, 3.5);
    }

    #[test]
    fn test_add_sub_round_trip() {
        let a = Vector::new([1.0, -2.5, 3.0]);
        let b = Vector::new([0.5, 6.0, -7.0]);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn test_scalar_mul_div() {
        let v = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(v * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(v / 2.0, Vector::new([0.5, 1.0, 1.5]));
    }

    #[test]
    fn test_neg() {
        let v = Vector::new([1.0, -2.0]);
        assert_eq!(-v, Vector::new([-1.0, 2.0]));
    }

    #[test]
    fn test_default_is_zero() {
        let v: Vector<f64, 5> = Vector::default();
        assert_eq!(v, Vector::zero());
    }

    #[test]
    fn test_basis() {
        let e2: Vector<f64, 4> = Vector::basis(2);
        assert_eq!(e2, Vector::new([0.0, 0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_length() {
        let v = Vector::new([1.0f64, 1.0, 1.0, 1.0]);
        assert!((v.length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized() {
        let v = Vector::new([3.0f64, 0.0, 0.0]);
        let n = v.normalized();
        assert!((n[0] - 1.0).abs() < 1e-12);
        assert_eq!(n[1], 0.0);
        assert_eq!(n[2], 0.0);
    }

    #[test]
    fn test_normalized_zero() {
        let v: Vector<f64, 3> = Vector::zero();
        assert_eq!(v.normalized(), Vector::zero());
    }

    #[test]
    fn test_rational_arithmetic_is_exact() {
        let r = |n, d| Ratio::new(n, d);
        let a: Vector<Ratio<i64>, 3> = Vector::new([r(1, 3), r(1, 7), r(2, 5)]);
        let b = Vector::new([r(1, 6), r(3, 7), r(1, 5)]);
        assert_eq!(a + b - b, a);
        // 1/3 * 1/6 + 1/7 * 3/7 + 2/5 * 1/5 = 1/18 + 3/49 + 2/25
        assert_eq!(a.dot(b), r(1, 18) + r(3, 49) + r(2, 25));
    }
}
