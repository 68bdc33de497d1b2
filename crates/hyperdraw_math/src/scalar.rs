//! Coordinate type abstraction
//!
//! The pipeline is generic over its coordinate type: `f32`/`f64` for
//! interactive use, or an exact rational such as `num_rational::Ratio`
//! when output must be bit-for-bit reproducible.

use std::fmt::Debug;
use std::ops::Neg;

use num_traits::{Float, Num};

/// A field-like coordinate type.
///
/// Everything on the per-vertex path (transforms, projection, determinants,
/// the generalized normal) uses these operations alone, so exact rationals
/// qualify alongside floats.
pub trait Scalar: Num + Neg<Output = Self> + Copy + PartialOrd + Debug {}

impl<T> Scalar for T where T: Num + Neg<Output = Self> + Copy + PartialOrd + Debug {}

/// A scalar with real-valued functions (square root, trigonometry).
///
/// Required only by vector length/normalization and the rotation
/// constructors; the projection chain itself never needs it.
pub trait RealScalar: Scalar + Float {}

impl<T> RealScalar for T where T: Scalar + Float {}
