//! Dimension-Generic Mathematics Library
//!
//! This crate provides the vector, matrix, and Euclidean-space types the
//! hyperdraw pipeline computes with. Dimensions are const-generic
//! parameters; the recursive kernels that need a "one dimension down"
//! companion (determinant minors, the generalized normal, perspective
//! projection) are implemented per dimension up to [`MAX_DIMENSION`].
//!
//! ## Core Types
//!
//! - [`Vector`] - N-dimensional Cartesian vector
//! - [`Matrix`] - R×C matrix of scalars
//! - [`Scalar`] / [`RealScalar`] - coordinate type abstraction
//!
//! Coordinates may be floats or exact rationals: every operation on the
//! hot projection path uses field arithmetic only, and the handful of
//! operations that genuinely need real-valued functions (vector length,
//! rotation constructors) are gated behind [`RealScalar`].

mod euclid;
mod matrix;
mod scalar;
mod vector;

pub use matrix::Matrix;
pub use scalar::{RealScalar, Scalar};
pub use vector::Vector;

/// Highest dimension the per-dimension kernels are generated for.
///
/// Determinants, generalized normals, and perspective projection steps
/// exist for every dimension up to and including this one.
pub const MAX_DIMENSION: usize = 9;
