//! Rendering pipeline for n-dimensional geometry
//!
//! This crate turns vertices in N-dimensional space into 2-D primitives
//! on an output backend:
//!
//! - [`Projection`] / [`Project`] - the perspective chain, removing one
//!   dimension per step until 2-D remains
//! - [`Stage`], [`DepthStage`], [`PlaneStage`] - the renderer chain, one
//!   stage per dimension level, terminating at the backend
//! - [`Backend`] and the [`JsonBackend`]/[`SvgBackend`]/[`NullBackend`]
//!   implementations
//! - [`render_scene`] - walks a scene's edges and faces through a chain
//!
//! Scene and transform types are defined in `hyperdraw_core`; this crate
//! re-exports them for convenience.

pub mod backend;
mod projection;
mod renderable;
mod stage;

pub use backend::{Backend, JsonBackend, NullBackend, SvgBackend};
pub use projection::{Project, Projection};
pub use renderable::render_scene;
pub use stage::{DepthStage, PlaneStage, Stage, Stage2, Stage3, Stage4, Stage5, Stage6};

// Re-export core types for convenience
pub use hyperdraw_core::{Affine, Face, Hypercube, Scene};
pub use hyperdraw_math::{Matrix, RealScalar, Scalar, Vector, MAX_DIMENSION};
