//! hyperdraw - renders n-dimensional geometry down to a 2-D picture
//!
//! The library surface re-exports the pipeline crates plus the binary's
//! configuration types; the `hyperdraw` binary wires them together.

pub mod config;

pub use hyperdraw_core::{Affine, Face, Hypercube, Scene};
pub use hyperdraw_math::{Matrix, RealScalar, Scalar, Vector, MAX_DIMENSION};
pub use hyperdraw_render::{
    render_scene, Backend, DepthStage, JsonBackend, NullBackend, PlaneStage, Project, Projection,
    Stage, SvgBackend,
};
