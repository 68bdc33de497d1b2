//! Scene walking
//!
//! Drives a [`Scene`] through a stage chain: a frame bracket around all
//! edges (as lines) and faces (resolved from vertex indices), in input
//! order.

use hyperdraw_core::Scene;
use hyperdraw_math::{Scalar, Vector};

use crate::stage::Stage;

/// Render every edge and face of the scene through the given chain.
///
/// Edge and face indices must be in range for the scene's vertex list.
pub fn render_scene<S, const N: usize, St>(scene: &Scene<S, N>, stage: &mut St)
where
    S: Scalar,
    St: Stage<Vector = Vector<S, N>>,
{
    log::debug!(
        "render pass: {} vertices, {} edges, {} faces",
        scene.vertex_count(),
        scene.edge_count(),
        scene.face_count()
    );

    stage.frame_start();
    for &[a, b] in &scene.edges {
        stage.draw_line(scene.vertices[a], scene.vertices[b]);
    }
    for face in &scene.faces {
        let vertices: Vec<Vector<S, N>> =
            face.indices.iter().map(|&i| scene.vertices[i]).collect();
        stage.draw_face(&vertices);
    }
    stage.frame_end();
}
