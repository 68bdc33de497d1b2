//! Faces and scenes
//!
//! A shape generator produces vertex positions plus index-based edges and
//! faces; the renderer resolves the indices back to positions when it
//! walks the scene.

use hyperdraw_math::Vector;
use serde::Serialize;

/// An ordered loop of vertex indices describing a convex polygon.
///
/// Two indices describe a line. The loop is implicitly closed (the last
/// vertex connects back to the first), and convexity is not validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Face {
    /// Vertex indices, in drawing order.
    pub indices: Vec<usize>,
}

impl Face {
    /// Create a face from vertex indices. A face has at least two.
    pub fn new(indices: Vec<usize>) -> Self {
        debug_assert!(indices.len() >= 2, "a face needs at least two vertices");
        Self { indices }
    }

    /// Number of vertices in the loop.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True for the empty index list (never produced by generators).
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Geometry in N-dimensional space, as supplied by a shape generator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene<S, const N: usize> {
    /// Vertex positions.
    pub vertices: Vec<Vector<S, N>>,
    /// Index pairs drawn as line segments.
    pub edges: Vec<[usize; 2]>,
    /// Index loops drawn as filled polygons.
    pub faces: Vec<Face>,
}

impl<S, const N: usize> Scene<S, N> {
    /// An empty scene.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

impl<S, const N: usize> Default for Scene<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_len() {
        let f = Face::new(vec![0, 1, 2, 3]);
        assert_eq!(f.len(), 4);
        assert!(!f.is_empty());
    }

    #[test]
    fn test_empty_scene() {
        let scene: Scene<f64, 3> = Scene::new();
        assert_eq!(scene.vertex_count(), 0);
        assert_eq!(scene.edge_count(), 0);
        assert_eq!(scene.face_count(), 0);
    }

    #[test]
    fn test_scene_counts() {
        let mut scene: Scene<f64, 2> = Scene::new();
        scene.vertices.push(Vector::new([0.0, 0.0]));
        scene.vertices.push(Vector::new([1.0, 0.0]));
        scene.edges.push([0, 1]);
        scene.faces.push(Face::new(vec![0, 1]));
        assert_eq!(scene.vertex_count(), 2);
        assert_eq!(scene.edge_count(), 1);
        assert_eq!(scene.face_count(), 1);
    }
}
