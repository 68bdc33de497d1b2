//! End-to-end pipeline tests
//!
//! Full chains from n-dimensional input down to backend output,
//! including the exact-rational path.

use hyperdraw_core::{Affine, Face, Hypercube, Scene};
use hyperdraw_math::Vector;
use hyperdraw_render::{
    render_scene, Backend, DepthStage, JsonBackend, NullBackend, PlaneStage, Projection, Stage,
    SvgBackend,
};
use num_rational::Ratio;
use serde_json::json;

/// Test backend recording projected 2-D primitives verbatim.
struct RecordingBackend<S> {
    lines: Vec<(Vector<S, 2>, Vector<S, 2>)>,
    faces: Vec<Vec<Vector<S, 2>>>,
}

impl<S> Default for RecordingBackend<S> {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl<S: Copy> Backend<S> for RecordingBackend<S> {
    fn reset(&mut self) {
        self.lines.clear();
        self.faces.clear();
    }

    fn draw_line(&mut self, a: Vector<S, 2>, b: Vector<S, 2>) {
        self.lines.push((a, b));
    }

    fn draw_face(&mut self, vertices: &[Vector<S, 2>]) {
        self.faces.push(vertices.to_vec());
    }
}

#[test]
fn unit_square_at_zero_depth_passes_through() {
    // A unit square in the z = 0 plane, identity transform, eye at 10:
    // the scale factor is 10 / (10 - 0) = 1 at every vertex, so the JSON
    // backend must see exactly the input coordinates, in order.
    let t3 = Affine::<f64, 3>::identity();
    let t2 = Affine::<f64, 2>::identity();
    let p3 = Projection::new(10.0);
    let mut backend = JsonBackend::new();

    let mut chain = DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut backend));
    chain.draw_face(&[
        Vector::new([0.0, 0.0, 0.0]),
        Vector::new([1.0, 0.0, 0.0]),
        Vector::new([1.0, 1.0, 0.0]),
        Vector::new([0.0, 1.0, 0.0]),
    ]);

    assert_eq!(
        backend.commands(),
        &[json!({
            "type": "face",
            "points": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        })]
    );
}

#[test]
fn degenerate_line_is_still_emitted() {
    // Both endpoints sit on the depth axis, so they project onto the
    // origin with different scale factors: a zero-length 2-D segment.
    // Backends must emit it rather than drop it.
    let t3 = Affine::<f64, 3>::identity();
    let t2 = Affine::<f64, 2>::identity();
    let p3 = Projection::new(10.0);

    let mut json_backend = JsonBackend::new();
    {
        let mut chain = DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut json_backend));
        chain.draw_line(Vector::new([0.0, 0.0, 0.0]), Vector::new([0.0, 0.0, 5.0]));
    }
    assert_eq!(
        json_backend.commands(),
        &[json!({"type": "line", "x1": 0.0, "y1": 0.0, "x2": 0.0, "y2": 0.0})]
    );

    let mut svg_backend = SvgBackend::new();
    {
        let mut chain = DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut svg_backend));
        chain.draw_line(Vector::new([0.0, 0.0, 0.0]), Vector::new([0.0, 0.0, 5.0]));
    }
    assert_eq!(
        svg_backend.elements(),
        &["<line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"0\"/>".to_string()]
    );

    let mut null_backend = NullBackend::new();
    {
        let mut chain = DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut null_backend));
        chain.draw_line(Vector::new([0.0, 0.0, 0.0]), Vector::new([0.0, 0.0, 5.0]));
    }
    assert_eq!(null_backend.lines(), 1);
}

#[test]
fn depth_scales_remaining_coordinates() {
    let t3 = Affine::<f64, 3>::identity();
    let t2 = Affine::<f64, 2>::identity();
    let p3 = Projection::new(10.0);
    let mut backend = RecordingBackend::default();

    let mut chain = DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut backend));
    // Depth 5 gives scale 10 / (10 - 5) = 2.
    chain.draw_line(Vector::new([1.0, 2.0, 5.0]), Vector::new([-1.0, 0.5, 5.0]));

    assert_eq!(
        backend.lines,
        vec![(Vector::new([2.0, 4.0]), Vector::new([-2.0, 1.0]))]
    );
}

#[test]
fn four_dimensional_chain_reaches_the_plane() {
    // A square lying in the xy-plane of 4-D space has zero depth at both
    // projection levels and must arrive unchanged.
    let t4 = Affine::<f64, 4>::identity();
    let t3 = Affine::<f64, 3>::identity();
    let t2 = Affine::<f64, 2>::identity();
    let p4 = Projection::new(10.0);
    let p3 = Projection::new(8.0);
    let mut backend = RecordingBackend::default();

    let mut chain = DepthStage::new(
        &t4,
        &p4,
        DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut backend)),
    );
    chain.draw_face(&[
        Vector::new([0.0, 0.0, 0.0, 0.0]),
        Vector::new([1.0, 0.0, 0.0, 0.0]),
        Vector::new([1.0, 1.0, 0.0, 0.0]),
        Vector::new([0.0, 1.0, 0.0, 0.0]),
    ]);

    assert_eq!(
        backend.faces,
        vec![vec![
            Vector::new([0.0, 0.0]),
            Vector::new([1.0, 0.0]),
            Vector::new([1.0, 1.0]),
            Vector::new([0.0, 1.0]),
        ]]
    );
}

#[test]
fn per_level_transforms_apply_at_their_level() {
    // Translate by +1 on the last axis at the 3-D level: depth becomes 1
    // and the scale factor 10 / 9 applies to the 2-D result.
    let t3 = Affine::<f64, 3>::from_translation(Vector::new([0.0, 0.0, 1.0]));
    let t2 = Affine::<f64, 2>::identity();
    let p3 = Projection::new(10.0);
    let mut backend = RecordingBackend::default();

    let mut chain = DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut backend));
    chain.draw_line(Vector::new([9.0, 0.0, 0.0]), Vector::new([0.0, 9.0, 0.0]));

    assert_eq!(
        backend.lines,
        vec![(Vector::new([10.0, 0.0]), Vector::new([0.0, 10.0]))]
    );
}

#[test]
fn plane_transform_applies_after_projection() {
    // A scale-and-flip on the drawing plane, as a viewport mapping would
    // use.
    let t3 = Affine::<f64, 3>::identity();
    let t2 = Affine::<f64, 2>::from_linear(hyperdraw_math::Matrix::new([
        [100.0, 0.0],
        [0.0, -100.0],
    ]));
    let p3 = Projection::new(10.0);
    let mut backend = RecordingBackend::default();

    let mut chain = DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut backend));
    chain.draw_line(Vector::new([1.0, 2.0, 0.0]), Vector::new([0.0, 0.0, 0.0]));

    assert_eq!(
        backend.lines,
        vec![(Vector::new([100.0, -200.0]), Vector::new([0.0, 0.0]))]
    );
}

#[test]
fn distant_eye_approximates_truncation_through_chain() {
    let t4 = Affine::<f64, 4>::identity();
    let t3 = Affine::<f64, 3>::identity();
    let t2 = Affine::<f64, 2>::identity();
    let p4 = Projection::new(1e12);
    let p3 = Projection::new(1e12);
    let mut backend = RecordingBackend::default();

    let mut chain = DepthStage::new(
        &t4,
        &p4,
        DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut backend)),
    );
    let v = Vector::new([3.0, -4.0, 2.0, 7.0]);
    chain.draw_line(v, v);

    let (a, _) = backend.lines[0];
    assert!((a[0] - 3.0).abs() < 1e-6);
    assert!((a[1] - -4.0).abs() < 1e-6);
}

#[test]
fn rational_pipeline_is_exact_end_to_end() {
    let r = |n: i64, d: i64| Ratio::new(n, d);
    let t4 = Affine::<Ratio<i64>, 4>::identity();
    let t3 = Affine::<Ratio<i64>, 3>::identity();
    let t2 = Affine::<Ratio<i64>, 2>::identity();
    let p4 = Projection::new(r(10, 1));
    let p3 = Projection::new(r(10, 1));
    let mut backend = RecordingBackend::default();

    let mut chain = DepthStage::new(
        &t4,
        &p4,
        DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut backend)),
    );
    // Depth 1 at the 4-D level scales by 10/9; the scaled depth 10/9 at
    // the 3-D level scales by 10 / (10 - 10/9) = 9/8. Both exact.
    chain.draw_line(
        Vector::new([r(1, 1), r(1, 1), r(1, 1), r(1, 1)]),
        Vector::new([r(0, 1), r(0, 1), r(0, 1), r(0, 1)]),
    );

    let expected = r(10, 9) * r(9, 8);
    assert_eq!(
        backend.lines,
        vec![(
            Vector::new([expected, expected]),
            Vector::new([r(0, 1), r(0, 1)]),
        )]
    );
}

#[test]
fn rational_cube_face_projects_exactly() {
    let r = |n: i64, d: i64| Ratio::new(n, d);
    let scene = Hypercube::<Ratio<i64>, 3>::new(r(2, 1)).scene();
    let t3 = Affine::identity();
    let t2 = Affine::identity();
    let p3 = Projection::new(r(10, 1));
    let mut backend = RecordingBackend::default();

    let mut chain = DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut backend));
    render_scene(&scene, &mut chain);

    // The second face is the square at depth +1; every corner picks up
    // the exact scale factor 10 / (10 - 1) = 10/9.
    assert_eq!(scene.faces[1].indices, vec![4, 5, 7, 6]);
    let s = r(10, 9);
    assert_eq!(
        backend.faces[1],
        vec![
            Vector::new([-s, -s]),
            Vector::new([s, -s]),
            Vector::new([s, s]),
            Vector::new([-s, s]),
        ]
    );
}

#[test]
fn reset_restores_initial_state_for_every_backend() {
    let square: Scene<f64, 2> = Scene {
        vertices: vec![
            Vector::new([0.0, 0.0]),
            Vector::new([1.0, 0.0]),
            Vector::new([1.0, 1.0]),
            Vector::new([0.0, 1.0]),
        ],
        edges: vec![[0, 1], [1, 2], [2, 3], [3, 0]],
        faces: vec![Face::new(vec![0, 1, 2, 3])],
    };
    let t2 = Affine::<f64, 2>::identity();

    let mut json_backend = JsonBackend::new();
    render_scene(&square, &mut PlaneStage::new(&t2, &mut json_backend));
    assert!(!json_backend.commands().is_empty());
    Backend::<f64>::reset(&mut json_backend);
    assert!(json_backend.commands().is_empty());

    let mut svg_backend = SvgBackend::new();
    render_scene(&square, &mut PlaneStage::new(&t2, &mut svg_backend));
    assert!(!svg_backend.elements().is_empty());
    Backend::<f64>::reset(&mut svg_backend);
    assert!(svg_backend.elements().is_empty());

    let mut null_backend = NullBackend::new();
    render_scene(&square, &mut PlaneStage::new(&t2, &mut null_backend));
    assert_eq!(null_backend.lines(), 4);
    Backend::<f64>::reset(&mut null_backend);
    assert_eq!(null_backend, NullBackend::new());
}

#[test]
fn tesseract_dry_run_counts_match_geometry() {
    let scene = Hypercube::<f64, 4>::new(2.0).scene();
    let t4 = Affine::identity();
    let t3 = Affine::identity();
    let t2 = Affine::identity();
    let p4 = Projection::new(10.0);
    let p3 = Projection::new(10.0);
    let mut backend = NullBackend::new();

    let mut chain = DepthStage::new(
        &t4,
        &p4,
        DepthStage::new(&t3, &p3, PlaneStage::new(&t2, &mut backend)),
    );
    render_scene(&scene, &mut chain);

    assert_eq!(backend.lines(), 32);
    assert_eq!(backend.faces(), 24);
}
