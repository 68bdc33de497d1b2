//! SVG element backend
//!
//! Accumulates one SVG element per draw call: `<line>` for segments and a
//! closed `<path>` for faces. [`SvgBackend::document`] wraps the elements
//! in an `<svg>` root with a viewBox centered on the origin.
//!
//! Stroke and fill are pass-through strings; any CSS colour value the
//! caller supplies lands in the output unchanged.

use std::fmt::{Display, Write};

use hyperdraw_math::{Scalar, Vector};

use super::Backend;

/// Backend emitting SVG elements.
#[derive(Clone, Debug)]
pub struct SvgBackend {
    elements: Vec<String>,
    stroke: String,
    fill: String,
}

impl SvgBackend {
    /// A backend with default styling (black strokes, unfilled faces).
    pub fn new() -> Self {
        Self::with_style("black", "none")
    }

    /// A backend with the given stroke and fill values, passed through
    /// to the output verbatim.
    pub fn with_style(stroke: &str, fill: &str) -> Self {
        Self {
            elements: Vec::new(),
            stroke: stroke.to_string(),
            fill: fill.to_string(),
        }
    }

    /// The accumulated elements, in draw order.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// The accumulated output as a complete SVG document with the given
    /// pixel dimensions, viewBox centered on the origin.
    pub fn document(&self, width: f64, height: f64) -> String {
        let mut doc = String::new();
        let _ = write!(
            doc,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"{x} {y} {w} {h}\">\n",
            w = width,
            h = height,
            x = -width / 2.0,
            y = -height / 2.0,
        );
        let _ = write!(
            doc,
            "<g stroke=\"{}\" fill=\"{}\">\n",
            self.stroke, self.fill
        );
        for element in &self.elements {
            doc.push_str(element);
            doc.push('\n');
        }
        doc.push_str("</g>\n</svg>\n");
        doc
    }
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar + Display> Backend<S> for SvgBackend {
    fn reset(&mut self) {
        self.elements.clear();
    }

    fn draw_line(&mut self, a: Vector<S, 2>, b: Vector<S, 2>) {
        self.elements.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            a[0], a[1], b[0], b[1]
        ));
    }

    fn draw_face(&mut self, vertices: &[Vector<S, 2>]) {
        let mut data = String::new();
        for (i, v) in vertices.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            let _ = write!(data, "{}{} {} ", command, v[0], v[1]);
        }
        data.push('Z');
        self.elements.push(format!("<path d=\"{}\"/>", data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_element() {
        let mut backend = SvgBackend::new();
        Backend::<f64>::draw_line(
            &mut backend,
            Vector::new([0.0, 0.0]),
            Vector::new([1.0, 2.0]),
        );
        assert_eq!(
            backend.elements(),
            &["<line x1=\"0\" y1=\"0\" x2=\"1\" y2=\"2\"/>".to_string()]
        );
    }

    #[test]
    fn test_face_path_is_closed() {
        let mut backend = SvgBackend::new();
        Backend::<f64>::draw_face(
            &mut backend,
            &[
                Vector::new([0.0, 0.0]),
                Vector::new([1.0, 0.0]),
                Vector::new([1.0, 1.0]),
                Vector::new([0.0, 1.0]),
            ],
        );
        assert_eq!(
            backend.elements(),
            &["<path d=\"M0 0 L1 0 L1 1 L0 1 Z\"/>".to_string()]
        );
    }

    #[test]
    fn test_document_wraps_elements_with_style() {
        let mut backend = SvgBackend::with_style("#204080", "rgba(32,64,128,0.25)");
        Backend::<f64>::draw_line(
            &mut backend,
            Vector::new([0.0, 0.0]),
            Vector::new([1.0, 0.0]),
        );
        let doc = backend.document(800.0, 600.0);
        assert!(doc.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"600\" \
             viewBox=\"-400 -300 800 600\">"
        ));
        assert!(doc.contains("<g stroke=\"#204080\" fill=\"rgba(32,64,128,0.25)\">"));
        assert!(doc.contains("<line x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\"/>"));
        assert!(doc.ends_with("</g>\n</svg>\n"));
    }

    #[test]
    fn test_reset_clears_elements_keeps_style() {
        let mut backend = SvgBackend::with_style("red", "none");
        Backend::<f64>::draw_line(
            &mut backend,
            Vector::new([0.0, 0.0]),
            Vector::new([1.0, 0.0]),
        );
        Backend::<f64>::reset(&mut backend);
        assert!(backend.elements().is_empty());
        assert!(backend.document(10.0, 10.0).contains("stroke=\"red\""));
    }
}
