//! JSON draw-command backend
//!
//! Accumulates one JSON object per draw call:
//!
//! ```json
//! {"type": "line", "x1": 0.0, "y1": 0.0, "x2": 1.0, "y2": 2.0}
//! {"type": "face", "points": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]}
//! ```
//!
//! The full document is the array of commands in draw order.

use hyperdraw_math::{Scalar, Vector};
use serde::Serialize;
use serde_json::{json, Value};

use super::Backend;

/// Backend emitting a JSON array of draw-command objects.
#[derive(Clone, Debug, Default)]
pub struct JsonBackend {
    commands: Vec<Value>,
}

impl JsonBackend {
    /// An empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated draw commands, in draw order.
    pub fn commands(&self) -> &[Value] {
        &self.commands
    }

    /// The accumulated output as one JSON array.
    pub fn document(&self) -> Value {
        Value::Array(self.commands.clone())
    }
}

impl<S: Scalar + Serialize> Backend<S> for JsonBackend {
    fn reset(&mut self) {
        self.commands.clear();
    }

    fn draw_line(&mut self, a: Vector<S, 2>, b: Vector<S, 2>) {
        self.commands.push(json!({
            "type": "line",
            "x1": a[0],
            "y1": a[1],
            "x2": b[0],
            "y2": b[1],
        }));
    }

    fn draw_face(&mut self, vertices: &[Vector<S, 2>]) {
        let points: Vec<[S; 2]> = vertices.iter().map(|v| [v[0], v[1]]).collect();
        self.commands.push(json!({
            "type": "face",
            "points": points,
        }));
    }
}
