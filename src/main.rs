//! hyperdraw - n-dimensional geometry on a 2-D page
//!
//! Builds a hypercube scene in the configured dimension, runs it through
//! the perspective projection chain, and writes the selected backend's
//! output to a file or stdout.

mod config;

use std::io;

use hyperdraw_core::{Affine, Hypercube};
use hyperdraw_math::Matrix;
use hyperdraw_render::{
    render_scene, Backend, DepthStage, JsonBackend, NullBackend, PlaneStage, Projection,
    SvgBackend,
};

use config::{AppConfig, ConfigError};

/// Errors that stop a render pass before it starts
#[derive(Debug)]
enum SetupError {
    /// Configuration could not be loaded or parsed
    Config(ConfigError),
    /// The configured scene dimension has no assembled chain
    UnsupportedDimension(usize),
    /// A configured rotation names an axis outside the scene dimension
    InvalidRotationPlane { axes: [usize; 2], dimension: usize },
    /// The configured backend name is not one of svg/json/null
    UnknownBackend(String),
    /// Output could not be serialized
    Serialize(serde_json::Error),
    /// Output could not be written
    Io(io::Error),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Config(e) => write!(f, "{}", e),
            SetupError::UnsupportedDimension(d) => {
                write!(f, "unsupported scene dimension {} (expected 2 to 6)", d)
            }
            SetupError::InvalidRotationPlane { axes, dimension } => write!(
                f,
                "rotation plane [{}, {}] is invalid in dimension {}",
                axes[0], axes[1], dimension
            ),
            SetupError::UnknownBackend(name) => {
                write!(f, "unknown backend '{}' (expected svg, json, or null)", name)
            }
            SetupError::Serialize(e) => write!(f, "Output serialization error: {}", e),
            SetupError::Io(e) => write!(f, "Output IO error: {}", e),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Config(e) => Some(e),
            SetupError::Serialize(e) => Some(e),
            SetupError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Config(e)
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(e: serde_json::Error) -> Self {
        SetupError::Serialize(e)
    }
}

impl From<io::Error> for SetupError {
    fn from(e: io::Error) -> Self {
        SetupError::Io(e)
    }
}

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), SetupError> {
    match config.output.backend.as_str() {
        "json" => {
            let mut backend = JsonBackend::new();
            render_pass(config, &mut backend)?;
            let text = serde_json::to_string_pretty(&backend.document())?;
            write_output(config, &text)
        }
        "svg" => {
            let mut backend =
                SvgBackend::with_style(&config.output.stroke, &config.output.fill);
            render_pass(config, &mut backend)?;
            let text = backend.document(config.output.width, config.output.height);
            write_output(config, &text)
        }
        "null" => {
            let mut backend = NullBackend::new();
            render_pass(config, &mut backend)?;
            log::info!(
                "dry run complete: {} lines, {} faces",
                backend.lines(),
                backend.faces()
            );
            Ok(())
        }
        other => Err(SetupError::UnknownBackend(other.to_string())),
    }
}

/// Build the scene and chain for the configured dimension and render.
///
/// The chain shape differs per dimension, so each supported dimension
/// assembles its own stack of stages over the shared backend.
fn render_pass<B: Backend<f64>>(config: &AppConfig, backend: &mut B) -> Result<(), SetupError> {
    let dimension = config.scene.dimension;
    validate_rotations(config, dimension)?;

    let size = config.scene.size;
    let plane = plane_transform(config);
    let eye = |level| Projection::new(config.camera.eye_for_level(level, dimension));

    match dimension {
        2 => {
            // Already on the drawing plane: rotations fold into the one
            // 2-D transform the terminal stage applies.
            let scene = Hypercube::<f64, 2>::new(size).scene();
            let t2 = plane.compose(&top_transform::<2>(config));
            let mut chain = PlaneStage::new(&t2, backend);
            render_scene(&scene, &mut chain);
        }
        3 => {
            let scene = Hypercube::<f64, 3>::new(size).scene();
            let t3 = top_transform::<3>(config);
            let p3 = eye(3);
            let mut chain = DepthStage::new(&t3, &p3, PlaneStage::new(&plane, backend));
            render_scene(&scene, &mut chain);
        }
        4 => {
            let scene = Hypercube::<f64, 4>::new(size).scene();
            let t4 = top_transform::<4>(config);
            let t3 = Affine::identity();
            let (p4, p3) = (eye(4), eye(3));
            let mut chain = DepthStage::new(
                &t4,
                &p4,
                DepthStage::new(&t3, &p3, PlaneStage::new(&plane, backend)),
            );
            render_scene(&scene, &mut chain);
        }
        5 => {
            let scene = Hypercube::<f64, 5>::new(size).scene();
            let t5 = top_transform::<5>(config);
            let t4 = Affine::identity();
            let t3 = Affine::identity();
            let (p5, p4, p3) = (eye(5), eye(4), eye(3));
            let mut chain = DepthStage::new(
                &t5,
                &p5,
                DepthStage::new(
                    &t4,
                    &p4,
                    DepthStage::new(&t3, &p3, PlaneStage::new(&plane, backend)),
                ),
            );
            render_scene(&scene, &mut chain);
        }
        6 => {
            let scene = Hypercube::<f64, 6>::new(size).scene();
            let t6 = top_transform::<6>(config);
            let t5 = Affine::identity();
            let t4 = Affine::identity();
            let t3 = Affine::identity();
            let (p6, p5, p4, p3) = (eye(6), eye(5), eye(4), eye(3));
            let mut chain = DepthStage::new(
                &t6,
                &p6,
                DepthStage::new(
                    &t5,
                    &p5,
                    DepthStage::new(
                        &t4,
                        &p4,
                        DepthStage::new(&t3, &p3, PlaneStage::new(&plane, backend)),
                    ),
                ),
            );
            render_scene(&scene, &mut chain);
        }
        d => return Err(SetupError::UnsupportedDimension(d)),
    }
    Ok(())
}

/// Reject rotation planes naming an axis outside the scene dimension, so
/// a bad axis fails the pass instead of silently rotating nothing.
fn validate_rotations(config: &AppConfig, dimension: usize) -> Result<(), SetupError> {
    for rotation in &config.camera.rotations {
        let [p1, p2] = rotation.axes;
        if p1 >= dimension || p2 >= dimension || p1 == p2 {
            return Err(SetupError::InvalidRotationPlane {
                axes: rotation.axes,
                dimension,
            });
        }
    }
    Ok(())
}

/// Top-level transform: the configured plane rotations, composed in order.
fn top_transform<const N: usize>(config: &AppConfig) -> Affine<f64, N> {
    let mut linear = Matrix::<f64, N, N>::identity();
    for rotation in &config.camera.rotations {
        let [p1, p2] = rotation.axes;
        linear = Matrix::plane_rotation(rotation.degrees.to_radians(), p1, p2) * linear;
    }
    Affine::from_linear(linear)
}

/// Drawing-plane transform: scene units to pixels, with y flipped to
/// match SVG's downward axis.
fn plane_transform(config: &AppConfig) -> Affine<f64, 2> {
    let s = config.output.scale;
    Affine::from_linear(Matrix::new([[s, 0.0], [0.0, -s]]))
}

fn write_output(config: &AppConfig, text: &str) -> Result<(), SetupError> {
    if config.output.path.is_empty() {
        println!("{}", text);
    } else {
        std::fs::write(&config.output.path, text)?;
        log::info!("wrote {}", config.output.path);
    }
    Ok(())
}
