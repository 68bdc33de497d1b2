//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HDRAW_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            camera: CameraConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HDRAW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HDRAW_SCENE__DIMENSION=5 -> scene.dimension = 5
        figment = figment.merge(Env::prefixed("HDRAW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Dimension of the hypercube scene (2 to 6)
    pub dimension: usize,
    /// Side length of the hypercube
    pub size: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            dimension: 4,
            size: 2.0,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Eye distance used at every projection level not listed in
    /// `eye_distances`
    pub eye_distance: f64,
    /// Per-level eye distances, from the scene dimension downward
    /// (entry 0 applies to the top level, entry 1 to the level below it)
    pub eye_distances: Vec<f64>,
    /// Plane rotations applied to the scene at the top level, in order
    pub rotations: Vec<PlaneRotation>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye_distance: 10.0,
            eye_distances: Vec::new(),
            rotations: Vec::new(),
        }
    }
}

impl CameraConfig {
    /// Eye distance for the projection step at dimension `level`, where
    /// `top` is the scene dimension.
    pub fn eye_for_level(&self, level: usize, top: usize) -> f64 {
        self.eye_distances
            .get(top - level)
            .copied()
            .unwrap_or(self.eye_distance)
    }
}

/// One rotation in an axis plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneRotation {
    /// Indices of the two axes spanning the rotation plane
    pub axes: [usize; 2],
    /// Rotation angle in degrees
    pub degrees: f64,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Backend name: "svg", "json", or "null"
    pub backend: String,
    /// Output file path; empty writes to stdout
    pub path: String,
    /// Document width in pixels (SVG)
    pub width: f64,
    /// Document height in pixels (SVG)
    pub height: f64,
    /// Scale from scene units to pixels, applied on the drawing plane
    pub scale: f64,
    /// Stroke colour, passed through to the SVG backend unchanged
    pub stroke: String,
    /// Fill colour, passed through to the SVG backend unchanged
    pub fill: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            backend: "svg".to_string(),
            path: String::new(),
            width: 800.0,
            height: 800.0,
            scale: 120.0,
            stroke: "#1a1a2e".to_string(),
            fill: "none".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
