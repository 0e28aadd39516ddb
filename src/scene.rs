//! Scene setup: the built-in demo scene and TOML scene files.
//!
//! A scene file lists spheres and may override the camera geometry:
//!
//! ```toml
//! [camera]
//! aspect_ratio = 1.7777778
//! focal_length = 1.0
//!
//! [[spheres]]
//! center = [0.0, 0.0, -1.0]
//! radius = 0.5
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::camera::CameraSettings;
use crate::hittable::{Hittable, HittableList};
use crate::sphere::Sphere;
use crate::vec3::Point3;

/// Errors raised while loading a scene file.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The file could not be read.
    #[error("could not read scene file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid scene description.
    #[error("invalid scene description: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One sphere entry of a scene file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SphereConfig {
    /// Sphere center in world coordinates
    pub center: [f32; 3],
    /// Sphere radius; negative values are clamped to zero
    pub radius: f32,
}

impl From<SphereConfig> for Sphere {
    fn from(config: SphereConfig) -> Self {
        Sphere::new(Point3::from_array(config.center), config.radius)
    }
}

/// Optional `[camera]` table. Missing keys fall back to the default camera.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    /// Viewport width over viewport height
    pub aspect_ratio: Option<f32>,
    /// Height of the viewport in world units
    pub viewport_height: Option<f32>,
    /// Distance from the eye to the viewport plane
    pub focal_length: Option<f32>,
    /// Eye position
    pub origin: Option<[f32; 3]>,
}

/// Parsed scene file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct SceneConfig {
    /// Camera overrides
    #[serde(default)]
    pub camera: CameraConfig,
    /// Spheres in scene order
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
}

impl SceneConfig {
    /// The two-sphere demo scene: a small sphere resting on a huge "ground" sphere.
    pub fn demo() -> Self {
        Self {
            camera: CameraConfig::default(),
            spheres: vec![
                SphereConfig {
                    center: [0.0, 0.0, -1.0],
                    radius: 0.5,
                },
                SphereConfig {
                    center: [0.0, -100.5, -1.0],
                    radius: 100.0,
                },
            ],
        }
    }

    /// Parse a scene from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(input)?)
    }

    /// Build the surface list, keeping file order.
    pub fn build_world(&self) -> HittableList {
        self.spheres
            .iter()
            .map(|&config| Box::new(Sphere::from(config)) as Box<dyn Hittable>)
            .collect()
    }

    /// Camera geometry with file overrides applied.
    pub fn camera_settings(&self) -> CameraSettings {
        let defaults = CameraSettings::default();
        let c = &self.camera;
        CameraSettings {
            aspect_ratio: c.aspect_ratio.unwrap_or(defaults.aspect_ratio),
            viewport_height: c.viewport_height.unwrap_or(defaults.viewport_height),
            focal_length: c.focal_length.unwrap_or(defaults.focal_length),
            origin: c.origin.map(Point3::from_array).unwrap_or(defaults.origin),
        }
    }
}

/// The default world: [`SceneConfig::demo`] as a surface list.
pub fn default_world() -> HittableList {
    SceneConfig::demo().build_world()
}

/// Read and parse a TOML scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneConfig, SceneError> {
    let path = path.as_ref();
    debug!("Reading scene from {}", path.display());
    let input = fs::read_to_string(path)?;
    let scene = SceneConfig::from_toml_str(&input)?;
    info!("Loaded {} sphere(s) from {}", scene.spheres.len(), path.display());
    Ok(scene)
}
