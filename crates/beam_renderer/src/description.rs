//! Scene description files.
//!
//! A description is a JSON document naming materials, then placing lights
//! and primitives that refer to those materials by name:
//!
//! ```json
//! {
//!   "width": 256,
//!   "height": 256,
//!   "materials": { "matte": { "color": [1.0, 0.8, 0.6], "ambient": 0.3, "diffuse": 0.7 } },
//!   "lights": [ { "position": [0, 0, -500], "color": [1, 1, 1] } ],
//!   "objects": [ { "type": "sphere", "center": [0, 0, 0], "radius": 100, "material": "matte" } ]
//! }
//! ```
//!
//! Anything omitted falls back to the defaults of [`SceneDescription::default`].

use std::collections::BTreeMap;
use std::path::Path;

use beam_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Camera, Color, Light, Material, RenderConfig, Scene, Sphere, Triangle};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum DescriptionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Maximum depth must be at least 1")]
    InvalidDepth,

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),
}

/// Result type for description operations.
pub type DescriptionResult<T> = Result<T, DescriptionError>;

/// Shading coefficients as written in a description file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialDescription {
    pub color: [f32; 3],
    #[serde(default)]
    pub ambient: f32,
    #[serde(default)]
    pub diffuse: f32,
    #[serde(default)]
    pub reflect: f32,
}

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        Material::new(
            Color::from_array(desc.color),
            desc.ambient,
            desc.diffuse,
            desc.reflect,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// A primitive placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    Sphere {
        center: [f32; 3],
        radius: f32,
        material: String,
    },
    Triangle {
        vertices: [[f32; 3]; 3],
        material: String,
    },
}

impl ObjectDescription {
    /// Name of the material this object refers to.
    pub fn material(&self) -> &str {
        match self {
            ObjectDescription::Sphere { material, .. } => material,
            ObjectDescription::Triangle { material, .. } => material,
        }
    }
}

/// Everything needed to render one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneDescription {
    pub width: u32,
    pub height: u32,
    pub max_depth: u32,
    pub min_intensity: f32,
    pub bounded_shadows: bool,
    pub materials: BTreeMap<String, MaterialDescription>,
    pub lights: Vec<LightDescription>,
    pub objects: Vec<ObjectDescription>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        let config = RenderConfig::default();
        let camera = Camera::default();
        Self {
            width: camera.image_width,
            height: camera.image_height,
            max_depth: config.max_depth,
            min_intensity: config.min_intensity,
            bounded_shadows: config.bounded_shadows,
            materials: BTreeMap::new(),
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }
}

impl SceneDescription {
    /// The built-in scene: two mirror spheres and a matte sphere above a
    /// matte floor, lit by five colored lights.
    pub fn reference() -> Self {
        let mut materials = BTreeMap::new();
        materials.insert(
            "mirror".to_string(),
            MaterialDescription {
                color: [0.9, 1.0, 0.9],
                ambient: 0.01,
                diffuse: 0.99,
                reflect: 0.99,
            },
        );
        materials.insert(
            "matte".to_string(),
            MaterialDescription {
                color: [1.0, 0.8, 0.6],
                ambient: 0.3,
                diffuse: 0.7,
                reflect: 0.2,
            },
        );

        let light = |position: [f32; 3], color: [f32; 3]| LightDescription { position, color };
        let lights = vec![
            light([-500.0, 0.0, 100.0], [1.0, 0.0, 0.0]),
            light([500.0, 0.0, 100.0], [0.0, 1.0, 0.0]),
            light([0.0, 500.0, -100.0], [0.0, 0.0, 1.0]),
            light([0.0, -500.0, -100.0], [0.0, 1.0, 1.0]),
            light([0.0, 0.0, 100.0], [1.0, 1.0, 0.0]),
        ];

        let sphere = |center: [f32; 3], material: &str| ObjectDescription::Sphere {
            center,
            radius: 100.0,
            material: material.to_string(),
        };
        let objects = vec![
            sphere([-87.0, -50.0, 0.0], "mirror"),
            sphere([87.0, -50.0, 0.0], "mirror"),
            sphere([0.0, 100.0, 0.0], "matte"),
            ObjectDescription::Triangle {
                vertices: [
                    [-1000.0, -1000.0, 0.0],
                    [1000.0, -1000.0, 0.0],
                    [1000.0, 1000.0, 0.0],
                ],
                material: "matte".to_string(),
            },
        ];

        Self {
            materials,
            lights,
            objects,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON description.
    pub fn from_json_str(json: &str) -> DescriptionResult<Self> {
        let description: Self = serde_json::from_str(json)?;
        description.validate()?;
        Ok(description)
    }

    /// Load and validate a JSON description file.
    pub fn load<P: AsRef<Path>>(path: P) -> DescriptionResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let description = Self::from_json_str(&json)?;

        log::debug!(
            "Loaded {} ({} materials, {} lights, {} objects)",
            path.display(),
            description.materials.len(),
            description.lights.len(),
            description.objects.len()
        );
        Ok(description)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> DescriptionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check dimensions, depth and material references.
    ///
    /// Coefficients outside [0, 1] are unusual but allowed; they only warn.
    pub fn validate(&self) -> DescriptionResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DescriptionError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.max_depth == 0 {
            return Err(DescriptionError::InvalidDepth);
        }

        for object in &self.objects {
            if !self.materials.contains_key(object.material()) {
                return Err(DescriptionError::UnknownMaterial(object.material().to_string()));
            }
        }

        for (name, material) in &self.materials {
            let coefficients = [material.ambient, material.diffuse, material.reflect];
            if coefficients.iter().any(|c| !(0.0..=1.0).contains(c)) {
                log::warn!("Material '{}' has coefficients outside [0, 1]", name);
            }
        }

        Ok(())
    }

    /// Camera matching the description's resolution.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height)
    }

    /// Shading settings from the description.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            min_intensity: self.min_intensity,
            bounded_shadows: self.bounded_shadows,
        }
    }

    /// Build the scene, adding lights and objects in file order.
    pub fn build_scene(&self) -> DescriptionResult<Scene> {
        let mut scene = Scene::new();

        for light in &self.lights {
            scene.add_light(Light::new(
                Vec3::from_array(light.position),
                Color::from_array(light.color),
            ));
        }

        for object in &self.objects {
            let material = self
                .materials
                .get(object.material())
                .map(Material::from)
                .ok_or_else(|| DescriptionError::UnknownMaterial(object.material().to_string()))?;

            match object {
                ObjectDescription::Sphere { center, radius, .. } => {
                    scene.add(Box::new(Sphere::new(
                        Vec3::from_array(*center),
                        *radius,
                        material,
                    )));
                }
                ObjectDescription::Triangle { vertices, .. } => {
                    let [v0, v1, v2] = vertices.map(Vec3::from_array);
                    scene.add(Box::new(Triangle::new(v0, v1, v2, material)));
                }
            }
        }

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene() {
        let description = SceneDescription::reference();
        description.validate().unwrap();

        assert_eq!((description.width, description.height), (512, 512));
        assert_eq!(description.max_depth, 10);

        let scene = description.build_scene().unwrap();
        assert_eq!(scene.len(), 4);
        assert_eq!(scene.lights().len(), 5);
        assert_eq!(scene.lights()[4].color, Color::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_parse_minimal() {
        let json = r#"{
            "width": 32,
            "height": 16,
            "materials": { "white": { "color": [1, 1, 1], "ambient": 1.0 } },
            "objects": [
                { "type": "sphere", "center": [0, 0, 0], "radius": 4, "material": "white" },
                { "type": "triangle", "vertices": [[0, 0, 5], [1, 0, 5], [0, 1, 5]], "material": "white" }
            ]
        }"#;

        let description = SceneDescription::from_json_str(json).unwrap();
        assert_eq!(description.camera(), Camera::new(32, 16));
        assert_eq!(description.render_config(), RenderConfig::default());
        assert!(description.lights.is_empty());

        let white = &description.materials["white"];
        assert_eq!(white.diffuse, 0.0);
        assert_eq!(white.reflect, 0.0);

        let scene = description.build_scene().unwrap();
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_unknown_material() {
        let json = r#"{
            "objects": [ { "type": "sphere", "center": [0, 0, 0], "radius": 1, "material": "gold" } ]
        }"#;

        let err = SceneDescription::from_json_str(json).unwrap_err();
        assert!(matches!(err, DescriptionError::UnknownMaterial(ref name) if name == "gold"));
    }

    #[test]
    fn test_invalid_dimensions_and_depth() {
        let err = SceneDescription::from_json_str(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, DescriptionError::InvalidDimensions { width: 0, .. }));

        let err = SceneDescription::from_json_str(r#"{ "max_depth": 0 }"#).unwrap_err();
        assert!(matches!(err, DescriptionError::InvalidDepth));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SceneDescription::from_json_str(r#"{ "samples": 4 }"#).unwrap_err();
        assert!(matches!(err, DescriptionError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip_of_reference() {
        let reference = SceneDescription::reference();
        let json = reference.to_json_string().unwrap();

        assert_eq!(SceneDescription::from_json_str(&json).unwrap(), reference);
    }

    #[test]
    fn test_sample_scene_file() {
        let json = include_str!("../../../scenes/two_spheres.json");
        let description = SceneDescription::from_json_str(json).unwrap();

        assert_eq!(description.max_depth, 6);
        assert_eq!(description.min_intensity, RenderConfig::default().min_intensity);

        let scene = description.build_scene().unwrap();
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.lights().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SceneDescription::load("/nonexistent/beamburst/scene.json").unwrap_err();
        assert!(matches!(err, DescriptionError::Io(_)));
    }
}
