//! JSON scene descriptions.
//!
//! ```json
//! {
//!   "width": 320,
//!   "height": 240,
//!   "camera": { "eye": [0, 0, 5], "vfov": 45 },
//!   "background": [20, 20, 40],
//!   "spheres": [
//!     { "center": [0, 0, 0], "radius": 1.5, "color": [255, 128, 0] }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use lume_renderer::{Camera, CameraConfig, Color, HittableList, Material, RenderConfig, Sphere, Vec3};
use serde::Deserialize;
use std::path::Path;

/// Camera block of a scene file. Missing fields use the camera defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub eye: [f32; 3],
    pub look_at: [f32; 3],
    pub up: [f32; 3],
    pub vfov: f32,
    pub focal_length: f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        let config = CameraConfig::default();
        Self {
            eye: config.eye.to_array(),
            look_at: config.look_at.to_array(),
            up: config.up.to_array(),
            vfov: config.vfov,
            focal_length: config.focal_length,
        }
    }
}

impl From<&CameraDescription> for CameraConfig {
    fn from(desc: &CameraDescription) -> Self {
        CameraConfig::default()
            .with_position(
                Vec3::from_array(desc.eye),
                Vec3::from_array(desc.look_at),
                Vec3::from_array(desc.up),
            )
            .with_lens(desc.vfov, desc.focal_length)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SphereDescription {
    pub center: [f32; 3],
    pub radius: f32,
    #[serde(default = "white")]
    pub color: [u8; 3],
}

fn white() -> [u8; 3] {
    [255, 255, 255]
}

/// A whole scene as read from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDescription {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub camera: CameraDescription,
    #[serde(default)]
    pub background: [f32; 3],
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

/// Everything needed to render a scene.
pub struct Scene {
    pub camera: Camera,
    pub world: HittableList,
    pub config: RenderConfig,
}

impl SceneDescription {
    /// Load a scene description from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse scene {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// A yellow sphere at the origin with a smaller red one in front of it.
    pub fn demo() -> Self {
        Self {
            width: 400,
            height: 300,
            camera: CameraDescription::default(),
            background: [0.0, 0.0, 0.0],
            spheres: vec![
                SphereDescription {
                    center: [0.0, 0.0, 0.0],
                    radius: 2.0,
                    color: [255, 255, 0],
                },
                SphereDescription {
                    center: [1.2, -0.6, 2.0],
                    radius: 0.5,
                    color: [220, 40, 40],
                },
            ],
        }
    }

    /// Validate and build the renderable scene.
    pub fn build(&self) -> Result<Scene> {
        let camera = Camera::with_config(self.width, self.height, (&self.camera).into())
            .context("Invalid camera")?;

        let mut world = HittableList::new();
        for (i, desc) in self.spheres.iter().enumerate() {
            let [r, g, b] = desc.color;
            let sphere = Sphere::new(desc.radius, Vec3::from_array(desc.center), Material::new(r, g, b))
                .with_context(|| format!("Invalid sphere #{}", i))?;
            world.add(sphere);
        }
        log::debug!("Built scene with {} spheres", world.len());

        let config = RenderConfig {
            background: Color::from_array(self.background),
            ..Default::default()
        };

        Ok(Scene {
            camera,
            world,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_scene() {
        let desc = SceneDescription::from_json(r#"{ "width": 10, "height": 5 }"#).unwrap();
        assert_eq!(desc.width, 10);
        assert!(desc.spheres.is_empty());

        let scene = desc.build().unwrap();
        assert_eq!(scene.camera.width(), 10);
        assert_eq!(scene.camera.config(), &CameraConfig::default());
        assert!(scene.world.is_empty());
    }

    #[test]
    fn test_parse_full_scene() {
        let json = r#"{
            "width": 32,
            "height": 16,
            "camera": { "eye": [0, 1, 8], "vfov": 45 },
            "background": [10, 20, 30],
            "spheres": [
                { "center": [0, 0, 0], "radius": 1.5, "color": [255, 128, 0] },
                { "center": [2, 0, 0], "radius": 0.5 }
            ]
        }"#;
        let scene = SceneDescription::from_json(json).unwrap().build().unwrap();

        assert_eq!(scene.camera.config().eye, Vec3::new(0.0, 1.0, 8.0));
        assert_eq!(scene.camera.config().vfov, 45.0);
        assert_eq!(scene.camera.config().focal_length, 1.0);
        assert_eq!(scene.config.background, Color::new(10.0, 20.0, 30.0));
        assert_eq!(scene.world.len(), 2);
        assert_eq!(scene.world.objects()[0].material(), &Material::new(255, 128, 0));
        assert_eq!(scene.world.objects()[1].material(), &Material::default());
    }

    #[test]
    fn test_invalid_radius_is_reported() {
        let json = r#"{
            "width": 4, "height": 4,
            "spheres": [{ "center": [0, 0, 0], "radius": -2 }]
        }"#;
        let err = SceneDescription::from_json(json).unwrap().build().err().unwrap();
        assert!(format!("{:#}", err).contains("Invalid sphere #0"));
    }

    #[test]
    fn test_zero_width_is_reported() {
        let json = r#"{ "width": 0, "height": 4 }"#;
        assert!(SceneDescription::from_json(json).unwrap().build().is_err());
    }

    #[test]
    fn test_demo_scene_builds() {
        let scene = SceneDescription::demo().build().unwrap();
        assert_eq!(scene.world.len(), 2);
    }
}
