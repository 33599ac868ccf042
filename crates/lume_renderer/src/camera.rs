//! Pinhole camera for primary ray generation.

use crate::{RenderError, RenderResult};
use lume_math::{vec_utils, Ray, Vec3};

/// Projection settings for a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Eye position
    pub eye: Vec3,
    /// Point the camera looks at
    pub look_at: Vec3,
    /// Approximate up direction
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Distance from the eye to the image plane
    pub focal_length: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            vfov: 60.0,
            focal_length: 1.0,
        }
    }
}

impl CameraConfig {
    /// Set camera position.
    pub fn with_position(mut self, eye: Vec3, look_at: Vec3, up: Vec3) -> Self {
        self.eye = eye;
        self.look_at = look_at;
        self.up = up;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, focal_length: f32) -> Self {
        self.vfov = vfov;
        self.focal_length = focal_length;
        self
    }

    fn validate(&self) -> RenderResult<()> {
        let vectors_finite = self.eye.is_finite() && self.look_at.is_finite() && self.up.is_finite();
        if !vectors_finite {
            return Err(invalid("eye, look_at and up must be finite"));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(invalid(format!("vfov must be in (0, 180), got {}", self.vfov)));
        }
        if !(self.focal_length > 0.0 && self.focal_length.is_finite()) {
            return Err(invalid(format!(
                "focal_length must be positive, got {}",
                self.focal_length
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> RenderError {
    RenderError::InvalidCameraConfig(msg.into())
}

/// Camera mapping pixel coordinates to world-space rays.
///
/// Pixel `(0, 0)` is the top-left corner. `x` grows to the right and `y`
/// grows downward. Every ray passes through its pixel's center and
/// carries a unit-length direction.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    width: u32,
    height: u32,
    config: CameraConfig,

    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    /// Create a camera with the default projection.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        Self::with_config(width, height, CameraConfig::default())
    }

    /// Create a camera with an explicit projection.
    pub fn with_config(width: u32, height: u32, config: CameraConfig) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        config.validate()?;

        let center = config.eye;

        // Calculate viewport dimensions
        let h = (config.vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h * config.focal_length;
        let viewport_width = viewport_height * (width as f32 / height as f32);

        // Calculate camera basis vectors
        let w = vec_utils::normalize(config.eye - config.look_at)
            .map_err(|_| invalid("eye and look_at must differ"))?;
        let u = vec_utils::normalize(config.up.cross(w))
            .map_err(|_| invalid("up must not be parallel to the view direction"))?;
        let v = w.cross(u);

        // Calculate viewport vectors
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        let pixel_delta_u = viewport_u / width as f32;
        let pixel_delta_v = viewport_v / height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left =
            center - config.focal_length * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        log::debug!(
            "Camera {}x{} at {:?} looking at {:?}, vfov {}",
            width,
            height,
            config.eye,
            config.look_at,
            config.vfov
        );

        Ok(Self {
            width,
            height,
            config,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Generate the ray through the center of pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> RenderResult<Ray> {
        if x >= self.width || y >= self.height {
            return Err(RenderError::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let pixel_center =
            self.pixel00_loc + (x as f32) * self.pixel_delta_u + (y as f32) * self.pixel_delta_v;
        let direction = vec_utils::normalize(pixel_center - self.center)?;

        Ok(Ray::new(self.center, direction))
    }
}
