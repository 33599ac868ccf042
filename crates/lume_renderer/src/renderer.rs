//! Primary-ray renderer.
//!
//! Casts one ray through each pixel center, keeps the nearest sphere hit
//! and writes that sphere's flat material color. Pixels whose ray hits
//! nothing get the background color.

use crate::{Camera, Color, Hittable, IntersectionData, RenderError, RenderResult};
use lume_math::Ray;
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Edge length of the square buckets used by the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Compute the color seen by a ray.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, config: &RenderConfig) -> Color {
    // Fresh record per ray, never shared between casts
    let mut rec = IntersectionData::new();
    world.intersect(ray, &mut rec);

    match rec.hit_object() {
        Some(object) => object.material().color(),
        None => config.background,
    }
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> RenderResult<Color> {
    let ray = camera.get_ray(x, y)?;
    Ok(ray_color(&ray, world, config))
}

/// A width x height grid of float RGB samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Build a buffer from a grid indexed `[x][y]`.
    ///
    /// The outer length is the width, every column must have the same length.
    pub fn from_columns(columns: &[Vec<[f32; 3]>]) -> RenderResult<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        if let Some(x) = columns.iter().position(|column| column.len() != height) {
            return Err(RenderError::InvalidImage(format!(
                "column {} has {} pixels, expected {}",
                x,
                columns[x].len(),
                height
            )));
        }

        let mut image = Self::new(width as u32, height as u32);
        for (x, column) in columns.iter().enumerate() {
            for (y, pixel) in column.iter().enumerate() {
                image.set(x as u32, y as u32, Color::from_array(*pixel));
            }
        }
        Ok(image)
    }

    /// Check that `pixels` holds exactly `width * height` samples.
    pub fn check_size(&self) -> RenderResult<()> {
        let expected = self.width as usize * self.height as usize;
        if self.pixels.len() != expected {
            return Err(RenderError::InvalidImage(format!(
                "{}x{} image holds {} pixels, expected {}",
                self.width,
                self.height,
                self.pixels.len(),
                expected
            )));
        }
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }
}

/// Render the entire scene to an image buffer on the calling thread.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    let start = Instant::now();
    log::info!("Rendering {}x{}", camera.width(), camera.height());

    let mut image = ImageBuffer::new(camera.width(), camera.height());

    for y in 0..camera.height() {
        for x in 0..camera.width() {
            let color = render_pixel(camera, world, x, y, config)?;
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Render `world` as seen by `camera` with the default configuration.
pub fn gen_image(camera: &Camera, world: &dyn Hittable) -> RenderResult<ImageBuffer> {
    render(camera, world, &RenderConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CameraConfig, HittableList, Material, Sphere, Vec3};

    fn sphere_scene() -> Sphere {
        Sphere::new(2.0, Vec3::ZERO, Material::new(255, 255, 0)).unwrap()
    }

    #[test]
    fn test_ray_color_hit_and_miss() {
        let sphere = sphere_scene();
        let config = RenderConfig {
            background: Color::new(1.0, 2.0, 3.0),
            ..Default::default()
        };

        let hit = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(&hit, &sphere, &config), Color::new(255.0, 255.0, 0.0));

        let miss = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(ray_color(&miss, &sphere, &config), config.background);
    }

    #[test]
    fn test_gen_image_fills_every_pixel() {
        let camera = Camera::new(100, 100).unwrap();
        let image = gen_image(&camera, &sphere_scene()).unwrap();

        assert_eq!(image.width, 100);
        assert_eq!(image.height, 100);
        assert_eq!(image.pixels.len(), 100 * 100);

        // Sphere in the middle, background in the corners
        assert_eq!(image.get(50, 50), Color::new(255.0, 255.0, 0.0));
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.get(99, 99), Color::ZERO);
    }

    #[test]
    fn test_render_with_no_objects_is_background() {
        let camera = Camera::new(8, 4).unwrap();
        let config = RenderConfig {
            background: Color::splat(7.0),
            ..Default::default()
        };
        let image = render(&camera, &HittableList::new(), &config).unwrap();
        assert!(image.pixels.iter().all(|p| *p == Color::splat(7.0)));
    }

    #[test]
    fn test_nearest_sphere_wins() {
        let config = CameraConfig::default().with_position(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            Vec3::Y,
        );
        let camera = Camera::with_config(9, 9, config).unwrap();

        let mut world = HittableList::new();
        world.add(Sphere::new(3.0, Vec3::ZERO, Material::new(255, 0, 0)).unwrap());
        world.add(Sphere::new(1.0, Vec3::new(0.0, 0.0, 5.0), Material::new(0, 0, 255)).unwrap());

        let image = gen_image(&camera, &world).unwrap();
        assert_eq!(image.get(4, 4), Color::new(0.0, 0.0, 255.0));
    }

    #[test]
    fn test_from_columns() {
        let columns = vec![
            vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
            vec![[7.0, 8.0, 9.0], [10.0, 11.0, 12.0]],
            vec![[13.0, 14.0, 15.0], [16.0, 17.0, 18.0]],
        ];
        let image = ImageBuffer::from_columns(&columns).unwrap();

        assert_eq!(image.width, 3);
        assert_eq!(image.height, 2);
        assert_eq!(image.get(2, 1), Color::new(16.0, 17.0, 18.0));
        assert_eq!(image.get(1, 0), Color::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn test_pixel_index_does_not_wrap() {
        // Valid dimensions whose product exceeds u32::MAX
        let image = ImageBuffer {
            width: 65536,
            height: 65537,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(65535, 65536), 65536 * 65537 - 1);
        assert_eq!(image.index(0, 65536), 65536 * 65536);
    }

    #[test]
    fn test_check_size() {
        assert!(ImageBuffer::new(3, 2).check_size().is_ok());

        let short = ImageBuffer {
            width: 2,
            height: 2,
            pixels: vec![Color::ZERO; 3],
        };
        assert!(matches!(short.check_size(), Err(RenderError::InvalidImage(_))));
    }

    #[test]
    fn test_from_ragged_columns_fails() {
        let columns = vec![vec![[0.0; 3]; 2], vec![[0.0; 3]; 3]];
        assert!(matches!(
            ImageBuffer::from_columns(&columns),
            Err(RenderError::InvalidImage(_))
        ));
    }
}
