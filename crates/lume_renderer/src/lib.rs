//! Lume renderer - primary-ray sphere tracing.
//!
//! Casts one ray per pixel from a pinhole camera, finds the nearest sphere
//! and writes its flat material color to a plain-text PPM image.

mod bucket;
mod camera;
mod error;
mod hittable;
mod image_io;
mod material;
mod renderer;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, CameraConfig};
pub use error::{RenderError, RenderResult};
pub use hittable::{Hittable, HittableList, IntersectionData};
pub use image_io::{clamp_channel, encode_image, load_image, save_image, MAX_CHANNEL_VALUE, PPM_MAGIC};
pub use material::{Color, Material};
pub use renderer::{gen_image, ray_color, render, render_pixel, ImageBuffer, RenderConfig};
pub use sphere::{Sphere, HIT_EPSILON};

/// Re-export Vec3 and common math types from lume_math
pub use lume_math::{vec_utils, Interval, MathError, Ray, Vec3};
