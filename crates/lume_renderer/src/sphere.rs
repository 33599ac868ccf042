//! Sphere primitive for ray tracing.

use crate::{
    hittable::{Hittable, IntersectionData},
    Material, RenderError, RenderResult,
};
use lume_math::{vec_utils, Interval, Ray, Vec3};

/// Smallest ray parameter accepted as a hit, to skip self-intersection at the origin.
pub const HIT_EPSILON: f32 = 1e-4;

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails with [`RenderError::InvalidRadius`] unless `radius` is finite and
    /// strictly positive.
    pub fn new(radius: f32, center: Vec3, material: Material) -> RenderResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RenderError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Sphere {
    fn intersect<'a>(&'a self, ray: &Ray, rec: &mut IntersectionData<'a>) {
        // Full quadratic, so the direction may have any length
        let oc = vec_utils::sub(self.center, ray.origin());
        let a = vec_utils::norm_squared(ray.direction());
        if a == 0.0 {
            return;
        }
        let h = vec_utils::dot(ray.direction(), oc);
        let c = vec_utils::norm_squared(oc) - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return;
        }

        let sqrtd = discriminant.sqrt();
        let ray_t = Interval::new(HIT_EPSILON, rec.closest());

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return;
            }
        }

        rec.record(root, self);
    }
}
