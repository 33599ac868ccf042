//! Hittable trait and IntersectionData for ray-object intersection.

use crate::{RenderError, RenderResult, Sphere};
use lume_math::Ray;

/// Record of the nearest intersection found for one ray cast.
///
/// Starts out empty. Primitives only write to it when they find a hit
/// closer than the one already recorded, so a miss never changes it.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionData<'a> {
    distance: f32,
    object: Option<&'a Sphere>,
}

impl<'a> IntersectionData<'a> {
    /// Create an empty record with no hit.
    pub fn new() -> Self {
        Self {
            distance: f32::INFINITY,
            object: None,
        }
    }

    /// Whether any primitive has been hit.
    pub fn is_hit(&self) -> bool {
        self.object.is_some()
    }

    /// The primitive that was hit, if any.
    pub fn hit_object(&self) -> Option<&'a Sphere> {
        self.object
    }

    /// The primitive that was hit.
    ///
    /// Fails with [`RenderError::NoIntersection`] while the record is empty.
    pub fn object(&self) -> RenderResult<&'a Sphere> {
        self.object.ok_or(RenderError::NoIntersection)
    }

    /// Ray parameter of the recorded hit.
    pub fn distance(&self) -> RenderResult<f32> {
        match self.object {
            Some(_) => Ok(self.distance),
            None => Err(RenderError::NoIntersection),
        }
    }

    /// Upper bound for new hits: the recorded distance, or infinity.
    pub fn closest(&self) -> f32 {
        self.distance
    }

    pub(crate) fn record(&mut self, distance: f32, object: &'a Sphere) {
        self.distance = distance;
        self.object = Some(object);
    }
}

impl Default for IntersectionData<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Intersect `ray` with this object.
    ///
    /// Writes into `rec` only when the hit lies in front of the ray origin
    /// and closer than what `rec` already holds.
    fn intersect<'a>(&'a self, ray: &Ray, rec: &mut IntersectionData<'a>);
}

/// A list of spheres, intersected as one object.
#[derive(Debug, Clone, Default)]
pub struct HittableList {
    objects: Vec<Sphere>,
}

impl HittableList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add a sphere to the list.
    pub fn add(&mut self, object: Sphere) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Sphere] {
        &self.objects
    }
}

impl From<Vec<Sphere>> for HittableList {
    fn from(objects: Vec<Sphere>) -> Self {
        Self { objects }
    }
}

impl Hittable for HittableList {
    fn intersect<'a>(&'a self, ray: &Ray, rec: &mut IntersectionData<'a>) {
        for object in &self.objects {
            object.intersect(ray, rec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;
    use lume_math::Vec3;

    #[test]
    fn test_empty_record_has_no_object() {
        let rec = IntersectionData::new();
        assert!(!rec.is_hit());
        assert!(rec.hit_object().is_none());
        assert!(matches!(rec.object(), Err(RenderError::NoIntersection)));
        assert!(matches!(rec.distance(), Err(RenderError::NoIntersection)));
        assert_eq!(rec.closest(), f32::INFINITY);
    }

    #[test]
    fn test_list_keeps_nearest_hit() {
        let far = Sphere::new(1.0, Vec3::new(0.0, 0.0, -10.0), Material::new(255, 0, 0)).unwrap();
        let near = Sphere::new(1.0, Vec3::new(0.0, 0.0, -4.0), Material::new(0, 255, 0)).unwrap();
        // Far sphere first so the near one has to overwrite it
        let list = HittableList::from(vec![far, near]);
        assert_eq!(list.len(), 2);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = IntersectionData::new();
        list.intersect(&ray, &mut rec);

        assert!((rec.distance().unwrap() - 3.0).abs() < 1e-4);
        assert!(std::ptr::eq(rec.object().unwrap(), &list.objects()[1]));
    }

    #[test]
    fn test_list_order_does_not_matter() {
        let near = Sphere::new(1.0, Vec3::new(0.0, 0.0, -4.0), Material::new(0, 255, 0)).unwrap();
        let far = Sphere::new(1.0, Vec3::new(0.0, 0.0, -10.0), Material::new(255, 0, 0)).unwrap();
        let list = HittableList::from(vec![near, far]);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = IntersectionData::new();
        list.intersect(&ray, &mut rec);

        assert_eq!(rec.object().unwrap().material(), &Material::new(0, 255, 0));
    }

    #[test]
    fn test_empty_list_never_hits() {
        let list = HittableList::new();
        assert!(list.is_empty());

        let mut rec = IntersectionData::new();
        list.intersect(&Ray::new(Vec3::ZERO, Vec3::X), &mut rec);
        assert!(!rec.is_hit());
    }
}
