// Re-export glam for convenience
pub use glam::*;

// Lume math types
mod interval;
mod ray;
pub mod vec_utils;

pub use interval::Interval;
pub use ray::Ray;
pub use vec_utils::MathError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(vec_utils::sub(b, a), Vec3::new(3.0, 3.0, 3.0));
    }
}
