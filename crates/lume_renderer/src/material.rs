//! Flat surface material.

use lume_math::Vec3;

/// Color type alias. Channels are floats on the 0-255 scale.
pub type Color = Vec3;

/// A flat-shaded surface color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Material {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Material {
    /// Create a new material from its red, green and blue channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The material color as floating-point channels.
    pub fn color(&self) -> Color {
        Color::new(self.red as f32, self.green as f32, self.blue as f32)
    }
}

impl Default for Material {
    /// Plain white.
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_color() {
        let mat = Material::new(255, 128, 0);
        assert_eq!(mat.color(), Color::new(255.0, 128.0, 0.0));
    }

    #[test]
    fn test_default_material_is_white() {
        assert_eq!(Material::default().color(), Color::splat(255.0));
    }
}
