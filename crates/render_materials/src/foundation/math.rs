//! Math utilities and types
//!
//! Provides the fundamental value types used by the material model.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Linear RGB color.
///
/// Plain value semantics: assignment copies all components and equality is
/// component-wise. Material fields own their colors directly; two materials
/// never share a color instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Black
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// Create a color from linear RGB components
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a `0xRRGGBB` hex value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Overwrite all components from another color
    pub fn copy_from(&mut self, other: &Self) {
        self.r = other.r;
        self.g = other.g;
        self.b = other.b;
    }

    /// Components as an array, in RGB order
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let orange = Color::from_hex(0xFF8000);
        assert!((orange.r - 1.0).abs() < 0.01);
        assert!((orange.g - 0.5).abs() < 0.01);
        assert!((orange.b - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_color_equality_is_component_wise() {
        let a = Color::new(0.2, 0.4, 0.6);
        let b = Color::new(0.2, 0.4, 0.6);
        assert_eq!(a, b);
        assert_ne!(a, Color::new(0.2, 0.4, 0.7));
    }

    #[test]
    fn test_color_copy_from() {
        let mut target = Color::BLACK;
        let source = Color::new(0.1, 0.2, 0.3);
        target.copy_from(&source);
        assert_eq!(target, source);
    }

    #[test]
    fn test_color_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
    }
}
