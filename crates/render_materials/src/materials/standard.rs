//! Standard material tier
//!
//! Metallic-roughness PBR parameters, extending the base tier by value.

use std::sync::Arc;

use crate::foundation::math::{Color, Vec2};

use super::base::BaseMaterialParams;
use super::defines::{Defines, MaterialKind};
use super::descriptor::StandardMaterialDescriptor;
use super::texture::Texture;

/// Parameters added by the standard (metallic-roughness) tier.
#[derive(Debug, Clone)]
pub struct StandardMaterialParams {
    /// Base tier fields
    pub base: BaseMaterialParams,
    /// Surface albedo
    pub color: Color,
    /// Micro-surface roughness in `[0, 1]`
    pub roughness: f32,
    /// Metalness in `[0, 1]`
    pub metalness: f32,
    /// Albedo texture
    pub color_map: Option<Arc<Texture>>,
    /// Tangent-space normal map
    pub normal_map: Option<Arc<Texture>>,
    /// Normal map strength per axis
    pub normal_scale: Vec2,
    /// Roughness texture
    pub roughness_map: Option<Arc<Texture>>,
    /// Metalness texture
    pub metalness_map: Option<Arc<Texture>>,
    /// Emissive color
    pub emissive: Color,
    /// Emissive multiplier
    pub emissive_intensity: f32,
    /// Emissive texture
    pub emissive_map: Option<Arc<Texture>>,
    /// Ambient occlusion texture
    pub ao_map: Option<Arc<Texture>>,
    /// Ambient occlusion strength
    pub ao_intensity: f32,
    /// Environment reflection multiplier
    pub env_map_intensity: f32,
}

impl Default for StandardMaterialParams {
    fn default() -> Self {
        Self {
            base: BaseMaterialParams::default(),
            color: Color::WHITE,
            roughness: 1.0,
            metalness: 0.0,
            color_map: None,
            normal_map: None,
            normal_scale: Vec2::new(1.0, 1.0),
            roughness_map: None,
            metalness_map: None,
            emissive: Color::BLACK,
            emissive_intensity: 1.0,
            emissive_map: None,
            ao_map: None,
            ao_intensity: 1.0,
            env_map_intensity: 1.0,
        }
    }
}

impl StandardMaterialParams {
    /// Overwrite every field from `source`, base tier first.
    ///
    /// Texture fields end up aliasing the same resources as `source`;
    /// colors and scale vectors are copied by value.
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.base.copy_from(&source.base);

        self.color = source.color;
        self.roughness = source.roughness;
        self.metalness = source.metalness;
        self.color_map = source.color_map.clone();
        self.normal_map = source.normal_map.clone();
        self.normal_scale = source.normal_scale;
        self.roughness_map = source.roughness_map.clone();
        self.metalness_map = source.metalness_map.clone();
        self.emissive = source.emissive;
        self.emissive_intensity = source.emissive_intensity;
        self.emissive_map = source.emissive_map.clone();
        self.ao_map = source.ao_map.clone();
        self.ao_intensity = source.ao_intensity;
        self.env_map_intensity = source.env_map_intensity;
        self
    }
}

/// Standard metallic-roughness material.
///
/// Couples the standard tier parameters with the shader defines for the
/// standard tier.
#[derive(Debug, Clone)]
pub struct StandardMaterial {
    /// Shader capability flags; regenerated on construction and copy
    pub defines: Defines,
    /// Parameter set
    pub params: StandardMaterialParams,
}

impl StandardMaterial {
    /// Create a material with every parameter at its default
    pub fn new() -> Self {
        Self {
            defines: Defines::for_kind(MaterialKind::Standard),
            params: StandardMaterialParams::default(),
        }
    }

    /// Create a material from a descriptor.
    ///
    /// Starts from the defaults and overwrites only the fields the
    /// descriptor supplies. The defines map is populated regardless of the
    /// descriptor's contents.
    pub fn from_descriptor(descriptor: &StandardMaterialDescriptor) -> Self {
        let mut material = Self::new();
        descriptor.apply(&mut material.params);
        material
    }

    /// Tier tag
    pub const fn kind(&self) -> MaterialKind {
        MaterialKind::Standard
    }

    /// Mirror `source`'s parameters into this material and return the
    /// receiver for chaining.
    ///
    /// The defines map is rebuilt from this material's own tier, never
    /// taken from `source`: defines encode tier identity, which is
    /// invariant per concrete type.
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.params.copy_from(&source.params);
        self.defines = Defines::for_kind(self.kind());
        self
    }
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::texture::TextureKind;
    use super::*;

    #[test]
    fn test_defaults() {
        let material = StandardMaterial::new();
        assert_eq!(material.params.color, Color::WHITE);
        assert_eq!(material.params.roughness, 1.0);
        assert_eq!(material.params.metalness, 0.0);
        assert_eq!(material.params.normal_scale, Vec2::new(1.0, 1.0));
        assert_eq!(material.params.emissive, Color::BLACK);
        assert!(material.params.color_map.is_none());
        assert!(material.defines.contains("STANDARD"));
        assert_eq!(material.defines.len(), 1);
    }

    #[test]
    fn test_copy_from_aliases_textures() {
        let rust_map = Arc::new(Texture::new(TextureKind::BaseColor));

        let mut source = StandardMaterial::new();
        source.params.color_map = Some(Arc::clone(&rust_map));
        source.params.roughness = 0.25;

        let mut target = StandardMaterial::new();
        target.copy_from(&source);

        assert_eq!(target.params.roughness, 0.25);
        let copied = target.params.color_map.as_ref().expect("map copied");
        assert!(Arc::ptr_eq(copied, &rust_map));
    }

    #[test]
    fn test_copy_from_carries_base_tier() {
        let mut source = StandardMaterial::new();
        source.params.base.transparent = true;
        source.params.base.opacity = 0.5;

        let mut target = StandardMaterial::new();
        target.copy_from(&source);

        assert!(target.params.base.transparent);
        assert_eq!(target.params.base.opacity, 0.5);
    }

    #[test]
    fn test_copy_from_chains() {
        let source = StandardMaterial::new();
        let mut target = StandardMaterial::new();
        target.copy_from(&source).params.metalness = 1.0;
        assert_eq!(target.params.metalness, 1.0);
    }
}
