//! Material parameter model
//!
//! Materials are layered as tiers that compose by strict extension:
//! the base tier carries fields every material has, the standard tier
//! adds the metallic-roughness workflow, and the physical tier adds
//! clear coat, transmission, thickness and specular layers.
//!
//! # Architecture
//!
//! - Each tier is a params struct holding only its own added fields and
//!   embedding the parent tier by value. No tier removes or redefines an
//!   inherited field.
//! - A concrete material couples a tier params set with the shader defines
//!   for its kind. Defines encode tier identity, not instance state, and
//!   are regenerated whenever a material is constructed or copied.
//! - Texture fields alias externally owned resources through `Arc`;
//!   copying a material re-points the reference and never duplicates
//!   image contents.
//! - Descriptors are the configuration-object side of construction: all
//!   fields optional, applied field-by-field over the defaults.

pub mod base;
pub mod defines;
pub mod descriptor;
pub mod physical;
pub mod standard;
pub mod texture;

pub use base::BaseMaterialParams;
pub use defines::{Defines, MaterialKind};
pub use descriptor::{
    BaseMaterialDescriptor, DescriptorError, PhysicalMaterialDescriptor,
    StandardMaterialDescriptor,
};
pub use physical::{PhysicalMaterial, PhysicalMaterialParams};
pub use standard::{StandardMaterial, StandardMaterialParams};
pub use texture::{
    FilterMode, Texture, TextureHandle, TextureKind, TextureManager, TextureParams, WrapMode,
};

/// Renderer-facing wrapper over the concrete material tiers.
///
/// The renderer dispatches on [`Material::kind`] to pick a shader variant
/// and reads [`Material::defines`] to decide which optional shading paths
/// to compile in.
#[derive(Debug, Clone)]
pub enum Material {
    /// Standard metallic-roughness material
    Standard(StandardMaterial),
    /// Physical material with clear coat, transmission and specular layers
    Physical(PhysicalMaterial),
}

impl Material {
    /// Tier tag identifying the concrete material type
    pub const fn kind(&self) -> MaterialKind {
        match self {
            Self::Standard(_) => MaterialKind::Standard,
            Self::Physical(_) => MaterialKind::Physical,
        }
    }

    /// Shader defines carried by this material instance
    pub const fn defines(&self) -> &Defines {
        match self {
            Self::Standard(material) => &material.defines,
            Self::Physical(material) => &material.defines,
        }
    }

    /// Debug name, if one was assigned
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Standard(material) => material.params.base.name.as_deref(),
            Self::Physical(material) => material.params.standard.base.name.as_deref(),
        }
    }
}

impl From<StandardMaterial> for Material {
    fn from(material: StandardMaterial) -> Self {
        Self::Standard(material)
    }
}

impl From<PhysicalMaterial> for Material {
    fn from(material: PhysicalMaterial) -> Self {
        Self::Physical(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_kind_dispatch() {
        let standard: Material = StandardMaterial::new().into();
        let physical: Material = PhysicalMaterial::new().into();

        assert_eq!(standard.kind(), MaterialKind::Standard);
        assert_eq!(physical.kind(), MaterialKind::Physical);
    }

    #[test]
    fn test_material_defines_follow_kind() {
        let physical: Material = PhysicalMaterial::new().into();
        assert!(physical.defines().contains("STANDARD"));
        assert!(physical.defines().contains("PHYSICAL"));

        let standard: Material = StandardMaterial::new().into();
        assert!(standard.defines().contains("STANDARD"));
        assert!(!standard.defines().contains("PHYSICAL"));
    }

    #[test]
    fn test_material_name() {
        let mut material = StandardMaterial::new();
        material.params.base.name = Some("hull plating".to_string());
        let material: Material = material.into();
        assert_eq!(material.name(), Some("hull plating"));
    }
}
