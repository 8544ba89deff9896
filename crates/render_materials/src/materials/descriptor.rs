//! Material descriptors
//!
//! A descriptor is the configuration-object side of material construction:
//! every field is optional, and applying one overwrites only the fields
//! that were supplied, leaving the rest at their documented defaults.
//! Descriptors mirror the tier layout of the parameter structs, so a
//! physical descriptor embeds a standard descriptor which embeds a base
//! descriptor.
//!
//! Scalar, color and vector fields round-trip through serde (RON in scene
//! tooling); unrecognized keys in the text form are ignored rather than
//! reported. Texture fields are skipped during (de)serialization and must
//! be attached in code, because they alias live resources.

use std::sync::Arc;

use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::{Color, Vec2};

use super::base::BaseMaterialParams;
use super::physical::PhysicalMaterialParams;
use super::standard::StandardMaterialParams;
use super::texture::Texture;

/// Error raised while reading a descriptor from text
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The RON source failed to parse
    #[error("failed to parse material descriptor: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

fn ron_options() -> ron::Options {
    // implicit Some lets scene files write `transmission: 0.8` instead of
    // `transmission: Some(0.8)`
    ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

/// Optional overrides for the base tier fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseMaterialDescriptor {
    /// See [`BaseMaterialParams::name`]
    pub name: Option<String>,
    /// See [`BaseMaterialParams::opacity`]
    pub opacity: Option<f32>,
    /// See [`BaseMaterialParams::transparent`]
    pub transparent: Option<bool>,
    /// See [`BaseMaterialParams::alpha_test`]
    pub alpha_test: Option<f32>,
    /// See [`BaseMaterialParams::double_sided`]
    pub double_sided: Option<bool>,
    /// See [`BaseMaterialParams::visible`]
    pub visible: Option<bool>,
}

impl BaseMaterialDescriptor {
    /// Overwrite the fields of `params` this descriptor supplies
    pub fn apply(&self, params: &mut BaseMaterialParams) {
        if let Some(ref name) = self.name {
            params.name = Some(name.clone());
        }
        if let Some(opacity) = self.opacity {
            params.opacity = opacity;
        }
        if let Some(transparent) = self.transparent {
            params.transparent = transparent;
        }
        if let Some(alpha_test) = self.alpha_test {
            params.alpha_test = alpha_test;
        }
        if let Some(double_sided) = self.double_sided {
            params.double_sided = double_sided;
        }
        if let Some(visible) = self.visible {
            params.visible = visible;
        }
    }
}

/// Optional overrides for the standard tier fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardMaterialDescriptor {
    /// Base tier overrides
    pub base: BaseMaterialDescriptor,
    /// See [`StandardMaterialParams::color`]
    pub color: Option<Color>,
    /// See [`StandardMaterialParams::roughness`]
    pub roughness: Option<f32>,
    /// See [`StandardMaterialParams::metalness`]
    pub metalness: Option<f32>,
    /// See [`StandardMaterialParams::color_map`]
    #[serde(skip)]
    pub color_map: Option<Arc<Texture>>,
    /// See [`StandardMaterialParams::normal_map`]
    #[serde(skip)]
    pub normal_map: Option<Arc<Texture>>,
    /// See [`StandardMaterialParams::normal_scale`]
    pub normal_scale: Option<Vec2>,
    /// See [`StandardMaterialParams::roughness_map`]
    #[serde(skip)]
    pub roughness_map: Option<Arc<Texture>>,
    /// See [`StandardMaterialParams::metalness_map`]
    #[serde(skip)]
    pub metalness_map: Option<Arc<Texture>>,
    /// See [`StandardMaterialParams::emissive`]
    pub emissive: Option<Color>,
    /// See [`StandardMaterialParams::emissive_intensity`]
    pub emissive_intensity: Option<f32>,
    /// See [`StandardMaterialParams::emissive_map`]
    #[serde(skip)]
    pub emissive_map: Option<Arc<Texture>>,
    /// See [`StandardMaterialParams::ao_map`]
    #[serde(skip)]
    pub ao_map: Option<Arc<Texture>>,
    /// See [`StandardMaterialParams::ao_intensity`]
    pub ao_intensity: Option<f32>,
    /// See [`StandardMaterialParams::env_map_intensity`]
    pub env_map_intensity: Option<f32>,
}

impl StandardMaterialDescriptor {
    /// Parse a descriptor from RON text.
    ///
    /// Unrecognized keys are ignored, not reported.
    pub fn from_ron(source: &str) -> Result<Self, DescriptorError> {
        Ok(ron_options().from_str(source)?)
    }

    /// Overwrite the fields of `params` this descriptor supplies, base
    /// tier first
    pub fn apply(&self, params: &mut StandardMaterialParams) {
        self.base.apply(&mut params.base);

        if let Some(color) = self.color {
            params.color = color;
        }
        if let Some(roughness) = self.roughness {
            params.roughness = roughness;
        }
        if let Some(metalness) = self.metalness {
            params.metalness = metalness;
        }
        if let Some(ref map) = self.color_map {
            params.color_map = Some(Arc::clone(map));
        }
        if let Some(ref map) = self.normal_map {
            params.normal_map = Some(Arc::clone(map));
        }
        if let Some(normal_scale) = self.normal_scale {
            params.normal_scale = normal_scale;
        }
        if let Some(ref map) = self.roughness_map {
            params.roughness_map = Some(Arc::clone(map));
        }
        if let Some(ref map) = self.metalness_map {
            params.metalness_map = Some(Arc::clone(map));
        }
        if let Some(emissive) = self.emissive {
            params.emissive = emissive;
        }
        if let Some(emissive_intensity) = self.emissive_intensity {
            params.emissive_intensity = emissive_intensity;
        }
        if let Some(ref map) = self.emissive_map {
            params.emissive_map = Some(Arc::clone(map));
        }
        if let Some(ref map) = self.ao_map {
            params.ao_map = Some(Arc::clone(map));
        }
        if let Some(ao_intensity) = self.ao_intensity {
            params.ao_intensity = ao_intensity;
        }
        if let Some(env_map_intensity) = self.env_map_intensity {
            params.env_map_intensity = env_map_intensity;
        }
    }
}

/// Optional overrides for the physical tier fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalMaterialDescriptor {
    /// Standard tier overrides (which carry the base tier overrides)
    pub standard: StandardMaterialDescriptor,
    /// See [`PhysicalMaterialParams::clearcoat`]
    pub clearcoat: Option<f32>,
    /// See [`PhysicalMaterialParams::clearcoat_map`]
    #[serde(skip)]
    pub clearcoat_map: Option<Arc<Texture>>,
    /// See [`PhysicalMaterialParams::clearcoat_roughness`]
    pub clearcoat_roughness: Option<f32>,
    /// See [`PhysicalMaterialParams::clearcoat_roughness_map`]
    #[serde(skip)]
    pub clearcoat_roughness_map: Option<Arc<Texture>>,
    /// See [`PhysicalMaterialParams::clearcoat_normal_scale`]
    pub clearcoat_normal_scale: Option<Vec2>,
    /// See [`PhysicalMaterialParams::clearcoat_normal_map`]
    #[serde(skip)]
    pub clearcoat_normal_map: Option<Arc<Texture>>,
    /// See [`PhysicalMaterialParams::ior`]
    pub ior: Option<f32>,
    /// Desired reflectivity, routed through the `ior` write accessor.
    /// When both `ior` and `reflectivity` are supplied, `reflectivity`
    /// wins.
    pub reflectivity: Option<f32>,
    /// See [`PhysicalMaterialParams::sheen_tint`]
    pub sheen_tint: Option<Color>,
    /// See [`PhysicalMaterialParams::transmission`]
    pub transmission: Option<f32>,
    /// See [`PhysicalMaterialParams::transmission_map`]
    #[serde(skip)]
    pub transmission_map: Option<Arc<Texture>>,
    /// See [`PhysicalMaterialParams::thickness`]
    pub thickness: Option<f32>,
    /// See [`PhysicalMaterialParams::thickness_map`]
    #[serde(skip)]
    pub thickness_map: Option<Arc<Texture>>,
    /// See [`PhysicalMaterialParams::attenuation_distance`]
    pub attenuation_distance: Option<f32>,
    /// See [`PhysicalMaterialParams::attenuation_tint`]
    pub attenuation_tint: Option<Color>,
    /// See [`PhysicalMaterialParams::specular_intensity`]
    pub specular_intensity: Option<f32>,
    /// See [`PhysicalMaterialParams::specular_intensity_map`]
    #[serde(skip)]
    pub specular_intensity_map: Option<Arc<Texture>>,
    /// See [`PhysicalMaterialParams::specular_tint`]
    pub specular_tint: Option<Color>,
    /// See [`PhysicalMaterialParams::specular_tint_map`]
    #[serde(skip)]
    pub specular_tint_map: Option<Arc<Texture>>,
}

impl PhysicalMaterialDescriptor {
    /// Parse a descriptor from RON text.
    ///
    /// Unrecognized keys are ignored, not reported.
    pub fn from_ron(source: &str) -> Result<Self, DescriptorError> {
        Ok(ron_options().from_str(source)?)
    }

    /// Overwrite the fields of `params` this descriptor supplies, standard
    /// tier first
    pub fn apply(&self, params: &mut PhysicalMaterialParams) {
        self.standard.apply(&mut params.standard);

        if let Some(clearcoat) = self.clearcoat {
            params.clearcoat = clearcoat;
        }
        if let Some(ref map) = self.clearcoat_map {
            params.clearcoat_map = Some(Arc::clone(map));
        }
        if let Some(clearcoat_roughness) = self.clearcoat_roughness {
            params.clearcoat_roughness = clearcoat_roughness;
        }
        if let Some(ref map) = self.clearcoat_roughness_map {
            params.clearcoat_roughness_map = Some(Arc::clone(map));
        }
        if let Some(clearcoat_normal_scale) = self.clearcoat_normal_scale {
            params.clearcoat_normal_scale = clearcoat_normal_scale;
        }
        if let Some(ref map) = self.clearcoat_normal_map {
            params.clearcoat_normal_map = Some(Arc::clone(map));
        }
        if let Some(ior) = self.ior {
            params.ior = ior;
        }
        if let Some(reflectivity) = self.reflectivity {
            params.set_reflectivity(reflectivity);
        }
        if let Some(sheen_tint) = self.sheen_tint {
            params.sheen_tint = sheen_tint;
        }
        if let Some(transmission) = self.transmission {
            params.transmission = transmission;
        }
        if let Some(ref map) = self.transmission_map {
            params.transmission_map = Some(Arc::clone(map));
        }
        if let Some(thickness) = self.thickness {
            params.thickness = thickness;
        }
        if let Some(ref map) = self.thickness_map {
            params.thickness_map = Some(Arc::clone(map));
        }
        if let Some(attenuation_distance) = self.attenuation_distance {
            params.attenuation_distance = attenuation_distance;
        }
        if let Some(attenuation_tint) = self.attenuation_tint {
            params.attenuation_tint = attenuation_tint;
        }
        if let Some(specular_intensity) = self.specular_intensity {
            params.specular_intensity = specular_intensity;
        }
        if let Some(ref map) = self.specular_intensity_map {
            params.specular_intensity_map = Some(Arc::clone(map));
        }
        if let Some(specular_tint) = self.specular_tint {
            params.specular_tint = specular_tint;
        }
        if let Some(ref map) = self.specular_tint_map {
            params.specular_tint_map = Some(Arc::clone(map));
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::super::physical::PhysicalMaterial;
    use super::super::standard::StandardMaterial;
    use super::super::texture::TextureKind;
    use super::*;

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let descriptor = PhysicalMaterialDescriptor {
            transmission: Some(0.8),
            ..Default::default()
        };

        let material = PhysicalMaterial::from_descriptor(&descriptor);
        assert_eq!(material.params.transmission, 0.8);

        // everything else stays at its documented default
        assert_eq!(material.params.ior, 1.5);
        assert_eq!(material.params.thickness, 0.01);
        assert_eq!(material.params.clearcoat, 0.0);
        assert_eq!(material.params.specular_intensity, 1.0);
        assert_eq!(material.params.attenuation_tint, Color::WHITE);
        assert_eq!(material.params.standard.roughness, 1.0);
        assert!(material.params.transmission_map.is_none());
    }

    #[test]
    fn test_reflectivity_key_routes_through_accessor() {
        let descriptor = PhysicalMaterialDescriptor {
            reflectivity: Some(0.5),
            ..Default::default()
        };

        let material = PhysicalMaterial::from_descriptor(&descriptor);
        assert_relative_eq!(material.params.ior, 1.5);
    }

    #[test]
    fn test_reflectivity_wins_over_ior() {
        let descriptor = PhysicalMaterialDescriptor {
            ior: Some(2.4),
            reflectivity: Some(0.5),
            ..Default::default()
        };

        let material = PhysicalMaterial::from_descriptor(&descriptor);
        assert_relative_eq!(material.params.ior, 1.5);
    }

    #[test]
    fn test_texture_fields_apply_by_reference() {
        let map = std::sync::Arc::new(Texture::new(TextureKind::Transmission));
        let descriptor = PhysicalMaterialDescriptor {
            transmission_map: Some(Arc::clone(&map)),
            ..Default::default()
        };

        let material = PhysicalMaterial::from_descriptor(&descriptor);
        let applied = material.params.transmission_map.as_ref().expect("map applied");
        assert!(Arc::ptr_eq(applied, &map));
    }

    #[test]
    fn test_from_ron() {
        let descriptor =
            PhysicalMaterialDescriptor::from_ron("(transmission: 0.8, thickness: 0.2)")
                .expect("valid descriptor");

        let material = PhysicalMaterial::from_descriptor(&descriptor);
        assert_eq!(material.params.transmission, 0.8);
        assert_eq!(material.params.thickness, 0.2);
        assert_eq!(material.params.ior, 1.5);
    }

    #[test]
    fn test_from_ron_ignores_unknown_keys() {
        let descriptor =
            PhysicalMaterialDescriptor::from_ron("(transmission: 0.8, iridescence: 0.5)")
                .expect("unknown keys are ignored");

        let material = PhysicalMaterial::from_descriptor(&descriptor);
        assert_eq!(material.params.transmission, 0.8);
    }

    #[test]
    fn test_from_ron_rejects_malformed_source() {
        let result = PhysicalMaterialDescriptor::from_ron("(transmission: )");
        assert!(matches!(result, Err(DescriptorError::Parse(_))));
    }

    #[test]
    fn test_nested_tiers_apply() {
        let descriptor = PhysicalMaterialDescriptor::from_ron(
            "(standard: (roughness: 0.2, base: (transparent: true)), clearcoat: 1.0)",
        )
        .expect("valid descriptor");

        let material = PhysicalMaterial::from_descriptor(&descriptor);
        assert_eq!(material.params.standard.roughness, 0.2);
        assert!(material.params.standard.base.transparent);
        assert_eq!(material.params.clearcoat, 1.0);
    }

    #[test]
    fn test_standard_descriptor() {
        let descriptor = StandardMaterialDescriptor::from_ron(
            "(metalness: 1.0, color: (r: 0.8, g: 0.8, b: 0.9))",
        )
        .expect("valid descriptor");

        let material = StandardMaterial::from_descriptor(&descriptor);
        assert_eq!(material.params.metalness, 1.0);
        assert_eq!(material.params.color, Color::new(0.8, 0.8, 0.9));
        assert_eq!(material.params.roughness, 1.0);
    }
}
