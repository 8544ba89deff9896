//! Physical material tier
//!
//! Extends the standard tier with clear coat, transmission, thickness,
//! attenuation and specular layers, plus the index-of-refraction /
//! reflectivity accessor pair.

use std::sync::Arc;

use crate::foundation::math::{Color, Vec2};

use super::defines::{Defines, MaterialKind};
use super::descriptor::PhysicalMaterialDescriptor;
use super::standard::StandardMaterialParams;
use super::texture::Texture;

/// Parameters added by the physical tier.
///
/// `ior` is the canonical stored value; reflectivity is always derived from
/// it on read and back-solved into it on write. The two are never stored
/// side by side.
#[derive(Debug, Clone)]
pub struct PhysicalMaterialParams {
    /// Standard tier fields
    pub standard: StandardMaterialParams,
    /// Clear coat layer amount in `[0, 1]`
    pub clearcoat: f32,
    /// Clear coat amount texture
    pub clearcoat_map: Option<Arc<Texture>>,
    /// Clear coat layer roughness in `[0, 1]`
    pub clearcoat_roughness: f32,
    /// Clear coat roughness texture
    pub clearcoat_roughness_map: Option<Arc<Texture>>,
    /// Clear coat normal map strength per axis
    pub clearcoat_normal_scale: Vec2,
    /// Clear coat normal map
    pub clearcoat_normal_map: Option<Arc<Texture>>,
    /// Index of refraction of the medium
    pub ior: f32,
    /// Sheen layer tint
    pub sheen_tint: Color,
    /// Transmission amount in `[0, 1]`; 1 is fully transmissive
    pub transmission: f32,
    /// Transmission amount texture
    pub transmission_map: Option<Arc<Texture>>,
    /// Volume thickness used for refraction, in object space
    pub thickness: f32,
    /// Thickness texture
    pub thickness_map: Option<Arc<Texture>>,
    /// Distance light travels in the medium before attenuation
    pub attenuation_distance: f32,
    /// Color the medium attenuates towards
    pub attenuation_tint: Color,
    /// Specular reflection intensity in `[0, 1]`
    pub specular_intensity: f32,
    /// Specular intensity texture
    pub specular_intensity_map: Option<Arc<Texture>>,
    /// Specular reflection tint
    pub specular_tint: Color,
    /// Specular tint texture
    pub specular_tint_map: Option<Arc<Texture>>,
}

impl Default for PhysicalMaterialParams {
    fn default() -> Self {
        Self {
            standard: StandardMaterialParams::default(),
            clearcoat: 0.0,
            clearcoat_map: None,
            clearcoat_roughness: 0.0,
            clearcoat_roughness_map: None,
            clearcoat_normal_scale: Vec2::new(1.0, 1.0),
            clearcoat_normal_map: None,
            ior: 1.5,
            sheen_tint: Color::BLACK,
            transmission: 0.0,
            transmission_map: None,
            thickness: 0.01,
            thickness_map: None,
            attenuation_distance: 0.0,
            attenuation_tint: Color::WHITE,
            specular_intensity: 1.0,
            specular_intensity_map: None,
            specular_tint: Color::WHITE,
            specular_tint_map: None,
        }
    }
}

impl PhysicalMaterialParams {
    /// Reflectance at normal incidence derived from `ior`.
    ///
    /// The result is clamped into `[0, 1]`; the stored `ior` itself is
    /// never adjusted by a read.
    pub fn reflectivity(&self) -> f32 {
        (2.5 * (self.ior - 1.0) / (self.ior + 1.0)).clamp(0.0, 1.0)
    }

    /// Back-solve `ior` from a desired reflectivity and store it.
    ///
    /// Inverts the unclamped read formula, so `set_reflectivity(r)`
    /// followed by `reflectivity()` returns `r` for `r` in `[0, 1]`.
    /// Values at or above 2.5 drive the denominator through zero and store
    /// a non-finite or negative `ior`; no guard is applied.
    pub fn set_reflectivity(&mut self, reflectivity: f32) {
        self.ior = (1.0 + 0.4 * reflectivity) / (1.0 - 0.4 * reflectivity);
    }

    /// Overwrite every field from `source`, standard tier first.
    ///
    /// Texture fields end up aliasing the same resources as `source`;
    /// colors and scale vectors are copied by value. Only the canonical
    /// `ior` crosses over; reflectivity follows from it.
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.standard.copy_from(&source.standard);

        self.clearcoat = source.clearcoat;
        self.clearcoat_map = source.clearcoat_map.clone();
        self.clearcoat_roughness = source.clearcoat_roughness;
        self.clearcoat_roughness_map = source.clearcoat_roughness_map.clone();
        self.clearcoat_normal_scale = source.clearcoat_normal_scale;
        self.clearcoat_normal_map = source.clearcoat_normal_map.clone();
        self.ior = source.ior;
        self.sheen_tint = source.sheen_tint;
        self.transmission = source.transmission;
        self.transmission_map = source.transmission_map.clone();
        self.thickness = source.thickness;
        self.thickness_map = source.thickness_map.clone();
        self.attenuation_distance = source.attenuation_distance;
        self.attenuation_tint = source.attenuation_tint;
        self.specular_intensity = source.specular_intensity;
        self.specular_intensity_map = source.specular_intensity_map.clone();
        self.specular_tint = source.specular_tint;
        self.specular_tint_map = source.specular_tint_map.clone();
        self
    }
}

/// Physical material.
///
/// Couples the physical tier parameters with the shader defines for the
/// physical tier.
#[derive(Debug, Clone)]
pub struct PhysicalMaterial {
    /// Shader capability flags; regenerated on construction and copy
    pub defines: Defines,
    /// Parameter set
    pub params: PhysicalMaterialParams,
}

impl PhysicalMaterial {
    /// Create a material with every parameter at its default
    pub fn new() -> Self {
        Self {
            defines: Defines::for_kind(MaterialKind::Physical),
            params: PhysicalMaterialParams::default(),
        }
    }

    /// Create a material from a descriptor.
    ///
    /// Starts from the defaults and overwrites only the fields the
    /// descriptor supplies. The defines map is populated regardless of the
    /// descriptor's contents.
    pub fn from_descriptor(descriptor: &PhysicalMaterialDescriptor) -> Self {
        let mut material = Self::new();
        descriptor.apply(&mut material.params);
        material
    }

    /// Tier tag
    pub const fn kind(&self) -> MaterialKind {
        MaterialKind::Physical
    }

    /// Reflectance at normal incidence, see
    /// [`PhysicalMaterialParams::reflectivity`]
    pub fn reflectivity(&self) -> f32 {
        self.params.reflectivity()
    }

    /// Store a reflectivity by back-solving `ior`, see
    /// [`PhysicalMaterialParams::set_reflectivity`]
    pub fn set_reflectivity(&mut self, reflectivity: f32) {
        self.params.set_reflectivity(reflectivity);
    }

    /// Mirror `source`'s parameters into this material and return the
    /// receiver for chaining.
    ///
    /// Delegates to the standard tier copy first, then applies the
    /// physical tier fields. The defines map is rebuilt from this
    /// material's own tier, never taken from `source`.
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.params.copy_from(&source.params);
        self.defines = Defines::for_kind(self.kind());
        self
    }
}

impl Default for PhysicalMaterial {
    fn default() -> Self {
        Self::new()
    }
}
