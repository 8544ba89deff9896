//! Shader defines and tier identity
//!
//! The defines map tells the shader-compilation step which optional shading
//! code paths to compile in. Only key presence matters; values are opaque
//! markers. The canonical set for a material is a pure function of its tier
//! tag — it does not depend on any field value.

use std::collections::BTreeMap;

/// Identifies which tier a concrete material belongs to.
///
/// The renderer dispatches on this tag rather than probing the shape of the
/// parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Metallic-roughness PBR material
    Standard,
    /// Standard tier extended with clear coat, transmission and specular
    Physical,
}

impl MaterialKind {
    /// Human-readable tier name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Physical => "Physical",
        }
    }

    /// Shader variant identifier used for pipeline selection
    pub const fn shader_variant(self) -> &'static str {
        match self {
            Self::Standard => "standard_pbr",
            Self::Physical => "physical_pbr",
        }
    }
}

/// Map of shader capability flags contributed by a material.
///
/// Iteration order is stable (sorted by flag name) so the renderer can
/// derive deterministic pipeline cache keys from it. A renderer may insert
/// extra flags on an instance, but the canonical set is always rebuilt from
/// the tier tag when a material is constructed or copied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Defines {
    flags: BTreeMap<String, String>,
}

impl Defines {
    /// The canonical defines for a tier.
    ///
    /// Tiers compose by extension, so every kind includes the flags of the
    /// tiers it builds on: `Standard` yields `STANDARD` and `Physical`
    /// yields `STANDARD` plus `PHYSICAL`.
    pub fn for_kind(kind: MaterialKind) -> Self {
        let mut defines = Self::default();
        defines.insert("STANDARD", "");
        if kind == MaterialKind::Physical {
            defines.insert("PHYSICAL", "");
        }
        defines
    }

    /// Add or replace a flag.
    ///
    /// The marker value is opaque; the shader compiler only checks key
    /// presence.
    pub fn insert(&mut self, flag: impl Into<String>, marker: impl Into<String>) {
        self.flags.insert(flag.into(), marker.into());
    }

    /// Whether a flag is present
    pub fn contains(&self, flag: &str) -> bool {
        self.flags.contains_key(flag)
    }

    /// Number of flags
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flags are present
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate flags and markers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_defines() {
        let defines = Defines::for_kind(MaterialKind::Standard);
        assert_eq!(defines.len(), 1);
        assert!(defines.contains("STANDARD"));
    }

    #[test]
    fn test_physical_defines_extend_standard() {
        let defines = Defines::for_kind(MaterialKind::Physical);
        assert_eq!(defines.len(), 2);
        assert!(defines.contains("STANDARD"));
        assert!(defines.contains("PHYSICAL"));
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let defines = Defines::for_kind(MaterialKind::Physical);
        let keys: Vec<&str> = defines.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["PHYSICAL", "STANDARD"]);
    }

    #[test]
    fn test_insert_custom_flag() {
        let mut defines = Defines::for_kind(MaterialKind::Standard);
        defines.insert("USE_FOG", "");
        assert!(defines.contains("USE_FOG"));
        assert_eq!(defines.len(), 2);
    }

    #[test]
    fn test_shader_variant_names() {
        assert_eq!(MaterialKind::Standard.shader_variant(), "standard_pbr");
        assert_eq!(MaterialKind::Physical.shader_variant(), "physical_pbr");
        assert_eq!(MaterialKind::Physical.name(), "Physical");
    }
}
