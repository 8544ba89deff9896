//! # Render Materials
//!
//! A layered material parameter model for physically based rendering.
//!
//! Materials are organized as tiers of parameters: every material carries
//! the base surface fields, the standard tier adds the metallic-roughness
//! PBR workflow, and the physical tier extends that with clear coat,
//! transmission, thickness and specular controls. Each tier embeds its
//! parent by value, so a physical parameter set is structurally a superset
//! of a standard one and any consumer expecting the parent shape keeps
//! working.
//!
//! The model is renderer-agnostic: it owns no GPU resources and performs
//! no shading math. A renderer reads the parameter fields plus the
//! material's shader defines to select and feed a shader variant.
//!
//! ## Quick Start
//!
//! ```rust
//! use render_materials::prelude::*;
//!
//! let mut glass = PhysicalMaterial::new();
//! glass.params.transmission = 1.0;
//! glass.params.ior = 1.45;
//!
//! assert!(glass.defines.contains("PHYSICAL"));
//! assert!(glass.reflectivity() < 0.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod materials;

/// Common imports for library users
pub mod prelude {
    pub use crate::foundation::math::{Color, Vec2, Vec3};
    pub use crate::materials::{
        BaseMaterialParams, Defines, Material, MaterialKind, PhysicalMaterial,
        PhysicalMaterialDescriptor, PhysicalMaterialParams, StandardMaterial,
        StandardMaterialDescriptor, StandardMaterialParams, Texture, TextureKind,
        TextureManager,
    };
}
