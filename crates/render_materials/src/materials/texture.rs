//! Texture references for material fields
//!
//! Materials never own texture contents. A texture field is either `None`
//! or an `Arc` aliasing a resource whose pixel data and GPU lifetime are
//! managed by the renderer's resource system. Copying a material re-points
//! the `Arc`; it never duplicates the underlying image.

use std::collections::HashMap;
use std::sync::Arc;

/// Handle for a texture registered with a [`TextureManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Roles a texture can play in a material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    /// Base color / albedo
    BaseColor,
    /// Tangent-space normal map
    Normal,
    /// Roughness (green channel)
    Roughness,
    /// Metalness (blue channel)
    Metalness,
    /// Ambient occlusion (red channel)
    AmbientOcclusion,
    /// Emissive color
    Emission,
    /// Clear coat amount
    Clearcoat,
    /// Clear coat roughness
    ClearcoatRoughness,
    /// Clear coat normal map
    ClearcoatNormal,
    /// Transmission amount
    Transmission,
    /// Volume thickness
    Thickness,
    /// Specular intensity
    SpecularIntensity,
    /// Specular tint
    SpecularTint,
}

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Nearest neighbor filtering
    Nearest,
    /// Linear filtering
    Linear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Repeat the texture
    Repeat,
    /// Mirror the texture
    MirroredRepeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Sampling parameters attached to a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    /// Texture filtering mode
    pub filter_mode: FilterMode,
    /// Texture wrapping mode
    pub wrap_mode: WrapMode,
    /// Generate mipmaps
    pub generate_mipmaps: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::Linear,
            wrap_mode: WrapMode::Repeat,
            generate_mipmaps: true,
        }
    }
}

/// Descriptor of an externally owned 2D image resource.
///
/// From the material model's point of view a texture is opaque: materials
/// read nothing from it and only carry the reference through to the
/// renderer. Identity is reference identity — two fields alias the same
/// texture exactly when their `Arc`s point at the same `Texture`.
#[derive(Debug)]
pub struct Texture {
    kind: TextureKind,
    params: TextureParams,
    name: Option<String>,
}

impl Texture {
    /// Create a texture descriptor with default sampling parameters
    pub fn new(kind: TextureKind) -> Self {
        Self {
            kind,
            params: TextureParams::default(),
            name: None,
        }
    }

    /// Set explicit sampling parameters
    pub fn with_params(mut self, params: TextureParams) -> Self {
        self.params = params;
        self
    }

    /// Set a debug name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The role this texture plays in a material
    pub const fn kind(&self) -> TextureKind {
        self.kind
    }

    /// Sampling parameters
    pub const fn params(&self) -> &TextureParams {
        &self.params
    }

    /// Debug name, if set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Registry standing in for the external texture resource system.
///
/// Hands out shared references that material fields alias. The manager
/// retains every texture it creates; releasing GPU memory is the resource
/// system's concern, not the material model's.
pub struct TextureManager {
    textures: HashMap<TextureHandle, Arc<Texture>>,
    next_handle: u32,
}

impl TextureManager {
    /// Create an empty texture manager
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            next_handle: 1, // reserve 0 for "no texture"
        }
    }

    /// Register a texture and return a shared reference to it
    pub fn create(&mut self, texture: Texture) -> Arc<Texture> {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;

        let texture = Arc::new(texture);
        self.textures.insert(handle, Arc::clone(&texture));

        log::debug!("Registered texture {:?} of kind {:?}", handle, texture.kind());
        texture
    }

    /// Look up a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Arc<Texture>> {
        self.textures.get(&handle)
    }

    /// Number of registered textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

impl Default for TextureManager {
    fn default() -> Self {
        Self::new()
    }
}
