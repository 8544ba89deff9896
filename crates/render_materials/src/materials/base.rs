//! Base material tier
//!
//! Fields shared by every material regardless of shading model. Lifecycle
//! machinery (version counters, disposal, change events) belongs to the
//! owning renderable, not to the parameter set.

/// Parameters common to all material tiers.
#[derive(Debug, Clone)]
pub struct BaseMaterialParams {
    /// Optional debug name
    pub name: Option<String>,
    /// Overall opacity in `[0, 1]`; takes effect when `transparent` is set
    pub opacity: f32,
    /// Render with alpha blending
    pub transparent: bool,
    /// Fragments with alpha below this threshold are discarded
    pub alpha_test: f32,
    /// Render both faces of each triangle
    pub double_sided: bool,
    /// Whether the material is rendered at all
    pub visible: bool,
}

impl Default for BaseMaterialParams {
    fn default() -> Self {
        Self {
            name: None,
            opacity: 1.0,
            transparent: false,
            alpha_test: 0.0,
            double_sided: false,
            visible: true,
        }
    }
}

impl BaseMaterialParams {
    /// Overwrite every field from `source`.
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.name = source.name.clone();
        self.opacity = source.opacity;
        self.transparent = source.transparent;
        self.alpha_test = source.alpha_test;
        self.double_sided = source.double_sided;
        self.visible = source.visible;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = BaseMaterialParams::default();
        assert_eq!(params.name, None);
        assert_eq!(params.opacity, 1.0);
        assert!(!params.transparent);
        assert_eq!(params.alpha_test, 0.0);
        assert!(!params.double_sided);
        assert!(params.visible);
    }

    #[test]
    fn test_copy_from_overwrites_all_fields() {
        let mut target = BaseMaterialParams::default();
        let source = BaseMaterialParams {
            name: Some("window glass".to_string()),
            opacity: 0.4,
            transparent: true,
            alpha_test: 0.1,
            double_sided: true,
            visible: false,
        };

        target.copy_from(&source);
        assert_eq!(target.name.as_deref(), Some("window glass"));
        assert_eq!(target.opacity, 0.4);
        assert!(target.transparent);
        assert_eq!(target.alpha_test, 0.1);
        assert!(target.double_sided);
        assert!(!target.visible);
    }
}
