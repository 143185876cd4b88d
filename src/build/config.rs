/// Main configuration for skeleton reconstruction.
///
/// # Examples
///
/// ```
/// use skeleton_forge::BuildConfig;
///
/// // Built-in canonical bond lengths (C–C 1.4 Å, C–H 1.1 Å)
/// let default = BuildConfig::default();
/// assert!(default.params.is_none());
///
/// // Longer reference bond for a saturated skeleton
/// let custom = BuildConfig {
///     params: Some("[bonds]\ncc = 1.54\n".to_string()),
/// };
/// # let _ = custom;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Custom geometry parameters in TOML format.
    ///
    /// If `None`, uses the embedded `default.geometry.toml`.
    pub params: Option<String>,
}

impl BuildConfig {
    pub fn with_params(params: impl Into<String>) -> Self {
        Self {
            params: Some(params.into()),
        }
    }
}
