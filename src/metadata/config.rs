//! Configuration for model loading and type resolution
//!
//! IL2CPP metadata produced by real-world toolchains is not always self-consistent. The
//! defaults are permissive and only reject what makes resolution impossible.

/// Configuration for loading a [`crate::metadata::model::Model`]
///
/// # Examples
///
/// ```rust
/// use il2scope::metadata::config::ReflectionConfig;
///
/// let config = ReflectionConfig::strict();
/// assert!(config.strict_default_values);
/// assert_eq!(ReflectionConfig::default().max_resolution_depth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectionConfig {
    /// Treat a parameter flagged `HasDefault` without a default value record as corrupt metadata.
    /// Off by default: binaries in the wild contain such parameters.
    pub strict_default_values: bool,

    /// Maximum nesting depth of type usages (arrays of generic instances of pointers, ...)
    /// followed during resolution (default: 64)
    pub max_resolution_depth: usize,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            strict_default_values: false,
            max_resolution_depth: 64,
        }
    }
}

impl ReflectionConfig {
    /// Creates the permissive configuration, identical to [`ReflectionConfig::default`]
    ///
    /// Missing default values are represented as absent values.
    #[must_use]
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects inconsistent default value records
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_default_values: true,
            max_resolution_depth: 64,
        }
    }
}
