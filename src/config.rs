//! Loading cascade configuration from YAML or JSON.
//!
//! A configuration document is a map of optional overrides:
//!
//! ```yaml
//! size: large
//! shape: square
//! ```
//!
//! Every value is checked by name before it reaches the cascade. Unknown
//! names fail with [`StyleError::InvalidStyleValue`], unknown keys and
//! malformed documents with [`StyleError::Parse`].

use serde::Deserialize;
use tracing::debug;

use crate::style::{
    Result, Shape, Size, StyleAttributes, StyleError, StyleOverrides, Variant, DEFAULT_STYLE,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawOverrides {
    size: Option<String>,
    shape: Option<String>,
    variant: Option<String>,
}

impl RawOverrides {
    fn validate(self) -> Result<StyleOverrides> {
        Ok(StyleOverrides {
            size: self.size.as_deref().map(str::parse::<Size>).transpose()?,
            shape: self.shape.as_deref().map(str::parse::<Shape>).transpose()?,
            variant: self.variant.as_deref().map(str::parse::<Variant>).transpose()?,
        })
    }
}

fn parse_yaml(source: &str) -> Result<RawOverrides> {
    // Empty, comment-only and null (`~`) documents all mean "no overrides".
    if source.trim().is_empty() {
        return Ok(RawOverrides::default());
    }
    serde_yaml::from_str::<Option<RawOverrides>>(source)
        .map(Option::unwrap_or_default)
        .map_err(|err| StyleError::Parse(err.to_string()))
}

fn parse_json(source: &str) -> Result<RawOverrides> {
    serde_json::from_str(source).map_err(|err| StyleError::Parse(err.to_string()))
}

impl StyleOverrides {
    /// Parses overrides from a YAML map.
    pub fn from_yaml(source: &str) -> Result<Self> {
        parse_yaml(source)?.validate()
    }

    /// Parses overrides from a JSON object.
    pub fn from_json(source: &str) -> Result<Self> {
        parse_json(source)?.validate()
    }
}

/// The configuration handed to the root of a cascade.
///
/// # Example
///
/// ```rust
/// use stylecascade::{CascadeConfig, Shape, Size, StyleTree};
///
/// let config = CascadeConfig::from_yaml("size: large\n").unwrap();
/// let tree = StyleTree::new(config.base);
///
/// assert_eq!(tree.base().size, Size::Large);
/// assert_eq!(tree.base().shape, Shape::Rounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeConfig {
    /// Style inherited by scopes that have no ancestor.
    pub base: StyleAttributes,
}

impl CascadeConfig {
    pub fn new(base: StyleAttributes) -> Self {
        Self { base }
    }

    /// Layers overrides over [`DEFAULT_STYLE`].
    pub fn from_overrides(overrides: &StyleOverrides) -> Self {
        Self::new(overrides.apply_to(&DEFAULT_STYLE))
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        let overrides = StyleOverrides::from_yaml(source)?;
        let config = Self::from_overrides(&overrides);
        debug!(base = ?config.base, "loaded cascade config from yaml");
        Ok(config)
    }

    pub fn from_json(source: &str) -> Result<Self> {
        let overrides = StyleOverrides::from_json(source)?;
        let config = Self::from_overrides(&overrides);
        debug!(base = ?config.base, "loaded cascade config from json");
        Ok(config)
    }
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STYLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_default_style() {
        assert_eq!(CascadeConfig::default().base, DEFAULT_STYLE);
    }

    #[test]
    fn test_yaml_partial_config() {
        let config = CascadeConfig::from_yaml("shape: square\nvariant: secondary\n").unwrap();
        assert_eq!(
            config.base,
            StyleAttributes::new(Size::Medium, Shape::Square, Variant::Secondary)
        );
    }

    #[test]
    fn test_yaml_empty_document() {
        assert_eq!(CascadeConfig::from_yaml("").unwrap(), CascadeConfig::default());
        assert!(StyleOverrides::from_yaml("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_yaml_null_and_comment_only_documents() {
        for source in ["~", "null\n", "# defaults only\n", "---\n~\n"] {
            let overrides = StyleOverrides::from_yaml(source).unwrap();
            assert!(overrides.is_empty(), "{source:?} should have no overrides");
            assert_eq!(CascadeConfig::from_yaml(source).unwrap(), CascadeConfig::default());
        }
    }

    #[test]
    fn test_json_full_config() {
        let config =
            CascadeConfig::from_json(r#"{"size":"small","shape":"square","variant":"secondary"}"#)
                .unwrap();
        assert_eq!(
            config.base,
            StyleAttributes::new(Size::Small, Shape::Square, Variant::Secondary)
        );
    }

    #[test]
    fn test_invalid_value_names_field() {
        let err = StyleOverrides::from_yaml("size: huge").unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidStyleValue {
                field: "size",
                value: "huge".to_string(),
            }
        );

        let err = StyleOverrides::from_json(r#"{"shape":"circle"}"#).unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidStyleValue {
                field: "shape",
                value: "circle".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = StyleOverrides::from_yaml("colour: red").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = CascadeConfig::from_json("{size:").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }
}
