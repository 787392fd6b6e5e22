//! Style attributes and partial overrides.

use serde::{Deserialize, Serialize};

named_enum! {
    /// How large an element renders.
    pub enum Size: "size" {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

named_enum! {
    /// Corner treatment of an element.
    pub enum Shape: "shape" {
        Rounded => "rounded",
        Square => "square",
    }
}

named_enum! {
    /// Visual emphasis of an element.
    pub enum Variant: "variant" {
        Primary => "primary",
        Secondary => "secondary",
    }
}

/// One of the three independently cascading fields.
///
/// Used to query a single field of a style or overrides; see
/// [`StyleAttributes::value_name`] and [`StyleOverrides::overrides`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    /// The [`Size`] field.
    Size,
    /// The [`Shape`] field.
    Shape,
    /// The [`Variant`] field.
    Variant,
}

impl StyleField {
    /// Every field, in declaration order.
    pub const ALL: [StyleField; 3] = [StyleField::Size, StyleField::Shape, StyleField::Variant];

    /// The field's name, as it appears in config documents and errors.
    pub const fn name(self) -> &'static str {
        match self {
            StyleField::Size => Size::FIELD,
            StyleField::Shape => Shape::FIELD,
            StyleField::Variant => Variant::FIELD,
        }
    }
}

impl std::fmt::Display for StyleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved style: every field has a concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleAttributes {
    pub size: Size,
    pub shape: Shape,
    pub variant: Variant,
}

/// Fallback used when no ancestor scope has provided a style.
pub const DEFAULT_STYLE: StyleAttributes = StyleAttributes {
    size: Size::Medium,
    shape: Shape::Rounded,
    variant: Variant::Primary,
};

impl StyleAttributes {
    pub const fn new(size: Size, shape: Shape, variant: Variant) -> Self {
        Self {
            size,
            shape,
            variant,
        }
    }

    /// Returns the canonical name of one field's value.
    pub fn value_name(&self, field: StyleField) -> &'static str {
        match field {
            StyleField::Size => self.size.name(),
            StyleField::Shape => self.shape.name(),
            StyleField::Variant => self.variant.name(),
        }
    }
}

impl Default for StyleAttributes {
    fn default() -> Self {
        DEFAULT_STYLE
    }
}

/// Locally supplied values for a scope. `None` means "inherit".
///
/// # Example
///
/// ```rust
/// use stylecascade::{Shape, Size, StyleOverrides, DEFAULT_STYLE};
///
/// let overrides = StyleOverrides::new().shape(Shape::Square);
/// let style = overrides.apply_to(&DEFAULT_STYLE);
///
/// assert_eq!(style.shape, Shape::Square);
/// assert_eq!(style.size, Size::Medium);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
}

impl StyleOverrides {
    /// Creates empty overrides, inheriting every field.
    pub const fn new() -> Self {
        Self {
            size: None,
            shape: None,
            variant: None,
        }
    }

    pub const fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub const fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub const fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// True when no field is overridden.
    pub const fn is_empty(&self) -> bool {
        self.size.is_none() && self.shape.is_none() && self.variant.is_none()
    }

    /// True when `field` is set locally.
    pub const fn overrides(&self, field: StyleField) -> bool {
        match field {
            StyleField::Size => self.size.is_some(),
            StyleField::Shape => self.shape.is_some(),
            StyleField::Variant => self.variant.is_some(),
        }
    }

    /// Layers `self` over `fallback`, field by field.
    pub fn or(&self, fallback: &StyleOverrides) -> StyleOverrides {
        StyleOverrides {
            size: self.size.or(fallback.size),
            shape: self.shape.or(fallback.shape),
            variant: self.variant.or(fallback.variant),
        }
    }

    /// Resolves against an inherited style: each set field wins, the rest
    /// are taken from `inherited`.
    pub fn apply_to(&self, inherited: &StyleAttributes) -> StyleAttributes {
        StyleAttributes {
            size: self.size.unwrap_or(inherited.size),
            shape: self.shape.unwrap_or(inherited.shape),
            variant: self.variant.unwrap_or(inherited.variant),
        }
    }
}

impl From<StyleAttributes> for StyleOverrides {
    fn from(style: StyleAttributes) -> Self {
        Self {
            size: Some(style.size),
            shape: Some(style.shape),
            variant: Some(style.variant),
        }
    }
}
