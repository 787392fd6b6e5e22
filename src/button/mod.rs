//! Class names for the button widget.
//!
//! A button's classes are the base class followed by one class for its
//! variant and one for its size:
//!
//! | Variant       | Class                     |
//! |---------------|---------------------------|
//! | `default`     | `ui-button--default`      |
//! | `destructive` | `ui-button--destructive`  |
//! | `outline`     | `ui-button--outline`      |
//! | `secondary`   | `ui-button--secondary`    |
//! | `ghost`       | `ui-button--ghost`        |
//! | `link`        | `ui-button--link`         |
//!
//! Sizes map to `ui-button--size-<name>` for `default`, `sm`, `lg`, `icon`,
//! `icon-sm` and `icon-lg`. Missing values fall back to `default`.
//!
//! This table is independent of the style cascade: it is consumed by
//! rendering code and shares no state with [`crate::cascade`].

use serde::{Deserialize, Serialize};

/// Class applied to every button.
pub const BUTTON_BASE_CLASS: &str = "ui-button";

named_enum! {
    /// Visual treatment of a button.
    #[derive(Default)]
    pub enum ButtonVariant: "variant" {
        #[default]
        Default => "default",
        Destructive => "destructive",
        Outline => "outline",
        Secondary => "secondary",
        Ghost => "ghost",
        Link => "link",
    }
}

named_enum! {
    /// Dimensions of a button.
    #[derive(Default)]
    pub enum ButtonSize: "size" {
        #[default]
        Default => "default",
        Sm => "sm",
        Lg => "lg",
        Icon => "icon",
        IconSm => "icon-sm",
        IconLg => "icon-lg",
    }
}

impl ButtonVariant {
    pub const fn class_name(self) -> &'static str {
        match self {
            ButtonVariant::Default => "ui-button--default",
            ButtonVariant::Destructive => "ui-button--destructive",
            ButtonVariant::Outline => "ui-button--outline",
            ButtonVariant::Secondary => "ui-button--secondary",
            ButtonVariant::Ghost => "ui-button--ghost",
            ButtonVariant::Link => "ui-button--link",
        }
    }
}

impl ButtonSize {
    pub const fn class_name(self) -> &'static str {
        match self {
            ButtonSize::Default => "ui-button--size-default",
            ButtonSize::Sm => "ui-button--size-sm",
            ButtonSize::Lg => "ui-button--size-lg",
            ButtonSize::Icon => "ui-button--size-icon",
            ButtonSize::IconSm => "ui-button--size-icon-sm",
            ButtonSize::IconLg => "ui-button--size-icon-lg",
        }
    }
}

/// Properties selecting a button's classes.
///
/// # Example
///
/// ```rust
/// use stylecascade::{button_classes, ButtonSize, ButtonVariants};
///
/// let props = ButtonVariants::new().size(ButtonSize::IconSm).class("toolbar-item");
/// assert_eq!(
///     button_classes(&props),
///     "ui-button ui-button--default ui-button--size-icon-sm toolbar-item"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonVariants {
    pub variant: Option<ButtonVariant>,
    pub size: Option<ButtonSize>,
    /// Extra classes appended after the table's classes.
    pub class: Option<String>,
}

impl ButtonVariants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Builds props from names such as `("ghost", "icon-lg")`.
    pub fn from_names(variant: Option<&str>, size: Option<&str>) -> crate::Result<Self> {
        Ok(Self {
            variant: variant.map(str::parse).transpose()?,
            size: size.map(str::parse).transpose()?,
            class: None,
        })
    }

    /// Classes for this button, space separated.
    pub fn class_names(&self) -> String {
        let mut classes = vec![
            BUTTON_BASE_CLASS,
            self.variant.unwrap_or_default().class_name(),
            self.size.unwrap_or_default().class_name(),
        ];
        if let Some(extra) = self.class.as_deref().map(str::trim) {
            if !extra.is_empty() {
                classes.push(extra);
            }
        }
        classes.join(" ")
    }
}

/// Looks up the classes for a button.
pub fn button_classes(props: &ButtonVariants) -> String {
    props.class_names()
}
