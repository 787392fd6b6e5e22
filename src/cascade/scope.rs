//! Explicit, passed-down style scopes.

use super::resolve::resolve;
use crate::style::{StyleAttributes, StyleOverrides};

/// A point in the component tree where a style has been resolved.
///
/// A scope only ever reads from the scope it was derived from, so siblings
/// never see each other's overrides and a child can never change its
/// parent. Thread scopes through a tree walk by handing each child the
/// scope returned from [`StyleScope::child`].
///
/// # Example
///
/// ```rust
/// use stylecascade::{Shape, Size, StyleOverrides, StyleScope, Variant, DEFAULT_STYLE};
///
/// let root = StyleScope::root(DEFAULT_STYLE);
/// let card = root.child(&StyleOverrides::new().size(Size::Large));
/// let badge = card.child(&StyleOverrides::new().variant(Variant::Secondary));
///
/// assert_eq!(badge.style().size, Size::Large);
/// assert_eq!(badge.style().shape, Shape::Rounded);
/// assert_eq!(badge.depth(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleScope {
    inherited: StyleAttributes,
    overrides: StyleOverrides,
    resolved: StyleAttributes,
    depth: usize,
}

impl StyleScope {
    /// Creates the outermost scope, publishing `base` unchanged.
    pub fn root(base: StyleAttributes) -> Self {
        Self {
            inherited: base,
            overrides: StyleOverrides::new(),
            resolved: base,
            depth: 0,
        }
    }

    /// Creates the outermost scope with local overrides applied over `base`.
    pub fn root_with(base: StyleAttributes, overrides: &StyleOverrides) -> Self {
        Self {
            inherited: base,
            overrides: *overrides,
            resolved: resolve(&base, overrides),
            depth: 0,
        }
    }

    /// Derives a nested scope that inherits this scope's resolved style.
    pub fn child(&self, overrides: &StyleOverrides) -> StyleScope {
        StyleScope {
            inherited: self.resolved,
            overrides: *overrides,
            resolved: resolve(&self.resolved, overrides),
            depth: self.depth + 1,
        }
    }

    /// The resolved style, also the inheritance source for children.
    pub fn style(&self) -> StyleAttributes {
        self.resolved
    }

    /// The style this scope received from its ancestor (or the base).
    pub fn inherited(&self) -> StyleAttributes {
        self.inherited
    }

    pub fn overrides(&self) -> StyleOverrides {
        self.overrides
    }

    /// Number of ancestors between this scope and the root.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for StyleScope {
    fn default() -> Self {
        Self::root(StyleAttributes::default())
    }
}
