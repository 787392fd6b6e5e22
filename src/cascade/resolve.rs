//! The per-field merge at the heart of the cascade.
//!
//! Every scope computes its style the same way: each field it overrides
//! wins, every other field is taken from the nearest ancestor's resolved
//! style (or the root base when there is no ancestor). The merge is total
//! and pure, so the same inputs always produce the same style.

use crate::style::{StyleAttributes, StyleOverrides};

/// Resolves a scope's style from the style it inherits and its overrides.
///
/// # Example
///
/// ```rust
/// use stylecascade::{resolve, Shape, Size, StyleAttributes, StyleOverrides, Variant};
///
/// let parent = StyleAttributes::new(Size::Large, Shape::Square, Variant::Secondary);
/// let child = resolve(&parent, &StyleOverrides::new().shape(Shape::Rounded));
///
/// assert_eq!(child, StyleAttributes::new(Size::Large, Shape::Rounded, Variant::Secondary));
/// ```
pub fn resolve(inherited: &StyleAttributes, overrides: &StyleOverrides) -> StyleAttributes {
    overrides.apply_to(inherited)
}

/// Resolves a chain of overrides from outermost to innermost.
///
/// Equivalent to resolving one scope per entry, each inheriting from the
/// previous one, and returning the innermost result.
pub fn resolve_chain<'a, I>(base: &StyleAttributes, chain: I) -> StyleAttributes
where
    I: IntoIterator<Item = &'a StyleOverrides>,
{
    chain
        .into_iter()
        .fold(*base, |inherited, overrides| resolve(&inherited, overrides))
}
