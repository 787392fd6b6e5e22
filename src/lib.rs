//! # Stylecascade - cascading style defaults for component trees
//!
//! Components in a tree often share visual defaults: a list sets a size
//! and every item inside it follows, unless an item says otherwise.
//! This crate resolves those defaults one scope at a time.
//!
//! ## Concepts
//!
//! - [`StyleAttributes`]: a fully resolved style (size, shape, variant)
//! - [`StyleOverrides`]: a partial style; `None` fields are inherited
//! - [`resolve`]: the per-field merge of inherited style and overrides
//! - [`StyleScope`]: explicit scopes passed down a tree walk
//! - [`StyleCascade`]: an enter/exit stack for depth-first traversals
//! - [`StyleTree`]: mounted scopes that re-derive when overrides change
//! - [`button_classes`]: the class-name table for buttons
//!
//! ## Quick Start
//!
//! ```rust
//! use stylecascade::{CascadeConfig, Shape, Size, StyleOverrides, StyleScope, Variant};
//!
//! let config = CascadeConfig::default();
//! let toolbar = StyleScope::root(config.base).child(&StyleOverrides::new().size(Size::Small));
//! let action = toolbar.child(&StyleOverrides::new().variant(Variant::Secondary));
//!
//! assert_eq!(action.style().size, Size::Small);
//! assert_eq!(action.style().shape, Shape::Rounded);
//! assert_eq!(action.style().variant, Variant::Secondary);
//! ```
//!
//! ## Resolution Rules
//!
//! 1. A scope inherits the resolved style of its nearest ancestor, or the
//!    root base ([`DEFAULT_STYLE`] unless configured) when it has none.
//! 2. Each field it overrides replaces the inherited value for that field
//!    only.
//! 3. The result is published to its descendants and never depends on
//!    siblings or descendants.

#[macro_use]
mod macros;

pub mod button;
pub mod cascade;
mod config;
pub mod style;

pub use button::{button_classes, ButtonSize, ButtonVariant, ButtonVariants, BUTTON_BASE_CLASS};
pub use cascade::{resolve, resolve_chain, ScopeId, StyleCascade, StyleScope, StyleTree};
pub use config::CascadeConfig;
pub use style::{
    Result, Shape, Size, StyleAttributes, StyleError, StyleField, StyleOverrides, Variant,
    DEFAULT_STYLE,
};
