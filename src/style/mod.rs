//! Style data model.
//!
//! This module provides the values that cascade through a component tree:
//!
//! - [`Size`], [`Shape`], [`Variant`]: the closed enumerations for each field
//! - [`StyleAttributes`]: a fully resolved style
//! - [`StyleOverrides`]: a partial style where absent fields are inherited
//! - [`DEFAULT_STYLE`]: the fallback used when nothing has been inherited
//! - [`StyleError`]: errors from parsing and scope lookups

mod attributes;
mod error;

pub use attributes::{
    Shape, Size, StyleAttributes, StyleField, StyleOverrides, Variant, DEFAULT_STYLE,
};
pub use error::{Result, StyleError};
