//! Ambient nearest-ancestor style for top-down traversals.
//!
//! [`StyleCascade`] keeps one resolved style per open scope. Entering a
//! scope resolves its overrides against the innermost open scope (or the
//! base when none is open) and pushes the result; exiting pops it. Callers
//! that walk a tree depth-first enter a node before its children and exit
//! it after them, which is all the ordering the cascade needs.

use tracing::{trace, warn};

use super::resolve::resolve;
use crate::style::{StyleAttributes, StyleOverrides};

/// A stack of resolved styles, one per open scope.
///
/// # Example
///
/// ```rust
/// use stylecascade::{Size, StyleCascade, StyleOverrides, DEFAULT_STYLE};
///
/// let mut cascade = StyleCascade::new(DEFAULT_STYLE);
/// let leaf = cascade.scoped(&StyleOverrides::new().size(Size::Large), |cascade, _outer| {
///     cascade.scoped(&StyleOverrides::new(), |_, inner| inner)
/// });
///
/// assert_eq!(leaf.size, Size::Large);
/// assert_eq!(cascade.current(), DEFAULT_STYLE);
/// ```
#[derive(Debug, Clone)]
pub struct StyleCascade {
    base: StyleAttributes,
    stack: Vec<StyleAttributes>,
    // Scopes below this depth belong to an enclosing `scoped` call.
    floor: usize,
}

impl StyleCascade {
    /// Creates a cascade with no open scopes.
    pub fn new(base: StyleAttributes) -> Self {
        Self {
            base,
            stack: Vec::new(),
            floor: 0,
        }
    }

    /// The style a newly entered scope would inherit.
    pub fn current(&self) -> StyleAttributes {
        self.stack.last().copied().unwrap_or(self.base)
    }

    pub fn base(&self) -> StyleAttributes {
        self.base
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Opens a scope and returns its resolved style.
    ///
    /// The returned style stays visible to every scope entered before the
    /// matching [`exit`](Self::exit).
    pub fn enter(&mut self, overrides: &StyleOverrides) -> StyleAttributes {
        let resolved = resolve(&self.current(), overrides);
        trace!(depth = self.stack.len(), ?overrides, ?resolved, "entering style scope");
        self.stack.push(resolved);
        resolved
    }

    /// Closes the innermost scope, returning its style.
    ///
    /// Returns `None` when no scope is open, or when the innermost open
    /// scope was opened by an enclosing [`scoped`](Self::scoped) call.
    pub fn exit(&mut self) -> Option<StyleAttributes> {
        if self.stack.is_empty() {
            warn!("exit called on a style cascade with no open scope");
            return None;
        }
        if self.stack.len() <= self.floor {
            warn!(
                depth = self.stack.len(),
                floor = self.floor,
                "exit would close a scope owned by an enclosing scoped call"
            );
            return None;
        }
        self.stack.pop()
    }

    /// Runs `f` inside a scope, closing it afterwards.
    ///
    /// `f` may enter and exit its own scopes, but cannot exit the scope
    /// opened here or any scope around it.
    pub fn scoped<T, F>(&mut self, overrides: &StyleOverrides, f: F) -> T
    where
        F: FnOnce(&mut StyleCascade, StyleAttributes) -> T,
    {
        let depth = self.stack.len();
        let resolved = self.enter(overrides);
        let floor = std::mem::replace(&mut self.floor, depth + 1);
        let out = f(self, resolved);
        // Scopes left open by `f` belong to this one.
        self.stack.truncate(depth);
        self.floor = floor;
        out
    }
}

impl Default for StyleCascade {
    fn default() -> Self {
        Self::new(StyleAttributes::default())
    }
}
