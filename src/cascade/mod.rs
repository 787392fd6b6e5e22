//! The style cascade resolver.
//!
//! A scope resolves its style from the nearest ancestor's resolved style
//! and its own partial overrides, then publishes the result to its
//! descendants. The same merge is exposed in several shapes:
//!
//! - [`resolve`] / [`resolve_chain`]: the pure merge
//! - [`StyleScope`]: explicit scopes threaded through a tree walk
//! - [`StyleCascade`]: an enter/exit stack for depth-first traversals
//! - [`StyleTree`]: mounted scopes that re-derive when overrides change

mod resolve;
mod scope;
mod stack;
mod tree;

pub use resolve::{resolve, resolve_chain};
pub use scope::StyleScope;
pub use stack::StyleCascade;
pub use tree::{ScopeId, StyleTree};
