//! A mounted tree of style scopes with reactive re-derivation.
//!
//! [`StyleTree`] keeps every mounted scope in an [`indextree`] arena. A
//! hidden base node sits above the top-level scopes and carries the tree's
//! base style, so every mounted scope inherits from exactly one parent.
//! Each scope stores only its overrides and a cached resolved style; the
//! cache is always derived from the parent's resolved style and is never
//! written directly. Changing a scope's overrides, or the base, re-derives
//! the affected scopes top-down and republishes the new styles to
//! already-mounted descendants.
//!
//! After [`StyleTree::unmount`] every lookup with a removed id fails with
//! [`StyleError::UnknownScope`], even once the arena reuses its slot.

use indextree::{Arena, NodeId};
use tracing::{debug, trace};

use super::resolve::resolve;
use crate::style::{Result, StyleAttributes, StyleError, StyleOverrides};

/// Handle to a scope mounted in a [`StyleTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(NodeId);

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct ScopeNode {
    overrides: StyleOverrides,
    resolved: StyleAttributes,
}

/// A forest of style scopes sharing one base style.
///
/// # Example
///
/// ```rust
/// use stylecascade::{Shape, Size, StyleOverrides, StyleTree, DEFAULT_STYLE};
///
/// let mut tree = StyleTree::new(DEFAULT_STYLE);
/// let list = tree.mount_root(StyleOverrides::new().size(Size::Large));
/// let item = tree.mount(list, StyleOverrides::new().shape(Shape::Square)).unwrap();
///
/// assert_eq!(tree.resolved(item).unwrap().size, Size::Large);
///
/// tree.set_overrides(list, StyleOverrides::new().size(Size::Small)).unwrap();
/// assert_eq!(tree.resolved(item).unwrap().size, Size::Small);
/// ```
#[derive(Debug, Clone)]
pub struct StyleTree {
    arena: Arena<ScopeNode>,
    base: NodeId,
}

impl StyleTree {
    /// Creates an empty tree whose root scopes inherit `base`.
    pub fn new(base: StyleAttributes) -> Self {
        let mut arena = Arena::new();
        Self {
            base: arena.new_node(ScopeNode {
                overrides: StyleOverrides::new(),
                resolved: base,
            }),
            arena,
        }
    }

    pub fn base(&self) -> StyleAttributes {
        self.arena[self.base].get().resolved
    }

    /// Number of mounted scopes.
    pub fn len(&self) -> usize {
        self.base.descendants(&self.arena).count() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.base.children(&self.arena).next().is_none()
    }

    /// Top-level scopes, in mount order.
    pub fn roots(&self) -> Vec<ScopeId> {
        self.base.children(&self.arena).map(ScopeId).collect()
    }

    /// True while `id` refers to a mounted scope.
    pub fn contains(&self, id: ScopeId) -> bool {
        self.node(id).is_ok()
    }

    /// Mounts a top-level scope that inherits the base style.
    pub fn mount_root(&mut self, overrides: StyleOverrides) -> ScopeId {
        let id = self.attach(self.base, overrides);
        debug!(%id, resolved = ?self.arena[id.0].get().resolved, "mounted root style scope");
        id
    }

    /// Mounts a scope under `parent`, inheriting its resolved style.
    pub fn mount(&mut self, parent: ScopeId, overrides: StyleOverrides) -> Result<ScopeId> {
        self.node(parent)?;
        let id = self.attach(parent.0, overrides);
        debug!(%id, %parent, resolved = ?self.arena[id.0].get().resolved, "mounted style scope");
        Ok(id)
    }

    /// The resolved style of a mounted scope.
    pub fn resolved(&self, id: ScopeId) -> Result<StyleAttributes> {
        Ok(self.node(id)?.resolved)
    }

    /// The style a mounted scope inherits from its parent (or the base).
    pub fn inherited(&self, id: ScopeId) -> Result<StyleAttributes> {
        self.node(id)?;
        Ok(self.inherited_by(id.0))
    }

    pub fn overrides(&self, id: ScopeId) -> Result<StyleOverrides> {
        Ok(self.node(id)?.overrides)
    }

    /// The enclosing scope, or `None` for a top-level scope.
    pub fn parent(&self, id: ScopeId) -> Result<Option<ScopeId>> {
        self.node(id)?;
        Ok(self.arena[id.0]
            .parent()
            .filter(|parent| *parent != self.base)
            .map(ScopeId))
    }

    /// Direct children, in mount order.
    pub fn children(&self, id: ScopeId) -> Result<Vec<ScopeId>> {
        self.node(id)?;
        Ok(id.0.children(&self.arena).map(ScopeId).collect())
    }

    /// Replaces a scope's overrides and re-derives its subtree.
    ///
    /// Returns how many scopes ended up with a different resolved style.
    pub fn set_overrides(&mut self, id: ScopeId, overrides: StyleOverrides) -> Result<usize> {
        self.node_mut(id)?.overrides = overrides;
        let changed = self.rederive(vec![id.0]);
        debug!(%id, changed, "re-derived style scope");
        Ok(changed)
    }

    /// Replaces the base style and re-derives every scope.
    ///
    /// Returns how many scopes ended up with a different resolved style.
    pub fn set_base(&mut self, base: StyleAttributes) -> usize {
        self.arena[self.base].get_mut().resolved = base;
        let roots = self.base.children(&self.arena).collect();
        let changed = self.rederive(roots);
        debug!(?base, changed, "re-derived style tree from new base");
        changed
    }

    /// Tears down a scope and its whole subtree.
    ///
    /// Returns the number of scopes removed.
    pub fn unmount(&mut self, id: ScopeId) -> Result<usize> {
        self.node(id)?;
        let removed = id.0.descendants(&self.arena).count();
        id.0.remove_subtree(&mut self.arena);
        debug!(%id, removed, "unmounted style scope");
        Ok(removed)
    }

    fn attach(&mut self, parent: NodeId, overrides: StyleOverrides) -> ScopeId {
        let resolved = resolve(&self.arena[parent].get().resolved, &overrides);
        let id = self.arena.new_node(ScopeNode {
            overrides,
            resolved,
        });
        parent.append(id, &mut self.arena);
        ScopeId(id)
    }

    fn is_mounted(&self, id: ScopeId) -> bool {
        id.0 != self.base && self.arena.get(id.0).is_some() && !id.0.is_removed(&self.arena)
    }

    fn node(&self, id: ScopeId) -> Result<&ScopeNode> {
        if !self.is_mounted(id) {
            return Err(StyleError::UnknownScope(id));
        }
        Ok(self.arena[id.0].get())
    }

    fn node_mut(&mut self, id: ScopeId) -> Result<&mut ScopeNode> {
        if !self.is_mounted(id) {
            return Err(StyleError::UnknownScope(id));
        }
        Ok(self.arena[id.0].get_mut())
    }

    fn inherited_by(&self, id: NodeId) -> StyleAttributes {
        let parent = self.arena[id].parent().unwrap_or(self.base);
        self.arena[parent].get().resolved
    }

    /// Recomputes each pending scope from its parent, then its children.
    ///
    /// A scope whose resolved style is unchanged keeps its subtree as is.
    fn rederive(&mut self, mut pending: Vec<NodeId>) -> usize {
        let mut changed = 0;
        while let Some(id) = pending.pop() {
            let inherited = self.inherited_by(id);
            let node = self.arena[id].get_mut();
            let resolved = resolve(&inherited, &node.overrides);
            if resolved == node.resolved {
                continue;
            }
            trace!(id = %ScopeId(id), from = ?node.resolved, to = ?resolved, "republishing style");
            node.resolved = resolved;
            changed += 1;
            pending.extend(id.children(&self.arena));
        }
        changed
    }
}

impl Default for StyleTree {
    fn default() -> Self {
        Self::new(StyleAttributes::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Shape, Size, Variant, DEFAULT_STYLE};

    fn full(size: Size, shape: Shape, variant: Variant) -> StyleOverrides {
        StyleAttributes::new(size, shape, variant).into()
    }

    #[test]
    fn test_root_inherits_base() {
        let mut tree = StyleTree::default();
        let root = tree.mount_root(StyleOverrides::new());
        assert_eq!(tree.resolved(root).unwrap(), DEFAULT_STYLE);
        assert_eq!(tree.inherited(root).unwrap(), DEFAULT_STYLE);
        assert_eq!(tree.parent(root).unwrap(), None);
        assert_eq!(tree.roots(), vec![root]);
        assert_eq!(tree.base(), DEFAULT_STYLE);
    }

    #[test]
    fn test_mount_inherits_parent() {
        let mut tree = StyleTree::new(DEFAULT_STYLE);
        let root = tree.mount_root(full(Size::Large, Shape::Square, Variant::Secondary));
        let child = tree
            .mount(root, StyleOverrides::new().shape(Shape::Rounded))
            .unwrap();

        assert_eq!(
            tree.resolved(child).unwrap(),
            StyleAttributes::new(Size::Large, Shape::Rounded, Variant::Secondary)
        );
        assert_eq!(tree.inherited(child).unwrap(), tree.resolved(root).unwrap());
        assert_eq!(tree.parent(child).unwrap(), Some(root));
        assert_eq!(tree.children(root).unwrap(), vec![child]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_mount_under_unmounted_parent_fails() {
        let mut tree = StyleTree::default();
        let gone = tree.mount_root(StyleOverrides::new());
        tree.unmount(gone).unwrap();

        assert_eq!(
            tree.mount(gone, StyleOverrides::new()),
            Err(StyleError::UnknownScope(gone))
        );
        assert!(tree.is_empty());
    }

    #[test]
    fn test_id_from_another_tree_is_unknown() {
        let mut other = StyleTree::default();
        other.mount_root(StyleOverrides::new());
        let foreign = other.mount_root(StyleOverrides::new());

        let tree = StyleTree::default();
        assert!(!tree.contains(foreign));
        assert_eq!(tree.resolved(foreign), Err(StyleError::UnknownScope(foreign)));
    }

    #[test]
    fn test_set_overrides_republishes_to_descendants() {
        let mut tree = StyleTree::default();
        let root = tree.mount_root(StyleOverrides::new());
        let middle = tree.mount(root, StyleOverrides::new()).unwrap();
        let leaf = tree
            .mount(middle, StyleOverrides::new().variant(Variant::Secondary))
            .unwrap();

        let changed = tree
            .set_overrides(root, StyleOverrides::new().size(Size::Small))
            .unwrap();

        assert_eq!(changed, 3);
        assert_eq!(tree.overrides(root).unwrap().size, Some(Size::Small));
        assert_eq!(tree.resolved(leaf).unwrap().size, Size::Small);
        assert_eq!(tree.resolved(leaf).unwrap().variant, Variant::Secondary);
    }

    #[test]
    fn test_set_overrides_stops_at_shadowing_scope() {
        let mut tree = StyleTree::default();
        let root = tree.mount_root(StyleOverrides::new());
        let shadow = tree
            .mount(root, StyleOverrides::new().size(Size::Large))
            .unwrap();
        let leaf = tree.mount(shadow, StyleOverrides::new()).unwrap();

        let changed = tree
            .set_overrides(root, StyleOverrides::new().size(Size::Small))
            .unwrap();

        assert_eq!(changed, 1);
        assert_eq!(tree.resolved(leaf).unwrap().size, Size::Large);
    }

    #[test]
    fn test_set_overrides_leaves_siblings_alone() {
        let mut tree = StyleTree::default();
        let root = tree.mount_root(StyleOverrides::new());
        let left = tree.mount(root, StyleOverrides::new()).unwrap();
        let right = tree.mount(root, StyleOverrides::new()).unwrap();

        tree.set_overrides(left, StyleOverrides::new().shape(Shape::Square))
            .unwrap();

        assert_eq!(tree.resolved(left).unwrap().shape, Shape::Square);
        assert_eq!(tree.resolved(right).unwrap(), DEFAULT_STYLE);
        assert_eq!(tree.resolved(root).unwrap(), DEFAULT_STYLE);
    }

    #[test]
    fn test_set_base_rederives_everything() {
        let mut tree = StyleTree::default();
        let first = tree.mount_root(StyleOverrides::new());
        let second = tree.mount_root(StyleOverrides::new().size(Size::Small));
        let child = tree.mount(second, StyleOverrides::new()).unwrap();

        let base = StyleAttributes::new(Size::Large, Shape::Square, Variant::Primary);
        let changed = tree.set_base(base);

        assert_eq!(changed, 3);
        assert_eq!(tree.base(), base);
        assert_eq!(tree.resolved(first).unwrap().size, Size::Large);
        assert_eq!(tree.resolved(child).unwrap().size, Size::Small);
        assert_eq!(tree.resolved(child).unwrap().shape, Shape::Square);
    }

    #[test]
    fn test_unmount_removes_subtree() {
        let mut tree = StyleTree::default();
        let root = tree.mount_root(StyleOverrides::new());
        let branch = tree.mount(root, StyleOverrides::new()).unwrap();
        let leaf = tree.mount(branch, StyleOverrides::new()).unwrap();
        let other = tree.mount(root, StyleOverrides::new()).unwrap();

        assert_eq!(tree.unmount(branch).unwrap(), 2);
        assert_eq!(tree.len(), 2);
        assert!(!tree.contains(leaf));
        assert_eq!(tree.children(root).unwrap(), vec![other]);
        assert_eq!(tree.resolved(leaf), Err(StyleError::UnknownScope(leaf)));
        assert_eq!(tree.unmount(branch), Err(StyleError::UnknownScope(branch)));
    }

    #[test]
    fn test_stale_id_stays_unknown_after_slot_reuse() {
        let mut tree = StyleTree::default();
        let first = tree.mount_root(StyleOverrides::new());
        tree.unmount(first).unwrap();
        let second = tree.mount_root(StyleOverrides::new().size(Size::Large));

        assert_ne!(first, second);
        assert!(!tree.contains(first));
        assert_eq!(tree.resolved(first), Err(StyleError::UnknownScope(first)));
        assert_eq!(tree.roots(), vec![second]);
    }
}
