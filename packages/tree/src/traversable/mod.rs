pub use self::handle::Handle;

mod handle;

/// Read access to a tree shaped structure.
///
/// This is the whole interface the post-order cursor relies on, so any
/// storage (an owning node tree, a flat vector, a computed tree) can be walked
/// once it implements it. Nodes are addressed by [`Traversable::NodeRef`]
/// handles which are obtained from [`Traversable::root`] and
/// [`Traversable::child_at`] only.
///
/// [`Traversable::value`] decides what dereferencing a cursor yields: a
/// reference into the tree, or an owned value for trees which compute their
/// values on the fly.
pub trait Traversable {
    type NodeRef: Clone + PartialEq;

    type Ref<'r>
    where
        Self: 'r;

    fn is_empty(&self) -> bool;

    /// Must not be called on an empty tree.
    fn root(&self) -> Self::NodeRef;

    /// Must only be called with `index < self.child_count(node)`.
    fn child_at(&self, node: &Self::NodeRef, index: usize) -> Self::NodeRef;

    fn child_count(&self, node: &Self::NodeRef) -> usize;

    fn value<'r>(&'r self, node: &Self::NodeRef) -> Self::Ref<'r>;
}

/// Write access to the values of a [`Traversable`] tree.
///
/// Only values can be reached through it, the shape of the tree stays intact.
pub trait TraversableMut: Traversable {
    type Mut<'r>
    where
        Self: 'r;

    fn value_mut<'r>(&'r mut self, node: &Self::NodeRef) -> Self::Mut<'r>;
}
