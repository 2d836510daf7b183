use generational_arena::{Arena, Index};
use tracing::{debug, trace};

use crate::{
    error::{Error, Result, contract},
    node::{Node, NodeRef},
    post_order::{self, PostOrderIter, PostOrderIterMut},
    traversable::{Traversable, TraversableMut},
};

pub use self::human_readable::{HrtNode, HumanReadableTree};

mod human_readable;

/// Tree with an arbitrary number of children per node.
///
/// The tree owns its nodes. Each node is addressed through a [`NodeRef`]
/// describing the path to it from the root. The most recently added child of
/// a node always has the highest index among its siblings.
///
/// The methods with preconditions panic when these are violated. Each has a
/// `try_` twin which reports the violation as an [`Error`] instead.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Index>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> NodeRef {
        contract(self.try_root())
    }

    pub fn try_root(&self) -> Result<NodeRef> {
        self.root.map(NodeRef::root).ok_or(Error::EmptyTree)
    }

    pub fn child_at(&self, parent: &NodeRef, index: usize) -> NodeRef {
        contract(self.try_child_at(parent, index))
    }

    pub fn try_child_at(&self, parent: &NodeRef, index: usize) -> Result<NodeRef> {
        let children: &[Index] = self.node(parent)?.children();

        children
            .get(index)
            .map(|&child| parent.child(index, child))
            .ok_or(Error::ChildOutOfRange {
                index,
                count: children.len(),
            })
    }

    pub fn child_count(&self, node: &NodeRef) -> usize {
        contract(self.try_child_count(node))
    }

    pub fn try_child_count(&self, node: &NodeRef) -> Result<usize> {
        self.node(node).map(|node| node.children().len())
    }

    pub fn value(&self, node: &NodeRef) -> &T {
        contract(self.try_value(node))
    }

    pub fn try_value(&self, node: &NodeRef) -> Result<&T> {
        self.node(node).map(Node::value)
    }

    pub fn value_mut(&mut self, node: &NodeRef) -> &mut T {
        contract(self.try_value_mut(node))
    }

    pub fn try_value_mut(&mut self, node: &NodeRef) -> Result<&mut T> {
        self.node_mut(node).map(Node::value_mut)
    }

    /// Discards the current content of the tree and installs a new root.
    pub fn make_root(&mut self, value: T) -> NodeRef {
        if let Some(old_root) = self.root.take() {
            let removed: usize = self.remove_subtree(old_root);

            debug!(removed, "Discarded previous tree content.");
        }

        let root: Index = self.nodes.insert(Node::new(None, value));

        self.root = Some(root);

        debug!("Installed new root.");

        NodeRef::root(root)
    }

    pub fn add_child(&mut self, parent: &NodeRef, value: T) -> NodeRef {
        contract(self.try_add_child(parent, value))
    }

    pub fn try_add_child(&mut self, parent: &NodeRef, value: T) -> Result<NodeRef> {
        self.node(parent)?;

        let child: Index = self.nodes.insert(Node::new(Some(parent.index()), value));

        let position: usize = self.node_mut(parent)?.push_child(child);

        trace!(parent = ?parent.path(), position, "Added child node.");

        Ok(parent.child(position, child))
    }

    /// Removes the node and all its descendants.
    ///
    /// Erasing the root leaves the tree empty. Otherwise the siblings on the
    /// right of the node move one index to the left, which invalidates every
    /// reference into them.
    pub fn erase_subtree(&mut self, node: &NodeRef) {
        contract(self.try_erase_subtree(node))
    }

    pub fn try_erase_subtree(&mut self, node: &NodeRef) -> Result<()> {
        let parent: Option<Index> = self.node(node)?.parent();

        match parent {
            None => self.root = None,
            Some(parent) => {
                let removed_at: Option<usize> = self
                    .nodes
                    .get_mut(parent)
                    .and_then(|parent| parent.remove_child(node.index()));

                debug_assert!(removed_at.is_some());
            }
        }

        let removed: usize = self.remove_subtree(node.index());

        debug!(path = ?node.path(), removed, "Erased subtree.");

        Ok(())
    }

    /// Resolves a path from the root into a fresh reference.
    pub fn node_at(&self, path: &[usize]) -> Option<NodeRef> {
        path.iter()
            .try_fold(self.try_root().ok()?, |node, &index| {
                self.try_child_at(&node, index).ok()
            })
    }

    /// Checks whether the reference still addresses the node it was created
    /// for, at the position it was created at.
    pub fn is_valid(&self, node: &NodeRef) -> bool {
        self.node_at(node.path())
            .is_some_and(|current| current.index() == node.index())
    }

    /// Looks for the first node, in post-order, whose value satisfies the
    /// predicate.
    pub fn find_by<F>(&self, mut f: F) -> Option<NodeRef>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor: PostOrderIter<'_, Self> = self.iter();

        while let Some(node) = cursor.node() {
            if f(self.value(node)) {
                return Some(node.clone());
            }

            cursor.advance();
        }

        None
    }

    pub fn iter(&self) -> PostOrderIter<'_, Self> {
        post_order::begin(self)
    }

    pub fn cursor_mut(&mut self) -> PostOrderIterMut<'_, Self> {
        post_order::begin(self)
    }

    pub fn into_human_readable(self) -> Option<HumanReadableTree<T>> {
        HumanReadableTree::from_tree(self)
    }

    #[inline]
    pub(crate) fn root_index(&self) -> Option<Index> {
        self.root
    }

    #[inline]
    pub(crate) fn take_node(&mut self, index: Index) -> Option<Node<T>> {
        self.nodes.remove(index)
    }

    fn node(&self, node: &NodeRef) -> Result<&Node<T>> {
        self.nodes
            .get(node.index())
            .ok_or_else(|| Error::stale(node.path()))
    }

    fn node_mut(&mut self, node: &NodeRef) -> Result<&mut Node<T>> {
        self.nodes
            .get_mut(node.index())
            .ok_or_else(|| Error::stale(node.path()))
    }

    fn remove_subtree(&mut self, root: Index) -> usize {
        let mut pending: Vec<Index> = vec![root];

        let mut removed: usize = 0;

        while let Some(index) = pending.pop() {
            if let Some(node) = self.nodes.remove(index) {
                pending.extend_from_slice(node.children());

                removed += 1;
            }
        }

        removed
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(Index, Index)> = match (self.root, other.root) {
            (None, None) => return true,
            (Some(left), Some(right)) => vec![(left, right)],
            _ => return false,
        };

        while let Some((left, right)) = pending.pop() {
            match (self.nodes.get(left), other.nodes.get(right)) {
                (Some(left), Some(right))
                    if left.value() == right.value()
                        && left.children().len() == right.children().len() =>
                {
                    pending.extend(
                        left.children()
                            .iter()
                            .copied()
                            .zip(right.children().iter().copied()),
                    );
                }
                _ => return false,
            }
        }

        true
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Traversable for Tree<T> {
    type NodeRef = NodeRef;

    type Ref<'r>
        = &'r T
    where
        Self: 'r;

    fn is_empty(&self) -> bool {
        Tree::is_empty(self)
    }

    fn root(&self) -> NodeRef {
        Tree::root(self)
    }

    fn child_at(&self, node: &NodeRef, index: usize) -> NodeRef {
        Tree::child_at(self, node, index)
    }

    fn child_count(&self, node: &NodeRef) -> usize {
        Tree::child_count(self, node)
    }

    fn value<'r>(&'r self, node: &NodeRef) -> &'r T {
        Tree::value(self, node)
    }
}

impl<T> TraversableMut for Tree<T> {
    type Mut<'r>
        = &'r mut T
    where
        Self: 'r;

    fn value_mut<'r>(&'r mut self, node: &NodeRef) -> &'r mut T {
        Tree::value_mut(self, node)
    }
}

impl<'r, T> IntoIterator for &'r Tree<T> {
    type Item = &'r T;

    type IntoIter = PostOrderIter<'r, Tree<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
