use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    ptr,
};

use crate::traversable::{Handle, Traversable, TraversableMut};


/// Read-only post-order cursor over a tree of type `T`.
pub type PostOrderIter<'r, T> = PostOrder<&'r T>;

/// Post-order cursor which can modify the values of a tree of type `T`.
pub type PostOrderIterMut<'r, T> = PostOrder<&'r mut T>;

type NodeRefOf<H> = <<H as Handle>::Tree as Traversable>::NodeRef;

/// Returns a cursor at the first node in post-order, or at the end when the
/// tree is empty.
///
/// Passing a shared reference gives a read-only cursor, passing an exclusive
/// one gives a cursor which can also modify the values.
pub fn begin<H>(tree: H) -> PostOrder<H>
where
    H: Handle,
{
    PostOrder::begin(tree)
}

/// Returns a cursor past the last node in post-order.
pub fn end<H>(tree: H) -> PostOrder<H>
where
    H: Handle,
{
    PostOrder::end(tree)
}

/// Place of a cursor within a tree, detached from the borrow of the tree.
///
/// Holds the references from the root down to the current node, together
/// with the index of the next child to descend into on each of these levels.
/// An empty position is the end of the traversal.
///
/// A position stays valid when nodes are added to the tree. Erasing a subtree
/// invalidates the positions which pass through the erased node or through
/// any of its right siblings.
#[derive(Debug, Clone)]
pub struct Position<R> {
    ancestors: Vec<R>,
    next_child: Vec<usize>,
}

impl<R> Position<R> {
    const fn end() -> Self {
        Self {
            ancestors: Vec::new(),
            next_child: Vec::new(),
        }
    }

    fn start(root: R) -> Self {
        Self {
            ancestors: vec![root],
            next_child: vec![0],
        }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.ancestors.is_empty()
    }

    #[inline]
    pub fn node(&self) -> Option<&R> {
        self.ancestors.last()
    }

    #[inline]
    pub fn ancestors(&self) -> &[R] {
        &self.ancestors
    }
}

/// The next-child counters are derived from the ancestors and do not take
/// part in the comparison.
impl<R> PartialEq for Position<R>
where
    R: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.ancestors == other.ancestors
    }
}

impl<R> Eq for Position<R> where R: Eq {}

/// Cursor walking a tree in post-order, visiting each node after all of its
/// descendants.
///
/// The walk is incremental and keeps only the chain of ancestors of the
/// current node, so memory use is proportional to the depth of the tree.
///
/// `H` is the borrow of the tree, see [`PostOrderIter`] and
/// [`PostOrderIterMut`]. The read-only cursor is also an [`Iterator`] over the
/// values.
pub struct PostOrder<H>
where
    H: Handle,
{
    tree: H,
    position: Position<NodeRefOf<H>>,
}

impl<H> PostOrder<H>
where
    H: Handle,
{
    pub fn begin(tree: H) -> Self {
        let position: Position<NodeRefOf<H>> = {
            let tree: &H::Tree = tree.tree();

            if tree.is_empty() {
                Position::end()
            } else {
                Position::start(tree.root())
            }
        };

        let mut cursor: Self = Self { tree, position };

        cursor.move_down();

        cursor
    }

    pub const fn end(tree: H) -> Self {
        Self {
            tree,
            position: Position::end(),
        }
    }

    /// Continues a traversal from a position previously detached with
    /// [`PostOrder::into_position`].
    ///
    /// The position must have been obtained from the same tree and must not
    /// have been invalidated since.
    pub const fn resume(tree: H, position: Position<NodeRefOf<H>>) -> Self {
        Self { tree, position }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Returns the node the cursor points at, or `None` at the end.
    #[inline]
    pub fn node(&self) -> Option<&NodeRefOf<H>> {
        self.position.node()
    }

    #[inline]
    pub fn position(&self) -> &Position<NodeRefOf<H>> {
        &self.position
    }

    pub fn into_position(self) -> Position<NodeRefOf<H>> {
        self.position
    }

    /// Moves to the next node in post-order.
    ///
    /// # Panics
    ///
    /// When the cursor is already at the end.
    pub fn advance(&mut self) -> &mut Self {
        assert!(
            !self.is_end(),
            "Advancing a post-order cursor past its end!"
        );

        self.move_up();

        self.move_down();

        self
    }

    fn move_up(&mut self) {
        self.position.ancestors.pop();

        self.position.next_child.pop();
    }

    /// Descends into the untried children, always taking the first one, until
    /// reaching a node with none left. That node is the next in post-order.
    fn move_down(&mut self) {
        let tree: &H::Tree = self.tree.tree();

        let Position {
            ancestors,
            next_child,
        } = &mut self.position;

        while let (Some(node), Some(next)) = (ancestors.last(), next_child.last_mut()) {
            if *next >= tree.child_count(node) {
                break;
            }

            let child: NodeRefOf<H> = tree.child_at(node, *next);

            *next += 1;

            ancestors.push(child);

            next_child.push(0);
        }
    }

    fn current(&self) -> &NodeRefOf<H> {
        self.position
            .node()
            .expect("Dereferencing a post-order cursor past its end!")
    }
}

impl<'r, T> PostOrder<&'r T>
where
    T: Traversable + ?Sized,
{
    /// Returns the value at the current node.
    ///
    /// # Panics
    ///
    /// When the cursor is at the end.
    pub fn get(&self) -> T::Ref<'r> {
        let tree: &'r T = self.tree;

        tree.value(self.current())
    }

    /// Moves to the next node and returns the cursor as it was before.
    pub fn post_advance(&mut self) -> Self {
        let previous: Self = self.clone();

        self.advance();

        previous
    }
}

impl<T> PostOrder<&mut T>
where
    T: Traversable + ?Sized,
{
    /// Returns the value at the current node.
    ///
    /// # Panics
    ///
    /// When the cursor is at the end.
    pub fn get(&self) -> T::Ref<'_> {
        self.tree.value(self.current())
    }
}

impl<T> PostOrder<&mut T>
where
    T: TraversableMut + ?Sized,
{
    /// Returns mutable access to the value at the current node.
    ///
    /// # Panics
    ///
    /// When the cursor is at the end.
    pub fn get_mut(&mut self) -> T::Mut<'_> {
        let node: &T::NodeRef = self
            .position
            .node()
            .expect("Dereferencing a post-order cursor past its end!");

        self.tree.value_mut(node)
    }
}

impl<T> Clone for PostOrder<&T>
where
    T: Traversable + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            position: self.position.clone(),
        }
    }
}

impl<'r, T> Iterator for PostOrder<&'r T>
where
    T: Traversable + ?Sized,
{
    type Item = T::Ref<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            None
        } else {
            let value: T::Ref<'r> = self.get();

            self.advance();

            Some(value)
        }
    }
}

impl<T> FusedIterator for PostOrder<&T> where T: Traversable + ?Sized {}

/// Cursors are equal when they walk the same tree and point at the same node.
impl<H> PartialEq for PostOrder<H>
where
    H: Handle,
{
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree.tree(), other.tree.tree()) && self.position == other.position
    }
}

impl<H> Debug for PostOrder<H>
where
    H: Handle,
    NodeRefOf<H>: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostOrder")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
