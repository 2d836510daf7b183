use std::hash::{Hash, Hasher};

use generational_arena::Index;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    value: T,
    parent: Option<Index>,
    children: Vec<Index>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) const fn new(parent: Option<Index>, value: T) -> Self {
        Self {
            value,
            parent,
            children: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline]
    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Index> {
        self.parent
    }

    #[inline]
    pub(crate) fn children(&self) -> &[Index] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: Index) -> usize {
        self.children.push(child);

        self.children.len() - 1
    }

    pub(crate) fn remove_child(&mut self, child: Index) -> Option<usize> {
        let position: Option<usize> = self.children.iter().position(|&index| index == child);

        position.inspect(|&position| {
            self.children.remove(position);
        })
    }
}

/// Reference to a node of a [`Tree`](crate::Tree).
///
/// The node is identified by its path, the sequence of child indexes followed
/// from the root. Two references are equal exactly when their paths are.
///
/// Adding nodes never invalidates a reference. Erasing a subtree invalidates
/// the references into it and into every sibling to its right, as their paths
/// shift. See [`Tree::is_valid`](crate::Tree::is_valid).
#[derive(Debug, Clone)]
pub struct NodeRef {
    path: Vec<usize>,
    node: Index,
}

impl NodeRef {
    #[inline]
    pub(crate) const fn root(node: Index) -> Self {
        Self {
            path: Vec::new(),
            node,
        }
    }

    pub(crate) fn child(&self, index: usize, node: Index) -> Self {
        let mut path: Vec<usize> = Vec::with_capacity(self.path.len() + 1);

        path.extend_from_slice(&self.path);

        path.push(index);

        Self { path, node }
    }

    #[inline]
    pub(crate) const fn index(&self) -> Index {
        self.node
    }

    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for NodeRef {}

impl Hash for NodeRef {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.path.hash(state)
    }
}
