use generational_arena::Index;
use serde::{Deserialize, Serialize, Serializer};

use crate::{
    error::{Error, Result, contract},
    post_order::PostOrderIter,
    traversable::Traversable,
    tree::Tree,
};

mod unchecked;

type Nodes<T> = Vec<Raw<T>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
struct Raw<T> {
    parent: usize,
    value: T,
}

impl<T> Raw<T> {
    #[inline]
    const fn new(parent: usize, value: T) -> Self {
        Self { parent, value }
    }

    #[inline]
    fn parent(&self) -> usize {
        self.parent
    }
}

/// Immutable tree stored as a vector of `(parent, value)` records.
///
/// The root is the first record and refers to itself as parent. Every other
/// record refers to a parent placed before it. Children follow the order of
/// their records. Nodes are addressed by the index of their record.
///
/// Serialized as `[{"parent": .., "value": ..}, ..]`. Deserialization
/// rejects input breaking the layout rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "unchecked::Unchecked<T>")]
pub struct FlatTree<T> {
    nodes: Nodes<T>,
    children: Vec<Vec<usize>>,
}

impl<T> FlatTree<T> {
    const ROOT_PARENT: usize = 0;

    const ROOT_INDEX: usize = 0;

    /// Lays the tree out in pre-order, the parent of each node preceding it.
    pub fn from_tree(mut tree: Tree<T>) -> Self {
        let mut nodes: Nodes<T> = Vec::with_capacity(tree.len());

        let mut pending: Vec<(usize, Index)> = tree
            .root_index()
            .map(|root| (Self::ROOT_PARENT, root))
            .into_iter()
            .collect();

        while let Some((parent, index)) = pending.pop() {
            if let Some(node) = tree.take_node(index) {
                let this: usize = nodes.len();

                pending.extend(node.children().iter().rev().map(|&child| (this, child)));

                nodes.push(Raw::new(parent, node.into_value()));
            }
        }

        Self::from_nodes(nodes)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `None` for the root.
    pub fn parent(&self, node: usize) -> Option<usize> {
        let parent: usize = contract(self.record(node)).parent();

        (node != Self::ROOT_INDEX).then_some(parent)
    }

    pub fn iter(&self) -> PostOrderIter<'_, Self> {
        crate::post_order::begin(self)
    }

    fn record(&self, node: usize) -> Result<&Raw<T>> {
        self.nodes.get(node).ok_or(Error::NodeOutOfRange {
            index: node,
            count: self.nodes.len(),
        })
    }

    fn children_of(&self, node: usize) -> Result<&[usize]> {
        self.children
            .get(node)
            .map(Vec::as_slice)
            .ok_or(Error::NodeOutOfRange {
                index: node,
                count: self.nodes.len(),
            })
    }

    fn from_nodes(nodes: Nodes<T>) -> Self {
        let mut children: Vec<Vec<usize>> = nodes.iter().map(|_| Vec::new()).collect();

        nodes
            .iter()
            .enumerate()
            .skip(1)
            .for_each(|(index, raw_node)| children[raw_node.parent()].push(index));

        Self { nodes, children }
    }
}

impl<T> Serialize for FlatTree<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.nodes.serialize(serializer)
    }
}

impl<T> Traversable for FlatTree<T> {
    type NodeRef = usize;

    type Ref<'r>
        = &'r T
    where
        Self: 'r;

    fn is_empty(&self) -> bool {
        FlatTree::is_empty(self)
    }

    fn root(&self) -> usize {
        contract(if self.nodes.is_empty() {
            Err(Error::EmptyTree)
        } else {
            Ok(Self::ROOT_INDEX)
        })
    }

    fn child_at(&self, node: &usize, index: usize) -> usize {
        let children: &[usize] = contract(self.children_of(*node));

        contract(children.get(index).copied().ok_or(Error::ChildOutOfRange {
            index,
            count: children.len(),
        }))
    }

    fn child_count(&self, node: &usize) -> usize {
        contract(self.children_of(*node)).len()
    }

    fn value<'r>(&'r self, node: &usize) -> &'r T {
        &contract(self.record(*node)).value
    }
}

impl<'r, T> IntoIterator for &'r FlatTree<T> {
    type Item = &'r T;

    type IntoIter = PostOrderIter<'r, FlatTree<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
