use generational_arena::Index;
use serde::{Deserialize, Serialize};

use crate::{
    node::{Node, NodeRef},
    post_order::PostOrderIter,
    tree::Tree,
};

/// Nested form of a non-empty [`Tree`], convenient to write by hand.
///
/// Serialized as `{"value": .., "children": [..]}`, the `children` field
/// being omitted for leaves.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HumanReadableTree<T> {
    root: HrtNode<T>,
}

impl<T> HumanReadableTree<T> {
    pub const fn new(root: HrtNode<T>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &HrtNode<T> {
        &self.root
    }

    pub fn into_tree(self) -> Tree<T> {
        let mut tree: Tree<T> = Tree::new();

        let (value, children): (T, Vec<HrtNode<T>>) = self.root.into_parts();

        let root: NodeRef = tree.make_root(value);

        let mut pending: Vec<(NodeRef, HrtNode<T>)> = children
            .into_iter()
            .rev()
            .map(|child| (root.clone(), child))
            .collect();

        while let Some((parent, node)) = pending.pop() {
            let (value, children): (T, Vec<HrtNode<T>>) = node.into_parts();

            let this: NodeRef = tree.add_child(&parent, value);

            pending.extend(
                children
                    .into_iter()
                    .rev()
                    .map(|child| (this.clone(), child)),
            );
        }

        tree
    }

    /// Returns `None` for an empty tree.
    pub fn from_tree(mut tree: Tree<T>) -> Option<Self> {
        // Post-order visits every node right after its children, so the
        // children of a node are always the last completed entries.
        let visits: Vec<(Index, usize)> = {
            let mut visits: Vec<(Index, usize)> = Vec::with_capacity(tree.len());

            let mut cursor: PostOrderIter<'_, Tree<T>> = tree.iter();

            while let Some(node) = cursor.node() {
                visits.push((node.index(), tree.child_count(node)));

                cursor.advance();
            }

            visits
        };

        let mut completed: Vec<HrtNode<T>> = Vec::new();

        for (index, child_count) in visits {
            let value: T = tree
                .take_node(index)
                .map(Node::into_value)
                .expect("Post-order visits only nodes stored in the tree!");

            let children: Vec<HrtNode<T>> = completed.split_off(completed.len() - child_count);

            completed.push(HrtNode::with_children(value, children));
        }

        debug_assert!(completed.len() <= 1);

        completed.pop().map(Self::new)
    }
}

impl<T> From<HumanReadableTree<T>> for Tree<T> {
    fn from(value: HumanReadableTree<T>) -> Self {
        value.into_tree()
    }
}

/// Node of a [`HumanReadableTree`].
///
/// Prefer [`HrtNode::with_children`], which picks the variant from the
/// children. A `Branch` without children serializes as a leaf and is read
/// back as `Leaf`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "HrtNodeStruct<T>")]
pub enum HrtNode<T> {
    Leaf {
        value: T,
    },
    Branch {
        value: T,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<HrtNode<T>>,
    },
}

impl<T> HrtNode<T> {
    pub const fn leaf(value: T) -> Self {
        Self::Leaf { value }
    }

    pub fn with_children(value: T, children: Vec<Self>) -> Self {
        if children.is_empty() {
            Self::Leaf { value }
        } else {
            Self::Branch { value, children }
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Leaf { value } | Self::Branch { value, .. } => value,
        }
    }

    pub fn children(&self) -> &[Self] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Branch { children, .. } => children,
        }
    }

    fn into_parts(self) -> (T, Vec<Self>) {
        match self {
            Self::Leaf { value } => (value, Vec::new()),
            Self::Branch { value, children } => (value, children),
        }
    }
}

impl<T> From<HrtNodeStruct<T>> for HrtNode<T> {
    fn from(HrtNodeStruct { value, children }: HrtNodeStruct<T>) -> Self {
        Self::with_children(value, children)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HrtNodeStruct<T> {
    value: T,
    #[serde(default = "Vec::new")]
    children: Vec<HrtNode<T>>,
}
