//! Arbitrary-arity trees addressed by paths, walked in post-order.
//!
//! [`Tree`] owns its nodes and hands out [`NodeRef`]s, which identify a node by
//! the child indexes leading to it from the root. The post-order cursor in
//! [`post_order`] works over anything implementing [`Traversable`], such as
//! [`Tree`] or [`FlatTree`].
//!
//! ```
//! use path_tree::{Tree, post_order};
//!
//! let mut tree: Tree<u32> = Tree::new();
//!
//! let root = tree.make_root(3);
//! tree.add_child(&root, 1);
//! tree.add_child(&root, 2);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<u32>>(), [1, 2, 3]);
//!
//! let mut cursor = post_order::begin(&mut tree);
//!
//! while !cursor.is_end() {
//!     *cursor.get_mut() *= 10;
//!
//!     cursor.advance();
//! }
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<u32>>(), [10, 20, 30]);
//! ```

pub use self::{
    error::{Error, Result},
    flat::FlatTree,
    node::NodeRef,
    post_order::{Position, PostOrder, PostOrderIter, PostOrderIterMut},
    traversable::{Handle, Traversable, TraversableMut},
    tree::{HrtNode, HumanReadableTree, Tree},
};

mod error;
mod flat;
mod node;
pub mod post_order;
mod traversable;
mod tree;
