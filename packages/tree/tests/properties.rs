//! Post-order traversal properties over randomly shaped trees.

use path_tree::{
    FlatTree, NodeRef, Position, PostOrderIter, PostOrderIterMut, Tree, post_order,
};
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Each node after the root picks its parent among the nodes added before it.
fn arb_tree() -> impl Strategy<Value = Tree<u32>> {
    (
        any::<u32>(),
        prop::collection::vec((any::<usize>(), any::<u32>()), 0..48),
    )
        .prop_map(|(root_value, nodes)| {
            let mut tree: Tree<u32> = Tree::new();

            let mut added: Vec<NodeRef> = vec![tree.make_root(root_value)];

            for (parent, value) in nodes {
                let parent: &NodeRef = &added[parent % added.len()];

                let child: NodeRef = tree.add_child(parent, value);

                added.push(child);
            }

            tree
        })
}

fn recursive_post_order(tree: &Tree<u32>, node: &NodeRef, visited: &mut Vec<NodeRef>) {
    for index in 0..tree.child_count(node) {
        recursive_post_order(tree, &tree.child_at(node, index), visited);
    }

    visited.push(node.clone());
}

fn expected_nodes(tree: &Tree<u32>) -> Vec<NodeRef> {
    let mut visited: Vec<NodeRef> = Vec::new();

    recursive_post_order(tree, &tree.root(), &mut visited);

    visited
}

/// Erasing the node at `erased` shifts neither the node at `current` nor any
/// of its ancestors.
fn keeps_path(erased: &[usize], current: &[usize]) -> bool {
    erased.split_last().is_some_and(|(&index, parent)| {
        !(parent.len() < current.len()
            && current.starts_with(parent)
            && current[parent.len()] >= index)
    })
}

fn cursor_nodes(mut cursor: PostOrderIter<'_, Tree<u32>>) -> Vec<NodeRef> {
    let mut visited: Vec<NodeRef> = Vec::new();

    while let Some(node) = cursor.node() {
        visited.push(node.clone());

        cursor.advance();
    }

    visited
}

proptest! {
    #[test]
    fn visits_children_before_parents(tree in arb_tree()) {
        init_tracing();

        let expected: Vec<NodeRef> = expected_nodes(&tree);

        prop_assert_eq!(expected.len(), tree.len());
        prop_assert_eq!(cursor_nodes(tree.iter()), expected.clone());
        prop_assert_eq!(
            tree.iter().copied().collect::<Vec<u32>>(),
            expected.iter().map(|node| *tree.value(node)).collect::<Vec<u32>>()
        );
    }

    #[test]
    fn overwrites_in_visit_order(mut tree in arb_tree()) {
        init_tracing();

        let len: u32 = u32::try_from(tree.len()).expect("small tree");

        let mut cursor: PostOrderIterMut<'_, Tree<u32>> = post_order::begin(&mut tree);

        let mut next: u32 = 0;

        while !cursor.is_end() {
            *cursor.get_mut() = next;

            next += 1;

            cursor.advance();
        }

        prop_assert_eq!(tree.iter().copied().collect::<Vec<u32>>(), (0..len).collect::<Vec<u32>>());
    }

    #[test]
    fn insertion_keeps_remaining_visits(
        mut tree in arb_tree(),
        stop in any::<usize>(),
        parents in prop::collection::vec(any::<usize>(), 1..8),
    ) {
        init_tracing();

        let before: Vec<NodeRef> = expected_nodes(&tree);

        let position: Position<NodeRef> = {
            let mut cursor: PostOrderIter<'_, Tree<u32>> = tree.iter();

            for _ in 0..stop % before.len() {
                cursor.advance();
            }

            cursor.into_position()
        };

        let current: NodeRef = position.node().cloned().expect("not at the end");

        for (value, parent) in (1000..).zip(parents) {
            let parent: &NodeRef = &before[parent % before.len()];

            tree.add_child(parent, value);
        }

        let expected: Vec<NodeRef> = expected_nodes(&tree)
            .into_iter()
            .skip_while(|node| *node != current)
            .collect();

        prop_assert!(before.iter().all(|node| tree.is_valid(node)));
        prop_assert_eq!(cursor_nodes(post_order::PostOrder::resume(&tree, position)), expected);
    }

    #[test]
    fn erasure_off_the_path_keeps_remaining_visits(
        mut tree in arb_tree(),
        stop in any::<usize>(),
        erased in any::<usize>(),
    ) {
        init_tracing();

        let before: Vec<NodeRef> = expected_nodes(&tree);

        let position: Position<NodeRef> = {
            let mut cursor: PostOrderIter<'_, Tree<u32>> = tree.iter();

            for _ in 0..stop % before.len() {
                cursor.advance();
            }

            cursor.into_position()
        };

        let current: NodeRef = position.node().cloned().expect("not at the end");

        let candidates: Vec<&NodeRef> = before
            .iter()
            .filter(|node| keeps_path(node.path(), current.path()))
            .collect();

        prop_assume!(!candidates.is_empty());

        tree.erase_subtree(candidates[erased % candidates.len()]);

        let expected: Vec<NodeRef> = expected_nodes(&tree)
            .into_iter()
            .skip_while(|node| *node != current)
            .collect();

        prop_assert!(position.ancestors().iter().all(|node| tree.is_valid(node)));
        prop_assert_eq!(cursor_nodes(post_order::PostOrder::resume(&tree, position)), expected);
    }

    #[test]
    fn flat_tree_keeps_order(tree in arb_tree()) {
        let expected: Vec<u32> = tree.iter().copied().collect();

        let flat: FlatTree<u32> = FlatTree::from_tree(tree);

        let json: String = serde_json::to_string(&flat).expect("serializable");
        let parsed: FlatTree<u32> = serde_json::from_str(&json).expect("valid layout");

        prop_assert_eq!(flat.iter().copied().collect::<Vec<u32>>(), expected);
        prop_assert_eq!(parsed, flat);
    }

    #[test]
    fn human_readable_round_trip(tree in arb_tree()) {
        let hr_tree = tree.clone().into_human_readable().expect("non-empty tree");

        let json: String = serde_json::to_string(&hr_tree).expect("serializable");
        let parsed: Tree<u32> = serde_json::from_str::<path_tree::HumanReadableTree<u32>>(&json)
            .expect("valid tree")
            .into_tree();

        prop_assert_eq!(parsed, tree);
    }
}
