use path_tree::{HrtNode, HumanReadableTree, NodeRef, Tree};

const NESTED: &str = r#"{"value":5,"children":[{"value":4,"children":[{"value":6},{"value":7}]},{"value":3}]}"#;

#[test]
fn parse_into_tree() {
    let hr_tree: HumanReadableTree<u32> = serde_json::from_str(NESTED).expect("valid tree");

    assert_eq!(hr_tree.root().value(), &5);
    assert_eq!(hr_tree.root().children().len(), 2);

    let tree: Tree<u32> = hr_tree.into_tree();

    assert_eq!(tree.iter().copied().collect::<Vec<u32>>(), [6, 7, 4, 3, 5]);
    assert_eq!(tree.value(&tree.node_at(&[0, 1]).expect("node exists")), &7);
}

#[test]
fn serialize_omits_empty_children() {
    let mut tree: Tree<u32> = Tree::new();

    let root: NodeRef = tree.make_root(5);
    let four: NodeRef = tree.add_child(&root, 4);
    tree.add_child(&four, 6);
    tree.add_child(&four, 7);
    tree.add_child(&root, 3);

    let hr_tree: HumanReadableTree<u32> = tree.into_human_readable().expect("non-empty tree");

    assert_eq!(
        serde_json::to_string(&hr_tree).expect("serializable"),
        NESTED
    );
}

#[test]
fn empty_children_make_leaf() {
    let node: HrtNode<u32> =
        serde_json::from_str(r#"{"value":1,"children":[]}"#).expect("valid node");

    assert_eq!(node, HrtNode::leaf(1));
    assert_eq!(
        HrtNode::with_children(2, vec![HrtNode::leaf(1)]).children(),
        [HrtNode::leaf(1)]
    );
}

#[test]
fn unknown_field() {
    assert!(serde_json::from_str::<HumanReadableTree<u32>>(r#"{"value":1,"parent":0}"#).is_err());
    assert!(serde_json::from_str::<HumanReadableTree<u32>>(r#"{"children":[]}"#).is_err());
}

#[test]
fn empty_tree() {
    assert_eq!(Tree::<u32>::new().into_human_readable(), None);
}

#[test]
fn into_tree_and_back() {
    let hr_tree: HumanReadableTree<&str> = HumanReadableTree::new(HrtNode::with_children(
        "root",
        vec![
            HrtNode::with_children("left", vec![HrtNode::leaf("inner")]),
            HrtNode::leaf("right"),
        ],
    ));

    let tree: Tree<&str> = hr_tree.clone().into();

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.iter().copied().collect::<Vec<&str>>(), ["inner", "left", "right", "root"]);
    assert_eq!(tree.into_human_readable(), Some(hr_tree));
}

#[test]
fn childless_branch_serializes_as_leaf() {
    let branch: HrtNode<u32> = HrtNode::Branch {
        value: 1,
        children: vec![],
    };

    let json: String = serde_json::to_string(&branch).expect("serializable");

    assert_eq!(json, r#"{"value":1}"#);
    assert_eq!(
        serde_json::from_str::<HrtNode<u32>>(&json).expect("valid node"),
        HrtNode::leaf(1)
    );
    assert_eq!(HrtNode::with_children(1, vec![]), HrtNode::leaf(1));
}

#[test]
fn from_tree_after_erase() {
    let mut tree: Tree<u32> = serde_json::from_str::<HumanReadableTree<u32>>(NESTED)
        .expect("valid tree")
        .into_tree();

    let four: NodeRef = tree.node_at(&[0]).expect("node exists");

    tree.erase_subtree(&four);

    let root: NodeRef = tree.root();
    tree.add_child(&root, 8);

    assert_eq!(
        serde_json::to_string(&tree.into_human_readable().expect("non-empty tree"))
            .expect("serializable"),
        r#"{"value":5,"children":[{"value":3},{"value":8}]}"#
    );
}
