use jsonorbit_core::{
    LayoutConfig, NodeKind, NodePayload, VirtualNode, build_virtual_tree, layout_json_map,
};
use serde_json::json;

fn build(value: serde_json::Value) -> VirtualNode {
    build_virtual_tree(&value, &LayoutConfig::default())
}

fn payload_rows(node: &VirtualNode) -> &[jsonorbit_core::PayloadEntry] {
    match &node.payload {
        NodePayload::Properties(rows) => rows,
        NodePayload::Label(label) => panic!("expected property rows, got leaf label {label:?}"),
    }
}

fn leaf_label(node: &VirtualNode) -> &str {
    match &node.payload {
        NodePayload::Label(label) => label,
        NodePayload::Properties(_) => panic!("expected leaf label, got property rows"),
    }
}

fn walk<'t>(node: &'t VirtualNode, out: &mut Vec<&'t VirtualNode>) {
    out.push(node);
    for child in &node.children {
        walk(child, out);
    }
}

fn kinds_in_order(root: &VirtualNode) -> Vec<NodeKind> {
    let mut nodes = Vec::new();
    walk(root, &mut nodes);
    nodes.iter().map(|n| n.kind).collect()
}

#[test]
fn empty_object_yields_root_only() {
    let root = build(json!({}));
    assert_eq!(root.kind, NodeKind::Container);
    assert_eq!(root.id, 0);
    assert_eq!(root.depth, 0);
    assert!(root.children.is_empty());

    let rows = payload_rows(&root);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, "root");
    assert_eq!(rows[0].display_value, "");
}

#[test]
fn empty_array_yields_root_only() {
    let root = build(json!([]));
    assert_eq!(root.kind, NodeKind::Container);
    assert!(root.children.is_empty());
}

#[test]
fn flat_object_keeps_simple_entries_in_root_payload() {
    let root = build(json!({"a": 1}));
    assert!(root.children.is_empty());

    let rows = payload_rows(&root);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "root");
    assert_eq!(rows[1].key, "a");
    assert_eq!(rows[1].display_value, "1");
}

#[test]
fn nested_object_goes_through_a_property_node() {
    let root = build(json!({"a": {"b": 1}}));
    assert_eq!(
        kinds_in_order(&root),
        vec![NodeKind::Container, NodeKind::Property, NodeKind::Container]
    );

    let property = &root.children[0];
    assert_eq!(property.depth, 1);
    assert_eq!(payload_rows(property).len(), 1);
    assert_eq!(payload_rows(property)[0].key, "a");
    assert_eq!(payload_rows(property)[0].display_value, "");

    let container = &property.children[0];
    assert_eq!(container.depth, 2);
    assert_eq!(payload_rows(container).len(), 1);
    assert_eq!(payload_rows(container)[0].key, "b");
    assert_eq!(payload_rows(container)[0].display_value, "1");
}

#[test]
fn array_value_becomes_a_labeled_container_with_leaves() {
    let root = build(json!({"arr": [1, 2, 3]}));
    assert_eq!(
        kinds_in_order(&root),
        vec![
            NodeKind::Container,
            NodeKind::Container,
            NodeKind::Leaf,
            NodeKind::Leaf,
            NodeKind::Leaf
        ]
    );

    let arr = &root.children[0];
    assert_eq!(payload_rows(arr)[0].key, "arr");
    assert_eq!(arr.children.len(), 3);
    let labels: Vec<&str> = arr.children.iter().map(leaf_label).collect();
    assert_eq!(labels, vec!["1", "2", "3"]);
}

#[test]
fn top_level_array_mixes_leaves_and_containers_under_root() {
    let root = build(json!([1, {"x": 1}]));
    assert_eq!(
        kinds_in_order(&root),
        vec![NodeKind::Container, NodeKind::Leaf, NodeKind::Container]
    );
    assert_eq!(leaf_label(&root.children[0]), "1");
    assert_eq!(payload_rows(&root.children[1])[0].key, "x");
}

#[test]
fn nested_arrays_keep_their_own_key_label() {
    // An array reached through an object key carries that key directly, with
    // no property-node indirection; only a keyless array would fall back to
    // the literal "array" label.
    let root = build(json!({"outer": {"inner": [1]}}));
    let property = &root.children[0];
    let container = &property.children[0];
    let arr = &container.children[0];
    assert_eq!(payload_rows(arr)[0].key, "inner");
}

#[test]
fn ids_follow_construction_order_depth_first() {
    let root = build(json!({"b": 1, "a": {"x": 1}, "c": 2, "d": [1, 2]}));
    let mut nodes = Vec::new();
    walk(&root, &mut nodes);

    // Ids are allocated parent-first, children depth-first, so the pre-order
    // walk sees them sequentially.
    let ids: Vec<u64> = nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, (0..nodes.len() as u64).collect::<Vec<_>>());
}

#[test]
fn children_keep_source_entry_order() {
    let root = build(json!({"b": 1, "a": {"x": 1}, "c": 2, "d": [1, 2]}));

    let rows = payload_rows(&root);
    let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["root", "b", "c"]);

    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].kind, NodeKind::Property);
    assert_eq!(payload_rows(&root.children[0])[0].key, "a");
    assert_eq!(root.children[1].kind, NodeKind::Container);
    assert_eq!(payload_rows(&root.children[1])[0].key, "d");
}

#[test]
fn every_child_is_one_level_deeper_than_its_parent() {
    fn check(node: &VirtualNode) {
        for child in &node.children {
            assert_eq!(child.depth, node.depth + 1);
            check(child);
        }
    }
    let root = build(json!({"a": {"b": {"c": [1, {"d": 2}]}}, "e": [[1], "x"]}));
    assert_eq!(root.depth, 0);
    check(&root);
}

#[test]
fn long_display_values_are_truncated_with_ellipsis() {
    let root = build(json!({"s": "abcdefghijklmnopqrstuvwxyz"}));
    let rows = payload_rows(&root);
    assert_eq!(rows[1].display_value, "abcdefghijklmnopqrstuvwxy...");
}

#[test]
fn display_values_at_the_limit_are_untouched() {
    let exactly_25 = "abcdefghijklmnopqrstuvwxy";
    let root = build(json!({"s": exactly_25}));
    assert_eq!(payload_rows(&root)[1].display_value, exactly_25);
}

#[test]
fn primitive_display_strings_follow_javascript_conventions() {
    let root = build(json!({
        "null": null,
        "yes": true,
        "no": false,
        "int": 42,
        "neg": -7,
        "float": 1.5,
        "text": "plain"
    }));
    let rows = payload_rows(&root);
    let by_key = |k: &str| {
        rows.iter()
            .find(|r| r.key == k)
            .map(|r| r.display_value.as_str())
            .unwrap_or_else(|| panic!("missing row {k}"))
    };
    assert_eq!(by_key("null"), "null");
    assert_eq!(by_key("yes"), "true");
    assert_eq!(by_key("no"), "false");
    assert_eq!(by_key("int"), "42");
    assert_eq!(by_key("neg"), "-7");
    assert_eq!(by_key("float"), "1.5");
    assert_eq!(by_key("text"), "plain");
}

#[test]
fn nested_array_element_renders_as_a_stringified_leaf() {
    // Array-of-arrays does not recurse; the inner array is one leaf showing
    // its compact JSON text. This keeps the two interpretations (leaf vs
    // container) distinguishable.
    let root = build(json!([[1, 2], 3]));
    assert_eq!(
        kinds_in_order(&root),
        vec![NodeKind::Container, NodeKind::Leaf, NodeKind::Leaf]
    );
    assert_eq!(leaf_label(&root.children[0]), "[1,2]");
    assert_eq!(leaf_label(&root.children[1]), "3");
}

#[test]
fn top_level_primitive_becomes_a_single_leaf_child() {
    for (value, label) in [
        (json!("hello"), "hello"),
        (json!(5), "5"),
        (json!(true), "true"),
        (json!(null), "null"),
    ] {
        let root = build(value);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].kind, NodeKind::Leaf);
        assert_eq!(leaf_label(&root.children[0]), label);
    }
}

#[test]
fn container_heights_grow_with_payload_rows() {
    let config = LayoutConfig::default();

    // Root with two simple entries: three payload rows with the root label.
    let root = build(json!({"a": 1, "b": 2}));
    assert_eq!(root.height, config.container_height(3));
    assert_eq!(root.width, config.container_width);

    // Nested object container with two rows of its own.
    let root = build(json!({"o": {"a": 1, "b": 2}}));
    let property = &root.children[0];
    let container = &property.children[0];
    assert_eq!(container.height, config.container_height(2));
    assert_eq!(property.height, config.label_box_height);
    assert_eq!(property.width, config.label_box_width);

    // Array containers and leaves use fixed extents.
    let root = build(json!({"arr": [1]}));
    let arr = &root.children[0];
    assert_eq!(arr.height, config.label_box_height);
    assert_eq!(arr.width, config.label_box_width);
    let leaf = &arr.children[0];
    assert_eq!(leaf.width, config.leaf_size);
    assert_eq!(leaf.height, config.leaf_size);
}

#[test]
fn rebuilding_the_same_value_is_idempotent() {
    let value = json!({"a": {"b": [1, 2, {"c": "x"}]}, "d": 4});
    let config = LayoutConfig::default();

    let first = serde_json::to_value(layout_json_map(&value, &config)).expect("serialize");
    let second = serde_json::to_value(layout_json_map(&value, &config)).expect("serialize");
    assert_eq!(first, second);
}
