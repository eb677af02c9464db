use crate::config::LayoutConfig;
use crate::tree::VirtualNode;

/// Post-order measurement pass: computes each node's `tree_height`, the
/// vertical space its whole subtree needs.
///
/// A node without children occupies its own height. An internal node occupies
/// the larger of its own height and the stacked heights of its child subtrees
/// separated by `y_spacing` — which is exactly what keeps sibling subtrees
/// from overlapping once positioned.
///
/// Returns the root's `tree_height` for convenience.
pub fn measure_tree(node: &mut VirtualNode, config: &LayoutConfig) -> f64 {
    if node.children.is_empty() {
        node.tree_height = node.height;
        return node.tree_height;
    }

    let mut children_height = 0.0;
    for child in &mut node.children {
        children_height += measure_tree(child, config);
    }
    children_height += (node.children.len() - 1) as f64 * config.y_spacing;

    node.tree_height = node.height.max(children_height);
    node.tree_height
}
