use crate::config::LayoutConfig;
use crate::tree::VirtualNode;

/// Pre-order layout pass: assigns each node its top-left `(x, y)` anchor.
///
/// Requires `tree_height` to be up to date (run [`crate::measure_tree`]
/// first). Children all sit in one column `x_spacing` right of their parent.
/// Vertically, the children are stacked as a block centered on the parent's
/// own center; each child gets a slot as tall as its subtree and is centered
/// within that slot before its own children are placed relative to it.
pub fn position_tree(node: &mut VirtualNode, x: f64, y: f64, config: &LayoutConfig) {
    node.x = x;
    node.y = y;

    if node.children.is_empty() {
        return;
    }

    let total_children_height: f64 = node
        .children
        .iter()
        .map(|child| child.tree_height)
        .sum::<f64>()
        + (node.children.len() - 1) as f64 * config.y_spacing;

    let parent_center_y = y + node.height / 2.0;
    let mut slot_y = parent_center_y - total_children_height / 2.0;
    let child_x = x + config.x_spacing;

    for child in &mut node.children {
        let slot_height = child.tree_height;
        let child_y = slot_y + (slot_height - child.height) / 2.0;
        position_tree(child, child_x, child_y, config);
        slot_y += slot_height + config.y_spacing;
    }
}
