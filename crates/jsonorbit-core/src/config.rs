/// Geometric constants for the layout pipeline.
///
/// The defaults reproduce the reference map view: a wide column per depth
/// level, small vertical gaps between sibling subtrees, and per-kind node
/// extents. One instance is threaded by reference through every stage.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal distance between depth levels (every child sits exactly
    /// this far right of its parent).
    pub x_spacing: f64,
    /// Vertical gap between sibling subtrees.
    pub y_spacing: f64,
    /// Width of object containers, the root included.
    pub container_width: f64,
    /// Vertical space one payload row occupies in an object container.
    pub row_height: f64,
    /// Fixed vertical padding added to an object container's rows.
    pub row_padding: f64,
    /// Width of the fixed label box used by property nodes and array containers.
    pub label_box_width: f64,
    /// Height of the fixed label box used by property nodes and array containers.
    pub label_box_height: f64,
    /// Side length of the square leaf nodes.
    pub leaf_size: f64,
    /// Display strings longer than this many characters are truncated with a
    /// trailing ellipsis marker. Truncation is purely presentational.
    pub display_value_limit: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_spacing: 500.0,
            y_spacing: 25.0,
            container_width: 280.0,
            row_height: 22.0,
            row_padding: 42.0,
            label_box_width: 200.0,
            label_box_height: 60.0,
            leaf_size: 70.0,
            display_value_limit: 25,
        }
    }
}

impl LayoutConfig {
    /// Height of an object container showing `rows` payload rows.
    pub fn container_height(&self, rows: usize) -> f64 {
        rows as f64 * self.row_height + self.row_padding
    }
}
