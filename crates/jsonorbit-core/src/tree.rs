use crate::config::LayoutConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What a virtual node stands for in the source value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A JSON object or array (the root included).
    Container,
    /// An intermediate node labeling the key of a nested object value.
    Property,
    /// A primitive element inside an array.
    Leaf,
}

/// One rendered row of a container or property node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadEntry {
    pub key: String,
    pub display_value: String,
}

impl PayloadEntry {
    /// A row showing only a key label (property nodes, array containers).
    pub fn key_only(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_value: String::new(),
        }
    }

    pub fn pair(key: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_value: display_value.into(),
        }
    }
}

/// Renderable content of a virtual node: key/value rows for containers and
/// property nodes, a single label for leaves.
///
/// Serializes untagged, so containers carry a bare array of rows and leaves a
/// bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodePayload {
    Properties(Vec<PayloadEntry>),
    Label(String),
}

/// One node of the hierarchical structure the pipeline operates on.
///
/// `tree_height`, `x` and `y` are derived fields, written by the measure and
/// layout passes of the same pipeline invocation; the tree shape itself is
/// never mutated after the build pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNode {
    /// Unique within one build pass, assigned in construction order. The root
    /// is always `0`.
    pub id: u64,
    /// Root is 0; every child is one deeper than its parent.
    pub depth: u32,
    pub kind: NodeKind,
    pub width: f64,
    pub height: f64,
    /// Vertical extent of this node's whole subtree. Always ≥ `height` once
    /// measured.
    pub tree_height: f64,
    /// Top-left anchor, assigned by the layout pass.
    pub x: f64,
    pub y: f64,
    pub payload: NodePayload,
    pub children: Vec<VirtualNode>,
}

/// Builds the virtual tree for one JSON value.
///
/// The returned root is a container whose payload starts with the fixed
/// `root` label; a top-level object contributes its simple entries as further
/// payload rows, a top-level array contributes children directly, and a
/// top-level primitive becomes a single leaf child.
pub fn build_virtual_tree(value: &Value, config: &LayoutConfig) -> VirtualNode {
    TreeBuilder::new(config).build_root(value)
}

/// An object entry whose value grows the tree instead of a payload row.
enum ComplexValue<'v> {
    Array(&'v [Value]),
    Object(&'v Map<String, Value>),
}

/// One build pass. Owns the id counter, so concurrent or repeated builds are
/// independent of each other.
struct TreeBuilder<'c> {
    next_id: u64,
    config: &'c LayoutConfig,
}

impl<'c> TreeBuilder<'c> {
    fn new(config: &'c LayoutConfig) -> Self {
        Self { next_id: 0, config }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn build_root(&mut self, value: &Value) -> VirtualNode {
        let id = self.alloc_id();
        let mut payload = vec![PayloadEntry::key_only("root")];
        let children = match value {
            Value::Object(entries) => {
                let (simple, children) = self.split_object(entries, 0);
                payload.extend(simple);
                children
            }
            Value::Array(items) => self.array_children(items, 1),
            primitive => vec![self.build_leaf(primitive, 1)],
        };

        self.object_container(id, 0, payload, children)
    }

    /// Partitions an object's entries: simple values become payload rows in
    /// entry order, arrays become child containers, nested objects become
    /// property nodes wrapping a child container one level deeper.
    fn split_object(
        &mut self,
        entries: &Map<String, Value>,
        depth: u32,
    ) -> (Vec<PayloadEntry>, Vec<VirtualNode>) {
        let mut simple = Vec::new();
        let mut complex = Vec::new();
        for (key, value) in entries {
            match value {
                Value::Array(items) => complex.push((key, ComplexValue::Array(items))),
                Value::Object(map) => complex.push((key, ComplexValue::Object(map))),
                other => simple.push(PayloadEntry::pair(key.as_str(), self.display_value(other))),
            }
        }

        let children = complex
            .into_iter()
            .map(|(key, value)| match value {
                ComplexValue::Array(items) => self.build_array(items, depth + 1, Some(key.as_str())),
                ComplexValue::Object(map) => self.build_property(key, map, depth + 1),
            })
            .collect();

        (simple, children)
    }

    fn build_object(&mut self, entries: &Map<String, Value>, depth: u32) -> VirtualNode {
        let id = self.alloc_id();
        let (payload, children) = self.split_object(entries, depth);
        self.object_container(id, depth, payload, children)
    }

    fn object_container(
        &self,
        id: u64,
        depth: u32,
        payload: Vec<PayloadEntry>,
        children: Vec<VirtualNode>,
    ) -> VirtualNode {
        let height = self.config.container_height(payload.len());
        VirtualNode {
            id,
            depth,
            kind: NodeKind::Container,
            width: self.config.container_width,
            height,
            tree_height: height,
            x: 0.0,
            y: 0.0,
            payload: NodePayload::Properties(payload),
            children,
        }
    }

    /// An array becomes a container showing only its key label; its extents
    /// are the fixed label box since it has no property rows of its own.
    fn build_array(&mut self, items: &[Value], depth: u32, key: Option<&str>) -> VirtualNode {
        let id = self.alloc_id();
        let label = key.unwrap_or("array");
        let children = self.array_children(items, depth + 1);
        VirtualNode {
            id,
            depth,
            kind: NodeKind::Container,
            width: self.config.label_box_width,
            height: self.config.label_box_height,
            tree_height: self.config.label_box_height,
            x: 0.0,
            y: 0.0,
            payload: NodePayload::Properties(vec![PayloadEntry::key_only(label)]),
            children,
        }
    }

    /// Array elements: non-array objects recurse as containers, everything
    /// else (primitives and nested arrays) renders as a leaf.
    fn array_children(&mut self, items: &[Value], depth: u32) -> Vec<VirtualNode> {
        items
            .iter()
            .map(|item| match item {
                Value::Object(map) => self.build_object(map, depth),
                other => self.build_leaf(other, depth),
            })
            .collect()
    }

    fn build_property(
        &mut self,
        key: &str,
        entries: &Map<String, Value>,
        depth: u32,
    ) -> VirtualNode {
        let id = self.alloc_id();
        let child = self.build_object(entries, depth + 1);
        VirtualNode {
            id,
            depth,
            kind: NodeKind::Property,
            width: self.config.label_box_width,
            height: self.config.label_box_height,
            tree_height: self.config.label_box_height,
            x: 0.0,
            y: 0.0,
            payload: NodePayload::Properties(vec![PayloadEntry::key_only(key)]),
            children: vec![child],
        }
    }

    fn build_leaf(&mut self, value: &Value, depth: u32) -> VirtualNode {
        let id = self.alloc_id();
        let size = self.config.leaf_size;
        VirtualNode {
            id,
            depth,
            kind: NodeKind::Leaf,
            width: size,
            height: size,
            tree_height: size,
            x: 0.0,
            y: 0.0,
            payload: NodePayload::Label(display_string(value)),
            children: Vec::new(),
        }
    }

    /// Display form of a simple property value, truncated for the rendered
    /// label only. The underlying value is never altered.
    fn display_value(&self, value: &Value) -> String {
        truncate_display(display_string(value), self.config.display_value_limit)
    }
}

/// The string form a value renders as, following JavaScript `String(value)`
/// semantics: strings are unquoted, `null` spells itself out, and floats use
/// the shortest round-trip formatting. A value with no primitive string form
/// (a nested array reached as an array element) renders as compact JSON.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_display(n),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number_display(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => {
            let mut buf = ryu_js::Buffer::new();
            buf.format(f).to_string()
        }
        None => n.to_string(),
    }
}

fn truncate_display(s: String, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s;
    }
    let mut out: String = s.chars().take(limit).collect();
    out.push_str("...");
    out
}
