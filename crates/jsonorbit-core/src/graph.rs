use crate::tree::{NodeKind, NodePayload, VirtualNode};
use serde::{Deserialize, Serialize};

/// Edge stroke color shared by every edge.
pub const EDGE_STROKE: &str = "#94a3b8";
/// Edge stroke width shared by every edge.
pub const EDGE_STROKE_WIDTH: f64 = 3.0;
/// End-marker kind shared by every edge.
pub const EDGE_END_MARKER: &str = "arrowclosed";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One renderer-ready node record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    pub kind: NodeKind,
    pub position: Position,
    pub payload: NodePayload,
}

/// One renderer-ready edge record. The styling fields are constant
/// presentation attributes; correctness only depends on `source`/`target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub marker_end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

/// The flattened pipeline output handed to the rendering collaborator.
///
/// `bounds` is the content bounding box over every node rectangle — the datum
/// a renderer's "fit all content into view" operation consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonMapLayout {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub bounds: Option<Bounds>,
}

/// Depth-first flattening of a positioned tree into node and edge sequences.
///
/// Every node precedes its children; children keep their source order. Edge
/// ids encode the endpoints (`e<parent>-<child>`), so output is fully
/// deterministic for a given input.
pub fn flatten_tree(root: &VirtualNode) -> (Vec<FlowNode>, Vec<FlowEdge>) {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    push_subtree(root, &mut nodes, &mut edges);
    (nodes, edges)
}

fn push_subtree(node: &VirtualNode, nodes: &mut Vec<FlowNode>, edges: &mut Vec<FlowEdge>) {
    nodes.push(FlowNode {
        id: node.id.to_string(),
        kind: node.kind,
        position: Position {
            x: node.x,
            y: node.y,
        },
        payload: node.payload.clone(),
    });

    for child in &node.children {
        edges.push(FlowEdge {
            id: format!("e{}-{}", node.id, child.id),
            source: node.id.to_string(),
            target: child.id.to_string(),
            stroke: EDGE_STROKE.to_string(),
            stroke_width: EDGE_STROKE_WIDTH,
            marker_end: EDGE_END_MARKER.to_string(),
        });
        push_subtree(child, nodes, edges);
    }
}

/// Content bounding box over every node rectangle of a positioned tree.
pub fn bounds_of_tree(root: &VirtualNode) -> Option<Bounds> {
    let mut pts: Vec<(f64, f64)> = Vec::new();
    collect_corners(root, &mut pts);
    Bounds::from_points(pts)
}

fn collect_corners(node: &VirtualNode, pts: &mut Vec<(f64, f64)>) {
    pts.push((node.x, node.y));
    pts.push((node.x + node.width, node.y + node.height));
    for child in &node.children {
        collect_corners(child, pts);
    }
}
