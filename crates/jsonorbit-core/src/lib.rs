#![forbid(unsafe_code)]

//! JSON-to-graph layout pipeline (headless).
//!
//! Converts an already-parsed JSON value into a renderer-ready node/edge list
//! in four strictly sequential stages:
//!
//! 1. build a virtual tree of typed nodes ([`build_virtual_tree`])
//! 2. measure subtree vertical extents ([`measure_tree`])
//! 3. assign non-overlapping coordinates ([`position_tree`])
//! 4. flatten into node/edge sequences ([`flatten_tree`])
//!
//! [`layout_json_map`] runs all four stages and is the intended entry point.
//! The pipeline is synchronous, allocation-fresh per invocation, and total:
//! the input is a valid JSON value by contract, so no stage can fail.
//!
//! Design goals:
//! - deterministic, testable outputs (serialized models are stable JSON)
//! - no shared state between invocations (ids are scoped to one build pass)
//! - no I/O; rendering and user interaction belong to the embedding UI

pub mod config;
pub mod graph;
pub mod layout;
pub mod measure;
pub mod tree;

pub use config::LayoutConfig;
pub use graph::{Bounds, FlowEdge, FlowNode, JsonMapLayout, Position, bounds_of_tree, flatten_tree};
pub use layout::position_tree;
pub use measure::measure_tree;
pub use tree::{NodeKind, NodePayload, PayloadEntry, VirtualNode, build_virtual_tree};

use serde_json::Value;

/// Runs the full build → measure → layout → flatten pipeline on one JSON value.
///
/// Every call allocates a fresh tree; nothing is shared with previous calls, so
/// the same value (by deep equality) always yields the same layout.
pub fn layout_json_map(value: &Value, config: &LayoutConfig) -> JsonMapLayout {
    let mut root = build_virtual_tree(value, config);
    measure_tree(&mut root, config);
    position_tree(&mut root, 0.0, 0.0, config);

    let bounds = bounds_of_tree(&root);
    let (nodes, edges) = flatten_tree(&root);
    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "json map layout complete"
    );

    JsonMapLayout {
        nodes,
        edges,
        bounds,
    }
}
