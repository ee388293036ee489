//! Graph input model.
//!
//! `GraphData` mirrors the JSON a caller submits. `GraphModel` is the
//! normalized form every engine reads: canonical string ids, integer weights,
//! parsed coordinates, and an entry for every node an edge mentions.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{NodeRole, SolveError, SolveResult};

/// Weight used when an edge label is not a valid integer.
pub const DEFAULT_WEIGHT: i64 = 1;

/// Raw graph as submitted by a caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
    #[serde(default)]
    pub directed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNode {
    pub id: Value,
    #[serde(default)]
    pub x: Option<Value>,
    #[serde(default)]
    pub y: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEdge {
    pub from: Value,
    pub to: Value,
    #[serde(default, alias = "weight")]
    pub label: Option<Value>,
}

/// Canonical node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Coerces a JSON id to its canonical text. Strings pass through, numbers
    /// render as decimal text, anything else is rejected.
    pub fn from_json(value: &Value) -> Option<NodeId> {
        match value {
            Value::String(text) => Some(NodeId(text.clone())),
            Value::Number(number) => Some(NodeId(number.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId(value)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Node position used by the heuristic engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinates {
    Missing,
    Point { x: f64, y: f64 },
    Malformed(String),
}

impl Coordinates {
    /// Both axes absent gives `Missing`; a single absent axis reads as 0.
    pub fn parse(x: Option<&Value>, y: Option<&Value>) -> Self {
        match (parse_axis("x", x), parse_axis("y", y)) {
            (Err(detail), _) | (_, Err(detail)) => Coordinates::Malformed(detail),
            (Ok(None), Ok(None)) => Coordinates::Missing,
            (Ok(x), Ok(y)) => Coordinates::Point {
                x: x.unwrap_or(0.0),
                y: y.unwrap_or(0.0),
            },
        }
    }
}

fn parse_axis(axis: &str, value: Option<&Value>) -> Result<Option<f64>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| format!("{axis} is not representable as f64: {number}")),
        Some(other) => Err(format!("{axis} is not a number: {other}")),
    }
}

/// Coerces an edge label to a weight, falling back to [`DEFAULT_WEIGHT`].
pub fn parse_weight(label: Option<&Value>) -> i64 {
    match label {
        Some(Value::Number(number)) => number.as_i64().unwrap_or(DEFAULT_WEIGHT),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(DEFAULT_WEIGHT),
        _ => DEFAULT_WEIGHT,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub coordinates: Coordinates,
    /// False for nodes only mentioned by an edge endpoint.
    pub declared: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
}

/// Normalized, read-only graph for a single solve call.
#[derive(Debug, Clone)]
pub struct GraphModel {
    nodes: Vec<Node>,
    lookup: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    directed: bool,
}

impl GraphModel {
    pub fn from_data(data: &GraphData) -> SolveResult<Self> {
        let mut model = GraphModel {
            nodes: Vec::with_capacity(data.nodes.len()),
            lookup: HashMap::with_capacity(data.nodes.len()),
            edges: Vec::with_capacity(data.edges.len()),
            directed: data.directed,
        };

        for raw in &data.nodes {
            let id = canonical_id(&raw.id, "node id")?;
            let coordinates = Coordinates::parse(raw.x.as_ref(), raw.y.as_ref());
            match model.lookup.get(&id) {
                // a repeated id keeps its position, last coordinates win
                Some(&slot) => model.nodes[slot].coordinates = coordinates,
                None => model.push_node(Node {
                    id,
                    coordinates,
                    declared: true,
                }),
            }
        }

        for raw in &data.edges {
            let from = canonical_id(&raw.from, "edge source")?;
            let to = canonical_id(&raw.to, "edge target")?;
            model.ensure_node(&from);
            model.ensure_node(&to);
            model.edges.push(Edge {
                from,
                to,
                weight: parse_weight(raw.label.as_ref()),
            });
        }

        Ok(model)
    }

    fn push_node(&mut self, node: Node) {
        self.lookup.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    fn ensure_node(&mut self, id: &NodeId) {
        if !self.lookup.contains_key(id) {
            self.push_node(Node {
                id: id.clone(),
                coordinates: Coordinates::Missing,
                declared: false,
            });
        }
    }

    /// Resolves a requested start or end id against the declared nodes.
    pub fn require(&self, id: &str, role: NodeRole) -> SolveResult<&NodeId> {
        match self.node(id) {
            Some(node) if node.declared => Ok(&node.id),
            _ => Err(SolveError::unknown_node(role, id)),
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.lookup.get(id).map(|&slot| &self.nodes[slot])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|node| &node.id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

fn canonical_id(value: &Value, what: &str) -> SolveResult<NodeId> {
    NodeId::from_json(value).ok_or_else(|| {
        SolveError::invalid_request(format!("{what} must be a string or number, got {value}"))
    })
}
