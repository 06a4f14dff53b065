use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node as written in the grid description.
pub type NodeId = i64;

/// The raw, unvalidated description of a grid.
/// This is what the parser produces and what `EnergyGrid::new` consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub links: Vec<LinkDefinition>,
}

/// A single producer or consumer.
///
/// A positive `power` is the maximum output of a producer, a negative `power`
/// is the maximum demand of a consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: NodeId,
    pub label: String,
    pub power: i64,
}

/// An undirected, capacitated connection between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDefinition {
    pub a: NodeId,
    pub b: NodeId,
    pub capacity: i64,
}

/// Whether a node supplies or draws power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Producer,
    Consumer,
}

impl NodeDefinition {
    pub fn new(id: NodeId, label: impl Into<String>, power: i64) -> Self {
        Self {
            id,
            label: label.into(),
            power,
        }
    }

    pub fn role(&self) -> Role {
        if self.power > 0 {
            Role::Producer
        } else {
            Role::Consumer
        }
    }

    pub fn is_producer(&self) -> bool {
        self.role() == Role::Producer
    }

    /// Maximum output for a producer, maximum demand for a consumer.
    ///
    /// [`EnergyGrid`](super::EnergyGrid) rejects `i64::MIN`, whose magnitude has no `i64` form.
    pub fn declared(&self) -> i64 {
        self.power.abs()
    }
}

impl LinkDefinition {
    pub fn new(a: NodeId, b: NodeId, capacity: i64) -> Self {
        Self { a, b, capacity }
    }
}

/// Renders the definition in the textual grid format accepted by the parser.
impl fmt::Display for GridDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes")?;
        for node in &self.nodes {
            writeln!(f, "{} {} {}", node.id, node.label, node.power)?;
        }
        writeln!(f, "links")?;
        for link in &self.links {
            writeln!(f, "{} {} {}", link.a, link.b, link.capacity)?;
        }
        Ok(())
    }
}
