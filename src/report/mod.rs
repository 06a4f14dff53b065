use crate::allocator::Allocation;
use crate::grid::{EnergyGrid, NodeId, Role};
use serde::Serialize;
use std::fmt;

pub mod formatter;

pub use formatter::ReportFormatter;

/// Outcome for a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeReport {
    pub id: NodeId,
    pub label: String,
    pub role: Role,
    /// Output delivered (producer) or power received (consumer).
    pub satisfied: i64,
    /// Declared maximum output or demand.
    pub declared: i64,
}

/// Net power moved over one link, oriented in the direction it flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReport {
    pub from: NodeId,
    pub to: NodeId,
    pub from_label: String,
    pub to_label: String,
    pub amount: i64,
    pub capacity: i64,
}

/// Per-node and per-link summary of an allocation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationReport {
    pub nodes: Vec<NodeReport>,
    pub transfers: Vec<TransferReport>,
}

impl AllocationReport {
    /// Nodes are listed in declaration order; links without net flow are omitted.
    pub fn new(grid: &EnergyGrid, allocation: &Allocation) -> Self {
        let nodes = grid
            .node_indices()
            .map(|index| {
                let node = grid.node(index);
                NodeReport {
                    id: node.id,
                    label: node.label.clone(),
                    role: node.role(),
                    satisfied: allocation.satisfied(index),
                    declared: node.declared(),
                }
            })
            .collect();

        let transfers = grid
            .links()
            .iter()
            .filter_map(|link| {
                let net = allocation.flow(link.a, link.b);
                let (from, to) = match net.signum() {
                    1 => (link.a, link.b),
                    -1 => (link.b, link.a),
                    _ => return None,
                };
                Some(TransferReport {
                    from: grid.node(from).id,
                    to: grid.node(to).id,
                    from_label: grid.node(from).label.clone(),
                    to_label: grid.node(to).label.clone(),
                    amount: net.abs(),
                    capacity: link.capacity,
                })
            })
            .collect();

        Self { nodes, transfers }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for AllocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ReportFormatter::format_report(self))
    }
}
