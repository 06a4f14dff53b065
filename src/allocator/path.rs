use super::residual::{ResidualFlow, SatisfiedAmounts};
use crate::grid::{EnergyGrid, NodeIndex};
use std::collections::VecDeque;

/// A route from a consumer to a producer that can carry `bottleneck` more power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    /// Node sequence starting at the consumer and ending at the producer.
    pub nodes: Vec<NodeIndex>,
    pub bottleneck: i64,
}

impl AugmentingPath {
    pub fn consumer(&self) -> NodeIndex {
        self.nodes[0]
    }

    pub fn producer(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }
}

/// One frontier entry of the search.
#[derive(Debug, Clone, Copy)]
enum Hop {
    /// Continue through `node`, reached from `parent`.
    Node {
        node: NodeIndex,
        bottleneck: i64,
        parent: Option<NodeIndex>,
    },
    /// The virtual hop out of a producer with spare output.
    Sink { producer: NodeIndex, bottleneck: i64 },
}

/// Finds a shortest (fewest hops) path from consumer `root` to any producer
/// that still has residual capacity on every link and spare output at the end.
///
/// Returns `None` when the consumer is already satisfied or no producer is reachable
/// through residual capacity.
pub fn find_augmenting_path(
    grid: &EnergyGrid,
    root: NodeIndex,
    flow: &ResidualFlow,
    satisfied: &SatisfiedAmounts,
) -> Option<AugmentingPath> {
    assert!(
        !grid.is_producer(root),
        "augmenting path search must start at a consumer, got producer '{}'",
        grid.node(root).label
    );

    let mut visited = vec![false; grid.len()];
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; grid.len()];
    let mut queue = VecDeque::from([Hop::Node {
        node: root,
        bottleneck: satisfied.remaining(grid, root),
        parent: None,
    }]);

    while let Some(hop) = queue.pop_front() {
        let (node, bottleneck, parent) = match hop {
            Hop::Sink {
                producer,
                bottleneck,
            } => {
                let nodes = trace_back(&predecessor, producer, root);
                tracing::trace!(?nodes, bottleneck, "augmenting path found");
                return Some(AugmentingPath { nodes, bottleneck });
            }
            Hop::Node {
                node,
                bottleneck,
                parent,
            } => (node, bottleneck, parent),
        };

        if visited[node] {
            continue;
        }
        visited[node] = true;
        predecessor[node] = parent;

        for adjacent in grid.adjacent(node) {
            // Power travels neighbor -> node, so flow already sent node -> neighbor frees capacity.
            let residual = adjacent.capacity - flow.flow(adjacent.neighbor, node);
            assert!(
                (0..=2 * adjacent.capacity).contains(&residual),
                "residual capacity {residual} from node {} to {} is outside [0, {}]",
                adjacent.neighbor,
                node,
                2 * adjacent.capacity
            );
            let carried = bottleneck.min(residual);
            if carried > 0 && !visited[adjacent.neighbor] {
                queue.push_back(Hop::Node {
                    node: adjacent.neighbor,
                    bottleneck: carried,
                    parent: Some(node),
                });
            }
        }

        if grid.is_producer(node) {
            let spare = satisfied.remaining(grid, node);
            assert!(
                (0..=grid.node(node).power).contains(&spare),
                "producer '{}' reports spare output {spare} outside [0, {}]",
                grid.node(node).label,
                grid.node(node).power
            );
            let carried = bottleneck.min(spare);
            if carried > 0 {
                queue.push_back(Hop::Sink {
                    producer: node,
                    bottleneck: carried,
                });
            }
        }
    }

    None
}

fn trace_back(
    predecessor: &[Option<NodeIndex>],
    producer: NodeIndex,
    root: NodeIndex,
) -> Vec<NodeIndex> {
    let mut nodes = vec![producer];
    let mut current = producer;
    while let Some(previous) = predecessor[current] {
        nodes.push(previous);
        current = previous;
    }
    nodes.reverse();
    assert_eq!(nodes[0], root, "reconstructed path does not start at the consumer");
    nodes
}
