//! Common test utilities for building grids and inspecting allocations.
use gridflow::prelude::*;

/// Builds a validated grid from `(id, label, power)` nodes and `(a, b, capacity)` links.
#[allow(dead_code)]
pub fn build_grid(nodes: &[(NodeId, &str, i64)], links: &[(NodeId, NodeId, i64)]) -> EnergyGrid {
    let definition = GridDefinition {
        nodes: nodes
            .iter()
            .map(|&(id, label, power)| NodeDefinition::new(id, label, power))
            .collect(),
        links: links
            .iter()
            .map(|&(a, b, capacity)| LinkDefinition::new(a, b, capacity))
            .collect(),
    };
    EnergyGrid::new(definition).expect("test grid should be valid")
}

/// Satisfied amount of the node declared with `id`.
#[allow(dead_code)]
pub fn satisfied_of(grid: &EnergyGrid, allocation: &Allocation, id: NodeId) -> i64 {
    let index = grid.index_of(id).expect("node id should exist");
    allocation.satisfied(index)
}

/// Scenario A: a producer feeding a consumer over a link sized to the demand.
#[allow(dead_code)]
pub fn direct_link_grid() -> EnergyGrid {
    build_grid(&[(1, "P", 10), (2, "C", -6)], &[(1, 2, 6)])
}

/// Scenario B: the link is narrower than the demand.
#[allow(dead_code)]
pub fn capacity_limited_grid() -> EnergyGrid {
    build_grid(&[(1, "P", 10), (2, "C", -8)], &[(1, 2, 5)])
}

/// Scenario C: P - C2 - C3 chain where the near consumer is served first.
#[allow(dead_code)]
pub fn chain_grid() -> EnergyGrid {
    build_grid(
        &[(1, "P", 10), (2, "C2", -4), (3, "C3", -10)],
        &[(1, 2, 10), (2, 3, 10)],
    )
}

/// Scenario D: one consumer has no links at all.
#[allow(dead_code)]
pub fn isolated_consumer_grid() -> EnergyGrid {
    build_grid(
        &[(1, "P", 10), (2, "C", -6), (3, "Island", -3)],
        &[(1, 2, 6)],
    )
}

/// Two producers where serving a later consumer requires rerouting an earlier one.
///
/// ```text
///   P1 --5-- C1 --5-- P2
///    \
///     5
///      J --5-- C2
/// ```
#[allow(dead_code)]
pub fn rerouting_grid() -> EnergyGrid {
    build_grid(
        &[
            (10, "P1", 5),
            (20, "P2", 5),
            (30, "C1", -5),
            (40, "J", -1),
            (50, "C2", -5),
        ],
        &[(10, 30, 5), (20, 30, 5), (10, 40, 5), (40, 50, 5)],
    )
}

#[allow(dead_code)]
pub const SCENARIO_A_TEXT: &str = "nodes
1 P 10
2 C -6
links
1 2 6
";
