use crate::grid::{EnergyGrid, NodeIndex};
use ahash::AHashMap;

/// Signed flow per ordered node pair.
///
/// `flow(u, v) == -flow(v, u)` holds for every pair; pairs that never carried
/// flow are not stored and read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidualFlow {
    flow: AHashMap<(NodeIndex, NodeIndex), i64>,
}

impl ResidualFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flow(&self, from: NodeIndex, to: NodeIndex) -> i64 {
        self.flow.get(&(from, to)).copied().unwrap_or(0)
    }

    /// Sends `amount` from `from` to `to`, updating both directions.
    pub fn push(&mut self, from: NodeIndex, to: NodeIndex, amount: i64) {
        *self.flow.entry((from, to)).or_insert(0) += amount;
        *self.flow.entry((to, from)).or_insert(0) -= amount;
    }

    /// Net flow leaving `node` over all of its links.
    ///
    /// Summed as `i128`: a node with many near-capacity links can exceed `i64`.
    pub fn net_outflow(&self, grid: &EnergyGrid, node: NodeIndex) -> i128 {
        grid.adjacent(node)
            .iter()
            .map(|adjacent| i128::from(self.flow(node, adjacent.neighbor)))
            .sum()
    }

    /// Asserts antisymmetry and the capacity bound of the link joining `u` and `v`.
    pub(crate) fn assert_link_invariant(&self, grid: &EnergyGrid, u: NodeIndex, v: NodeIndex) {
        let forward = self.flow(u, v);
        let backward = self.flow(v, u);
        assert_eq!(
            forward, -backward,
            "residual flow lost antisymmetry between nodes {u} and {v}: {forward} vs {backward}"
        );
        let capacity = grid
            .link_capacity(u, v)
            .unwrap_or_else(|| panic!("flow was applied between unlinked nodes {u} and {v}"));
        assert!(
            forward.abs() <= capacity,
            "flow {forward} between nodes {u} and {v} exceeds link capacity {capacity}"
        );
    }
}

/// Amount delivered by each producer or received by each consumer so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatisfiedAmounts {
    amounts: Vec<i64>,
}

impl SatisfiedAmounts {
    pub fn new(grid: &EnergyGrid) -> Self {
        Self {
            amounts: vec![0; grid.len()],
        }
    }

    pub fn get(&self, node: NodeIndex) -> i64 {
        self.amounts[node]
    }

    /// What `node` can still supply (producer) or still wants (consumer).
    pub fn remaining(&self, grid: &EnergyGrid, node: NodeIndex) -> i64 {
        grid.node(node).declared() - self.amounts[node]
    }

    pub(crate) fn add(&mut self, grid: &EnergyGrid, node: NodeIndex, amount: i64) {
        let updated = self.amounts[node] + amount;
        let declared = grid.node(node).declared();
        assert!(
            (0..=declared).contains(&updated),
            "satisfied amount {updated} of node '{}' is outside [0, {declared}]",
            grid.node(node).label
        );
        self.amounts[node] = updated;
    }
}
