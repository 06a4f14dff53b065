//! The power allocation engine.
//!
//! Consumers are served one at a time, nearest-to-a-producer first. The current
//! consumer is drained through repeated shortest augmenting paths until no
//! path remains, and is then dropped for good. A consumer is never revisited,
//! even if later allocations would reopen a route for it, so the result is a
//! greedy, order-dependent allocation rather than a maximum flow.

use crate::grid::{EnergyGrid, NodeIndex};
use itertools::Itertools;
use tracing::{debug, info};

pub mod path;
pub mod priority;
pub mod residual;

pub use path::{AugmentingPath, find_augmenting_path};
pub use priority::{consumer_priorities, producer_distances};
pub use residual::{ResidualFlow, SatisfiedAmounts};

/// How consumers are ordered for service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityPolicy {
    /// Consumers with the fewest hops to any producer are served first.
    #[default]
    NearestProducerFirst,
}

impl PriorityPolicy {
    fn order(self, grid: &EnergyGrid) -> Vec<NodeIndex> {
        match self {
            PriorityPolicy::NearestProducerFirst => consumer_priorities(grid),
        }
    }
}

/// Final state of one allocation pass.
#[derive(Debug, Clone)]
pub struct Allocation {
    satisfied: SatisfiedAmounts,
    flow: ResidualFlow,
    augmentations: Vec<AugmentingPath>,
}

impl Allocation {
    /// Power delivered by a producer or received by a consumer.
    pub fn satisfied(&self, node: NodeIndex) -> i64 {
        self.satisfied.get(node)
    }

    pub fn satisfied_amounts(&self) -> &SatisfiedAmounts {
        &self.satisfied
    }

    /// Net flow from `from` to `to`; negative when power moves the other way.
    pub fn flow(&self, from: NodeIndex, to: NodeIndex) -> i64 {
        self.flow.flow(from, to)
    }

    pub fn residual_flow(&self) -> &ResidualFlow {
        &self.flow
    }

    /// Every path that was applied, in application order.
    pub fn augmentations(&self) -> &[AugmentingPath] {
        &self.augmentations
    }

    /// Total power moved from producers to consumers, which may exceed `i64`
    /// when several consumers each receive close to `i64::MAX`.
    pub fn total_delivered(&self) -> i128 {
        self.augmentations
            .iter()
            .map(|path| i128::from(path.bottleneck))
            .sum()
    }
}

/// Drives the priority queue and path search over a single grid.
///
/// The allocator exclusively owns the residual flow, the satisfied amounts and
/// the queue for the duration of one pass.
pub struct FlowAllocator<'a> {
    grid: &'a EnergyGrid,
    queue: Vec<NodeIndex>,
    flow: ResidualFlow,
    satisfied: SatisfiedAmounts,
    augmentations: Vec<AugmentingPath>,
}

impl<'a> FlowAllocator<'a> {
    pub fn new(grid: &'a EnergyGrid) -> Self {
        Self::with_policy(grid, PriorityPolicy::default())
    }

    pub fn with_policy(grid: &'a EnergyGrid, policy: PriorityPolicy) -> Self {
        Self {
            grid,
            queue: policy.order(grid),
            flow: ResidualFlow::new(),
            satisfied: SatisfiedAmounts::new(grid),
            augmentations: Vec::new(),
        }
    }

    /// Runs until every queued consumer has been drained or dropped.
    pub fn resolve(mut self) -> Allocation {
        info!(
            nodes = self.grid.len(),
            links = self.grid.links().len(),
            queued_consumers = self.queue.len(),
            "starting allocation pass"
        );

        while let Some(consumer) = self.queue.pop() {
            match find_augmenting_path(self.grid, consumer, &self.flow, &self.satisfied) {
                Some(path) => {
                    // Retry the same consumer before anyone else.
                    self.queue.push(consumer);
                    self.apply(path);
                }
                None => debug!(
                    consumer = %self.grid.node(consumer).label,
                    received = self.satisfied.get(consumer),
                    "no augmenting path left, dropping consumer"
                ),
            }
        }

        let allocation = Allocation {
            satisfied: self.satisfied,
            flow: self.flow,
            augmentations: self.augmentations,
        };
        info!(
            augmentations = allocation.augmentations.len(),
            delivered = allocation.total_delivered(),
            "allocation pass finished"
        );
        allocation
    }

    fn apply(&mut self, path: AugmentingPath) {
        let amount = path.bottleneck;
        for (&from, &to) in path.nodes.iter().rev().tuple_windows() {
            self.flow.push(from, to, amount);
            self.flow.assert_link_invariant(self.grid, from, to);
        }
        self.satisfied.add(self.grid, path.producer(), amount);
        self.satisfied.add(self.grid, path.consumer(), amount);

        debug!(
            consumer = %self.grid.node(path.consumer()).label,
            producer = %self.grid.node(path.producer()).label,
            hops = path.nodes.len() - 1,
            amount,
            "applied augmenting path"
        );
        self.augmentations.push(path);
    }
}

/// Allocates power over `grid` with the default priority policy.
pub fn resolve(grid: &EnergyGrid) -> Allocation {
    FlowAllocator::new(grid).resolve()
}
