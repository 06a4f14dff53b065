//! # gridflow - Priority-Driven Power Allocation
//!
//! **gridflow** distributes the limited output of producer nodes to consumer nodes
//! across a network of capacitated, undirected links. It is built on augmenting-path
//! network flow with a custom service policy: consumers closest to a producer are
//! served first, and each consumer is drained as far as the network allows before the
//! engine moves on.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the grid**: Write a grid description (see [`grid::parser`]) or build a
//!     [`grid::GridDefinition`] in code.
//! 2.  **Validate**: Turn it into an [`EnergyGrid`], which checks ids and links and
//!     re-keys nodes to dense indices.
//! 3.  **Allocate**: Run a [`FlowAllocator`] (or the [`allocator::resolve`] shortcut)
//!     to obtain an [`Allocation`].
//! 4.  **Report**: Build an [`AllocationReport`] for per-node and per-link results,
//!     printable as text or serializable as JSON.
//!
//! The allocation is greedy and order-dependent on purpose. A consumer that fails to
//! find an augmenting path is never retried, so the result is not necessarily a
//! maximum flow.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridflow::prelude::*;
//!
//! fn main() -> std::result::Result<(), GridError> {
//!     let grid = EnergyGrid::parse(
//!         "nodes\n\
//!          1 Plant 10\n\
//!          2 Town -6\n\
//!          links\n\
//!          1 2 6\n",
//!     )?;
//!
//!     let allocation = FlowAllocator::new(&grid).resolve();
//!     let report = AllocationReport::new(&grid, &allocation);
//!
//!     assert_eq!(
//!         report.to_string(),
//!         "Node \"Plant\" output 6/10 power\n\
//!          Node \"Town\" received 6/6 power\n\
//!          Transferred 6/6 from Plant to Town\n"
//!     );
//!     Ok(())
//! }
//! ```

pub mod allocator;
pub mod error;
pub mod grid;
pub mod prelude;
pub mod report;

pub use allocator::{Allocation, FlowAllocator, PriorityPolicy};
pub use error::{ErrorKind, GridError};
pub use grid::EnergyGrid;
pub use report::AllocationReport;
