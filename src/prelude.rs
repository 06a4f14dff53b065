//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the gridflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use gridflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let grid = EnergyGrid::load("path/to/grid.txt")?;
//! let allocation = FlowAllocator::new(&grid).resolve();
//! print!("{}", AllocationReport::new(&grid, &allocation));
//! # Ok(())
//! # }
//! ```

// Grid model
pub use crate::grid::{
    EnergyGrid, GridDefinition, LinkDefinition, MAX_LINK_CAPACITY, MIN_NODE_POWER, NodeDefinition,
    NodeId, NodeIndex, Role,
};

// Allocation engine
pub use crate::allocator::{Allocation, AugmentingPath, FlowAllocator, PriorityPolicy};

// Reporting
pub use crate::report::{AllocationReport, NodeReport, ReportFormatter, TransferReport};

// Error types
pub use crate::error::{ErrorKind, GridError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
