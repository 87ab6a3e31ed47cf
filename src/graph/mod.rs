//! Closure queries over the interface dependency graph.
//!
//! This module handles:
//! - The related closure: everything structurally linked to a seed set
//! - The physical closure: the hardware backing a seed set

pub mod resolver;

pub use resolver::{physical_closure, related_closure, related_names};
