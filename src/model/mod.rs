//! The interface data model.
//!
//! This module handles:
//! - Interface kind classification by netplan section
//! - Link extraction from merged definitions
//! - The interface table built from a merged document

pub mod entry;
pub mod kind;
pub mod table;

pub use entry::{InterfaceEntry, Links};
pub use kind::InterfaceKind;
pub use table::InterfaceTable;
