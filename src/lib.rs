//! netplan-parser - query merged netplan configuration.
//!
//! This library provides the core functionality for netplan-parser, including:
//! - Fragment discovery across the layered netplan directories
//! - Deep merging of fragments into one interface table
//! - Related and physical closure queries over interface links
//! - Rendering results as names, JSON or YAML
//!
//! # Example
//!
//! ```no_run
//! use netplan_parser::config::ParserConfig;
//! use netplan_parser::query::NetplanQuery;
//! use std::collections::BTreeSet;
//!
//! let query = NetplanQuery::new(ParserConfig::default());
//! let table = query.parse(&BTreeSet::new()).unwrap();
//!
//! let physical = query.physical(&table, &["br0".to_string()]).unwrap();
//! for name in physical.names() {
//!     println!("{name}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod fragments;
pub mod graph;
pub mod merge;
pub mod model;
pub mod output;
pub mod query;

pub use error::{NetplanError, Result};
pub use model::{InterfaceEntry, InterfaceKind, InterfaceTable, Links};
pub use query::NetplanQuery;
