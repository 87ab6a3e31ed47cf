//! Fragment discovery and loading.
//!
//! A fragment is one netplan YAML file. Fragments are collected across the
//! configured directories in precedence order and handed to the merger.

pub mod store;

pub use store::{FRAGMENT_EXTENSION, Fragment, FragmentStore};
