//! Deep merging of fragment documents.

pub mod deep;

pub use deep::{deep_merge, merge_documents, merge_fragments};
