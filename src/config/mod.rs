//! Tool configuration for netplan-parser.
//!
//! This module handles:
//! - The well-known netplan directories and their precedence
//! - Root prefix and default exclusions
//! - Optional TOML config file parsing

pub mod parser;
pub mod types;

pub use parser::{parse_config_file, parse_config_str};
pub use types::{DEFAULT_DIRECTORIES, ParserConfig};
