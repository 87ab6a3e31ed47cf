//! Rendering of interface tables for the command line.

use crate::error::{NetplanError, Result};
use crate::model::InterfaceTable;
use std::fmt;
use std::str::FromStr;

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
	/// Sorted names on one line.
	Names,
	Json,
	#[default]
	Yaml,
}

impl OutputFormat {
	pub const ALL: [OutputFormat; 3] = [
		OutputFormat::Names,
		OutputFormat::Json,
		OutputFormat::Yaml,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			OutputFormat::Names => "names",
			OutputFormat::Json => "json",
			OutputFormat::Yaml => "yaml",
		}
	}
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		OutputFormat::ALL
			.into_iter()
			.find(|format| format.as_str() == s)
			.ok_or_else(|| format!("unknown output format: {s} (expected names, json or yaml)"))
	}
}

/// Render `table` in `format`, always ending with a newline.
pub fn render(table: &InterfaceTable, format: OutputFormat) -> Result<String> {
	let mut out = match format {
		OutputFormat::Names => table.names().collect::<Vec<_>>().join(" "),
		OutputFormat::Json => {
			serde_json::to_string_pretty(table).map_err(|e| NetplanError::Render(e.to_string()))?
		}
		OutputFormat::Yaml => {
			serde_yaml::to_string(table).map_err(|e| NetplanError::Render(e.to_string()))?
		}
	};

	if !out.ends_with('\n') {
		out.push('\n');
	}
	Ok(out)
}
