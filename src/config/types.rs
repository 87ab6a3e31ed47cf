use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Well-known netplan directories, lowest precedence first.
pub const DEFAULT_DIRECTORIES: &[&str] = &["/lib/netplan", "/run/netplan", "/etc/netplan"];

/// Settings driving where fragments are loaded from.
///
/// Can be built in code or loaded from a TOML file with
/// [`parse_config_file`](crate::config::parse_config_file).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ParserConfig {
	/// Prefix applied to every directory before scanning.
	pub root: Option<PathBuf>,

	/// Directories to scan, lowest precedence first.
	pub directories: Vec<PathBuf>,

	/// Fragment basenames that are always skipped.
	pub exclude: BTreeSet<String>,
}

impl Default for ParserConfig {
	fn default() -> Self {
		Self {
			root: None,
			directories: DEFAULT_DIRECTORIES.iter().map(|dir| PathBuf::from(*dir)).collect(),
			exclude: BTreeSet::new(),
		}
	}
}

impl ParserConfig {
	/// Set the root prefix.
	pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
		self.root = Some(root.into());
		self
	}

	/// Add basenames to the exclude set.
	pub fn with_exclude<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.exclude.extend(names.into_iter().map(Into::into));
		self
	}

	/// The directories to scan with the root prefix applied.
	pub fn resolved_directories(&self) -> Vec<PathBuf> {
		match &self.root {
			Some(root) => self
				.directories
				.iter()
				.map(|dir| reroot(root, dir))
				.collect(),
			None => self.directories.clone(),
		}
	}
}

/// Join `dir` under `root`, dropping any leading `/` from `dir`.
fn reroot(root: &Path, dir: &Path) -> PathBuf {
	let relative: PathBuf = dir
		.components()
		.filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
		.collect();
	root.join(relative)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_directories_in_precedence_order() {
		let config = ParserConfig::default();
		assert_eq!(
			config.resolved_directories(),
			vec![
				PathBuf::from("/lib/netplan"),
				PathBuf::from("/run/netplan"),
				PathBuf::from("/etc/netplan"),
			]
		);
	}

	#[test]
	fn test_root_prefix_applied_to_absolute_directories() {
		let config = ParserConfig::default().with_root("test_data/full-9000");
		assert_eq!(
			config.resolved_directories(),
			vec![
				PathBuf::from("test_data/full-9000/lib/netplan"),
				PathBuf::from("test_data/full-9000/run/netplan"),
				PathBuf::from("test_data/full-9000/etc/netplan"),
			]
		);
	}

	#[test]
	fn test_root_prefix_applied_to_relative_directories() {
		let config = ParserConfig {
			root: Some(PathBuf::from("/srv/image")),
			directories: vec![PathBuf::from("conf/netplan")],
			exclude: BTreeSet::new(),
		};
		assert_eq!(
			config.resolved_directories(),
			vec![PathBuf::from("/srv/image/conf/netplan")]
		);
	}

	#[test]
	fn test_with_exclude_accumulates() {
		let config = ParserConfig::default()
			.with_exclude(["99-storpool.yaml"])
			.with_exclude(vec!["50-cloud-init.yaml".to_string()]);
		assert_eq!(config.exclude.len(), 2);
		assert!(config.exclude.contains("99-storpool.yaml"));
		assert!(config.exclude.contains("50-cloud-init.yaml"));
	}
}
