//! The query entry point: parse once, then ask questions of the table.

use crate::config::ParserConfig;
use crate::error::{NetplanError, Result};
use crate::fragments::FragmentStore;
use crate::graph::{physical_closure, related_closure};
use crate::merge::merge_fragments;
use crate::model::InterfaceTable;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::info;

/// Loads the merged interface table and answers queries over it.
#[derive(Debug, Clone, Default)]
pub struct NetplanQuery {
	config: ParserConfig,
}

impl NetplanQuery {
	pub fn new(config: ParserConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &ParserConfig {
		&self.config
	}

	/// Directories scanned by [`parse`](Self::parse), lowest precedence first.
	pub fn directories(&self) -> Vec<PathBuf> {
		self.config.resolved_directories()
	}

	/// Load, merge and classify every fragment.
	///
	/// `exclude` is added to the configured exclusions.
	pub fn parse(&self, exclude: &BTreeSet<String>) -> Result<InterfaceTable> {
		let exclude = self.config.exclude.union(exclude).cloned().collect();
		let store = FragmentStore::new(self.directories(), exclude);

		let fragments = store.load()?;
		let count = fragments.len();
		let document = merge_fragments(fragments);
		let table = InterfaceTable::from_document(&document)?;

		info!(fragments = count, interfaces = table.len(), "parsed netplan configuration");
		Ok(table)
	}

	/// The named entries, or the whole table when `names` is empty.
	pub fn show(&self, table: &InterfaceTable, names: &[String]) -> Result<InterfaceTable> {
		if names.is_empty() {
			return Ok(table.clone());
		}
		require_known(table, names)?;
		Ok(names
			.iter()
			.filter_map(|name| table.get(name))
			.cloned()
			.collect())
	}

	/// Related closure of `names`; every name must be declared.
	pub fn related(&self, table: &InterfaceTable, names: &[String]) -> Result<InterfaceTable> {
		require_known(table, names)?;
		Ok(related_closure(table, names.iter().map(String::as_str)))
	}

	/// Physical closure of `names`; every name must be declared.
	pub fn physical(&self, table: &InterfaceTable, names: &[String]) -> Result<InterfaceTable> {
		require_known(table, names)?;
		Ok(physical_closure(table, names.iter().map(String::as_str)))
	}
}

fn require_known(table: &InterfaceTable, names: &[String]) -> Result<()> {
	match names.iter().find(|name| !table.contains(name)) {
		Some(name) => Err(NetplanError::UnknownInterface { name: name.clone() }),
		None => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_yaml::Value;
	use std::fs;
	use std::path::Path;

	fn write(root: &Path, rel: &str, content: &str) {
		let path = root.join(rel);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, content).unwrap();
	}

	fn strings(names: &[&str]) -> Vec<String> {
		names.iter().map(|s| s.to_string()).collect()
	}

	fn query_for(root: &Path) -> NetplanQuery {
		NetplanQuery::new(ParserConfig::default().with_root(root))
	}

	#[test]
	fn test_layers_merge_by_interface_name() {
		let temp_dir = tempfile::tempdir().unwrap();
		write(
			temp_dir.path(),
			"lib/netplan/10-base.yaml",
			"network: {ethernets: {eth0: {mtu: 1500}}}",
		);
		write(
			temp_dir.path(),
			"etc/netplan/90-local.yaml",
			"network: {ethernets: {eth0: {dhcp: true}}}",
		);

		let query = query_for(temp_dir.path());
		let table = query.parse(&BTreeSet::new()).unwrap();

		let expected: Value = serde_yaml::from_str("{mtu: 1500, dhcp: true}").unwrap();
		assert_eq!(
			Value::Mapping(table.properties_of("eth0").unwrap().clone()),
			expected
		);
	}

	#[test]
	fn test_higher_directory_overrides_lower() {
		let temp_dir = tempfile::tempdir().unwrap();
		write(
			temp_dir.path(),
			"etc/netplan/01.yaml",
			"network: {ethernets: {eth0: {mtu: 9000}}}",
		);
		write(
			temp_dir.path(),
			"run/netplan/99.yaml",
			"network: {ethernets: {eth0: {mtu: 1400}}}",
		);

		let table = query_for(temp_dir.path()).parse(&BTreeSet::new()).unwrap();
		assert_eq!(
			table.properties_of("eth0").unwrap().get("mtu"),
			Some(&Value::from(9000))
		);
	}

	#[test]
	fn test_exclusion_removes_only_definition() {
		let temp_dir = tempfile::tempdir().unwrap();
		write(
			temp_dir.path(),
			"etc/netplan/01.yaml",
			"network: {ethernets: {eth0: {}}}",
		);
		write(
			temp_dir.path(),
			"etc/netplan/02-extra.yaml",
			"network: {ethernets: {eth1: {}}}",
		);

		let query = query_for(temp_dir.path());
		let exclude = BTreeSet::from(["02-extra.yaml".to_string()]);
		let table = query.parse(&exclude).unwrap();

		assert!(table.contains("eth0"));
		assert!(!table.contains("eth1"));
	}

	#[test]
	fn test_config_exclusions_apply() {
		let temp_dir = tempfile::tempdir().unwrap();
		write(
			temp_dir.path(),
			"etc/netplan/02-extra.yaml",
			"network: {ethernets: {eth1: {}}}",
		);

		let config = ParserConfig::default()
			.with_root(temp_dir.path())
			.with_exclude(["02-extra.yaml"]);
		let table = NetplanQuery::new(config).parse(&BTreeSet::new()).unwrap();

		assert!(table.is_empty());
	}

	#[test]
	fn test_no_directories_yield_empty_table() {
		let temp_dir = tempfile::tempdir().unwrap();
		let table = query_for(temp_dir.path()).parse(&BTreeSet::new()).unwrap();
		assert!(table.is_empty());
	}

	#[test]
	fn test_parse_error_aborts() {
		let temp_dir = tempfile::tempdir().unwrap();
		write(temp_dir.path(), "etc/netplan/01.yaml", "network: {ethernets: {eth0: {}}}");
		write(temp_dir.path(), "etc/netplan/02.yaml", "network: [unclosed");

		let result = query_for(temp_dir.path()).parse(&BTreeSet::new());
		assert!(matches!(result, Err(NetplanError::FragmentParse { .. })));
	}

	fn sample_table() -> InterfaceTable {
		let document = serde_yaml::from_str(
			"network: {ethernets: {eth0: {}, eth1: {}}, vlans: {vlan10: {id: 10, link: eth0}}}",
		)
		.unwrap();
		InterfaceTable::from_document(&document).unwrap()
	}

	#[test]
	fn test_show_all_and_named() {
		let query = NetplanQuery::default();
		let table = sample_table();

		assert_eq!(query.show(&table, &[]).unwrap(), table);

		let shown = query.show(&table, &strings(&["vlan10"])).unwrap();
		assert_eq!(shown.names().collect::<Vec<_>>(), vec!["vlan10"]);
	}

	#[test]
	fn test_unknown_interface_rejected() {
		let query = NetplanQuery::default();
		let table = sample_table();
		let names = strings(&["eth0", "eth9"]);

		for result in [
			query.show(&table, &names),
			query.related(&table, &names),
			query.physical(&table, &names),
		] {
			match result.unwrap_err() {
				NetplanError::UnknownInterface { name } => assert_eq!(name, "eth9"),
				other => panic!("Expected UnknownInterface, got {other:?}"),
			}
		}

		let err = query.show(&table, &names).unwrap_err();
		assert_eq!(err.to_string(), "no data for interface eth9");
	}

	#[test]
	fn test_related_and_physical() {
		let query = NetplanQuery::default();
		let table = sample_table();
		let names = strings(&["vlan10"]);

		let related = query.related(&table, &names).unwrap();
		assert_eq!(related.names().collect::<Vec<_>>(), vec!["eth0", "vlan10"]);

		let physical = query.physical(&table, &names).unwrap();
		assert_eq!(physical.names().collect::<Vec<_>>(), vec!["eth0"]);
	}
}
