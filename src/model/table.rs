use crate::error::{NetplanError, Result};
use crate::model::entry::InterfaceEntry;
use crate::model::kind::InterfaceKind;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Top-level key holding every netplan section.
const NETWORK_KEY: &str = "network";

/// Section-level key that is a setting rather than an interface.
const RENDERER_KEY: &str = "renderer";

/// Merged interface definitions keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceTable {
	entries: BTreeMap<String, InterfaceEntry>,
}

impl InterfaceTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build the table from a merged netplan document.
	///
	/// A document without a `network` key yields an empty table.
	pub fn from_document(document: &Value) -> Result<Self> {
		let mut table = Self::new();

		let network = match document.get(NETWORK_KEY) {
			None | Some(Value::Null) => return Ok(table),
			Some(Value::Mapping(network)) => network,
			Some(_) => {
				return Err(NetplanError::InvalidSection {
					section: NETWORK_KEY.to_string(),
				});
			}
		};

		for (key, section) in network {
			let Some(section_name) = key.as_str() else {
				continue;
			};
			let Some(kind) = InterfaceKind::from_section(section_name) else {
				debug!(section = section_name, "ignoring non-interface key");
				continue;
			};
			table.add_section(section_name, kind, section)?;
		}

		Ok(table)
	}

	fn add_section(
		&mut self,
		section_name: &str,
		kind: InterfaceKind,
		section: &Value,
	) -> Result<()> {
		let section_map = match section {
			Value::Null => return Ok(()),
			Value::Mapping(map) => map,
			_ => {
				return Err(NetplanError::InvalidSection {
					section: section_name.to_string(),
				});
			}
		};

		for (key, definition) in section_map {
			let name = match key {
				Value::String(name) => name.clone(),
				Value::Number(n) => n.to_string(),
				_ => {
					return Err(NetplanError::InvalidEntry {
						section: section_name.to_string(),
						name: format!("{key:?}"),
					});
				}
			};

			let properties = match definition {
				Value::Null => Mapping::new(),
				Value::Mapping(map) => map.clone(),
				_ if name == RENDERER_KEY => continue,
				_ => {
					return Err(NetplanError::InvalidEntry {
						section: section_name.to_string(),
						name,
					});
				}
			};

			if let Some(previous) = self.entries.get(&name) {
				warn!(
					interface = %name,
					previous = %previous.kind,
					current = %kind,
					"interface declared in more than one section, keeping the later one"
				);
			}
			self.insert(InterfaceEntry::new(name, kind, properties));
		}

		Ok(())
	}

	/// Insert or replace an entry.
	pub fn insert(&mut self, entry: InterfaceEntry) {
		self.entries.insert(entry.name.clone(), entry);
	}

	/// All interface names, sorted.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn get(&self, name: &str) -> Option<&InterfaceEntry> {
		self.entries.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	pub fn kind_of(&self, name: &str) -> Option<InterfaceKind> {
		self.get(name).map(|entry| entry.kind)
	}

	pub fn properties_of(&self, name: &str) -> Option<&Mapping> {
		self.get(name).map(|entry| &entry.properties)
	}

	pub fn iter(&self) -> impl Iterator<Item = &InterfaceEntry> {
		self.entries.values()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Mapping of name to merged definition, for rendering.
	pub fn to_value(&self) -> Value {
		Value::Mapping(
			self.entries
				.iter()
				.map(|(name, entry)| {
					(
						Value::String(name.clone()),
						Value::Mapping(entry.properties.clone()),
					)
				})
				.collect(),
		)
	}
}

impl FromIterator<InterfaceEntry> for InterfaceTable {
	fn from_iter<I: IntoIterator<Item = InterfaceEntry>>(iter: I) -> Self {
		let mut table = Self::new();
		for entry in iter {
			table.insert(entry);
		}
		table
	}
}

/// Serializes as a map of name to merged definition.
impl Serialize for InterfaceTable {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (name, entry) in &self.entries {
			map.serialize_entry(name, &entry.properties)?;
		}
		map.end()
	}
}
