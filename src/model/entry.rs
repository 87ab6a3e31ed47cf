use crate::model::kind::InterfaceKind;
use serde_yaml::{Mapping, Value};
use tracing::warn;

/// Key naming the parent of a VLAN or the underlay of a tunnel.
const PARENT_KEY: &str = "link";

/// Key listing the members of a bridge or bond.
const MEMBERS_KEY: &str = "interfaces";

/// Structural references from one interface to others.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Links {
	#[default]
	None,
	/// VLAN parent or tunnel underlay.
	Parent(String),
	/// Bridge or bond members.
	Members(Vec<String>),
}

impl Links {
	/// Read the kind-specific link keys out of `properties`.
	pub fn extract(name: &str, kind: InterfaceKind, properties: &Mapping) -> Self {
		match kind {
			InterfaceKind::Vlan | InterfaceKind::Tunnel => {
				match properties.get(PARENT_KEY).and_then(Value::as_str) {
					Some(parent) => Links::Parent(parent.to_string()),
					None => {
						if kind == InterfaceKind::Vlan {
							warn!(interface = name, "vlan has no parent link");
						}
						Links::None
					}
				}
			}
			InterfaceKind::Bridge | InterfaceKind::Bond => {
				let members: Vec<String> = properties
					.get(MEMBERS_KEY)
					.and_then(Value::as_sequence)
					.map(|seq| {
						seq.iter()
							.filter_map(Value::as_str)
							.map(str::to_string)
							.collect()
					})
					.unwrap_or_default();
				Links::Members(members)
			}
			_ => Links::None,
		}
	}

	/// Names this interface points at.
	pub fn targets(&self) -> &[String] {
		match self {
			Links::None => &[],
			Links::Parent(parent) => std::slice::from_ref(parent),
			Links::Members(members) => members,
		}
	}

	/// Whether `name` is one of the link targets.
	pub fn points_to(&self, name: &str) -> bool {
		self.targets().iter().any(|target| target == name)
	}
}

/// The merged definition of one interface.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceEntry {
	pub name: String,
	pub kind: InterfaceKind,

	/// Merged netplan definition.
	pub properties: Mapping,

	pub links: Links,

	/// False for entries synthesized for link targets nobody declares.
	pub declared: bool,
}

impl InterfaceEntry {
	/// Build a declared entry, extracting its links from `properties`.
	pub fn new(name: impl Into<String>, kind: InterfaceKind, properties: Mapping) -> Self {
		let name = name.into();
		let links = Links::extract(&name, kind, &properties);
		Self {
			name,
			kind,
			properties,
			links,
			declared: true,
		}
	}

	/// An undeclared interface referenced by another one's links.
	///
	/// Treated as a physical device with no configuration.
	pub fn implicit(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: InterfaceKind::Ethernet,
			properties: Mapping::new(),
			links: Links::None,
			declared: false,
		}
	}

	pub fn is_physical(&self) -> bool {
		!self.declared || self.kind.is_physical()
	}
}
