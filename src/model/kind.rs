use std::fmt;

/// Classification of an interface by the netplan section declaring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InterfaceKind {
	Ethernet,
	Wifi,
	Bridge,
	Bond,
	Vlan,
	Tunnel,
	Other,
}

/// Sections under `network:` that declare interfaces, with their kind.
const SECTIONS: &[(&str, InterfaceKind)] = &[
	("ethernets", InterfaceKind::Ethernet),
	("wifis", InterfaceKind::Wifi),
	("bridges", InterfaceKind::Bridge),
	("bonds", InterfaceKind::Bond),
	("vlans", InterfaceKind::Vlan),
	("tunnels", InterfaceKind::Tunnel),
	("modems", InterfaceKind::Other),
	("vrfs", InterfaceKind::Other),
	("dummy-devices", InterfaceKind::Other),
	("virtual-ethernets", InterfaceKind::Other),
	("nm-devices", InterfaceKind::Other),
];

impl InterfaceKind {
	/// Classify a section name, or `None` if it does not declare interfaces.
	pub fn from_section(section: &str) -> Option<Self> {
		SECTIONS
			.iter()
			.find(|(name, _)| *name == section)
			.map(|(_, kind)| *kind)
	}

	/// Whether interfaces of this kind are backed by hardware.
	pub fn is_physical(&self) -> bool {
		matches!(self, InterfaceKind::Ethernet | InterfaceKind::Wifi)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			InterfaceKind::Ethernet => "ethernet",
			InterfaceKind::Wifi => "wifi",
			InterfaceKind::Bridge => "bridge",
			InterfaceKind::Bond => "bond",
			InterfaceKind::Vlan => "vlan",
			InterfaceKind::Tunnel => "tunnel",
			InterfaceKind::Other => "other",
		}
	}
}

impl fmt::Display for InterfaceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
