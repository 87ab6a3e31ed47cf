use std::path::PathBuf;

/// Library-level structured errors for netplan-parser.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum NetplanError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to read netplan directory: {path}")]
	DirectoryRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read netplan file: {path}")]
	FragmentRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse netplan file: {path}")]
	FragmentParse {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Invalid netplan file: {path} is not a mapping")]
	FragmentShape { path: PathBuf },

	#[error("Invalid netplan section: {section} is not a mapping")]
	InvalidSection { section: String },

	#[error("Invalid definition for {name} in {section}: expected a mapping")]
	InvalidEntry { section: String, name: String },

	#[error("no data for interface {name}")]
	UnknownInterface { name: String },

	#[error("Failed to render output: {0}")]
	Render(String),
}

/// Result type alias using NetplanError.
pub type Result<T> = std::result::Result<T, NetplanError>;
