use crate::error::{NetplanError, Result};
use serde_yaml::Value;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension a file must carry to be read as a fragment.
pub const FRAGMENT_EXTENSION: &str = "yaml";

/// One parsed netplan file.
#[derive(Debug, Clone)]
pub struct Fragment {
	/// Where the document was read from.
	pub path: PathBuf,

	/// The parsed YAML document.
	pub document: Value,
}

/// Enumerates and parses fragments across an ordered list of directories.
#[derive(Debug, Clone)]
pub struct FragmentStore {
	directories: Vec<PathBuf>,
	exclude: BTreeSet<String>,
}

impl FragmentStore {
	/// Create a store over `directories` (lowest precedence first), skipping
	/// any file whose basename is in `exclude`.
	pub fn new(directories: Vec<PathBuf>, exclude: BTreeSet<String>) -> Self {
		Self {
			directories,
			exclude,
		}
	}

	/// Fragment paths in merge order: directory order outer, filename order inner.
	pub fn discover(&self) -> Result<Vec<PathBuf>> {
		let mut paths = Vec::new();

		for dir in &self.directories {
			let mut names = match list_fragment_names(dir)? {
				Some(names) => names,
				None => {
					debug!(directory = %dir.display(), "skipping missing directory");
					continue;
				}
			};
			names.sort();

			for name in names {
				if self.is_excluded(&name) {
					debug!(directory = %dir.display(), file = ?name, "skipping excluded file");
					continue;
				}
				paths.push(dir.join(name));
			}
		}

		Ok(paths)
	}

	/// Read and parse every fragment in merge order.
	///
	/// Fails on the first unreadable or unparseable file, or on a file whose
	/// document is not a mapping; nothing is returned in that case.
	pub fn load(&self) -> Result<Vec<Fragment>> {
		self.discover()?
			.into_iter()
			.map(|path| {
				let document = parse_fragment_file(&path)?;
				debug!(file = %path.display(), "loaded fragment");
				Ok(Fragment { path, document })
			})
			.collect()
	}

	fn is_excluded(&self, name: &OsString) -> bool {
		name.to_str().is_some_and(|name| self.exclude.contains(name))
	}
}

/// List fragment file names in `dir`, or `None` if it does not exist.
fn list_fragment_names(dir: &Path) -> Result<Option<Vec<OsString>>> {
	let dir_error = |source: std::io::Error| NetplanError::DirectoryRead {
		path: dir.to_path_buf(),
		source,
	};

	let entries = match std::fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
		Err(e) => return Err(dir_error(e)),
	};

	let mut names = Vec::new();
	for entry in entries {
		let entry = entry.map_err(dir_error)?;
		let path = entry.path();
		let is_fragment = path
			.extension()
			.is_some_and(|ext| ext == FRAGMENT_EXTENSION);
		if is_fragment && path.is_file() {
			names.push(entry.file_name());
		}
	}

	Ok(Some(names))
}

/// Parse one fragment file into a YAML document.
///
/// `<<` merge keys are expanded. The document must be a mapping or empty.
pub fn parse_fragment_file(path: &Path) -> Result<Value> {
	let content = std::fs::read_to_string(path).map_err(|source| NetplanError::FragmentRead {
		path: path.to_path_buf(),
		source,
	})?;

	let parse_error = |source: serde_yaml::Error| NetplanError::FragmentParse {
		path: path.to_path_buf(),
		source,
	};

	let mut document: Value = serde_yaml::from_str(&content).map_err(parse_error)?;
	document.apply_merge().map_err(parse_error)?;

	match document {
		Value::Null | Value::Mapping(_) => Ok(document),
		_ => Err(NetplanError::FragmentShape {
			path: path.to_path_buf(),
		}),
	}
}
