use crate::config::types::ParserConfig;
use crate::error::{NetplanError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<ParserConfig> {
	let content =
		std::fs::read_to_string(path).map_err(|source| NetplanError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<ParserConfig> {
	toml::from_str(content).map_err(|source| NetplanError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert_eq!(config, ParserConfig::default());
	}

	#[test]
	fn test_parse_full_config() {
		let content = r#"
root = "/srv/image"
directories = ["/usr/lib/netplan", "/etc/netplan"]
exclude = ["99-storpool.yaml"]
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.root, Some(PathBuf::from("/srv/image")));
		assert_eq!(
			config.directories,
			vec![
				PathBuf::from("/usr/lib/netplan"),
				PathBuf::from("/etc/netplan")
			]
		);
		assert!(config.exclude.contains("99-storpool.yaml"));
	}

	#[test]
	fn test_parse_partial_config_keeps_default_directories() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("exclude = [\"a.yaml\"]", &path).unwrap();

		assert_eq!(config.directories, ParserConfig::default().directories);
		assert!(config.root.is_none());
	}

	#[test]
	fn test_parse_invalid_config() {
		let path = PathBuf::from("broken.toml");
		let result = parse_config_str("directories = [[[", &path);

		match result.unwrap_err() {
			NetplanError::ConfigParseError { path, .. } => {
				assert_eq!(path, PathBuf::from("broken.toml"));
			}
			other => panic!("Expected ConfigParseError, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_missing_config_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let result = parse_config_file(&temp_dir.path().join("absent.toml"));

		assert!(matches!(
			result.unwrap_err(),
			NetplanError::ConfigReadError { .. }
		));
	}
}
