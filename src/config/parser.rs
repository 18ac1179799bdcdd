use crate::config::types::Config;
use crate::error::{Result, RewriteError};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| RewriteError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| RewriteError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	tracing::debug!(
		path = %path.display(),
		redirects = config.redirects.len(),
		"parsed config"
	);

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert!(!config.root);
		assert!(config.include_module_check.is_none());
		assert!(config.include_engine_on.is_none());
		assert!(config.http_301.is_none());
		assert!(config.separator.is_none());
		assert!(config.line_separator.is_none());
		assert!(config.redirects.is_empty());
	}

	#[test]
	fn test_parse_options() {
		let content = r#"
root = true
include-module-check = false
include-engine-on = true
http-301 = false
separator = "->"
line-separator = ";"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(config.root);
		assert_eq!(config.include_module_check, Some(false));
		assert_eq!(config.include_engine_on, Some(true));
		assert_eq!(config.http_301, Some(false));
		assert_eq!(config.separator, Some("->".to_string()));
		assert_eq!(config.line_separator, Some(";".to_string()));
	}

	#[test]
	fn test_parse_redirects_keep_order() {
		let content = r#"
[redirects]
"zeta" = "/z"
"legacy?x=1" = "modern"
"alpha" = "/a"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		let keys: Vec<_> = config.redirects.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["zeta", "legacy?x=1", "alpha"]);
	}

	#[test]
	fn test_parse_invalid_toml() {
		let path = PathBuf::from("broken.toml");
		let result = parse_config_str("invalid toml [[[", &path);

		match result.unwrap_err() {
			RewriteError::ConfigParseError { path, .. } => {
				assert_eq!(path, PathBuf::from("broken.toml"));
			}
			_ => panic!("Expected ConfigParseError error"),
		}
	}

	#[test]
	fn test_parse_missing_file() {
		let result = parse_config_file(Path::new("/nonexistent/dir/.htrewrite.toml"));
		assert!(matches!(
			result,
			Err(RewriteError::ConfigReadError { .. })
		));
	}
}
