use std::path::PathBuf;

/// Library-level structured errors for htrewrite.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
	#[error("Destinations cannot be arrays or tables. Check the destination for: {key}")]
	InvalidDestination { key: String },

	#[error("Control characters are not allowed in redirects. Check the entry for: {key:?}")]
	ControlCharacter { key: String },

	#[error("URL does not contain valid separator: {line}")]
	MissingSeparator { line: String },

	#[error("URL does not contain valid number of separators: {line}")]
	InvalidPairCount { line: String },

	#[error("The {which} separator must not be empty")]
	EmptySeparator { which: &'static str },

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

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using RewriteError.
pub type Result<T> = std::result::Result<T, RewriteError>;
