use crate::input::DelimitedFormat;
use crate::rules::BuilderConfig;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.htrewrite.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop the directory cascade here and jump to ~/.htrewrite.toml.
	#[serde(default)]
	pub root: bool,

	/// Wrap output in `<IfModule mod_rewrite.c>`.
	pub include_module_check: Option<bool>,

	/// Emit `RewriteEngine on`.
	pub include_engine_on: Option<bool>,

	/// Use `R=301` instead of a plain `R`.
	pub http_301: Option<bool>,

	/// Separator between source and destination in delimited input.
	pub separator: Option<String>,

	/// Separator between URL pairs in delimited input.
	pub line_separator: Option<String>,

	/// Structured `source = destination` redirects, in file order.
	/// Values are checked when the builder consumes them.
	#[serde(default)]
	pub redirects: toml::Table,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Effective configuration after merging the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	pub include_module_check: Option<bool>,
	pub include_engine_on: Option<bool>,
	pub http_301: Option<bool>,
	pub separator: Option<String>,
	pub line_separator: Option<String>,

	/// Redirects from every config, closer files overriding farther ones.
	pub redirects: toml::Table,

	/// Config files that contributed, most specific first.
	pub sources: Vec<PathBuf>,
}

impl MergedConfig {
	/// Builder options, falling back to the builder defaults for unset values.
	pub fn builder_config(&self) -> BuilderConfig {
		let defaults = BuilderConfig::default();
		BuilderConfig {
			include_module_check: self
				.include_module_check
				.unwrap_or(defaults.include_module_check),
			include_engine_on: self
				.include_engine_on
				.unwrap_or(defaults.include_engine_on),
			use_http_301: self.http_301.unwrap_or(defaults.use_http_301),
		}
	}

	/// Delimited-input separators, falling back to a space and a newline.
	pub fn delimited_format(&self) -> DelimitedFormat {
		let defaults = DelimitedFormat::default();
		DelimitedFormat {
			pair_separator: self
				.separator
				.clone()
				.unwrap_or(defaults.pair_separator),
			line_separator: self
				.line_separator
				.clone()
				.unwrap_or(defaults.line_separator),
		}
	}
}
