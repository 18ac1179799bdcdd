use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig};
use crate::error::{Result, RewriteError};
use std::path::{Path, PathBuf};

/// File name looked up in each directory of the cascade.
pub const CONFIG_FILE_NAME: &str = ".htrewrite.toml";

/// When truthy, ~/.htrewrite.toml is not consulted.
pub const NO_USER_CONFIG_ENV: &str = "HTREWRITE_NO_USER_CONFIG";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.htrewrite.toml`
/// 2. If found and `root = true`, skip to user config only
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.htrewrite.toml (unless disabled)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let user_config = if is_env_truthy(NO_USER_CONFIG_ENV) {
		None
	} else {
		Some(user_config_path()?)
	};

	discover_configs_with_user(start_dir, user_config.as_deref())
}

/// Cascade discovery with an explicit user config location.
pub fn discover_configs_with_user(
	start_dir: &Path,
	user_config: Option<&Path>,
) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	// Walk up the directory tree
	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			let config = parse_config_file(&config_path)?;
			let is_root = config.root;

			tracing::debug!(path = %config_path.display(), root = is_root, "found config");
			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		// Move to parent directory
		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	if let Some(user_path) = user_config
		&& user_path.is_file()
		&& !configs.iter().any(|loaded| loaded.path == user_path)
	{
		let config = parse_config_file(user_path)?;
		configs.push(LoadedConfig {
			config,
			path: user_path.to_path_buf(),
		});
	}

	Ok(configs)
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Merge multiple configs into a single effective config.
///
/// Options come from the most specific config that sets them. Redirects are
/// merged from the least specific config up, so closer files win on
/// duplicate sources.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		let config = &loaded.config;
		merged.include_module_check = merged
			.include_module_check
			.or(config.include_module_check);
		merged.include_engine_on = merged.include_engine_on.or(config.include_engine_on);
		merged.http_301 = merged.http_301.or(config.http_301);
		if merged.separator.is_none() {
			merged.separator = config.separator.clone();
		}
		if merged.line_separator.is_none() {
			merged.line_separator = config.line_separator.clone();
		}
		merged.sources.push(loaded.path.clone());
	}

	for loaded in configs.iter().rev() {
		for (source, destination) in &loaded.config.redirects {
			merged.redirects.insert(source.clone(), destination.clone());
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Load a single explicit config file, bypassing discovery.
pub fn load_explicit_config(path: &Path) -> Result<MergedConfig> {
	let config = parse_config_file(path)?;
	Ok(merge_configs(&[LoadedConfig {
		config,
		path: path.to_path_buf(),
	}]))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(RewriteError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
