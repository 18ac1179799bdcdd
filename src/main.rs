use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use htrewrite::config::{
	CONFIG_FILE_NAME, MergedConfig, discover_configs, load_explicit_config, load_merged_config,
	user_config_path,
};
use htrewrite::logging::init_logging;
use htrewrite::rules::RuleBuilder;

#[derive(Parser)]
#[command(name = "htrewrite")]
#[command(
	author,
	version,
	about = "CLI tool for generating Apache mod_rewrite redirect rules from URL pairs"
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// File of "source destination" lines to convert ("-" reads stdin)
	#[arg(value_name = "INPUT")]
	input: Option<PathBuf>,

	/// Use this config file instead of discovering .htrewrite.toml files
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Separator between source and destination on each line
	#[arg(short, long, value_name = "SEP", allow_hyphen_values = true)]
	separator: Option<String>,

	/// Separator between URL pairs (\n, \r and \t escapes are understood)
	#[arg(long, value_name = "SEP", allow_hyphen_values = true)]
	line_separator: Option<String>,

	/// Do not wrap the rules in <IfModule mod_rewrite.c>
	#[arg(long)]
	no_module_check: bool,

	/// Do not emit "RewriteEngine on"
	#[arg(long)]
	no_engine: bool,

	/// Emit a plain R flag instead of R=301
	#[arg(long)]
	generic_redirect: bool,

	/// Write the rules to this file instead of stdout
	#[arg(short, long, value_name = "PATH")]
	output: Option<PathBuf>,

	/// Create a template .htrewrite.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .htrewrite.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display discovered configuration files with source annotations
	Show,
	/// Check all config files for errors without generating anything
	Validate,
}

const INIT_TEMPLATE: &str = r#"# htrewrite configuration
#
# Files named .htrewrite.toml are discovered from the current directory
# upwards. Setting root = true stops the walk at this file.
root = true

# Wrap the rules in <IfModule mod_rewrite.c> ... </IfModule>
include-module-check = true

# Emit "RewriteEngine on" before the rules
include-engine-on = true

# Use R=301 (permanent) rather than a plain R redirect
http-301 = true

# Separators used when reading delimited input files
separator = " "
line-separator = "\n"

# Redirects generated on every run, in this order.
# A query string in the source becomes a RewriteCond on QUERY_STRING.
[redirects]
# "old-page.html" = "/new-page"
# "products?id=42" = "/products/widget"
"#;

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: Cli) -> Result<ExitCode> {
	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(ref command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(),
				ConfigAction::Validate => handle_config_validate(),
			},
		};
	}

	handle_generate(&cli)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, INIT_TEMPLATE)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_generate(cli: &Cli) -> Result<ExitCode> {
	let merged = load_config(cli.config.as_deref())?;

	let mut builder_config = merged.builder_config();
	if cli.no_module_check {
		builder_config.include_module_check = false;
	}
	if cli.no_engine {
		builder_config.include_engine_on = false;
	}
	if cli.generic_redirect {
		builder_config.use_http_301 = false;
	}

	let mut format = merged.delimited_format();
	if let Some(ref separator) = cli.separator {
		format.pair_separator = unescape_separator(separator);
	}
	if let Some(ref separator) = cli.line_separator {
		format.line_separator = unescape_separator(separator);
	}

	let mut builder = RuleBuilder::new(builder_config);

	if !merged.redirects.is_empty() {
		builder
			.build_from_mapping(&merged.redirects)
			.context("Invalid [redirects] table in configuration")?;
	}

	if let Some(ref input) = cli.input {
		let text = read_input(input)?;
		builder
			.build_from_delimited_text(&text, &format)
			.with_context(|| format!("Invalid redirect list in {}", input.display()))?;
	}

	if builder.mapping().is_empty() {
		anyhow::bail!("no redirects to generate; pass an input file or add a [redirects] table");
	}

	let rules = builder.generate();

	match cli.output {
		Some(ref path) => {
			std::fs::write(path, format!("{rules}\n"))
				.with_context(|| format!("Failed to write {}", path.display()))?;
			tracing::info!(path = %path.display(), "wrote rules");
		}
		None => println!("{rules}"),
	}

	Ok(ExitCode::SUCCESS)
}

fn load_config(explicit: Option<&Path>) -> Result<MergedConfig> {
	if let Some(path) = explicit {
		return load_explicit_config(path)
			.with_context(|| format!("Failed to load configuration from {}", path.display()));
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	load_merged_config(&cwd).context("Failed to load configuration")
}

fn read_input(input: &Path) -> Result<String> {
	if input == Path::new("-") {
		let mut text = String::new();
		std::io::stdin()
			.read_to_string(&mut text)
			.context("Failed to read redirects from stdin")?;
		return Ok(text);
	}

	std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

/// Expand the `\n`, `\r` and `\t` escapes a shell makes awkward to type.
fn unescape_separator(raw: &str) -> String {
	raw.replace("\\n", "\n")
		.replace("\\r", "\r")
		.replace("\\t", "\t")
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Configuration files (in cascade order):\n");

	for loaded in &configs {
		let config = &loaded.config;
		println!("# Source: {}", loaded.path.display());
		println!("# root: {}", config.root);
		if let Some(value) = config.include_module_check {
			println!("# include-module-check: {}", value);
		}
		if let Some(value) = config.include_engine_on {
			println!("# include-engine-on: {}", value);
		}
		if let Some(value) = config.http_301 {
			println!("# http-301: {}", value);
		}
		if let Some(ref value) = config.separator {
			println!("# separator: {:?}", value);
		}
		if let Some(ref value) = config.line_separator {
			println!("# line-separator: {:?}", value);
		}
		println!("# redirects: {}", config.redirects.len());
		println!();

		for (source, destination) in &config.redirects {
			match destination.as_str() {
				Some(target) => println!("  {} -> {}", source, target),
				None => println!("  {} -> {} (invalid)", source, destination),
			}
		}
		if !config.redirects.is_empty() {
			println!();
		}
	}

	// Show user config path
	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let configs = match discover_configs(&cwd) {
		Ok(configs) => configs,
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			return Ok(ExitCode::FAILURE);
		}
	};

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	// Parsing succeeded; the redirect tables still need their values checked.
	for loaded in &configs {
		if let Err(e) = htrewrite::input::pairs_from_table(&loaded.config.redirects) {
			eprintln!("Configuration error in {}: {}", loaded.path.display(), e);
			return Ok(ExitCode::FAILURE);
		}
	}

	println!("All configuration files are valid:");
	for loaded in &configs {
		println!(
			"  {} ({} redirects)",
			loaded.path.display(),
			loaded.config.redirects.len()
		);
	}

	Ok(ExitCode::SUCCESS)
}
