use tracing_subscriber::EnvFilter;

/// Default filter directive for a given `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "htrewrite=info",
		2 => "htrewrite=debug",
		_ => "htrewrite=trace",
	}
}

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Stdout is left for
/// the generated rules.
pub fn init_logging(verbosity: u8) {
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

	// A subscriber may already be installed when embedded in another program.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
