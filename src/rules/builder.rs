use crate::error::Result;
use crate::input::check_pair;
use crate::input::delimited::{DelimitedFormat, parse_delimited};
use crate::input::table::pairs_from_table;
use crate::rules::directive::{Directive, RedirectKind, RewriteFlags};
use crate::rules::mapping::UrlMapping;

/// Output options, fixed when the builder is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
	/// Wrap the rules in `<IfModule mod_rewrite.c>` ... `</IfModule>`.
	pub include_module_check: bool,

	/// Emit `RewriteEngine on` before the rules.
	pub include_engine_on: bool,

	/// Use `R=301` rather than a plain `R` redirect.
	pub use_http_301: bool,
}

impl Default for BuilderConfig {
	fn default() -> Self {
		BuilderConfig {
			include_module_check: true,
			include_engine_on: true,
			use_http_301: true,
		}
	}
}

impl BuilderConfig {
	pub fn flags(&self) -> RewriteFlags {
		RewriteFlags {
			redirect: RedirectKind::from_http_301(self.use_http_301),
		}
	}
}

/// Builds mod_rewrite redirect rules from accumulated URL pairs.
///
/// Pairs from every successful `build_*` call are merged into one mapping,
/// and each call renders the whole mapping again from scratch. A call that
/// fails validation leaves the mapping untouched.
#[derive(Debug, Clone, Default)]
pub struct RuleBuilder {
	config: BuilderConfig,
	mapping: UrlMapping,
}

impl RuleBuilder {
	pub fn new(config: BuilderConfig) -> Self {
		RuleBuilder {
			config,
			mapping: UrlMapping::new(),
		}
	}

	pub fn config(&self) -> &BuilderConfig {
		&self.config
	}

	pub fn mapping(&self) -> &UrlMapping {
		&self.mapping
	}

	/// Merge a structured `source = destination` table and generate rules.
	pub fn build_from_mapping(&mut self, table: &toml::Table) -> Result<String> {
		let pairs = pairs_from_table(table)?;
		self.build_from_pairs(pairs)
	}

	/// Merge string pairs and generate rules.
	///
	/// Pairs containing control characters are rejected before any is merged.
	pub fn build_from_pairs<I, S, D>(&mut self, pairs: I) -> Result<String>
	where
		I: IntoIterator<Item = (S, D)>,
		S: Into<String>,
		D: Into<String>,
	{
		let pairs: Vec<(String, String)> = pairs
			.into_iter()
			.map(|(source, destination)| (source.into(), destination.into()))
			.collect();
		for (source, destination) in &pairs {
			check_pair(source, destination)?;
		}

		self.mapping.extend(pairs);
		Ok(self.generate())
	}

	/// Parse delimited text, merge its pairs and generate rules.
	pub fn build_from_delimited_text(
		&mut self,
		text: &str,
		format: &DelimitedFormat,
	) -> Result<String> {
		let pairs = parse_delimited(text, format)?;
		self.build_from_pairs(pairs)
	}

	/// Directives for the current mapping, in output order.
	pub fn directives(&self) -> Vec<Directive> {
		let flags = self.config.flags();
		let mut directives = Vec::with_capacity(self.mapping.len() * 2 + 3);

		if self.config.include_module_check {
			directives.push(Directive::IfModuleOpen);
		}
		if self.config.include_engine_on {
			directives.push(Directive::EngineOn);
		}

		for (source, destination) in self.mapping.iter() {
			// RewriteRule never sees the query string, so match it with a condition.
			let path = match source.split_once('?') {
				Some((path, query)) => {
					if !query.is_empty() {
						directives.push(Directive::condition("QUERY_STRING", query));
					}
					path
				}
				None => source,
			};

			tracing::debug!(source, destination, "adding redirect");
			directives.push(Directive::rule(path, destination, flags));
		}

		if self.config.include_module_check {
			directives.push(Directive::IfModuleClose);
		}

		directives
	}

	/// Render every directive for the current mapping, one per line.
	///
	/// Lines are joined with `\n`. There is no leading or trailing newline;
	/// callers writing a file add the final newline themselves.
	pub fn generate(&self) -> String {
		let lines: Vec<String> = self.directives().iter().map(Directive::to_string).collect();
		tracing::info!(redirects = self.mapping.len(), "generated rewrite rules");
		lines.join("\n")
	}
}
