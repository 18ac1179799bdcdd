use crate::rules::escape::anchored_literal;
use std::fmt;

/// Redirect status carried by the `R` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectKind {
	/// `R=301`, a permanent redirect.
	#[default]
	Permanent,
	/// Plain `R`, leaving the status to Apache (302).
	Generic,
}

impl RedirectKind {
	pub fn from_http_301(use_http_301: bool) -> Self {
		if use_http_301 {
			RedirectKind::Permanent
		} else {
			RedirectKind::Generic
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			RedirectKind::Permanent => "R=301",
			RedirectKind::Generic => "R",
		}
	}
}

/// Flags appended to every generated `RewriteRule`.
///
/// `L` and `NC` are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewriteFlags {
	pub redirect: RedirectKind,
}

impl fmt::Display for RewriteFlags {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{},L,NC]", self.redirect.as_str())
	}
}

/// A single line of generated mod_rewrite configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
	IfModuleOpen,
	EngineOn,
	/// `RewriteCond %{<variable>} <pattern>`, pattern already anchored.
	Condition { variable: String, pattern: String },
	/// `RewriteRule <pattern> <target>? <flags>`, pattern already anchored.
	Rule {
		pattern: String,
		target: String,
		flags: RewriteFlags,
	},
	IfModuleClose,
}

impl Directive {
	/// Condition matching a server variable exactly against a literal value.
	pub fn condition(variable: &str, literal: &str) -> Self {
		Directive::Condition {
			variable: variable.to_string(),
			pattern: anchored_literal(literal),
		}
	}

	/// Rule redirecting an exact source path to a destination.
	pub fn rule(source: &str, destination: &str, flags: RewriteFlags) -> Self {
		Directive::Rule {
			pattern: anchored_literal(source),
			target: destination.to_string(),
			flags,
		}
	}
}

impl fmt::Display for Directive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Directive::IfModuleOpen => f.write_str("<IfModule mod_rewrite.c>"),
			Directive::EngineOn => f.write_str("RewriteEngine on"),
			Directive::Condition { variable, pattern } => {
				write!(f, "RewriteCond %{{{variable}}} {pattern}")
			}
			// The trailing `?` stops Apache passing the original query string through.
			Directive::Rule {
				pattern,
				target,
				flags,
			} => write!(f, "RewriteRule {pattern} {target}? {flags}"),
			Directive::IfModuleClose => f.write_str("</IfModule>"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_flags_permanent() {
		let flags = RewriteFlags::default();
		assert_eq!(flags.to_string(), "[R=301,L,NC]");
	}

	#[test]
	fn test_flags_generic() {
		let flags = RewriteFlags {
			redirect: RedirectKind::from_http_301(false),
		};
		assert_eq!(flags.to_string(), "[R,L,NC]");
	}

	#[test]
	fn test_render_condition() {
		let cond = Directive::condition("QUERY_STRING", "id=5");
		assert_eq!(cond.to_string(), "RewriteCond %{QUERY_STRING} ^id=5$");
	}

	#[test]
	fn test_render_rule() {
		let rule = Directive::rule("about.html", "/about-us", RewriteFlags::default());
		assert_eq!(
			rule.to_string(),
			r"RewriteRule ^about\.html$ /about-us? [R=301,L,NC]"
		);
	}

	#[test]
	fn test_render_wrappers() {
		assert_eq!(
			Directive::IfModuleOpen.to_string(),
			"<IfModule mod_rewrite.c>"
		);
		assert_eq!(Directive::EngineOn.to_string(), "RewriteEngine on");
		assert_eq!(Directive::IfModuleClose.to_string(), "</IfModule>");
	}
}
