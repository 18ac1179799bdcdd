//! htrewrite - CLI tool for generating Apache mod_rewrite redirect rules.
//!
//! This library provides the core functionality for htrewrite, including:
//! - Parsing source/destination URL pairs from delimited text or TOML tables
//! - Generating `RewriteCond` / `RewriteRule` directives with escaped, anchored patterns
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```
//! use htrewrite::input::DelimitedFormat;
//! use htrewrite::rules::{BuilderConfig, RuleBuilder};
//!
//! let mut builder = RuleBuilder::new(BuilderConfig::default());
//! let rules = builder
//!     .build_from_delimited_text("/old /new\nlegacy?x=1 /modern", &DelimitedFormat::default())
//!     .unwrap();
//!
//! assert!(rules.contains("RewriteRule ^old$ /new? [R=301,L,NC]"));
//! assert!(rules.contains("RewriteCond %{QUERY_STRING} ^x=1$"));
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod rules;

pub use error::{Result, RewriteError};
