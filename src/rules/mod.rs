//! Rewrite rule generation for htrewrite.
//!
//! This module handles:
//! - The ordered source → destination mapping
//! - Regex escaping and anchoring of literal URLs
//! - Rendering `RewriteCond` / `RewriteRule` directives and their flags

pub mod builder;
pub mod directive;
pub mod escape;
pub mod mapping;

pub use builder::{BuilderConfig, RuleBuilder};
pub use directive::{Directive, RedirectKind, RewriteFlags};
pub use escape::anchored_literal;
pub use mapping::UrlMapping;
