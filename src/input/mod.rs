//! Turning user input into URL pairs.
//!
//! This module handles:
//! - Delimited text (one pair per line)
//! - Structured TOML tables

pub mod delimited;
pub mod table;

use crate::error::{Result, RewriteError};

pub use delimited::{DelimitedFormat, parse_delimited};
pub use table::pairs_from_table;

/// Reject pairs that would spill onto extra directive lines.
pub(crate) fn check_pair(source: &str, destination: &str) -> Result<()> {
	if source.chars().chain(destination.chars()).any(char::is_control) {
		return Err(RewriteError::ControlCharacter {
			key: source.to_string(),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_check_pair_accepts_printable() {
		assert!(check_pair("old page?x=1", "/new").is_ok());
	}

	#[test]
	fn test_check_pair_rejects_control_characters() {
		let cases = [("a", "b\nc"), ("a\rb", "/c"), ("a", "b\tc"), ("a", "b\u{0}")];
		for (source, destination) in cases {
			match check_pair(source, destination).unwrap_err() {
				RewriteError::ControlCharacter { key } => assert_eq!(key, source),
				other => panic!("Expected ControlCharacter error, got {other:?}"),
			}
		}
	}
}
