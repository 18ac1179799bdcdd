use crate::error::{Result, RewriteError};
use crate::input::check_pair;

/// Separators used to split delimited redirect text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedFormat {
	/// Separates the source from the destination within a line.
	pub pair_separator: String,

	/// Separates one URL pair from the next.
	pub line_separator: String,
}

impl Default for DelimitedFormat {
	fn default() -> Self {
		DelimitedFormat {
			pair_separator: " ".to_string(),
			line_separator: "\n".to_string(),
		}
	}
}

impl DelimitedFormat {
	pub fn new(pair_separator: impl Into<String>, line_separator: impl Into<String>) -> Self {
		DelimitedFormat {
			pair_separator: pair_separator.into(),
			line_separator: line_separator.into(),
		}
	}
}

/// Parse delimited text into (source, destination) pairs.
///
/// Every line is validated before anything is returned, so a malformed line
/// anywhere in the input rejects the whole text.
pub fn parse_delimited(text: &str, format: &DelimitedFormat) -> Result<Vec<(String, String)>> {
	if format.pair_separator.is_empty() {
		return Err(RewriteError::EmptySeparator { which: "pair" });
	}
	if format.line_separator.is_empty() {
		return Err(RewriteError::EmptySeparator { which: "line" });
	}

	let mut pairs = Vec::new();

	for raw_line in text.trim().split(format.line_separator.as_str()) {
		let line = raw_line.trim();
		if line.is_empty() {
			tracing::trace!("skipping blank line");
			continue;
		}

		pairs.push(parse_line(line, &format.pair_separator)?);
	}

	Ok(pairs)
}

/// Split a single non-blank line at the first pair separator.
fn parse_line(line: &str, separator: &str) -> Result<(String, String)> {
	// A separator at position 0 leaves no source to redirect from.
	match line.find(separator) {
		None | Some(0) => {
			return Err(RewriteError::MissingSeparator {
				line: line.to_string(),
			});
		}
		Some(_) => {}
	}

	let parts: Vec<&str> = line.splitn(2, separator).collect();
	let &[source, destination] = parts.as_slice() else {
		return Err(RewriteError::InvalidPairCount {
			line: line.to_string(),
		});
	};

	let source = source.strip_prefix('/').unwrap_or(source);
	check_pair(source, destination)?;

	Ok((source.to_string(), destination.to_string()))
}
