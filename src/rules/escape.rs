/// Escape a literal string for use as a regex and anchor it with `^` and `$`
/// so it only ever matches the whole input.
///
/// Spaces are backslash-escaped as well, since Apache splits directive
/// arguments on unescaped whitespace.
pub fn anchored_literal(literal: &str) -> String {
	let escaped = regex::escape(literal);
	let mut pattern = String::with_capacity(escaped.len() + 2);
	pattern.push('^');
	for c in escaped.chars() {
		if c == ' ' || c == '\t' {
			pattern.push('\\');
		}
		pattern.push(c);
	}
	pattern.push('$');
	pattern
}

#[cfg(test)]
mod tests {
	use super::*;
	use regex::Regex;

	#[test]
	fn test_plain_path() {
		assert_eq!(anchored_literal("old"), "^old$");
		assert_eq!(anchored_literal("a/b/c"), "^a/b/c$");
	}

	#[test]
	fn test_query_string_is_not_over_escaped() {
		assert_eq!(anchored_literal("x=1"), "^x=1$");
	}

	#[test]
	fn test_metacharacters_escaped() {
		assert_eq!(anchored_literal("page.html"), r"^page\.html$");
		assert_eq!(anchored_literal("a+b(c)"), r"^a\+b\(c\)$");
		assert_eq!(anchored_literal("old-page"), r"^old\-page$");
	}

	#[test]
	fn test_whitespace_escaped() {
		assert_eq!(anchored_literal("old page"), r"^old\ page$");
		assert_eq!(anchored_literal("a b c"), r"^a\ b\ c$");
	}

	#[test]
	fn test_escaped_space_still_matches_literally() {
		let pattern = Regex::new(&anchored_literal("old page.html")).unwrap();
		assert!(pattern.is_match("old page.html"));
		assert!(!pattern.is_match("oldpage.html"));
	}

	#[test]
	fn test_anchored_pattern_matches_only_itself() {
		let pattern = Regex::new(&anchored_literal("files/report.pdf")).unwrap();
		assert!(pattern.is_match("files/report.pdf"));
		assert!(!pattern.is_match("files/reportXpdf"));
		assert!(!pattern.is_match("old/files/report.pdf"));
		assert!(!pattern.is_match("files/report.pdf.bak"));
	}
}
