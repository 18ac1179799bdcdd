use crate::error::{Result, RewriteError};
use crate::input::check_pair;
use toml::{Table, Value};

/// Convert a TOML table of `source = destination` entries into pairs.
///
/// Destinations must be scalars. Strings are taken as-is, other scalars use
/// their TOML rendering. Arrays and tables are rejected, naming the source key,
/// as are entries containing control characters.
pub fn pairs_from_table(table: &Table) -> Result<Vec<(String, String)>> {
	table
		.iter()
		.map(|(source, value)| {
			let destination = scalar_to_string(value).ok_or_else(|| {
				RewriteError::InvalidDestination {
					key: source.clone(),
				}
			})?;
			check_pair(source, &destination)?;
			Ok((source.clone(), destination))
		})
		.collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Integer(i) => Some(i.to_string()),
		Value::Float(f) => Some(f.to_string()),
		Value::Boolean(b) => Some(b.to_string()),
		Value::Datetime(dt) => Some(dt.to_string()),
		Value::Array(_) | Value::Table(_) => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table(content: &str) -> Table {
		toml::from_str(content).unwrap()
	}

	#[test]
	fn test_pairs_keep_table_order() {
		let t = table(
			r#"
zebra = "/z"
"legacy?x=1" = "modern"
apple = "/a"
"#,
		);
		let pairs = pairs_from_table(&t).unwrap();
		let sources: Vec<_> = pairs.iter().map(|(s, _)| s.as_str()).collect();
		assert_eq!(sources, vec!["zebra", "legacy?x=1", "apple"]);
		assert_eq!(pairs[1].1, "modern");
	}

	#[test]
	fn test_non_string_scalars_accepted() {
		let t = table("a = 404\nb = true");
		let pairs = pairs_from_table(&t).unwrap();
		assert_eq!(pairs[0], ("a".to_string(), "404".to_string()));
		assert_eq!(pairs[1], ("b".to_string(), "true".to_string()));
	}

	#[test]
	fn test_array_destination_rejected() {
		let t = table(
			r#"
ok = "/fine"
broken = ["/one", "/two"]
"#,
		);
		match pairs_from_table(&t).unwrap_err() {
			RewriteError::InvalidDestination { key } => assert_eq!(key, "broken"),
			other => panic!("Expected InvalidDestination error, got {other:?}"),
		}
	}

	#[test]
	fn test_multiline_destination_rejected() {
		let t = table(
			r#"
a = "b\nRewriteRule ^x$ evil"
"#,
		);
		match pairs_from_table(&t).unwrap_err() {
			RewriteError::ControlCharacter { key } => assert_eq!(key, "a"),
			other => panic!("Expected ControlCharacter error, got {other:?}"),
		}
	}

	#[test]
	fn test_control_character_in_source_rejected() {
		let t = table("\"old\\rpage\" = \"/new\"");
		assert!(matches!(
			pairs_from_table(&t),
			Err(RewriteError::ControlCharacter { .. })
		));
	}

	#[test]
	fn test_table_destination_rejected() {
		let t = table(
			r#"
[nested]
to = "/x"
"#,
		);
		assert!(matches!(
			pairs_from_table(&t),
			Err(RewriteError::InvalidDestination { .. })
		));
	}
}
