/// Ordered collection of source → destination URL pairs.
///
/// Sources are unique. Re-inserting a source replaces its destination but
/// keeps the position it was first inserted at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlMapping {
	entries: Vec<(String, String)>,
}

impl UrlMapping {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a pair, returning the previous destination for this source if any.
	pub fn insert(
		&mut self,
		source: impl Into<String>,
		destination: impl Into<String>,
	) -> Option<String> {
		let source = source.into();
		let destination = destination.into();

		if let Some(entry) = self.entries.iter_mut().find(|(s, _)| *s == source) {
			return Some(std::mem::replace(&mut entry.1, destination));
		}

		self.entries.push((source, destination));
		None
	}

	/// Merge pairs in order, later duplicates overwriting earlier ones.
	pub fn extend<I, S, D>(&mut self, pairs: I)
	where
		I: IntoIterator<Item = (S, D)>,
		S: Into<String>,
		D: Into<String>,
	{
		for (source, destination) in pairs {
			self.insert(source, destination);
		}
	}

	pub fn get(&self, source: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(s, _)| s == source)
			.map(|(_, d)| d.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(s, d)| (s.as_str(), d.as_str()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<S: Into<String>, D: Into<String>> FromIterator<(S, D)> for UrlMapping {
	fn from_iter<I: IntoIterator<Item = (S, D)>>(iter: I) -> Self {
		let mut mapping = UrlMapping::new();
		mapping.extend(iter);
		mapping
	}
}
