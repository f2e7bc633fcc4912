use std::collections::HashSet;

/// Uppercases the first character of `text`, leaving the rest untouched.
pub fn capitalise(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Keeps the first occurrence of every non-blank tag, in input order.
pub fn distinct_tags<I, S>(tags: I) -> Vec<S>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut seen = HashSet::new();
	tags.into_iter()
		.filter(|tag| !tag.as_ref().trim().is_empty())
		.filter(|tag| seen.insert(tag.as_ref().to_owned()))
		.collect()
}
