//! Identifier normalization shared by the resolver and the in-memory stores.

/// Normalize an identifier for keyed lookup: trim, collapse internal
/// whitespace, lowercase.
pub fn normalize_key(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Lowercased alphanumeric token runs. Punctuation (including hyphens)
/// separates tokens, so "GT-R" yields `["gt", "r"]`.
pub(crate) fn tokens(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
