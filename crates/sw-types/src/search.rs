//! Fuzzy matching for option search.
//!
//! Selection widgets filter their catalogs with [`fuzzy_match`]: a
//! case-insensitive substring check first, then a subsequence ("scatter")
//! fallback so queries like `pg` still hit `postgresql`.

/// Returns true when `query` fuzzily matches `text`.
///
/// An empty query matches everything. Matching is case-insensitive and
/// never allocates beyond lowercasing the inputs.
pub fn fuzzy_match(query: &str, text: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    let text = text.to_lowercase();

    if text.contains(&query) {
        return true;
    }

    // Subsequence fallback: every query char must appear in order.
    let mut query_chars = query.chars().peekable();
    for ch in text.chars() {
        if query_chars.peek() == Some(&ch) {
            query_chars.next();
        }
    }
    query_chars.peek().is_none()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
