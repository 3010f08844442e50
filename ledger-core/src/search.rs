//! Substring filtering for the list views.

/// Case-insensitive substring match of `query` against a record's rendered
/// field values. An empty or whitespace-only query matches everything.
pub fn matches(query: &str, fields: &[String]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
