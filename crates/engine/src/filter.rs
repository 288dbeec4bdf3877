//! Free-text filter stage.

use gridkit_types::{FilterConfig, Record};

/// Reduce a record collection to the indices matching a free-text query.
///
/// The match is a case-insensitive substring test against the string
/// representation of every field named in `search_keys`, retained on any hit
/// (logical OR). Null or absent fields coerce to the empty string, so they
/// never match a non-empty query. Output preserves input order.
///
/// Identity short-circuits: an empty query, a disabled config, or an empty
/// key list all return every index unchanged.
pub fn apply_filter<T: Record>(records: &[T], query: &str, config: &FilterConfig) -> Vec<usize> {
    if !config.enabled || query.is_empty() || config.search_keys.is_empty() {
        return (0..records.len()).collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            config
                .search_keys
                .iter()
                .any(|key| record.field(key).to_string().to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}
