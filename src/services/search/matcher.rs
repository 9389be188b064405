use super::normalize;
use crate::model::entry::SearchEntry;

/// Returns the entries matching the query, in index order. An empty or
/// whitespace-only query matches nothing, not everything.
pub fn filter_entries<'a>(query: &str, entries: &'a [SearchEntry]) -> Vec<&'a SearchEntry> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let q = trimmed.to_lowercase();
    let q_norm = normalize::normalize_query(&q);

    entries
        .iter()
        .filter(|entry| {
            let german = entry.german.to_lowercase();
            let english = entry.english.to_lowercase();

            // Raw substring first; on a miss the umlaut-normalized
            // comparison still runs, it is not a post-filter.
            if german.contains(&q) || english.contains(&q) {
                return true;
            }

            normalize::normalize(&german).contains(&q_norm)
                || normalize::normalize(&english).contains(&q_norm)
        })
        .collect()
}
