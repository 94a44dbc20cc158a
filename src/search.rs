//! Pure article filtering, shared by the listing page count and the
//! `search` command. Matching is a case-insensitive substring test against
//! an article's title, description, and tags. The query is taken
//! literally: no trimming, no tokenization, no ranking. Results keep the
//! order of the input.

use crate::article::Metadata;

/// Filters `items` down to the articles matching `query`. The empty query
/// matches everything; any other query (including whitespace) is lowered
/// and looked for as a substring of each article's searchable fields.
pub fn filter<'a, I>(items: I, query: &str) -> Vec<&'a Metadata>
where
    I: IntoIterator<Item = &'a Metadata>,
{
    if query.is_empty() {
        return items.into_iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|metadata| matches(metadata, &needle))
        .collect()
}

/// `needle` must already be lowercase.
fn matches(metadata: &Metadata, needle: &str) -> bool {
    metadata.title.to_lowercase().contains(needle)
        || metadata.description.to_lowercase().contains(needle)
        || metadata
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
