//! Defines the [`Registry`] type: the static, ordered collection of
//! article entries. Built once at startup from the compiled-in article set
//! ([`crate::articles::registry`]) and read-only thereafter. Order is
//! significant: the first entry is the listing page's featured article, and
//! enumeration always reflects insertion order.

use crate::article::{Entry, Metadata};
use std::collections::HashSet;
use std::fmt;

/// The ordered article collection. Constructing one validates the id
/// invariants every lookup and page path depends on; after that the
/// registry only ever hands out references.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Validates and wraps an ordered entry list. Ids must be unique across
    /// all entries and must already be URL-safe slugs (article pages are
    /// written to `posts/{id}.html`).
    pub fn new(entries: Vec<Entry>) -> Result<Registry> {
        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &entries {
            let id = entry.metadata.id.as_str();
            if id != slug::slugify(id) {
                return Err(Error::InvalidId(id.to_owned()));
            }
            if !seen.insert(id) {
                return Err(Error::DuplicateId(id.to_owned()));
            }
        }
        Ok(Registry { entries })
    }

    /// Finds the first entry whose id equals `id`, exact and
    /// case-sensitive. Absence is data: any non-matching string, however
    /// malformed, is simply `None`, never an error.
    pub fn lookup_by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.metadata.id == id)
    }

    /// Every entry's metadata in registry order, without content handles.
    pub fn metadata(&self) -> impl Iterator<Item = &Metadata> + '_ {
        self.entries.iter().map(|entry| &entry.metadata)
    }

    /// Every entry in registry order, content handles included. The
    /// registry never renders a handle itself; callers (the site writer,
    /// the `show` command) do.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The result of registry construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an invalid registry definition. These are author mistakes in
/// the compiled-in article set, caught at construction rather than
/// surfacing as broken lookups or colliding output paths.
#[derive(Debug)]
pub enum Error {
    /// Returned when two entries share an id.
    DuplicateId(String),

    /// Returned when an id is not a URL-safe slug.
    InvalidId(String),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateId(id) => {
                write!(f, "duplicate article id `{}`", id)
            }
            Error::InvalidId(id) => {
                write!(f, "article id `{}` is not a URL-safe slug", id)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::content::Content;

    fn entry(id: &str, title: &str) -> Entry {
        Entry {
            metadata: Metadata {
                id: id.to_owned(),
                title: title.to_owned(),
                description: String::new(),
                thumbnail: String::new(),
                author: String::new(),
                date: "2024-01-01".to_owned(),
                read_time: String::new(),
                tags: Vec::new(),
                category: String::new(),
            },
            content: Content::ManagingStateLaravelAngular,
        }
    }

    fn sample_registry() -> Registry {
        Registry::new(vec![entry("a", "First"), entry("b", "Second")])
            .unwrap()
    }

    #[test]
    fn test_lookup_by_id_returns_the_matching_entry() {
        let registry = sample_registry();
        assert_eq!(registry.lookup_by_id("a").unwrap().metadata.title, "First");
        assert_eq!(
            registry.lookup_by_id("b").unwrap().metadata.title,
            "Second"
        );
    }

    #[test]
    fn test_lookup_by_id_misses_are_none() {
        let registry = sample_registry();
        assert!(registry.lookup_by_id("c").is_none());
        assert!(registry.lookup_by_id("").is_none());
        assert!(registry.lookup_by_id("A").is_none(), "ids are case-sensitive");
        assert!(registry.lookup_by_id("../../etc/passwd").is_none());
        assert!(registry.lookup_by_id("a\0b").is_none());
    }

    #[test]
    fn test_metadata_preserves_order_and_length() {
        let registry = sample_registry();
        let ids: Vec<&str> =
            registry.metadata().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_metadata_is_stable_across_calls() {
        let registry = sample_registry();
        let first: Vec<&Metadata> = registry.metadata().collect();
        let second: Vec<&Metadata> = registry.metadata().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = Registry::new(vec![entry("a", "First"), entry("a", "Again")])
            .unwrap_err();
        match err {
            Error::DuplicateId(id) => assert_eq!(id, "a"),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_non_slug_ids_are_rejected() {
        let err =
            Registry::new(vec![entry("Not A Slug", "Bad")]).unwrap_err();
        match err {
            Error::InvalidId(id) => assert_eq!(id, "Not A Slug"),
            other => panic!("expected InvalidId, got {:?}", other),
        }
    }
}
