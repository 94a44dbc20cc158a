//! Defines the [`Metadata`] and [`Entry`] types. [`Metadata`] is the
//! structured, displayable description of one article (everything the
//! listing cards and the feed need); [`Entry`] pairs that metadata with the
//! article's renderable body. The registry ([`crate::registry`]) owns
//! entries as a unit and never renders the body itself.

use crate::content::Content;
use gtmpl_value::Value;
use std::collections::HashMap;

/// The displayable fields describing one article, excluding its body.
///
/// All fields are plain display strings. `date` is an ISO `YYYY-MM-DD`
/// string; it is parsed only where a real timestamp is required (the Atom
/// feed) and is otherwise passed through untouched. `tags` keeps its
/// authored order and is not deduplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    /// Unique, URL-safe identifier. Article pages are written to
    /// `posts/{id}.html`, so this must already be in slug form; the
    /// registry validates it.
    pub id: String,

    pub title: String,
    pub description: String,

    /// Site-root-relative path to the card/header image, e.g.
    /// `static/thumbnails/foo.svg`.
    pub thumbnail: String,

    pub author: String,
    pub date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub category: String,
}

/// One registry entry: an article's metadata together with its content
/// handle. The handle is only ever handed to callers (the site writer, the
/// `show` command); nothing here invokes it.
#[derive(Clone, Debug)]
pub struct Entry {
    pub metadata: Metadata,
    pub content: Content,
}

impl From<&Metadata> for Value {
    /// Converts [`Metadata`] into a [`Value`] for templating. Every field
    /// is exposed under its own key; `tags` becomes an array of strings.
    fn from(m: &Metadata) -> Value {
        let mut obj: HashMap<String, Value> = HashMap::new();
        obj.insert("id".to_owned(), (&m.id).into());
        obj.insert("title".to_owned(), (&m.title).into());
        obj.insert("description".to_owned(), (&m.description).into());
        obj.insert("thumbnail".to_owned(), (&m.thumbnail).into());
        obj.insert("author".to_owned(), (&m.author).into());
        obj.insert("date".to_owned(), (&m.date).into());
        obj.insert("read_time".to_owned(), (&m.read_time).into());
        obj.insert("category".to_owned(), (&m.category).into());
        obj.insert(
            "tags".to_owned(),
            Value::Array(m.tags.iter().map(Value::from).collect()),
        );
        Value::Object(obj)
    }
}
