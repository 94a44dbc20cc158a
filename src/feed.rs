//! Support for creating an Atom feed from the article registry's metadata.

use crate::article::Metadata;
use crate::config::Author;
use atom_syndication::{Entry, Error as AtomError, Feed, Link, Person};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, ParseError,
    TimeZone, Utc,
};
use std::fmt;
use std::io::Write;
use url::Url;

/// Bundled configuration for creating a feed.
pub struct FeedConfig {
    pub title: String,
    pub id: String,
    pub author: Option<Author>,
    pub home_page: Url,

    /// The base URL for article pages, used to derive each entry's id and
    /// alternate link.
    pub posts_url: Url,
}

/// Creates a feed from some configuration ([`FeedConfig`]) and the
/// registry's metadata in registry order, and writes the result to a
/// [`std::io::Write`]. This function takes ownership of the provided
/// [`FeedConfig`].
pub fn write_feed<W: Write>(
    config: FeedConfig,
    metadata: &[&Metadata],
    w: W,
) -> Result<()> {
    feed(config, metadata)?.write_to(w)?;
    Ok(())
}

fn feed(config: FeedConfig, metadata: &[&Metadata]) -> Result<Feed> {
    use std::collections::HashMap;
    Ok(Feed {
        entries: feed_entries(&config, metadata)?,
        title: config.title,
        id: config.id,
        updated: utc_offset().from_utc_datetime(&Utc::now().naive_utc()),
        authors: author_to_people(config.author),
        categories: Vec::new(),
        contributors: Vec::new(),
        generator: None,
        icon: None,
        logo: None,
        rights: None,
        subtitle: None,
        extensions: HashMap::new(),
        namespaces: HashMap::new(),
        links: vec![Link {
            href: config.home_page.to_string(),
            rel: "alternate".to_string(),
            title: None,
            hreflang: None,
            mime_type: None,
            length: None,
        }],
    })
}

fn feed_entries(
    config: &FeedConfig,
    metadata: &[&Metadata],
) -> Result<Vec<Entry>> {
    use std::collections::HashMap;
    let mut entries: Vec<Entry> = Vec::with_capacity(metadata.len());

    for m in metadata {
        let url = config.posts_url.join(&format!("{}.html", m.id))?;
        let date = parse_article_date(&m.date)?;

        entries.push(Entry {
            id: url.to_string(),
            title: m.title.clone(),
            updated: date,
            authors: vec![Person {
                name: m.author.clone(),
                email: None,
                uri: None,
            }],
            links: vec![Link {
                href: url.to_string(),
                rel: "alternate".to_owned(),
                title: None,
                mime_type: None,
                hreflang: None,
                length: None,
            }],
            rights: None,
            summary: Some(m.description.clone()),
            categories: Vec::new(),
            contributors: Vec::new(),
            published: Some(date),
            source: None,
            content: None,
            extensions: HashMap::new(),
        })
    }
    Ok(entries)
}

/// Atom wants full timestamps, but article dates only carry a day. Pin
/// them to midnight UTC.
fn parse_article_date(
    date: &str,
) -> std::result::Result<DateTime<FixedOffset>, ParseError> {
    let naive_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    let naive_date_time = NaiveDateTime::new(naive_date, NaiveTime::MIN);
    Ok(utc_offset().from_utc_datetime(&naive_date_time))
}

fn utc_offset() -> FixedOffset {
    // An offset of zero seconds is always in bounds.
    FixedOffset::east_opt(0).unwrap()
}

fn author_to_people(author: Option<Author>) -> Vec<Person> {
    match author {
        Some(author) => vec![Person {
            name: author.name,
            email: author.email,
            uri: None,
        }],
        None => Vec::new(),
    }
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem creating a feed. Variants include I/O, Atom,
/// URL-joining, and date-time parsing issues.
#[derive(Debug)]
pub enum Error {
    /// Returned when there is a generic I/O error.
    Io(std::io::Error),

    /// Returned when there is an Atom-related error.
    Atom(AtomError),

    /// Returned when there is an issue parsing an article's date.
    DateTimeParse(ParseError),

    /// Returned when an entry URL cannot be joined.
    UrlParse(url::ParseError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(f),
            Error::Atom(err) => err.fmt(f),
            Error::DateTimeParse(err) => err.fmt(f),
            Error::UrlParse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Atom(err) => Some(err),
            Error::DateTimeParse(err) => Some(err),
            Error::UrlParse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator in fallible feed operations.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<AtomError> for Error {
    /// Converts [`AtomError`]s into [`Error`]. This allows us to use the
    /// `?` operator in fallible feed operations.
    fn from(err: AtomError) -> Error {
        Error::Atom(err)
    }
}

impl From<ParseError> for Error {
    /// Converts [`ParseError`]s into [`Error`]. This allows us to use the
    /// `?` operator in fallible feed operations.
    fn from(err: ParseError) -> Error {
        Error::DateTimeParse(err)
    }
}

impl From<url::ParseError> for Error {
    /// Converts [`url::ParseError`]s into [`Error`]. This allows us to use
    /// the `?` operator in fallible feed operations.
    fn from(err: url::ParseError) -> Error {
        Error::UrlParse(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn article(id: &str, title: &str, date: &str) -> Metadata {
        Metadata {
            id: id.to_owned(),
            title: title.to_owned(),
            description: format!("About {}.", title),
            thumbnail: format!("static/thumbnails/{}.svg", id),
            author: "Nauman Sadiq".to_owned(),
            date: date.to_owned(),
            read_time: "8 min read".to_owned(),
            tags: Vec::new(),
            category: "Full Stack Development".to_owned(),
        }
    }

    fn config() -> FeedConfig {
        FeedConfig {
            title: "DevBlog".to_owned(),
            id: "https://blog.example.org/".to_owned(),
            author: Some(Author {
                name: "Nauman Sadiq".to_owned(),
                email: None,
            }),
            home_page: Url::parse("https://blog.example.org/").unwrap(),
            posts_url: Url::parse("https://blog.example.org/posts/").unwrap(),
        }
    }

    #[test]
    fn test_entries_follow_registry_order() {
        let first = article("first", "First Article", "2024-01-15");
        let second = article("second", "Second Article", "2025-09-02");
        let feed = feed(config(), &[&first, &second]).unwrap();
        assert_eq!(feed.title, "DevBlog");
        assert_eq!(feed.entries.len(), 2);
        assert_eq!(
            feed.entries[0].id,
            "https://blog.example.org/posts/first.html"
        );
        assert_eq!(
            feed.entries[1].id,
            "https://blog.example.org/posts/second.html"
        );
    }

    #[test]
    fn test_entry_fields_come_from_the_article() {
        let m = article("first", "First Article", "2024-01-15");
        let feed = feed(config(), &[&m]).unwrap();
        let entry = &feed.entries[0];
        assert_eq!(entry.title, "First Article");
        assert_eq!(entry.summary.as_deref(), Some("About First Article."));
        assert_eq!(entry.authors.len(), 1);
        assert_eq!(entry.authors[0].name, "Nauman Sadiq");
        assert_eq!(entry.links[0].href, entry.id);
        assert_eq!(entry.links[0].rel, "alternate");
    }

    #[test]
    fn test_dates_are_pinned_to_midnight_utc() {
        let date = parse_article_date("2024-01-15").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_malformed_dates_are_datetime_parse_errors() {
        let m = article("broken", "Broken Article", "Jan 15, 2024");
        let err = feed(config(), &[&m]).unwrap_err();
        match err {
            Error::DateTimeParse(_) => {}
            other => panic!("expected DateTimeParse, got {:?}", other),
        }
    }

    #[test]
    fn test_write_feed_produces_atom_xml() {
        let m = article("first", "First Article", "2024-01-15");
        let mut buf: Vec<u8> = Vec::new();
        write_feed(config(), &[&m], &mut buf).unwrap();
        let xml = String::from_utf8(buf).unwrap();
        assert!(xml.contains("<feed"));
        assert!(xml.contains("First Article"));
        assert!(xml.contains("https://blog.example.org/posts/first.html"));
    }
}
