use crate::article::{Entry, Metadata};
use crate::registry::Registry;
use crate::theme::Theme;
use gtmpl::{Template, Value};
use gtmpl_derive::Gtmpl;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

/// How many tags a listing card shows before folding the rest into a `+N`
/// badge.
const CARD_TAG_LIMIT: usize = 3;

/// The site chrome shown on every page: the blog's name, its subtitle, and
/// the author byline.
#[derive(Clone, Gtmpl)]
pub struct Site {
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// Responsible for templating and writing HTML pages to disk from the
/// article registry: the listing page, one page per article, and the
/// not-found page.
pub struct Writer<'a> {
    /// The template for the listing page.
    pub index_template: &'a Template,

    /// The template for article pages.
    pub post_template: &'a Template,

    /// The template for the not-found page.
    pub notfound_template: &'a Template,

    /// The base URL for article pages. An article's page will be located
    /// at `{posts_url}{id}.html`.
    pub posts_url: &'a Url,

    /// The directory in which the article HTML files will be written.
    pub posts_output_directory: &'a Path,

    /// The directory for the listing page (`index.html`) and the
    /// not-found page (`404.html`).
    pub root_output_directory: &'a Path,

    /// The URL for the site's home page, typically the destination for the
    /// site-header link.
    pub home_page: &'a Url,

    /// The URL for the static assets, typically for the stylesheet and the
    /// thumbnail images.
    pub static_url: &'a Url,

    /// The URL for the Atom feed.
    pub feed_url: &'a Url,

    /// The site chrome.
    pub site: &'a Site,

    /// The active theme. Every page's `<html>` element gets this as its
    /// class, which the stylesheet keys all colors off of.
    pub theme: Theme,
}

impl Writer<'_> {
    /// Templates every page of the site and writes them to disk.
    pub fn write_site(&self, registry: &Registry) -> Result<()> {
        std::fs::create_dir_all(self.root_output_directory)?;
        std::fs::create_dir_all(self.posts_output_directory)?;
        self.write_page(&self.index_page(registry)?)?;
        self.write_page(&self.notfound_page())?;
        for entry in registry.entries() {
            self.write_page(&self.post_page(entry)?)?;
        }
        Ok(())
    }

    /// Takes a single [`Page`], templates it, and writes it to disk.
    fn write_page(&self, page: &Page) -> Result<()> {
        let mut value = page.to_value();
        if let Value::Object(obj) = &mut value {
            obj.insert("site".to_owned(), self.site.clone().into());
            obj.insert(
                "theme".to_owned(),
                Value::String(self.theme.as_str().to_owned()),
            );
            obj.insert(
                "home_page".to_owned(),
                Value::String(self.home_page.to_string()),
            );
            obj.insert(
                "static_url".to_owned(),
                Value::String(self.static_url.to_string()),
            );
            obj.insert(
                "feed_url".to_owned(),
                Value::String(self.feed_url.to_string()),
            );
        }
        page.template.execute(
            &mut std::fs::File::create(&page.file_path)?,
            &gtmpl::Context::from(value).unwrap(),
        )?;
        Ok(())
    }

    /// Builds the listing page: the featured card (the first registry
    /// entry), the grid of remaining cards, and the total article count.
    /// The count includes the featured article even though the grid
    /// excludes it.
    fn index_page(&self, registry: &Registry) -> Result<Page> {
        let metadata: Vec<&Metadata> = registry.metadata().collect();
        let featured = match metadata.first() {
            Some(first) => self.card_value(first)?,
            None => Value::Nil,
        };
        let articles = metadata
            .iter()
            .skip(1)
            .map(|m| self.card_value(m))
            .collect::<Result<Vec<Value>>>()?;

        let mut item: HashMap<String, Value> = HashMap::new();
        item.insert("featured".to_owned(), featured);
        item.insert("articles".to_owned(), Value::Array(articles));
        item.insert("count".to_owned(), Value::from(metadata.len() as u64));
        Ok(Page {
            item: Value::Object(item),
            file_path: self.root_output_directory.join("index.html"),
            template: self.index_template,
        })
    }

    /// Builds one article page: the full metadata plus the rendered body.
    fn post_page(&self, entry: &Entry) -> Result<Page> {
        let metadata = &entry.metadata;
        let mut item = Value::from(metadata);
        if let Value::Object(obj) = &mut item {
            obj.insert(
                "url".to_owned(),
                Value::String(self.post_url(&metadata.id)?.to_string()),
            );
            obj.insert(
                "thumbnail_url".to_owned(),
                Value::String(self.asset_url(&metadata.thumbnail)?.to_string()),
            );
            obj.insert(
                "body".to_owned(),
                Value::String(entry.content.to_html()),
            );
        }
        Ok(Page {
            item,
            file_path: self
                .posts_output_directory
                .join(format!("{}.html", metadata.id)),
            template: self.post_template,
        })
    }

    /// Builds the not-found page. It carries no item of its own, only the
    /// common fields.
    fn notfound_page(&self) -> Page {
        Page {
            item: Value::Nil,
            file_path: self.root_output_directory.join("404.html"),
            template: self.notfound_template,
        }
    }

    /// Builds the template value for one listing card. Cards show at most
    /// [`CARD_TAG_LIMIT`] tags; the overflow count goes into `more_tags`,
    /// which is nil when nothing was folded so templates can gate the `+N`
    /// badge with `if`.
    fn card_value(&self, metadata: &Metadata) -> Result<Value> {
        let mut value = Value::from(metadata);
        if let Value::Object(obj) = &mut value {
            obj.insert(
                "url".to_owned(),
                Value::String(self.post_url(&metadata.id)?.to_string()),
            );
            obj.insert(
                "thumbnail_url".to_owned(),
                Value::String(self.asset_url(&metadata.thumbnail)?.to_string()),
            );
            obj.insert(
                "tags".to_owned(),
                Value::Array(
                    metadata
                        .tags
                        .iter()
                        .take(CARD_TAG_LIMIT)
                        .map(Value::from)
                        .collect(),
                ),
            );
            obj.insert(
                "more_tags".to_owned(),
                match metadata.tags.len() > CARD_TAG_LIMIT {
                    true => {
                        Value::from((metadata.tags.len() - CARD_TAG_LIMIT) as u64)
                    }
                    false => Value::Nil,
                },
            );
        }
        Ok(value)
    }

    fn post_url(&self, id: &str) -> Result<Url> {
        Ok(self.posts_url.join(&format!("{}.html", id))?)
    }

    /// Resolves a site-root-relative asset path (e.g.
    /// `static/thumbnails/foo.svg`) against the home page URL.
    fn asset_url(&self, relpath: &str) -> Result<Url> {
        Ok(self.home_page.join(relpath)?)
    }
}

/// An object representing an output HTML file. A [`Page`] can be converted
/// to a [`Value`] and thus rendered in a template via [`Page::to_value`].
struct Page<'a> {
    /// The main item for the page.
    item: Value,

    /// The target location on disk for the output file.
    file_path: PathBuf,

    /// The template with which the page will be rendered.
    template: &'a Template,
}

impl Page<'_> {
    /// Converts a [`Page`] into a [`Value`]. The result is a
    /// [`Value::Object`] with the page's `item`; [`Writer::write_page`]
    /// fills in the fields shared by every page.
    fn to_value(&self) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("item".to_owned(), self.item.clone());
        Value::Object(m)
    }
}

/// The result of a fallible page-writing operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// An error during templating.
    Template(String),

    /// An error writing the output files.
    Io(io::Error),

    /// An error joining a page or asset URL.
    UrlParse(url::ParseError),
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`].
    /// This allows us to use the `?` operator for fallible template
    /// operations.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}

impl From<url::ParseError> for Error {
    /// Converts a [`url::ParseError`] into an [`Error`]. This allows us to
    /// use the `?` operator for fallible URL operations.
    fn from(err: url::ParseError) -> Error {
        Error::UrlParse(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Template(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
            Error::UrlParse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Template(_) => None,
            Error::Io(err) => Some(err),
            Error::UrlParse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::content::Content;

    fn entry(id: &str, tags: &[&str]) -> Entry {
        Entry {
            metadata: Metadata {
                id: id.to_owned(),
                title: format!("Title for {}", id),
                description: format!("Description for {}", id),
                thumbnail: format!("static/thumbnails/{}.svg", id),
                author: "Nauman Sadiq".to_owned(),
                date: "2024-01-15".to_owned(),
                read_time: "8 min read".to_owned(),
                tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
                category: "Full Stack Development".to_owned(),
            },
            content: Content::ManagingStateLaravelAngular,
        }
    }

    struct Fixture {
        registry: Registry,
        template: Template,
        posts_url: Url,
        home_page: Url,
        static_url: Url,
        feed_url: Url,
        site: Site,
        out: PathBuf,
    }

    impl Fixture {
        fn new(entries: Vec<Entry>) -> Fixture {
            Fixture {
                registry: Registry::new(entries).unwrap(),
                template: Template::default(),
                posts_url: Url::parse("https://blog.example.org/posts/")
                    .unwrap(),
                home_page: Url::parse("https://blog.example.org/").unwrap(),
                static_url: Url::parse("https://blog.example.org/static/")
                    .unwrap(),
                feed_url: Url::parse("https://blog.example.org/feed.atom")
                    .unwrap(),
                site: Site {
                    title: "DevBlog".to_owned(),
                    subtitle: "Full Stack Development Insights".to_owned(),
                    author: "Nauman Sadiq".to_owned(),
                },
                out: std::env::temp_dir().join("devblog-write-test"),
            }
        }

        fn writer(&self) -> Writer {
            Writer {
                index_template: &self.template,
                post_template: &self.template,
                notfound_template: &self.template,
                posts_url: &self.posts_url,
                posts_output_directory: &self.out,
                root_output_directory: &self.out,
                home_page: &self.home_page,
                static_url: &self.static_url,
                feed_url: &self.feed_url,
                site: &self.site,
                theme: Theme::Night,
            }
        }
    }

    fn as_object(value: Value) -> HashMap<String, Value> {
        match value {
            Value::Object(obj) => obj,
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_index_page_excludes_the_featured_card_from_the_grid() {
        let fixture = Fixture::new(vec![
            entry("first", &["Laravel"]),
            entry("second", &["Angular"]),
            entry("third", &["Stripe"]),
        ]);
        let writer = fixture.writer();
        let page = writer.index_page(&fixture.registry).unwrap();
        let item = as_object(page.item);

        let featured = as_object(item["featured"].clone());
        assert_eq!(featured["id"], Value::String("first".to_owned()));

        let grid = match &item["articles"] {
            Value::Array(cards) => cards.clone(),
            other => panic!("expected array, got {:?}", other),
        };
        assert_eq!(grid.len(), 2);
        assert_eq!(
            as_object(grid[0].clone())["id"],
            Value::String("second".to_owned())
        );
        assert_eq!(
            as_object(grid[1].clone())["id"],
            Value::String("third".to_owned())
        );
    }

    #[test]
    fn test_index_count_includes_the_featured_article() {
        let fixture = Fixture::new(vec![
            entry("first", &[]),
            entry("second", &[]),
        ]);
        let writer = fixture.writer();
        let page = writer.index_page(&fixture.registry).unwrap();
        let item = as_object(page.item);
        assert_eq!(item["count"], Value::from(2u64));
    }

    #[test]
    fn test_index_page_of_an_empty_registry() {
        let fixture = Fixture::new(Vec::new());
        let writer = fixture.writer();
        let page = writer.index_page(&fixture.registry).unwrap();
        let item = as_object(page.item);
        assert_eq!(item["featured"], Value::Nil);
        assert_eq!(item["articles"], Value::Array(Vec::new()));
        assert_eq!(item["count"], Value::from(0u64));
    }

    #[test]
    fn test_cards_fold_tags_past_the_limit() {
        let fixture = Fixture::new(vec![entry(
            "crowded",
            &["Laravel", "Angular", "Full Stack", "State Management", "API"],
        )]);
        let writer = fixture.writer();
        let card = as_object(
            writer
                .card_value(fixture.registry.metadata().next().unwrap())
                .unwrap(),
        );
        assert_eq!(
            card["tags"],
            Value::Array(vec![
                Value::String("Laravel".to_owned()),
                Value::String("Angular".to_owned()),
                Value::String("Full Stack".to_owned()),
            ])
        );
        assert_eq!(card["more_tags"], Value::from(2u64));
    }

    #[test]
    fn test_cards_with_few_tags_have_no_overflow_badge() {
        let fixture = Fixture::new(vec![entry("sparse", &["Laravel"])]);
        let writer = fixture.writer();
        let card = as_object(
            writer
                .card_value(fixture.registry.metadata().next().unwrap())
                .unwrap(),
        );
        assert_eq!(
            card["tags"],
            Value::Array(vec![Value::String("Laravel".to_owned())])
        );
        assert_eq!(card["more_tags"], Value::Nil);
    }

    #[test]
    fn test_card_urls_are_absolute() {
        let fixture = Fixture::new(vec![entry("some-article", &[])]);
        let writer = fixture.writer();
        let card = as_object(
            writer
                .card_value(fixture.registry.metadata().next().unwrap())
                .unwrap(),
        );
        assert_eq!(
            card["url"],
            Value::String(
                "https://blog.example.org/posts/some-article.html".to_owned()
            )
        );
        assert_eq!(
            card["thumbnail_url"],
            Value::String(
                "https://blog.example.org/static/thumbnails/some-article.svg"
                    .to_owned()
            )
        );
    }

    #[test]
    fn test_post_pages_carry_the_rendered_body_and_full_tags() {
        let fixture = Fixture::new(vec![entry(
            "full",
            &["Laravel", "Angular", "Full Stack", "State Management", "API"],
        )]);
        let writer = fixture.writer();
        let looked_up = fixture.registry.lookup_by_id("full").unwrap();
        let page = writer.post_page(looked_up).unwrap();
        assert_eq!(page.file_path, fixture.out.join("full.html"));
        let item = as_object(page.item);
        match &item["body"] {
            Value::String(body) => {
                assert!(body.contains("<h2>Introduction</h2>"))
            }
            other => panic!("expected string body, got {:?}", other),
        }
        match &item["tags"] {
            Value::Array(tags) => assert_eq!(tags.len(), 5),
            other => panic!("expected tags array, got {:?}", other),
        }
    }

    #[test]
    fn test_notfound_page_has_no_item() {
        let fixture = Fixture::new(Vec::new());
        let writer = fixture.writer();
        let page = writer.notfound_page();
        assert_eq!(page.item, Value::Nil);
        assert_eq!(page.file_path, fixture.out.join("404.html"));
    }
}
