//! Exports the [`build_site`] function which stitches together the
//! high-level steps of building the output static site: composing the
//! article registry ([`crate::articles`]), rendering the listing, article,
//! and not-found pages ([`crate::write`]), copying the static source
//! directory into the static output directory, and generating the Atom
//! feed.

use crate::articles;
use crate::config::Config;
use crate::feed::{write_feed, Error as FeedError, FeedConfig};
use crate::registry::Error as RegistryError;
use crate::theme::Theme;
use crate::write::{Error as WriteError, Site, Writer};
use gtmpl::Template;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Builds the site from a [`Config`] object and the active [`Theme`]. This
/// composes the article registry and calls into [`Writer::write_site`] and
/// [`write_feed`] which do the heavy lifting. This function also copies the
/// static assets from the source directory to the output directory.
pub fn build_site(config: Config, theme: Theme) -> Result<()> {
    let registry = articles::registry()?;

    // Parse the template files.
    let index_template = parse_template(config.index_template.iter())?;
    let post_template = parse_template(config.post_template.iter())?;
    let notfound_template = parse_template(config.notfound_template.iter())?;

    // Blow away the old output subdirectories so stale pages don't survive
    // a rebuild. The root output directory itself is left alone; the page
    // files there are overwritten in place.
    rmdir(&config.posts_output_directory)?;
    rmdir(&config.static_output_directory)?;

    let site = Site {
        title: config.title.clone(),
        subtitle: config.subtitle,
        author: config.author.name.clone(),
    };
    let writer = Writer {
        index_template: &index_template,
        post_template: &post_template,
        notfound_template: &notfound_template,
        posts_url: &config.posts_url,
        posts_output_directory: &config.posts_output_directory,
        root_output_directory: &config.root_output_directory,
        home_page: &config.home_page,
        static_url: &config.static_url,
        feed_url: &config.feed_url,
        site: &site,
        theme,
    };
    writer.write_site(&registry)?;

    // copy static directory
    copy_dir(
        &config.static_source_directory,
        &config.static_output_directory,
    )?;

    // create the atom feed
    let metadata: Vec<_> = registry.metadata().collect();
    write_feed(
        FeedConfig {
            title: config.title,
            id: config.home_page.to_string(),
            author: Some(config.author),
            home_page: config.home_page,
            posts_url: config.posts_url,
        },
        &metadata,
        File::create(config.root_output_directory.join("feed.atom"))?,
    )?;

    Ok(())
}

/// Copies the static asset tree into the output directory, preserving its
/// directory structure.
fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    for result in walkdir::WalkDir::new(src) {
        let entry = result?;
        // strip_prefix should never fail; every yielded path starts with
        // the walk root.
        let relpath = entry.path().strip_prefix(src).unwrap();
        let target = dst.join(relpath);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Loads the template files, concatenates their contents, and parses the
/// result into a single template. Later files can use `{{define}}` blocks
/// from earlier ones.
fn parse_template<P: AsRef<Path>>(
    template_files: impl Iterator<Item = P>,
) -> Result<Template> {
    let mut contents = String::new();
    for template_file in template_files {
        use std::io::Read;
        let template_file = template_file.as_ref();
        File::open(template_file)
            .map_err(|e| Error::OpenTemplateFile {
                path: template_file.to_owned(),
                err: e,
            })?
            .read_to_string(&mut contents)?;
        contents.push(' ');
    }

    let mut template = Template::default();
    template.parse(&contents).map_err(Error::ParseTemplate)?;
    Ok(template)
}

fn rmdir(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(x) => Ok(x),
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => Ok(()),
            _ => Err(Error::Clean {
                path: dir.to_owned(),
                err: e,
            }),
        },
    }
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can occur while composing
/// the article registry, writing pages, cleaning output directories,
/// parsing template files, and during other I/O.
#[derive(Debug)]
pub enum Error {
    /// Returned when the compiled-in article set is invalid.
    Registry(RegistryError),

    /// Returned for errors writing pages to disk as HTML files.
    Write(WriteError),

    /// Returned for I/O problems while cleaning output directories.
    Clean { path: PathBuf, err: std::io::Error },

    /// Returned for I/O problems while opening template files.
    OpenTemplateFile { path: PathBuf, err: std::io::Error },

    /// Returned for errors parsing template files.
    ParseTemplate(String),

    /// Returned for errors writing the feed.
    Feed(FeedError),

    /// Returned for WalkDir I/O errors while copying static assets.
    WalkDir(walkdir::Error),

    /// Returned for other I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Registry(err) => err.fmt(f),
            Error::Write(err) => err.fmt(f),
            Error::Clean { path, err } => {
                write!(f, "Cleaning directory '{}': {}", path.display(), err)
            }
            Error::OpenTemplateFile { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::ParseTemplate(err) => err.fmt(f),
            Error::Feed(err) => err.fmt(f),
            Error::WalkDir(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Registry(err) => Some(err),
            Error::Write(err) => Some(err),
            Error::Clean { path: _, err } => Some(err),
            Error::OpenTemplateFile { path: _, err } => Some(err),
            Error::ParseTemplate(_) => None,
            Error::Feed(err) => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<RegistryError> for Error {
    /// Converts [`RegistryError`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: RegistryError) -> Error {
        Error::Registry(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}

impl From<FeedError> for Error {
    /// Converts [`FeedError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: FeedError) -> Error {
        Error::Feed(err)
    }
}

impl From<walkdir::Error> for Error {
    /// Converts [`walkdir::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: walkdir::Error) -> Error {
        Error::WalkDir(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_template_concatenates_files() {
        let dir = std::env::temp_dir().join("devblog-build-test-templates");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("defines.html"),
            "{{define \"greeting\"}}hello{{end}}",
        )
        .unwrap();
        fs::write(dir.join("page.html"), "{{template \"greeting\"}} world")
            .unwrap();
        let files = [dir.join("defines.html"), dir.join("page.html")];
        parse_template(files.iter()).unwrap();
    }

    #[test]
    fn test_parse_template_reports_the_missing_file() {
        let missing = std::env::temp_dir()
            .join("devblog-build-test-nothing")
            .join("gone.html");
        let err =
            parse_template([&missing].into_iter()).map(|_| ()).unwrap_err();
        match err {
            Error::OpenTemplateFile { path, err: _ } => {
                assert_eq!(path, missing)
            }
            other => panic!("expected OpenTemplateFile, got {:?}", other),
        }
    }

    #[test]
    fn test_rmdir_tolerates_a_missing_directory() {
        rmdir(Path::new("/definitely/not/a/real/devblog/dir")).unwrap();
    }

    #[test]
    fn test_build_site_end_to_end() {
        use crate::config::Config;

        // Cargo runs tests from the package root, so the repo's own site
        // inputs double as the fixture.
        let out = std::env::temp_dir().join("devblog-build-test-site");
        let _ = fs::remove_dir_all(&out);
        let config = Config::from_project_file(
            Path::new("devblog.yaml"),
            Some(&out),
        )
        .unwrap();
        build_site(config, Theme::Evening).unwrap();

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("class=\"evening\""));
        assert!(index.contains("DevBlog"));
        assert!(index.contains("Featured Article"));

        let post = fs::read_to_string(
            out.join("posts").join("managing-state-laravel-angular.html"),
        )
        .unwrap();
        assert!(post
            .contains("Managing State with Laravel and Angular: A Complete Guide"));
        assert!(post.contains("<h2>Introduction</h2>"));

        let notfound = fs::read_to_string(out.join("404.html")).unwrap();
        assert!(notfound.contains("Blog Not Found"));

        assert!(out.join("static").join("style.css").is_file());
        let atom = fs::read_to_string(out.join("feed.atom")).unwrap();
        assert!(atom.contains("<feed"));
    }
}
