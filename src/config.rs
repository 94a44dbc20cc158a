//! Site configuration. A project is a directory containing a `devblog.yaml`
//! file (site chrome and root URL) and a `layout/` directory with a
//! `layout.yaml` manifest naming the template files for each page kind.
//! [`Config::from_directory`] finds the project file by walking up from the
//! starting directory, so the CLI works from anywhere inside the project.

use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

/// The author identity used in page footers and feed entries.
#[derive(Clone, Debug, Deserialize)]
pub struct Author {
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,
}

/// The shape of `devblog.yaml`.
#[derive(Deserialize)]
struct Project {
    title: String,
    subtitle: String,
    author: Author,
    site_root: Url,
}

/// The shape of `layout/layout.yaml`: the template files for each page
/// kind, in concatenation order, relative to the layout directory.
#[derive(Deserialize)]
struct Layout {
    index_template: Vec<PathBuf>,
    post_template: Vec<PathBuf>,
    notfound_template: Vec<PathBuf>,
}

/// Everything the build pipeline needs, resolved to absolute URLs and
/// project-rooted paths.
#[derive(Debug)]
pub struct Config {
    pub title: String,
    pub subtitle: String,
    pub author: Author,

    /// The listing page URL, i.e. the site root.
    pub home_page: Url,
    pub posts_url: Url,
    pub static_url: Url,
    pub feed_url: Url,

    pub index_template: Vec<PathBuf>,
    pub post_template: Vec<PathBuf>,
    pub notfound_template: Vec<PathBuf>,

    /// The directory containing `devblog.yaml`. The theme preference file
    /// lives here too.
    pub project_root: PathBuf,
    pub static_source_directory: PathBuf,
    pub root_output_directory: PathBuf,
    pub posts_output_directory: PathBuf,
    pub static_output_directory: PathBuf,
}

impl Config {
    /// Looks for `devblog.yaml` in `dir` and then each of its parents,
    /// loading the first one found. `output_directory` overrides the
    /// default output location (`_site` beside the project file).
    pub fn from_directory(
        dir: &Path,
        output_directory: Option<&Path>,
    ) -> Result<Config> {
        let path = dir.join("devblog.yaml");
        if path.exists() {
            Config::from_project_file(&path, output_directory)
        } else {
            match dir.parent() {
                Some(parent) => {
                    Config::from_directory(parent, output_directory)
                }
                None => Err(Error::ProjectFileNotFound),
            }
        }
    }

    /// Loads a project from an explicit `devblog.yaml` path.
    pub fn from_project_file(
        path: &Path,
        output_directory: Option<&Path>,
    ) -> Result<Config> {
        let project: Project = serde_yaml::from_reader(open(path)?)?;
        let project_root = match path.parent() {
            Some(root) => root,
            None => return Err(Error::NoParentDirectory(path.to_owned())),
        };

        let layout_dir = project_root.join("layout");
        let layout: Layout =
            serde_yaml::from_reader(open(&layout_dir.join("layout.yaml"))?)?;

        // `Url::join` treats a base without a trailing slash as a file and
        // replaces its last segment. Normalize once so every join below
        // appends.
        let site_root = match project.site_root.path().ends_with('/') {
            true => project.site_root,
            false => Url::parse(&format!("{}/", project.site_root))?,
        };

        let root_output_directory = match output_directory {
            Some(dir) => dir.to_owned(),
            None => project_root.join("_site"),
        };

        Ok(Config {
            title: project.title,
            subtitle: project.subtitle,
            author: project.author,
            posts_url: site_root.join("posts/")?,
            static_url: site_root.join("static/")?,
            feed_url: site_root.join("feed.atom")?,
            home_page: site_root,
            index_template: prefix_all(&layout_dir, &layout.index_template),
            post_template: prefix_all(&layout_dir, &layout.post_template),
            notfound_template: prefix_all(
                &layout_dir,
                &layout.notfound_template,
            ),
            project_root: project_root.to_owned(),
            static_source_directory: layout_dir.join("static"),
            posts_output_directory: root_output_directory.join("posts"),
            static_output_directory: root_output_directory.join("static"),
            root_output_directory,
        })
    }
}

fn prefix_all(dir: &Path, relpaths: &[PathBuf]) -> Vec<PathBuf> {
    relpaths.iter().map(|relpath| dir.join(relpath)).collect()
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| Error::Open {
        path: path.to_owned(),
        err,
    })
}

/// The result of a fallible configuration-loading operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading the site configuration.
#[derive(Debug)]
pub enum Error {
    /// Returned when no parent directory contains a `devblog.yaml` file.
    ProjectFileNotFound,

    /// Returned when the project file path has no parent directory.
    NoParentDirectory(PathBuf),

    /// Returned for I/O problems opening a configuration file.
    Open { path: PathBuf, err: io::Error },

    /// Returned for malformed YAML in a configuration file.
    Yaml(serde_yaml::Error),

    /// Returned for invalid or non-joinable site URLs.
    UrlParse(url::ParseError),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ProjectFileNotFound => write!(
                f,
                "Could not find `devblog.yaml` in the current directory or \
                 any parent directory"
            ),
            Error::NoParentDirectory(path) => write!(
                f,
                "Can't get parent directory for project file path '{}'",
                path.display()
            ),
            Error::Open { path, err } => {
                write!(f, "Opening config file '{}': {}", path.display(), err)
            }
            Error::Yaml(err) => err.fmt(f),
            Error::UrlParse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ProjectFileNotFound => None,
            Error::NoParentDirectory(_) => None,
            Error::Open { path: _, err } => Some(err),
            Error::Yaml(err) => Some(err),
            Error::UrlParse(err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts [`serde_yaml::Error`]s into [`Error`]. This allows us to
    /// use the `?` operator for fallible YAML operations.
    fn from(err: serde_yaml::Error) -> Error {
        Error::Yaml(err)
    }
}

impl From<url::ParseError> for Error {
    /// Converts [`url::ParseError`]s into [`Error`]. This allows us to use
    /// the `?` operator for fallible URL operations.
    fn from(err: url::ParseError) -> Error {
        Error::UrlParse(err)
    }
}
