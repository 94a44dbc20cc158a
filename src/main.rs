use clap::{Parser, Subcommand};
use devblog::theme::{self, FileStore, Theme};
use devblog::{articles, build, config, registry, search};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devblog")]
#[command(about = "Static site generator for my personal development blog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site (pages, static assets, Atom feed)
    Build {
        /// Output directory (defaults to `_site` beside devblog.yaml)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List every article in registry order
    List,

    /// Search article titles, descriptions, and tags
    Search {
        /// Case-insensitive text to look for
        query: String,
    },

    /// Show one article's metadata and rendered body
    Show {
        /// The article id, e.g. `managing-state-laravel-angular`
        id: String,
    },

    /// Print or set the persisted color theme
    Theme {
        /// One of `morning`, `evening`, `night`; omit to list the themes
        name: Option<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { out } => cmd_build(out),
        Commands::List => cmd_list(),
        Commands::Search { query } => cmd_search(&query),
        Commands::Show { id } => cmd_show(&id),
        Commands::Theme { name } => cmd_theme(name),
    }
}

fn cmd_build(out: Option<PathBuf>) -> Result<()> {
    let config = config::Config::from_directory(
        &std::env::current_dir()?,
        out.as_deref(),
    )?;
    let store = FileStore::new(&config.project_root);
    let theme = theme::load(&store)?;
    let target = config.root_output_directory.clone();

    build::build_site(config, theme)?;

    println!("Built site into {}", target.display());
    Ok(())
}

fn cmd_list() -> Result<()> {
    let registry = articles::registry()?;
    for metadata in registry.metadata() {
        println!("{}  {}  {}", metadata.date, metadata.id, metadata.title);
    }
    Ok(())
}

fn cmd_search(query: &str) -> Result<()> {
    let registry = articles::registry()?;
    let results = search::filter(registry.metadata(), query);

    if results.is_empty() {
        println!("No articles found");
        println!("Try adjusting your search terms or browse all articles.");
        return Ok(());
    }

    println!("Search Results ({})", results.len());
    for metadata in results {
        println!();
        println!("  {}", metadata.title);
        println!(
            "  {} | {} | {}",
            metadata.date, metadata.read_time, metadata.category
        );
        println!("  {}", metadata.tags.join(", "));
    }
    Ok(())
}

fn cmd_show(id: &str) -> Result<()> {
    let registry = articles::registry()?;

    match registry.lookup_by_id(id) {
        None => {
            // A miss is an answer, not a failure.
            println!("Blog Not Found");
            println!("The blog post you're looking for doesn't exist.");
        }
        Some(entry) => {
            let metadata = &entry.metadata;
            println!("{}", metadata.title);
            println!(
                "By {} | {} | {}",
                metadata.author, metadata.date, metadata.read_time
            );
            println!("{}", metadata.tags.join(", "));
            println!();
            println!("{}", entry.content.to_html());
        }
    }
    Ok(())
}

fn cmd_theme(name: Option<String>) -> Result<()> {
    let config =
        config::Config::from_directory(&std::env::current_dir()?, None)?;
    let mut store = FileStore::new(&config.project_root);

    match name {
        None => {
            let active = theme::load(&store)?;
            println!("Active theme: {}\n", active);
            for theme in Theme::ALL {
                let marker = match theme == active {
                    true => "*",
                    false => " ",
                };
                println!(
                    "{} {:<8} {} ({})",
                    marker,
                    theme.as_str(),
                    theme.label(),
                    theme.tagline()
                );
            }
        }
        Some(name) => {
            let theme: Theme = name.parse()?;
            theme::save(theme, &mut store)?;
            println!("Theme set to {} ({})", theme.label(), theme.tagline());
        }
    }
    Ok(())
}

type Result<T> = std::result::Result<T, Error>;

/// The top-level error type: every module error the commands can hit.
#[derive(Debug)]
enum Error {
    Config(config::Error),
    Registry(registry::Error),
    Build(build::Error),
    Theme(theme::UnrecognizedTheme),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Config(err) => err.fmt(f),
            Error::Registry(err) => err.fmt(f),
            Error::Build(err) => err.fmt(f),
            Error::Theme(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            Error::Registry(err) => Some(err),
            Error::Build(err) => Some(err),
            Error::Theme(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<config::Error> for Error {
    /// Converts [`config::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: config::Error) -> Error {
        Error::Config(err)
    }
}

impl From<registry::Error> for Error {
    /// Converts [`registry::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: registry::Error) -> Error {
        Error::Registry(err)
    }
}

impl From<build::Error> for Error {
    /// Converts [`build::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: build::Error) -> Error {
        Error::Build(err)
    }
}

impl From<theme::UnrecognizedTheme> for Error {
    /// Converts [`theme::UnrecognizedTheme`]s into [`Error`]. This allows
    /// us to use the `?` operator.
    fn from(err: theme::UnrecognizedTheme) -> Error {
        Error::Theme(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
