//! The tri-state presentation theme and its persistence. The active theme
//! is stamped onto the `<html>` element of every rendered page as a class
//! name; the stylesheet keys all colors off that class. Persistence goes
//! through the [`PreferenceStore`] port so the glue is testable without
//! touching the filesystem.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name under which [`FileStore`] keeps the active theme token.
pub const STORAGE_KEY: &str = ".devblog-theme";

/// One of the three site color schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Morning,
    Evening,
    Night,
}

impl Theme {
    /// Every theme, in switcher display order.
    pub const ALL: [Theme; 3] = [Theme::Morning, Theme::Evening, Theme::Night];

    /// The lowercase token used as the root class name and as the persisted
    /// value. [`FromStr`] accepts exactly these strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Morning => "morning",
            Theme::Evening => "evening",
            Theme::Night => "night",
        }
    }

    /// Human-facing name for the theme switcher listing.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Morning => "Morning",
            Theme::Evening => "Evening",
            Theme::Night => "Night",
        }
    }

    /// Short mood descriptor shown beside the label.
    pub fn tagline(&self) -> &'static str {
        match self {
            Theme::Morning => "Fresh & Bright",
            Theme::Evening => "Warm & Golden",
            Theme::Night => "Dark & Cool",
        }
    }
}

impl Default for Theme {
    /// The site ships dark.
    fn default() -> Theme {
        Theme::Night
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnrecognizedTheme;

    fn from_str(s: &str) -> std::result::Result<Theme, UnrecognizedTheme> {
        match s {
            "morning" => Ok(Theme::Morning),
            "evening" => Ok(Theme::Evening),
            "night" => Ok(Theme::Night),
            _ => Err(UnrecognizedTheme(s.to_owned())),
        }
    }
}

/// Returned when a theme name is not one of the three members.
#[derive(Debug)]
pub struct UnrecognizedTheme(pub String);

impl fmt::Display for UnrecognizedTheme {
    /// Displays an [`UnrecognizedTheme`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unrecognized theme `{}`; valid themes are morning, evening, and night",
            self.0
        )
    }
}

impl std::error::Error for UnrecognizedTheme {}

/// Read/write access to the persisted theme token. The store carries raw
/// strings; [`load`] and [`save`] do the [`Theme`] conversion on either
/// side.
pub trait PreferenceStore {
    fn read(&self) -> io::Result<Option<String>>;
    fn write(&mut self, value: &str) -> io::Result<()>;
}

/// A [`PreferenceStore`] persisting the token in a [`STORAGE_KEY`] file
/// inside the project directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(directory: P) -> FileStore {
        FileStore {
            path: directory.as_ref().join(STORAGE_KEY),
        }
    }
}

impl PreferenceStore for FileStore {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            // Hand-edited files may carry a trailing newline.
            Ok(contents) => Ok(Some(contents.trim().to_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, value: &str) -> io::Result<()> {
        fs::write(&self.path, value)
    }
}

/// An in-memory [`PreferenceStore`] for tests.
#[derive(Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> io::Result<()> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}

/// Loads the active theme from `store`. Absent and unrecognized stored
/// values both yield the default; only a store failure is an error.
pub fn load<S: PreferenceStore>(store: &S) -> io::Result<Theme> {
    Ok(match store.read()? {
        Some(token) => token.parse().unwrap_or_default(),
        None => Theme::default(),
    })
}

/// Persists `theme` as the active preference.
pub fn save<S: PreferenceStore>(theme: Theme, store: &mut S) -> io::Result<()> {
    store.write(theme.as_str())
}
