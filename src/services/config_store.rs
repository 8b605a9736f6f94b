//! Cached, lazily-initialized access to the course configuration
//! documents.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::domain::{ConfigError, IniDocument};
use crate::ports::{ConfigSource, CourseLayout};
use crate::services::{FilesystemLayout, FilesystemSource};

/// Per-assignment configuration key naming the source repository,
/// relative to the course root.
pub const REPOSITORY_KEY: &str = "Repository";

/// Holds the main and tester configuration documents, each loaded at
/// most once and cached for the lifetime of the store.
///
/// Both documents are read-only after their first load. A failed load
/// is not cached; the next call retries.
pub struct ConfigStore<L, S> {
    layout: L,
    source: S,
    main: OnceCell<IniDocument>,
    tester: OnceCell<IniDocument>,
}

impl ConfigStore<FilesystemLayout, FilesystemSource> {
    /// Store over the real filesystem for the course at `root`.
    pub fn for_course(root: PathBuf) -> Self {
        Self::new(FilesystemLayout::new(root), FilesystemSource)
    }
}

impl<L: CourseLayout, S: ConfigSource> ConfigStore<L, S> {
    /// Create a store over the given layout and reader.
    pub fn new(layout: L, source: S) -> Self {
        Self { layout, source, main: OnceCell::new(), tester: OnceCell::new() }
    }

    /// The main course configuration document, loaded on first use.
    pub fn config(&self) -> Result<&IniDocument, ConfigError> {
        self.main.get_or_try_init(|| self.load(self.layout.config_file()))
    }

    /// The tester configuration document, loaded on first use.
    ///
    /// Independent cache slot from [`config`](Self::config); its schema
    /// is opaque to this crate.
    pub fn tester_config(&self) -> Result<&IniDocument, ConfigError> {
        self.tester.get_or_try_init(|| self.load(self.layout.tester_config_file()))
    }

    /// Join `segments` onto the course root. Pure path math, no I/O.
    pub fn relative_path<I>(&self, segments: I) -> PathBuf
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut path = self.layout.root();
        for segment in segments {
            path.push(segment);
        }
        path
    }

    /// Absolute path of the source repository for `assignment`, read
    /// from the `Repository` key of the assignment's section.
    pub fn repository(&self, assignment: &str) -> Result<PathBuf, ConfigError> {
        let repository = self.config()?.get(assignment, REPOSITORY_KEY)?;
        Ok(self.relative_path([repository]))
    }

    fn load(&self, path: PathBuf) -> Result<IniDocument, ConfigError> {
        let content = self
            .source
            .read(&path)
            .map_err(|source| ConfigError::FileAccess { path, source })?;
        Ok(IniDocument::parse(&content)?)
    }
}
