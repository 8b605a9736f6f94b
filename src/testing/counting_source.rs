//! Test double for `ConfigSource`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::ports::ConfigSource;

/// In-memory `ConfigSource` that records how many reads it served.
///
/// Tests seed file contents through [`add`](Self::add) and assert on
/// [`reads`](Self::reads) to observe load-once caching.
#[derive(Debug, Clone, Default)]
pub struct CountingSource {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    reads: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
    }

    /// Number of reads served so far, successful or not.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ConfigSource for CountingSource {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not seeded"))
    }
}
