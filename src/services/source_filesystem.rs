use std::fs;
use std::io;
use std::path::Path;

use crate::ports::ConfigSource;

/// Configuration reader over the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemSource;

impl ConfigSource for FilesystemSource {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
