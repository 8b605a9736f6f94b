use std::io;
use std::path::Path;

/// Port for reading configuration file contents.
///
/// Kept separate from [`CourseLayout`](super::CourseLayout) so stores
/// can be observed, and stubbed, at the read boundary in tests.
pub trait ConfigSource {
    /// Read the file at `path` as UTF-8 text.
    fn read(&self, path: &Path) -> io::Result<String>;
}
