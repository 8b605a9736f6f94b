use std::path::{Path, PathBuf};

/// Port for the on-disk layout convention of one course.
///
/// Implementations own the directory rules. Consumers only ask for
/// locations and never compose course paths themselves.
pub trait CourseLayout {
    /// Course root directory.
    fn root(&self) -> PathBuf;

    /// Location of the main course configuration file.
    fn config_file(&self) -> PathBuf;

    /// Location of the tester configuration file.
    fn tester_config_file(&self) -> PathBuf;

    /// Directory holding one user's submission for one assignment.
    fn submission_root(&self, assignment: &str, user: &str) -> PathBuf;

    /// Metadata file inside a submission root.
    fn submission_config_file(&self, submission_root: &Path) -> PathBuf;
}
