//! Path catalog for the on-disk course layout.
//!
//! All logical course paths are defined here; adapters use these
//! helpers instead of ad-hoc `.join("...")` chains.

use std::path::{Path, PathBuf};

/// Main course configuration file name.
pub const CONFIG_FILE: &str = "config";

/// Tester-side configuration file name.
pub const TESTER_CONFIG_FILE: &str = "tester-config";

/// Directory holding per-assignment submission repositories.
pub const REPO_DIR: &str = "repo";

/// Directory holding the most recent submission in a user's tree.
pub const CURRENT_SUBMISSION_DIR: &str = "current";

/// Per-submission metadata file name.
pub const SUBMISSION_CONFIG_FILE: &str = "submission-config";

/// `<root>/config`
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// `<root>/tester-config`
pub fn tester_config_file(root: &Path) -> PathBuf {
    root.join(TESTER_CONFIG_FILE)
}

/// `<root>/repo/<assignment>/<user>/current/`
pub fn submission_root(root: &Path, assignment: &str, user: &str) -> PathBuf {
    root.join(REPO_DIR).join(assignment).join(user).join(CURRENT_SUBMISSION_DIR)
}

/// `<submission_root>/submission-config`
pub fn submission_config_file(submission_root: &Path) -> PathBuf {
    submission_root.join(SUBMISSION_CONFIG_FILE)
}
