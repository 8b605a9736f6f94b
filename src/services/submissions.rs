//! Per-user, per-assignment submission lookup.
//!
//! Resolves whether and when a user submitted a given assignment by
//! inspecting on-disk submission state. Absence of a submission is a
//! normal result at every level of this API; only present-but-invalid
//! metadata is an error.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::domain::upload_time::{parse_upload_time, to_datetime};
use crate::domain::{ConfigError, IniDocument};
use crate::ports::CourseLayout;

/// Section of the submission metadata file describing the upload.
pub const ASSIGNMENT_SECTION: &str = "Assignment";

/// Key holding the upload timestamp inside [`ASSIGNMENT_SECTION`].
pub const UPLOAD_TIME_KEY: &str = "UploadTime";

/// Resolves submissions for one course.
pub struct Submissions<L> {
    layout: L,
}

impl<L: CourseLayout> Submissions<L> {
    /// Create a resolver over the given course layout.
    pub fn new(layout: L) -> Self {
        Self { layout }
    }

    /// Metadata file path for the user's submission, if one exists.
    ///
    /// A submission directory without its metadata file counts as
    /// absent: the upload was interrupted before the metadata write,
    /// so it is logged and tolerated rather than treated as a fault.
    pub fn locate_submission_config(&self, assignment: &str, user: &str) -> Option<PathBuf> {
        let submission_root = self.layout.submission_root(assignment, user);
        if !submission_root.is_dir() {
            return None;
        }

        let config_file = self.layout.submission_config_file(&submission_root);
        if !config_file.is_file() {
            log::warn!(
                "{} exists, but its metadata file ({}) is missing",
                submission_root.display(),
                config_file.display()
            );
            return None;
        }
        Some(config_file)
    }

    /// Raw `UploadTime` string of the user's submission.
    ///
    /// `Ok(None)` when no submission exists. A metadata file that is
    /// present but malformed, or lacks the expected section or key, is
    /// an error.
    pub fn upload_time_str(
        &self,
        assignment: &str,
        user: &str,
    ) -> Result<Option<String>, ConfigError> {
        let Some(config_file) = self.locate_submission_config(assignment, user) else {
            return Ok(None);
        };

        let content = fs::read_to_string(&config_file)
            .map_err(|source| ConfigError::FileAccess { path: config_file, source })?;
        let document = IniDocument::parse(&content)?;
        let value = document.get(ASSIGNMENT_SECTION, UPLOAD_TIME_KEY)?;
        Ok(Some(value.to_string()))
    }

    /// Upload time as a parsed calendar value, if a submission exists.
    pub fn upload_time_struct(
        &self,
        assignment: &str,
        user: &str,
    ) -> Result<Option<NaiveDateTime>, ConfigError> {
        match self.upload_time_str(assignment, user)? {
            Some(raw) => Ok(Some(parse_upload_time(&raw)?)),
            None => Ok(None),
        }
    }

    /// Upload date-time truncated to whole seconds, if a submission
    /// exists.
    pub fn upload_time(
        &self,
        assignment: &str,
        user: &str,
    ) -> Result<Option<NaiveDateTime>, ConfigError> {
        Ok(self.upload_time_struct(assignment, user)?.map(to_datetime))
    }

    /// Whether a submission with metadata exists for `(assignment,
    /// user)`. Never errors and never parses the metadata.
    pub fn submission_exists(&self, assignment: &str, user: &str) -> bool {
        self.locate_submission_config(assignment, user).is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::domain::ini::KeyError;
    use crate::services::FilesystemLayout;

    fn course() -> (TempDir, Submissions<FilesystemLayout>) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let submissions = Submissions::new(FilesystemLayout::new(dir.path().to_path_buf()));
        (dir, submissions)
    }

    fn write_submission(root: &Path, assignment: &str, user: &str, metadata: Option<&str>) {
        let sbroot = root.join("repo").join(assignment).join(user).join("current");
        fs::create_dir_all(&sbroot).unwrap();
        if let Some(content) = metadata {
            fs::write(sbroot.join("submission-config"), content).unwrap();
        }
    }

    #[test]
    fn absent_directory_means_no_submission() {
        let (_dir, submissions) = course();

        assert!(!submissions.submission_exists("hw1", "alice"));
        assert_eq!(submissions.upload_time_str("hw1", "alice").unwrap(), None);
        assert_eq!(submissions.upload_time("hw1", "alice").unwrap(), None);
    }

    #[test]
    fn directory_without_metadata_means_no_submission() {
        let (dir, submissions) = course();
        write_submission(dir.path(), "hw1", "alice", None);

        assert!(!submissions.submission_exists("hw1", "alice"));
        assert_eq!(submissions.upload_time_str("hw1", "alice").unwrap(), None);
    }

    #[test]
    fn complete_submission_is_found() {
        let (dir, submissions) = course();
        write_submission(
            dir.path(),
            "hw1",
            "alice",
            Some("[Assignment]\nUploadTime = 2011.03.15 10:30:00\n"),
        );

        assert!(submissions.submission_exists("hw1", "alice"));
        assert_eq!(
            submissions.upload_time_str("hw1", "alice").unwrap().as_deref(),
            Some("2011.03.15 10:30:00")
        );

        let expected = NaiveDate::from_ymd_opt(2011, 3, 15).unwrap().and_hms_opt(10, 30, 0);
        assert_eq!(submissions.upload_time("hw1", "alice").unwrap(), expected);
    }

    #[test]
    fn struct_and_datetime_agree_to_the_second() {
        let (dir, submissions) = course();
        write_submission(
            dir.path(),
            "hw1",
            "alice",
            Some("[Assignment]\nUploadTime = 2024.12.31 23:59:59\n"),
        );

        let parsed = submissions.upload_time_struct("hw1", "alice").unwrap().unwrap();
        let datetime = submissions.upload_time("hw1", "alice").unwrap().unwrap();
        assert_eq!(datetime, parsed);
    }

    #[test]
    fn malformed_metadata_is_a_parse_error() {
        let (dir, submissions) = course();
        write_submission(dir.path(), "hw1", "alice", Some("UploadTime = no header\n"));

        assert!(submissions.submission_exists("hw1", "alice"));
        assert!(matches!(
            submissions.upload_time_str("hw1", "alice"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_upload_time_key_is_a_key_error_not_absence() {
        let (dir, submissions) = course();
        write_submission(dir.path(), "hw1", "alice", Some("[Assignment]\nOther = value\n"));

        let result = submissions.upload_time_str("hw1", "alice");
        assert!(matches!(
            result,
            Err(ConfigError::Key(KeyError::MissingKey { .. }))
        ));
    }

    #[test]
    fn missing_assignment_section_is_a_key_error() {
        let (dir, submissions) = course();
        write_submission(dir.path(), "hw1", "alice", Some("[Other]\nUploadTime = x\n"));

        assert!(matches!(
            submissions.upload_time_str("hw1", "alice"),
            Err(ConfigError::Key(KeyError::MissingSection(_)))
        ));
    }

    #[test]
    fn unparseable_upload_time_is_a_time_error() {
        let (dir, submissions) = course();
        write_submission(
            dir.path(),
            "hw1",
            "alice",
            Some("[Assignment]\nUploadTime = March 15th 2011\n"),
        );

        assert_eq!(
            submissions.upload_time_str("hw1", "alice").unwrap().as_deref(),
            Some("March 15th 2011")
        );
        assert!(matches!(
            submissions.upload_time("hw1", "alice"),
            Err(ConfigError::Time(_))
        ));
    }
}
