use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ini::{IniParseError, KeyError};
use crate::domain::upload_time::TimeParseError;

/// Library-wide error type for configuration and submission lookups.
///
/// Absence of a submission is never an error (see
/// [`Submissions`](crate::services::Submissions)); this type covers
/// files that were expected to exist or that exist but are invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file that was expected to exist is missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Structurally invalid INI content.
    #[error(transparent)]
    Parse(#[from] IniParseError),

    /// Well-formed document missing an expected section or key.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// Upload timestamp does not match the fixed format.
    #[error(transparent)]
    Time(#[from] TimeParseError),
}
