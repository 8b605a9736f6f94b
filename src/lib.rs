//! vmchecker: course configuration and submission-metadata lookup for
//! an academic assignment-checking system.
//!
//! The crate answers two questions about a course tree on disk: what
//! does the course configuration say (`ConfigStore`), and whether/when
//! a user submitted a given assignment (`Submissions`). Both read
//! INI-style files and never write anything.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{
    ConfigError, IniDocument, IniParseError, KeyError, TimeParseError, UPLOAD_TIME_FORMAT,
    parse_upload_time,
};
pub use ports::{ConfigSource, CourseLayout};
pub use services::{
    ConfigStore, FilesystemLayout, FilesystemSource, NetError, Submissions, interface_ip,
};
