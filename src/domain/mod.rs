pub mod course_paths;
pub mod error;
pub mod ini;
pub mod upload_time;

pub use error::ConfigError;
pub use ini::{IniDocument, IniParseError, KeyError};
pub use upload_time::{TimeParseError, UPLOAD_TIME_FORMAT, parse_upload_time, to_datetime};
