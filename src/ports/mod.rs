mod config_source;
mod course_layout;

pub use config_source::ConfigSource;
pub use course_layout::CourseLayout;
