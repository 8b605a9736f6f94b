mod config_store;
mod layout_filesystem;
mod net;
mod source_filesystem;
mod submissions;

pub use config_store::{ConfigStore, REPOSITORY_KEY};
pub use layout_filesystem::FilesystemLayout;
pub use net::{NetError, interface_ip};
pub use source_filesystem::FilesystemSource;
pub use submissions::{ASSIGNMENT_SECTION, Submissions, UPLOAD_TIME_KEY};
