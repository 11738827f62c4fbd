pub mod temp_dir;

pub use temp_dir::{sanitized_file_name, ImageStore, FILE_EXTENSION, FILE_PREFIX_LEN};
