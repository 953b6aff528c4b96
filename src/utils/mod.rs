pub mod environment;
pub mod paths;

pub use environment::get_data_dir;
pub use paths::{APP_IDENTIFIER, DATABASE_FILENAME, default_store_path, format_path_with_tilde};
