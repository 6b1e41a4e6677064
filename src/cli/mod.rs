mod args;

pub use args::{catalog_file_name, sheet_file_name, Args, Command, OutputArgs};
