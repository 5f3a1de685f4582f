pub mod header;
pub mod footer;
pub mod file_picker;
pub mod loading;
pub mod error_message;
pub mod results;
