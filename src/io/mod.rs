pub mod buffer;
pub mod config_io;
pub mod file_io;
