pub mod command;
pub mod config;
pub mod range;

pub use command::*;
pub use config::*;
pub use range::*;
