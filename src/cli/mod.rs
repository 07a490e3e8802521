mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, DEFAULT_SNAPSHOT};
