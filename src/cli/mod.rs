//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod footer;
pub mod init;
pub mod show;

pub use args::{Cli, Commands, OutputFormat};
