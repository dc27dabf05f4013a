//! Command-line interface module.

mod commands;
mod generate;
mod render;
mod submit;

pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use submit::run_submit;
