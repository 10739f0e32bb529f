// CLI module for argument parsing and command dispatch
mod commands;

pub use commands::run;
