mod args;
mod commands;
mod interview;
mod setup;
mod util;

pub use args::Cli;
