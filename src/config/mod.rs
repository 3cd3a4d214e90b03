//! Configuration for the advisor CLI.
//!
//! Layered configuration: built-in defaults, a JSON config file at
//! `~/.advisor/config`, then environment variable overrides. Endpoint
//! settings are handed explicitly to the components that need them.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{
    Config, LlmSettings, PlannerSettings, PromptStyle, RetrievalSettings, SamplingSettings,
    Strategy,
};
