use anyhow::Result;
use clap::{Parser, Subcommand};

use super::commands;

/// Entry point for the `advisor` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "advisor",
    about = "AI-powered learning plan recommender",
    version,
    long_about = None
)]
pub struct Cli {
    /// Optional subcommand (e.g., `courses`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Interactive setup for first-time configuration
    #[arg(long = "setup")]
    pub setup: bool,

    /// Plan strategy: multi-turn-rag, multi-turn, or single-shot
    #[arg(long)]
    pub strategy: Option<String>,

    /// Prompt style for single-shot plans: plain, worked-examples, or step-by-step
    #[arg(long = "prompt-style")]
    pub prompt_style: Option<String>,

    /// Path to the plain-text course catalog used for retrieval
    #[arg(long)]
    pub catalog: Option<String>,

    /// Target course to prepare for (skips the interview question)
    #[arg(long)]
    pub target: Option<String>,

    /// Student department (skips the interview question)
    #[arg(long)]
    pub department: Option<String>,

    /// Degree level: Undergraduate or Graduate (skips the interview question)
    #[arg(long = "degree-level")]
    pub degree_level: Option<String>,

    /// Comma-separated prior courses (skips the interview question)
    #[arg(long = "prior-courses")]
    pub prior_courses: Option<String>,

    /// Configure advisor settings
    #[arg(long)]
    pub config: bool,

    /// Set the endpoint API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Set the endpoint host
    #[arg(long)]
    pub host: Option<String>,

    /// Set the endpoint port
    #[arg(long)]
    pub port: Option<u16>,

    /// Set the request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the built-in course catalog, or one course's details.
    Courses {
        /// Optional course code (e.g., "Csci 632")
        code: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
