mod catalog;
mod cli;
mod client;
mod config;
mod planner;
mod retrieval;
mod student;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.run().await
}
