use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::catalog::{CatalogCorpus, CourseCatalog};
use crate::client::LlmClient;
use crate::config::{Config, PromptStyle, Strategy};
use crate::planner::PlanGenerator;

use super::args::{Cli, Command};
use super::interview;
use super::setup;
use super::util::mask_api_key;

pub(crate) async fn run(cli: Cli) -> Result<()> {
    if cli.setup {
        return setup::run_setup();
    }

    if let Some(Command::Courses { code }) = &cli.command {
        show_courses(code.as_deref());
        return Ok(());
    }

    if cli.config {
        return handle_config_direct(&cli);
    }

    let mut config = Config::load()?;
    apply_cli_overrides(&cli, &mut config)?;

    generate_plan(&cli, &config).await
}

fn apply_cli_overrides(cli: &Cli, config: &mut Config) -> Result<()> {
    if let Some(host) = &cli.host {
        config.llm.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.llm.port = port;
    }
    if let Some(api_key) = &cli.api_key {
        config.llm.api_key = api_key.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.llm.timeout_secs = timeout;
    }
    if let Some(raw) = &cli.strategy {
        config.planner.strategy = raw
            .parse::<Strategy>()
            .with_context(|| format!("Failed to parse --strategy value '{raw}'"))?;
    }
    if let Some(raw) = &cli.prompt_style {
        config.planner.prompt_style = raw
            .parse::<PromptStyle>()
            .with_context(|| format!("Failed to parse --prompt-style value '{raw}'"))?;
    }
    if let Some(catalog) = &cli.catalog {
        config.planner.catalog_path = catalog.clone();
    }
    Ok(())
}

/// Persist settings passed alongside `--config` without requiring a usable
/// configuration to exist yet.
fn handle_config_direct(cli: &Cli) -> Result<()> {
    let mut config = Config::load_unchecked()?;
    apply_cli_overrides(cli, &mut config)?;
    config.save()?;

    println!(
        "✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    println!("📋 Current configuration:");
    println!("   Endpoint: {}:{}", config.llm.host, config.llm.port);
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Strategy: {}", config.planner.strategy);
    println!("   Prompt Style: {}", config.planner.prompt_style);
    println!("   Catalog: {}", config.planner.catalog_path);

    if config.llm.api_key.trim().is_empty() {
        println!("⚠️  API key is empty. Set LLM_API_KEY or run 'advisor --setup'.");
    }

    Ok(())
}

fn show_courses(code: Option<&str>) {
    let catalog = CourseCatalog::new();

    match code {
        Some(code) => match catalog.find_by_code(code) {
            Some(course) => {
                println!("{}: {}", course.code.bold(), course.name);
                println!("   {}", course.description);
                if course.prerequisites.is_empty() {
                    println!("   Prerequisites: none");
                } else {
                    println!("   Prerequisites: {}", course.prerequisites.join(", "));
                }
            }
            None => {
                println!("Course '{code}' not found. Run 'advisor courses' to list the catalog.");
            }
        },
        None => println!("{}", catalog.as_text()),
    }
}

async fn generate_plan(cli: &Cli, config: &Config) -> Result<()> {
    println!("\n{}\n", "===== Learning Plan Recommender =====".bold());

    let student = interview::gather_student(cli)?;
    let target_course = match &cli.target {
        Some(target) => target.trim().to_string(),
        None => interview::prompt_target_course()?,
    };

    let catalog = CourseCatalog::new();
    if let Some(course) = catalog.find_by_code(&target_course) {
        if course.prerequisites_met(&student.prior_courses) {
            println!(
                "✅ You already meet the listed prerequisites for {}.",
                course.code
            );
        }
    }

    let corpus = CatalogCorpus::load(Path::new(&config.planner.catalog_path));

    println!(
        "\n🔌 Connecting to {}:{} ...",
        config.llm.host, config.llm.port
    );
    let client = LlmClient::connect(&config.llm, &config.sampling)
        .await
        .context("Could not reach the model-serving endpoint")?;
    println!("   Model: {}", client.model());

    let generator = PlanGenerator::new(
        Arc::new(client),
        catalog,
        corpus,
        config.retrieval.clone(),
        config.planner.strategy,
        config.planner.prompt_style,
    );

    println!(
        "\n🧭 Generating your personalized learning plan ({} strategy)...",
        config.planner.strategy
    );
    let plan = generator
        .generate(&student, &target_course)
        .await
        .context("Learning plan generation failed")?;

    println!(
        "\n{}\n",
        "===== Your Personalized Learning Plan =====".bold().green()
    );
    println!("{plan}");

    Ok(())
}
