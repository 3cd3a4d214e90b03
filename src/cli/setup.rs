use anyhow::Result;

use crate::config::{Config, Strategy};

use super::util::{
    mask_api_key, prompt_port_with_default, prompt_string_with_default, prompt_timeout,
};

pub(crate) fn run_setup() -> Result<()> {
    println!("🚀 Welcome to advisor setup!");
    println!("Let's configure your model-serving endpoint.\n");

    let mut config = Config::builder().build()?;

    config.llm.host = prompt_string_with_default("🌐 Endpoint host", &config.llm.host)?;
    config.llm.port = prompt_port_with_default("🔌 Endpoint port", config.llm.port)?;
    config.llm.api_key = prompt_string_with_default("🔑 API key", &config.llm.api_key)?;
    config.llm.timeout_secs = prompt_timeout(config.llm.timeout_secs)?;
    config.planner.strategy = prompt_strategy()?;
    config.planner.catalog_path =
        prompt_string_with_default("📚 Catalog text file path", &config.planner.catalog_path)?;

    config.validate()?;
    config.save()?;

    println!(
        "\n✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    println!("📋 Your configuration:");
    println!("   Endpoint: {}:{}", config.llm.host, config.llm.port);
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Strategy: {}", config.planner.strategy);
    println!("   Catalog: {}", config.planner.catalog_path);
    println!("\n🎉 Setup complete! You can now run:");
    println!("   advisor                       # interactive interview");
    println!("   advisor --target 'Deep Learning' --department 'Computer Science' \\");
    println!("           --degree-level Undergraduate --prior-courses 'Csci 256'");
    println!("   advisor courses               # show the built-in catalog\n");

    Ok(())
}

fn prompt_strategy() -> Result<Strategy> {
    println!("\n🧭 Plan strategies:");
    println!("  1) multi-turn-rag  — four-step chain with catalog retrieval (recommended)");
    println!("  2) multi-turn      — four-step chain without retrieval");
    println!("  3) single-shot     — one prompt, one reply");

    loop {
        let answer = prompt_string_with_default("Select strategy [1-3]", "1")?;
        match answer.trim() {
            "1" => return Ok(Strategy::MultiTurnRag),
            "2" => return Ok(Strategy::MultiTurn),
            "3" => return Ok(Strategy::SingleShot),
            _ => println!("❌ Please enter a number between 1 and 3."),
        }
    }
}
