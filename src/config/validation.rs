use anyhow::{Result, anyhow};

use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.host.trim().is_empty() {
        return Err(anyhow!(
            "LLM endpoint host is empty. Set LLM_HOST or add it to {}",
            Config::config_path()?.display()
        ));
    }

    if config.llm.api_key.trim().is_empty() {
        return Err(anyhow!(
            "LLM API key not found. Set LLM_API_KEY, add it to {}, or run 'advisor --setup'",
            Config::config_path()?.display()
        ));
    }

    Ok(())
}
