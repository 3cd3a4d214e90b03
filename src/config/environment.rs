use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;
use super::types::{PromptStyle, Strategy};

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(host) = env_string("LLM_HOST")? {
        builder = builder.with_llm(|llm| llm.host = host.clone());
    }

    if let Some(port) = env_u16("LLM_PORT")? {
        builder = builder.with_llm(|llm| llm.port = port);
    }

    if let Some(api_key) = env_string("LLM_API_KEY")? {
        builder = builder.with_llm(|llm| llm.api_key = api_key.clone());
    }

    if let Some(timeout) = env_u64("ADVISOR_TIMEOUT_SECS")? {
        builder = builder.with_llm(|llm| llm.timeout_secs = timeout);
    }

    if let Some(temperature) = env_f32("ADVISOR_TEMPERATURE")? {
        builder = builder.with_sampling(|sampling| sampling.temperature = temperature);
    }

    if let Some(top_p) = env_f32("ADVISOR_TOP_P")? {
        builder = builder.with_sampling(|sampling| sampling.top_p = top_p);
    }

    if let Some(raw) = env_string("ADVISOR_STRATEGY")? {
        let strategy = raw
            .parse::<Strategy>()
            .with_context(|| format!("Failed to parse ADVISOR_STRATEGY value '{raw}'"))?;
        builder = builder.with_planner(|planner| planner.strategy = strategy);
    }

    if let Some(raw) = env_string("ADVISOR_PROMPT_STYLE")? {
        let style = raw
            .parse::<PromptStyle>()
            .with_context(|| format!("Failed to parse ADVISOR_PROMPT_STYLE value '{raw}'"))?;
        builder = builder.with_planner(|planner| planner.prompt_style = style);
    }

    if let Some(path) = env_string("ADVISOR_CATALOG_PATH")? {
        builder = builder.with_planner(|planner| planner.catalog_path = path.clone());
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_u16(key: &str) -> Result<Option<u16>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u16>()
            .with_context(|| format!("Failed to parse {key} as u16"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_f32(key: &str) -> Result<Option<f32>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<f32>()
            .with_context(|| format!("Failed to parse {key} as f32"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}
