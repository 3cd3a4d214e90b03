use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path};

use super::Config;
use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::{FileConfig, PersistedConfig, PromptStyle, Strategy};
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".advisor/config");
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Layered load: defaults, then config file, then environment overrides.
    /// Fails when required settings are missing.
    pub fn load() -> Result<Self> {
        let config = Self::load_unchecked()?;
        validate(&config)?;
        Ok(config)
    }

    /// Same layering as `load` but without validation, for flows that write
    /// settings before a usable configuration exists.
    pub fn load_unchecked() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;
        builder.build()
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let payload = PersistedConfig::from(self);
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let raw: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        Ok(raw.apply(builder))
    }
}

impl FileConfig {
    pub fn apply(self, mut builder: ConfigBuilder) -> ConfigBuilder {
        if let Some(llm) = self.llm {
            builder = builder.with_llm(|settings| {
                if let Some(host) = llm.host.clone() {
                    settings.host = host;
                }
                if let Some(port) = llm.port {
                    settings.port = port;
                }
                if let Some(api_key) = llm.api_key.clone() {
                    settings.api_key = api_key;
                }
                if let Some(timeout) = llm.timeout_secs {
                    settings.timeout_secs = timeout;
                }
                if let Some(user_agent) = llm.user_agent.clone() {
                    settings.user_agent = user_agent;
                }
            });
        }

        if let Some(sampling) = self.sampling {
            builder = builder.with_sampling(|settings| {
                if let Some(temperature) = sampling.temperature {
                    settings.temperature = temperature;
                }
                if let Some(top_p) = sampling.top_p {
                    settings.top_p = top_p;
                }
            });
        }

        if let Some(retrieval) = self.retrieval {
            builder = builder.with_retrieval(|settings| {
                if let Some(window) = retrieval.window_chars {
                    settings.window_chars = window;
                }
                if let Some(per_term) = retrieval.snippets_per_term {
                    settings.snippets_per_term = per_term;
                }
                if let Some(max) = retrieval.max_snippets {
                    settings.max_snippets = max;
                }
                if let Some(budget) = retrieval.max_context_chars {
                    settings.max_context_chars = budget;
                }
            });
        }

        if let Some(planner) = self.planner {
            builder = builder.with_planner(|settings| {
                if let Some(raw) = planner.strategy.clone() {
                    if let Ok(strategy) = raw.parse::<Strategy>() {
                        settings.strategy = strategy;
                    }
                }
                if let Some(raw) = planner.prompt_style.clone() {
                    if let Ok(style) = raw.parse::<PromptStyle>() {
                        settings.prompt_style = style;
                    }
                }
                if let Some(path) = planner.catalog_path.clone() {
                    settings.catalog_path = path;
                }
            });
        }

        builder
    }
}
