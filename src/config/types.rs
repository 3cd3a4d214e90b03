use std::fmt;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub sampling: SamplingSettings,
    pub retrieval: RetrievalSettings,
    pub planner: PlannerSettings,
}

/// Endpoint settings for the model-serving service. Passed explicitly into
/// the gateway constructor; the core never reads ambient process state.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Copy)]
pub struct SamplingSettings {
    pub temperature: f32,
    pub top_p: f32,
}

#[derive(Debug, Clone)]
pub struct RetrievalSettings {
    pub window_chars: usize,
    pub snippets_per_term: usize,
    pub max_snippets: usize,
    pub max_context_chars: usize,
}

#[derive(Debug, Clone)]
pub struct PlannerSettings {
    pub strategy: Strategy,
    pub prompt_style: PromptStyle,
    pub catalog_path: String,
}

/// Closed set of orchestration strategies behind the one plan-generation
/// capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    MultiTurnRag,
    MultiTurn,
    SingleShot,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::MultiTurnRag => "multi-turn-rag",
            Strategy::MultiTurn => "multi-turn",
            Strategy::SingleShot => "single-shot",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multi-turn-rag" => Ok(Strategy::MultiTurnRag),
            "multi-turn" => Ok(Strategy::MultiTurn),
            "single-shot" => Ok(Strategy::SingleShot),
            other => Err(anyhow!("Unknown strategy '{other}'")),
        }
    }
}

/// Prompt variations for the single-shot strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptStyle {
    Plain,
    WorkedExamples,
    StepByStep,
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PromptStyle::Plain => "plain",
            PromptStyle::WorkedExamples => "worked-examples",
            PromptStyle::StepByStep => "step-by-step",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for PromptStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(PromptStyle::Plain),
            "worked-examples" => Ok(PromptStyle::WorkedExamples),
            "step-by-step" => Ok(PromptStyle::StepByStep),
            other => Err(anyhow!("Unknown prompt style '{other}'")),
        }
    }
}

// File configuration types
#[derive(Debug, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub llm: Option<FileLlmSettings>,
    #[serde(default)]
    pub sampling: Option<FileSamplingSettings>,
    #[serde(default)]
    pub retrieval: Option<FileRetrievalSettings>,
    #[serde(default)]
    pub planner: Option<FilePlannerSettings>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileLlmSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileSamplingSettings {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FileRetrievalSettings {
    pub window_chars: Option<usize>,
    pub snippets_per_term: Option<usize>,
    pub max_snippets: Option<usize>,
    pub max_context_chars: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FilePlannerSettings {
    pub strategy: Option<String>,
    pub prompt_style: Option<String>,
    pub catalog_path: Option<String>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub llm: PersistedLlm<'a>,
    pub sampling: PersistedSampling,
    pub retrieval: PersistedRetrieval,
    pub planner: PersistedPlanner<'a>,
}

#[derive(Serialize)]
pub(super) struct PersistedLlm<'a> {
    pub host: &'a str,
    pub port: u16,
    pub api_key: &'a str,
    pub timeout_secs: u64,
    pub user_agent: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedSampling {
    pub temperature: f32,
    pub top_p: f32,
}

#[derive(Serialize)]
pub(super) struct PersistedRetrieval {
    pub window_chars: usize,
    pub snippets_per_term: usize,
    pub max_snippets: usize,
    pub max_context_chars: usize,
}

#[derive(Serialize)]
pub(super) struct PersistedPlanner<'a> {
    pub strategy: Strategy,
    pub prompt_style: PromptStyle,
    pub catalog_path: &'a str,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            llm: PersistedLlm {
                host: &config.llm.host,
                port: config.llm.port,
                api_key: &config.llm.api_key,
                timeout_secs: config.llm.timeout_secs,
                user_agent: &config.llm.user_agent,
            },
            sampling: PersistedSampling {
                temperature: config.sampling.temperature,
                top_p: config.sampling.top_p,
            },
            retrieval: PersistedRetrieval {
                window_chars: config.retrieval.window_chars,
                snippets_per_term: config.retrieval.snippets_per_term,
                max_snippets: config.retrieval.max_snippets,
                max_context_chars: config.retrieval.max_context_chars,
            },
            planner: PersistedPlanner {
                strategy: config.planner.strategy,
                prompt_style: config.planner.prompt_style,
                catalog_path: &config.planner.catalog_path,
            },
        }
    }
}
