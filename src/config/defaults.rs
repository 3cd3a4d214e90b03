use super::constants::*;
use super::types::{
    LlmSettings, PlannerSettings, PromptStyle, RetrievalSettings, SamplingSettings, Strategy,
};

pub fn default_user_agent() -> String {
    format!("advisor/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_LLM_HOST.to_string(),
            port: DEFAULT_LLM_PORT,
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            window_chars: DEFAULT_SNIPPET_WINDOW_CHARS,
            snippets_per_term: DEFAULT_SNIPPETS_PER_TERM,
            max_snippets: DEFAULT_MAX_SNIPPETS,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::MultiTurnRag,
            prompt_style: PromptStyle::Plain,
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
        }
    }
}
