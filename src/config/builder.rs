use anyhow::Result;

use super::types::{Config, LlmSettings, PlannerSettings, RetrievalSettings, SamplingSettings};

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    pub(super) llm: LlmSettings,
    pub(super) sampling: SamplingSettings,
    pub(super) retrieval: RetrievalSettings,
    pub(super) planner: PlannerSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_llm<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut LlmSettings),
    {
        update(&mut self.llm);
        self
    }

    pub fn with_sampling<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut SamplingSettings),
    {
        update(&mut self.sampling);
        self
    }

    pub fn with_retrieval<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut RetrievalSettings),
    {
        update(&mut self.retrieval);
        self
    }

    pub fn with_planner<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut PlannerSettings),
    {
        update(&mut self.planner);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            llm: self.llm,
            sampling: self.sampling,
            retrieval: self.retrieval,
            planner: self.planner,
        })
    }
}
