use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::{CatalogCorpus, CourseCatalog};
use crate::client::ChatGateway;
use crate::config::{PromptStyle, RetrievalSettings, Strategy};
use crate::retrieval::retrieve_context;
use crate::student::Student;

use super::prompts;

/// Drives the configured chain of gateway calls and returns the final reply
/// as the learning plan. Each step embeds the previous step's reply verbatim
/// in its prompt; any step failure aborts the whole chain.
pub struct PlanGenerator {
    gateway: Arc<dyn ChatGateway>,
    catalog: CourseCatalog,
    corpus: CatalogCorpus,
    retrieval: RetrievalSettings,
    strategy: Strategy,
    prompt_style: PromptStyle,
}

impl PlanGenerator {
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        catalog: CourseCatalog,
        corpus: CatalogCorpus,
        retrieval: RetrievalSettings,
        strategy: Strategy,
        prompt_style: PromptStyle,
    ) -> Self {
        Self {
            gateway,
            catalog,
            corpus,
            retrieval,
            strategy,
            prompt_style,
        }
    }

    pub async fn generate(&self, student: &Student, target_course: &str) -> Result<String> {
        match self.strategy {
            Strategy::MultiTurnRag => self.multi_turn(student, target_course, true).await,
            Strategy::MultiTurn => self.multi_turn(student, target_course, false).await,
            Strategy::SingleShot => self.single_shot(student, target_course).await,
        }
    }

    /// AssessKnowledge -> AnalyzeGaps -> SelectCourses -> FinalizePlan, one
    /// gateway call per step, strictly sequential.
    async fn multi_turn(
        &self,
        student: &Student,
        target_course: &str,
        with_retrieval: bool,
    ) -> Result<String> {
        let catalog_listing = self.catalog.as_text();

        let knowledge_assessment = self
            .ask(&prompts::knowledge_assessment_prompt(student, target_course))
            .await
            .context("Knowledge assessment step failed")?;

        let gap_analysis = self
            .ask(&prompts::gap_analysis_prompt(
                student,
                target_course,
                &knowledge_assessment,
                &catalog_listing,
            ))
            .await
            .context("Gap analysis step failed")?;

        let selection_prompt = if with_retrieval {
            let catalog_context =
                retrieve_context(&self.corpus, &gap_analysis, target_course, &self.retrieval);
            prompts::rag_course_selection_prompt(
                student,
                target_course,
                &knowledge_assessment,
                &gap_analysis,
                &catalog_listing,
                &catalog_context,
            )
        } else {
            prompts::course_selection_prompt(
                student,
                target_course,
                &knowledge_assessment,
                &gap_analysis,
                &catalog_listing,
            )
        };
        let course_selection = self
            .ask(&selection_prompt)
            .await
            .context("Course selection step failed")?;

        self.ask(&prompts::final_plan_prompt(
            student,
            target_course,
            &knowledge_assessment,
            &gap_analysis,
            &course_selection,
        ))
        .await
        .context("Final plan step failed")
    }

    async fn single_shot(&self, student: &Student, target_course: &str) -> Result<String> {
        self.ask(&prompts::single_shot_prompt(
            student,
            target_course,
            &self.catalog.as_text(),
            self.prompt_style,
        ))
        .await
        .context("Plan generation failed")
    }

    // Context is carried inside each prompt, so every call starts a fresh
    // conversation.
    async fn ask(&self, prompt: &str) -> Result<String> {
        let reply = self.gateway.query(prompt, &[]).await?;
        Ok(reply.content)
    }
}
