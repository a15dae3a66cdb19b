//! Resilient generation pipeline: gateway call -> parse -> fallback.
//!
//! Every operation here is total. A gateway failure or timeout is logged
//! and replaced with deterministic fallback content; unparseable-but-
//! delivered text is handled inside the parser. The interview can always
//! proceed to a next question or a final summary -- availability is
//! prioritized over evaluation fidelity.

use std::time::{Duration, Instant};

use intervia_types::interview::{EvaluationRecord, InterviewMode, SummaryRecord};
use intervia_types::llm::{GenerationRequest, LlmError};

use crate::fallback;
use crate::llm::provider::TextGenerator;
use crate::parser;
use crate::prompt;

/// Default bound on a single model call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wraps a [`TextGenerator`] with timeout, parsing, and fallback policy.
pub struct InterviewGenerator<P: TextGenerator> {
    provider: P,
    timeout: Duration,
}

impl<P: TextGenerator> InterviewGenerator<P> {
    pub fn new(provider: P, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Whether the underlying provider has a usable credential.
    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    /// One bounded gateway call. No retries: any failure is an immediate
    /// fallback trigger for the caller.
    async fn generate_raw(&self, task: &str, prompt: String) -> Result<String, LlmError> {
        let request = GenerationRequest::new(prompt);
        let start = Instant::now();

        let result = match tokio::time::timeout(self.timeout, self.provider.generate(&request)).await
        {
            Ok(inner) => inner,
            Err(_) => Err(LlmError::Timeout {
                elapsed_ms: self.timeout.as_millis() as u64,
            }),
        };

        let latency_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(text) => {
                tracing::debug!(
                    provider = %self.provider.name(),
                    task,
                    latency_ms,
                    output_chars = text.len(),
                    "model call succeeded"
                );
            }
            Err(err) => {
                tracing::warn!(
                    provider = %self.provider.name(),
                    task,
                    latency_ms,
                    error = %err,
                    "model call failed, using fallback content"
                );
            }
        }
        result
    }

    /// Produce interview question `question_number`.
    pub async fn question(
        &self,
        role: &str,
        domain: &str,
        mode: InterviewMode,
        question_number: u32,
    ) -> String {
        let prompt = prompt::question_prompt(role, domain, mode, question_number);
        match self.generate_raw("question", prompt).await {
            Ok(raw) => parser::parse_question(&raw),
            Err(_) => fallback::fallback_question(mode, domain, question_number),
        }
    }

    /// Evaluate one answer to one question.
    pub async fn evaluation(
        &self,
        question: &str,
        answer: &str,
        mode: InterviewMode,
    ) -> EvaluationRecord {
        let prompt = prompt::evaluation_prompt(question, answer, mode);
        match self.generate_raw("evaluation", prompt).await {
            Ok(raw) => parser::parse_evaluation(&raw),
            Err(_) => fallback::fallback_evaluation(answer, mode),
        }
    }

    /// Produce the end-of-session summary.
    #[allow(clippy::too_many_arguments)]
    pub async fn summary(
        &self,
        questions: &[String],
        answers: &[String],
        evaluations: &[EvaluationRecord],
        role: &str,
        domain: &str,
        mode: InterviewMode,
        average_score: f64,
    ) -> SummaryRecord {
        let prompt = prompt::summary_prompt(
            questions,
            answers,
            evaluations,
            role,
            domain,
            mode,
            average_score,
        );
        match self.generate_raw("summary", prompt).await {
            Ok(raw) => parser::parse_summary(&raw, average_score),
            Err(_) => fallback::fallback_summary(average_score),
        }
    }
}
