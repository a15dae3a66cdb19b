//! Interview session state machine.
//!
//! Drives the question -> answer -> (next question | summary) cycle over
//! sessions held in an injected [`SessionStore`]. Generic over the
//! provider and store traits to maintain clean architecture --
//! intervia-core never depends on intervia-infra.
//!
//! States: awaiting-first-question -> in-progress(n) -> complete, where n
//! ranges over the five fixed question slots. Completion latches exactly
//! once, after the fifth answer is evaluated.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;

use intervia_types::chat::{ChatSession, ChatSpeaker};
use intervia_types::error::InterviewError;
use intervia_types::interview::{EvaluationRecord, InterviewMode, Session, SummaryRecord};

use crate::generator::InterviewGenerator;
use crate::llm::provider::TextGenerator;
use crate::store::SessionStore;

/// Reply sent when a chat session finishes its last question.
const CHAT_COMPLETE_REPLY: &str = "Interview complete! Thank you for participating.";

/// Reply sent before the chat interview has begun.
const CHAT_PROMPT_START_REPLY: &str = "Please type 'start' to begin the interview.";

/// Result of starting a new interview.
#[derive(Debug, Clone)]
pub struct StartOutcome {
    pub interview_id: String,
    pub current_question: String,
    pub question_number: u32,
    pub total_questions: u32,
    pub role: String,
    pub domain: String,
    pub mode: InterviewMode,
}

/// Result of submitting one answer.
///
/// `completion` is populated exactly when this was the final answer.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub question_number: u32,
    pub total_questions: u32,
    pub is_complete: bool,
    pub current_question: String,
    pub answer: String,
    pub evaluation: EvaluationRecord,
    pub completion: Option<CompletionOutcome>,
}

/// Aggregates reported once, when the completion flag transitions to true.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    pub summary: SummaryRecord,
    pub total_score: u32,
    pub average_score: f64,
}

/// The interview session state machine plus its generation pipeline.
pub struct InterviewEngine<P: TextGenerator, S: SessionStore> {
    generator: InterviewGenerator<P>,
    store: S,
    chat_sessions: DashMap<String, Arc<Mutex<ChatSession>>>,
}

impl<P: TextGenerator, S: SessionStore> InterviewEngine<P, S> {
    pub fn new(provider: P, store: S, llm_timeout: Duration) -> Self {
        Self {
            generator: InterviewGenerator::new(provider, llm_timeout),
            store,
            chat_sessions: DashMap::new(),
        }
    }

    /// Start a new interview: validate inputs, generate question #1, store
    /// the session.
    ///
    /// A missing model credential is a hard error here -- mid-session
    /// failures degrade silently instead (see DESIGN.md for the policy).
    pub async fn start(
        &self,
        role: &str,
        domain: &str,
        mode: &str,
    ) -> Result<StartOutcome, InterviewError> {
        let role = role.trim();
        let domain = domain.trim();
        if role.is_empty() || domain.is_empty() || mode.trim().is_empty() {
            return Err(InterviewError::Validation(
                "Missing required fields: role, domain, mode".to_string(),
            ));
        }
        if !self.generator.is_configured() {
            return Err(InterviewError::Configuration(
                "Google API key not configured".to_string(),
            ));
        }

        let mode = InterviewMode::from_str_lenient(mode);
        let first_question = self.generator.question(role, domain, mode, 1).await;
        let session = Session::new(role, domain, mode, first_question);

        let outcome = StartOutcome {
            interview_id: session.id.clone(),
            current_question: session.current_question.clone(),
            question_number: session.current_question_number,
            total_questions: session.total_questions,
            role: session.role.clone(),
            domain: session.domain.clone(),
            mode: session.mode,
        };

        self.store.insert(session).await;
        tracing::info!(interview_id = %outcome.interview_id, role, domain, %mode, "interview started");
        Ok(outcome)
    }

    /// Evaluate an answer to the current question and either advance to the
    /// next slot or finalize the session.
    pub async fn submit_answer(
        &self,
        interview_id: &str,
        answer: &str,
    ) -> Result<AnswerOutcome, InterviewError> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(InterviewError::Validation("Answer is required".to_string()));
        }

        let shared = self
            .store
            .get(interview_id)
            .await
            .ok_or(InterviewError::NotFound)?;

        // The lock is held across the model-call await points so concurrent
        // submits on the same id serialize instead of racing the
        // read-mutate-write cycle.
        let mut session = shared.lock().await;

        if session.is_complete {
            return Err(InterviewError::InvalidState(
                "Interview is already complete".to_string(),
            ));
        }

        let evaluation = self
            .generator
            .evaluation(&session.current_question, answer, session.mode)
            .await;
        session.record_answer(answer, evaluation.clone());

        if !session.on_final_question() {
            let next_question = self
                .generator
                .question(
                    &session.role,
                    &session.domain,
                    session.mode,
                    session.current_question_number + 1,
                )
                .await;
            session.advance(next_question);

            Ok(AnswerOutcome {
                question_number: session.current_question_number,
                total_questions: session.total_questions,
                is_complete: false,
                current_question: session.current_question.clone(),
                answer: answer.to_string(),
                evaluation,
                completion: None,
            })
        } else {
            let average_score = session.average_score();
            let summary = self
                .generator
                .summary(
                    &session.questions,
                    &session.answers,
                    &session.evaluations,
                    &session.role,
                    &session.domain,
                    session.mode,
                    average_score,
                )
                .await;
            session.complete(summary.clone());
            tracing::info!(
                interview_id = %session.id,
                total_score = session.total_score,
                average_score,
                "interview completed"
            );

            Ok(AnswerOutcome {
                question_number: session.current_question_number,
                total_questions: session.total_questions,
                is_complete: true,
                current_question: session.current_question.clone(),
                answer: answer.to_string(),
                evaluation,
                completion: Some(CompletionOutcome {
                    summary,
                    total_score: session.total_score,
                    average_score,
                }),
            })
        }
    }

    /// Read-only snapshot of a session.
    pub async fn status(&self, interview_id: &str) -> Result<Session, InterviewError> {
        let shared = self
            .store
            .get(interview_id)
            .await
            .ok_or(InterviewError::NotFound)?;
        let session = shared.lock().await;
        Ok(session.clone())
    }

    /// Full record of a completed session.
    pub async fn results(&self, interview_id: &str) -> Result<Session, InterviewError> {
        let session = self.status(interview_id).await?;
        if !session.is_complete {
            return Err(InterviewError::InvalidState(
                "Interview is not complete yet".to_string(),
            ));
        }
        Ok(session)
    }

    /// Alternate conversational entry point.
    ///
    /// Lazily creates a default chat session for unknown ids. The `"start"`
    /// sentinel begins the question cycle; each later message is treated as
    /// an answer and advances to the next question until the five slots are
    /// consumed.
    pub async fn chat(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<String, InterviewError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(InterviewError::Validation("Message is required".to_string()));
        }

        // Clone the Arc out of the map entry before awaiting: holding a
        // DashMap guard across an await point can deadlock a shard.
        let shared = {
            let entry = self
                .chat_sessions
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(ChatSession::default())));
            entry.value().clone()
        };
        let mut session = shared.lock().await;
        session.push_turn(ChatSpeaker::User, trimmed);

        if trimmed.eq_ignore_ascii_case("start") && session.last_question.is_none() {
            let question = self
                .generator
                .question(&session.role, &session.domain, session.mode, session.question_number)
                .await;
            session.last_question = Some(question.clone());
            session.push_turn(ChatSpeaker::Bot, &question);
            return Ok(question);
        }

        if session.last_question.is_some() {
            session.question_number += 1;
            if session.past_final_question() {
                session.is_complete = true;
                session.push_turn(ChatSpeaker::Bot, CHAT_COMPLETE_REPLY);
                return Ok(CHAT_COMPLETE_REPLY.to_string());
            }
            let question = self
                .generator
                .question(&session.role, &session.domain, session.mode, session.question_number)
                .await;
            session.last_question = Some(question.clone());
            session.push_turn(ChatSpeaker::Bot, &question);
            return Ok(question);
        }

        Ok(CHAT_PROMPT_START_REPLY.to_string())
    }
}
