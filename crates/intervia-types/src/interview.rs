//! Interview session, evaluation, and summary types for Intervia.
//!
//! A [`Session`] is one interview attempt: a fixed number of question
//! slots, the answers given so far, one write-once [`EvaluationRecord`]
//! per answer, and a write-once [`SummaryRecord`] when the session
//! completes. Sessions are mutated only by the engine in
//! `intervia-core`; the mutation helpers here keep the parallel-sequence
//! invariants in one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Number of questions asked in every interview session.
pub const TOTAL_QUESTIONS: u32 = 5;

/// Interview style: technical/problem-solving or behavioral/experience-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewMode {
    Technical,
    Behavioral,
}

impl InterviewMode {
    /// Parse a mode string, degrading unrecognized values to `Technical`.
    ///
    /// Fallback question and keyword tables default to the technical set,
    /// so an unknown mode still produces a coherent interview.
    pub fn from_str_lenient(s: &str) -> Self {
        s.parse().unwrap_or(InterviewMode::Technical)
    }
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterviewMode::Technical => write!(f, "technical"),
            InterviewMode::Behavioral => write!(f, "behavioral"),
        }
    }
}

impl FromStr for InterviewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Ok(InterviewMode::Technical),
            "behavioral" => Ok(InterviewMode::Behavioral),
            other => Err(format!("invalid interview mode: '{other}'")),
        }
    }
}

/// Structured scoring of a single answer. Produced exactly once per answer,
/// immutable thereafter.
///
/// Field names match the wire contract (`overall_feedback` etc.) and the
/// JSON shape the model is prompted to emit. List fields default to empty
/// so a partially-shaped model response still decodes; a missing `score`
/// fails the decode and routes to the degraded-record path instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub score: u32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub overall_feedback: String,
}

/// End-of-session aggregate assessment. Produced exactly once, when the
/// completion flag transitions to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub overall_score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub final_feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_insights: Option<Vec<String>>,
}

/// One interview attempt, identified by an opaque id.
///
/// Invariants maintained by the mutation helpers:
/// - `answers.len() == evaluations.len() == scores.len()` always
/// - `questions.len() == answers.len() + 1` while incomplete,
///   `questions.len() == answers.len()` once complete
/// - `current_question_number` never decreases and never exceeds
///   `total_questions`
/// - `is_complete` latches true exactly once and is never unset
/// - `total_score` is the sum of all evaluation scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub role: String,
    pub domain: String,
    pub mode: InterviewMode,
    pub total_questions: u32,
    pub current_question_number: u32,
    pub current_question: String,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub evaluations: Vec<EvaluationRecord>,
    pub scores: Vec<u32>,
    pub total_score: u32,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub summary: Option<SummaryRecord>,
}

impl Session {
    /// Create a new session holding its first (pending) question.
    pub fn new(
        role: impl Into<String>,
        domain: impl Into<String>,
        mode: InterviewMode,
        first_question: impl Into<String>,
    ) -> Self {
        let first_question = first_question.into();
        Self {
            id: Uuid::new_v4().to_string(),
            role: role.into(),
            domain: domain.into(),
            mode,
            total_questions: TOTAL_QUESTIONS,
            current_question_number: 1,
            current_question: first_question.clone(),
            questions: vec![first_question],
            answers: Vec::new(),
            evaluations: Vec::new(),
            scores: Vec::new(),
            total_score: 0,
            is_complete: false,
            created_at: Utc::now(),
            completed_at: None,
            summary: None,
        }
    }

    /// Record an answer to the current question together with its evaluation.
    pub fn record_answer(&mut self, answer: impl Into<String>, evaluation: EvaluationRecord) {
        self.total_score += evaluation.score;
        self.scores.push(evaluation.score);
        self.answers.push(answer.into());
        self.evaluations.push(evaluation);
    }

    /// Advance to the next question slot.
    pub fn advance(&mut self, next_question: impl Into<String>) {
        let next_question = next_question.into();
        self.questions.push(next_question.clone());
        self.current_question = next_question;
        self.current_question_number += 1;
    }

    /// Latch completion and store the write-once summary.
    pub fn complete(&mut self, summary: SummaryRecord) {
        self.is_complete = true;
        self.completed_at = Some(Utc::now());
        self.summary = Some(summary);
    }

    /// Number of answers evaluated so far.
    pub fn answered_count(&self) -> usize {
        self.evaluations.len()
    }

    /// Average score over the answers evaluated so far.
    ///
    /// Returns 0.0 before the first evaluation rather than dividing by zero.
    pub fn average_score(&self) -> f64 {
        if self.evaluations.is_empty() {
            return 0.0;
        }
        f64::from(self.total_score) / self.evaluations.len() as f64
    }

    /// True when the current question slot is the last one.
    pub fn on_final_question(&self) -> bool {
        self.current_question_number >= self.total_questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(score: u32) -> EvaluationRecord {
        EvaluationRecord {
            score,
            strengths: vec!["clear".to_string()],
            weaknesses: Vec::new(),
            suggestions: Vec::new(),
            overall_feedback: "ok".to_string(),
        }
    }

    #[test]
    fn test_mode_display_roundtrip() {
        assert_eq!(InterviewMode::Technical.to_string(), "technical");
        assert_eq!(
            "behavioral".parse::<InterviewMode>().unwrap(),
            InterviewMode::Behavioral
        );
        assert!("panel".parse::<InterviewMode>().is_err());
    }

    #[test]
    fn test_mode_lenient_parse_degrades_to_technical() {
        assert_eq!(
            InterviewMode::from_str_lenient("panel"),
            InterviewMode::Technical
        );
        assert_eq!(
            InterviewMode::from_str_lenient("BEHAVIORAL"),
            InterviewMode::Behavioral
        );
    }

    #[test]
    fn test_new_session_holds_pending_question() {
        let session = Session::new("Software Engineer", "Technology", InterviewMode::Technical, "Q1");
        assert_eq!(session.current_question_number, 1);
        assert_eq!(session.questions.len(), 1);
        assert!(session.answers.is_empty());
        assert!(!session.is_complete);
        // One question pending, zero answered
        assert_eq!(session.questions.len(), session.answers.len() + 1);
    }

    #[test]
    fn test_record_answer_keeps_sequences_parallel() {
        let mut session = Session::new("SE", "Tech", InterviewMode::Technical, "Q1");
        session.record_answer("A1", eval(7));
        assert_eq!(session.answers.len(), session.evaluations.len());
        assert_eq!(session.scores, vec![7]);
        assert_eq!(session.total_score, 7);
    }

    #[test]
    fn test_advance_moves_pending_question() {
        let mut session = Session::new("SE", "Tech", InterviewMode::Technical, "Q1");
        session.record_answer("A1", eval(6));
        session.advance("Q2");
        assert_eq!(session.current_question_number, 2);
        assert_eq!(session.current_question, "Q2");
        assert_eq!(session.questions.len(), session.answers.len() + 1);
    }

    #[test]
    fn test_complete_latches_and_balances_sequences() {
        let mut session = Session::new("SE", "Tech", InterviewMode::Technical, "Q1");
        for n in 1..=TOTAL_QUESTIONS {
            session.record_answer(format!("A{n}"), eval(8));
            if n < TOTAL_QUESTIONS {
                session.advance(format!("Q{}", n + 1));
            }
        }
        session.complete(SummaryRecord {
            overall_score: 8.0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            recommendations: Vec::new(),
            final_feedback: String::new(),
            key_insights: None,
        });
        assert!(session.is_complete);
        assert!(session.completed_at.is_some());
        assert_eq!(session.questions.len(), session.answers.len());
        assert_eq!(session.total_score, 40);
    }

    #[test]
    fn test_average_score_guards_division_by_zero() {
        let session = Session::new("SE", "Tech", InterviewMode::Technical, "Q1");
        assert_eq!(session.average_score(), 0.0);

        let mut session = session;
        session.record_answer("A1", eval(7));
        session.record_answer("A2", eval(8));
        assert!((session.average_score() - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_evaluation_decodes_with_missing_lists() {
        let record: EvaluationRecord =
            serde_json::from_str(r#"{"score": 6, "overall_feedback": "fine"}"#).unwrap();
        assert_eq!(record.score, 6);
        assert!(record.strengths.is_empty());
    }

    #[test]
    fn test_evaluation_decode_requires_score() {
        let result = serde_json::from_str::<EvaluationRecord>(r#"{"overall_feedback": "fine"}"#);
        assert!(result.is_err());
    }
}
