//! Interview lifecycle HTTP handlers.
//!
//! Endpoints:
//! - POST /api/interview/start            - Start a new interview
//! - POST /api/interview/{id}/answer      - Submit an answer
//! - GET  /api/interview/{id}/status      - In-progress snapshot
//! - GET  /api/interview/{id}/results     - Full record after completion
//! - GET  /api/interview/{id}/export/pdf  - Results rendered as PDF
//!
//! Response bodies use the camelCase field names of the public wire
//! contract; the internal records serialize with their own snake_case
//! fields where they are embedded (`lastEvaluation`, `summary`).

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use intervia_core::engine::{AnswerOutcome, StartOutcome};
use intervia_infra::report::render_interview_report;
use intervia_types::interview::Session;

use crate::http::error::AppError;
use crate::state::AppState;

/// Body for POST /api/interview/start.
///
/// Fields default to empty so missing keys surface as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub mode: String,
}

/// Body for POST /api/interview/{id}/answer.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub answer: String,
}

/// POST /api/interview/start - Start a new interview.
pub async fn start_interview(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Result<Json<Value>, AppError> {
    let outcome = state.engine.start(&req.role, &req.domain, &req.mode).await?;
    Ok(Json(start_response(&outcome)))
}

/// POST /api/interview/{id}/answer - Submit an answer to the current question.
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<Value>, AppError> {
    let outcome = state.engine.submit_answer(&id, &req.answer).await?;
    Ok(Json(answer_response(&outcome)))
}

/// GET /api/interview/{id}/status - Snapshot of an interview's progress.
pub async fn interview_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let session = state.engine.status(&id).await?;
    Ok(Json(status_response(&session)))
}

/// GET /api/interview/{id}/results - Full record of a completed interview.
pub async fn interview_results(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let session = state.engine.results(&id).await?;
    Ok(Json(results_response(&session)))
}

/// GET /api/interview/{id}/export/pdf - Results rendered as a PDF attachment.
pub async fn export_pdf(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let session = state.engine.results(&id).await?;
    let bytes = render_interview_report(&session)?;

    let filename = format!(
        "interview-{}-{}.pdf",
        session.id,
        chrono::Utc::now().format("%Y-%m-%d")
    );
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}

fn start_response(outcome: &StartOutcome) -> Value {
    json!({
        "interviewId": outcome.interview_id,
        "currentQuestion": outcome.current_question,
        "questionNumber": outcome.question_number,
        "totalQuestions": outcome.total_questions,
        "mode": outcome.mode,
        "role": outcome.role,
        "domain": outcome.domain,
    })
}

fn answer_response(outcome: &AnswerOutcome) -> Value {
    let mut body = json!({
        "questionNumber": outcome.question_number,
        "totalQuestions": outcome.total_questions,
        "isComplete": outcome.is_complete,
        "currentQuestion": outcome.current_question,
        "lastAnswer": outcome.answer,
        "lastEvaluation": outcome.evaluation,
        "lastFeedback": outcome.evaluation,
        "lastScore": outcome.evaluation.score,
    });

    if let Some(completion) = &outcome.completion {
        let fields = body.as_object_mut().expect("answer body is an object");
        fields.insert("summary".to_string(), json!(completion.summary));
        fields.insert("totalScore".to_string(), json!(completion.total_score));
        fields.insert("averageScore".to_string(), json!(completion.average_score));
        fields.insert("strengths".to_string(), json!(completion.summary.strengths));
        fields.insert(
            "weaknesses".to_string(),
            json!(completion.summary.weaknesses),
        );
        fields.insert(
            "recommendations".to_string(),
            json!(completion.summary.recommendations),
        );
    }

    body
}

fn status_response(session: &Session) -> Value {
    json!({
        "id": session.id,
        "role": session.role,
        "domain": session.domain,
        "mode": session.mode,
        "questionNumber": session.current_question_number,
        "totalQuestions": session.total_questions,
        "isComplete": session.is_complete,
        "currentQuestion": session.current_question,
        "createdAt": session.created_at,
    })
}

fn results_response(session: &Session) -> Value {
    let summary = session.summary.as_ref();
    json!({
        "id": session.id,
        "role": session.role,
        "domain": session.domain,
        "mode": session.mode,
        "createdAt": session.created_at,
        "completedAt": session.completed_at,
        "questions": session.questions,
        "answers": session.answers,
        "evaluations": session.evaluations,
        "scores": session.scores,
        "summary": summary,
        "totalScore": session.total_score,
        "averageScore": session.average_score(),
        "strengths": summary.map(|s| s.strengths.clone()).unwrap_or_default(),
        "weaknesses": summary.map(|s| s.weaknesses.clone()).unwrap_or_default(),
        "recommendations": summary.map(|s| s.recommendations.clone()).unwrap_or_default(),
    })
}
