//! Best-effort decoding of raw model text into structured records.
//!
//! The external generator is prompted to emit JSON but its output is
//! untrusted: it may be fenced in Markdown, truncated, or plain prose.
//! Decode failures never propagate past this boundary -- they produce a
//! degraded-but-valid record that carries the raw text verbatim, so model
//! output is surfaced to the user even when unstructured.

use intervia_types::interview::{EvaluationRecord, SummaryRecord};

/// Lowest and highest evaluation scores the data model admits.
const MIN_SCORE: u32 = 1;
const MAX_SCORE: u32 = 10;

/// Remove Markdown code-fence markers from raw model output.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Extract the question text from raw model output.
pub fn parse_question(raw: &str) -> String {
    raw.trim().to_string()
}

/// Decode raw model output into an [`EvaluationRecord`].
///
/// On decode failure, returns a degraded record: score fixed at 5, generic
/// placeholder lists, and the raw text as `overall_feedback`.
pub fn parse_evaluation(raw: &str) -> EvaluationRecord {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<EvaluationRecord>(&cleaned) {
        Ok(mut record) => {
            record.score = record.score.clamp(MIN_SCORE, MAX_SCORE);
            record
        }
        Err(err) => {
            tracing::warn!(error = %err, "evaluation output was not valid JSON, using degraded record");
            EvaluationRecord {
                score: 5,
                strengths: vec!["Response was processed".to_string()],
                weaknesses: vec!["Could not parse detailed evaluation from AI".to_string()],
                suggestions: vec![
                    "Ensure your answer is clear and directly addresses the question".to_string(),
                ],
                overall_feedback: raw.to_string(),
            }
        }
    }
}

/// Decode raw model output into a [`SummaryRecord`].
///
/// On decode failure, returns a degraded summary with `overall_score`
/// copied from the caller-supplied average and the raw text as
/// `final_feedback`.
pub fn parse_summary(raw: &str, average_score: f64) -> SummaryRecord {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<SummaryRecord>(&cleaned) {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(error = %err, "summary output was not valid JSON, using degraded record");
            SummaryRecord {
                overall_score: average_score,
                strengths: vec!["Interview completed successfully".to_string()],
                weaknesses: vec!["Summary generation had issues".to_string()],
                recommendations: vec!["Continue practicing interview skills".to_string()],
                final_feedback: raw.to_string(),
                key_insights: None,
            }
        }
    }
}
