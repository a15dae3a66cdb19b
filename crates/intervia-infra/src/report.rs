//! PDF rendering of a completed interview.
//!
//! Consumes the same results record the JSON endpoint serves and renders
//! it as a simple flowing document: interview details, the question/answer
//! transcript with per-answer evaluations, and a final summary page.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocumentReference, PdfLayerReference};
use thiserror::Error;

use intervia_types::interview::Session;

/// A4 portrait, in millimeters.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;

/// Characters per wrapped body line at 11pt Helvetica on A4.
const LINE_CHARS: usize = 92;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("pdf rendering failed: {0}")]
    Pdf(String),
}

/// Render the results record of a completed session as PDF bytes.
pub fn render_interview_report(session: &Session) -> Result<Vec<u8>, ReportError> {
    let (doc, page, layer) =
        printpdf::PdfDocument::new("Interview Report", Mm(PAGE_WIDTH as _), Mm(PAGE_HEIGHT as _), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    let mut writer = PageWriter {
        layer: doc.get_page(page).get_layer(layer),
        doc: &doc,
        y: PAGE_HEIGHT - MARGIN,
    };

    writer.heading(&bold, 20.0, "Interview Report");
    writer.gap();

    writer.heading(&bold, 16.0, "Interview Details");
    writer.body(&regular, &format!("Role: {}", session.role));
    writer.body(&regular, &format!("Domain: {}", session.domain));
    writer.body(&regular, &format!("Type: {}", session.mode));
    writer.body(
        &regular,
        &format!("Date: {}", session.created_at.format("%Y-%m-%d")),
    );
    writer.body(
        &regular,
        &format!("Average Score: {:.1}/10", session.average_score()),
    );
    writer.gap();

    writer.heading(&bold, 16.0, "Questions and Answers");
    writer.gap();

    for (i, question) in session.questions.iter().enumerate() {
        writer.heading(&bold, 14.0, &format!("Question {}:", i + 1));
        writer.wrapped(&regular, question);

        if let Some(answer) = session.answers.get(i) {
            writer.wrapped(&regular, &format!("Answer: {answer}"));
        }

        if let Some(evaluation) = session.evaluations.get(i) {
            writer.body(&regular, &format!("Score: {}/10", evaluation.score));
            writer.wrapped(
                &regular,
                &format!("Strengths: {}", evaluation.strengths.join(", ")),
            );
            writer.wrapped(
                &regular,
                &format!("Areas for Improvement: {}", evaluation.weaknesses.join(", ")),
            );
            writer.wrapped(
                &regular,
                &format!("Suggestions: {}", evaluation.suggestions.join(", ")),
            );
            writer.wrapped(
                &regular,
                &format!("Feedback: {}", evaluation.overall_feedback),
            );
        }
        writer.gap();
    }

    if let Some(summary) = &session.summary {
        writer.new_page();
        writer.heading(&bold, 16.0, "Interview Summary");
        writer.gap();

        writer.heading(&bold, 14.0, "Strengths:");
        for strength in &summary.strengths {
            writer.wrapped(&regular, &format!("- {strength}"));
        }
        writer.gap();

        writer.heading(&bold, 14.0, "Areas for Improvement:");
        for weakness in &summary.weaknesses {
            writer.wrapped(&regular, &format!("- {weakness}"));
        }
        writer.gap();

        writer.heading(&bold, 14.0, "Recommendations:");
        for recommendation in &summary.recommendations {
            writer.wrapped(&regular, &format!("- {recommendation}"));
        }
        writer.gap();

        writer.wrapped(
            &regular,
            &format!("Final Feedback: {}", summary.final_feedback),
        );
    }

    doc.save_to_bytes()
        .map_err(|e| ReportError::Pdf(e.to_string()))
}

/// Cursor that writes lines top-to-bottom and breaks pages at the margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    fn new_page(&mut self) {
        let (page, layer) =
            self.doc
                .add_page(Mm(PAGE_WIDTH as _), Mm(PAGE_HEIGHT as _), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn line(&mut self, font: &IndirectFontRef, size: f32, text: &str) {
        let advance = size * 0.55;
        if self.y - advance < MARGIN {
            self.new_page();
        }
        self.layer
            .use_text(text, size as _, Mm(MARGIN as _), Mm(self.y as _), font);
        self.y -= advance;
    }

    fn heading(&mut self, font: &IndirectFontRef, size: f32, text: &str) {
        self.line(font, size, text);
    }

    fn body(&mut self, font: &IndirectFontRef, text: &str) {
        self.line(font, 11.0, text);
    }

    fn wrapped(&mut self, font: &IndirectFontRef, text: &str) {
        for line in wrap(text, LINE_CHARS) {
            self.body(font, &line);
        }
    }

    fn gap(&mut self) {
        self.y -= 4.0;
    }
}

/// Greedy word wrap at `max_chars` per line.
///
/// Words longer than a whole line are emitted on their own line rather
/// than split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    use intervia_types::interview::{EvaluationRecord, InterviewMode, SummaryRecord};

    fn completed_session() -> Session {
        let mut session = Session::new("Software Engineer", "Technology", InterviewMode::Technical, "Q1");
        for n in 1..=5u32 {
            session.record_answer(
                format!("Answer number {n} with some detail about systems."),
                EvaluationRecord {
                    score: 7,
                    strengths: vec!["clarity".to_string()],
                    weaknesses: vec!["depth".to_string()],
                    suggestions: vec!["examples".to_string()],
                    overall_feedback: "Decent.".to_string(),
                },
            );
            if n < 5 {
                session.advance(format!("Q{}", n + 1));
            }
        }
        session.complete(SummaryRecord {
            overall_score: 7.0,
            strengths: vec!["Consistent".to_string()],
            weaknesses: vec!["Breadth".to_string()],
            recommendations: vec!["Practice".to_string()],
            final_feedback: "Solid performance.".to_string(),
            key_insights: None,
        });
        session
    }

    #[test]
    fn test_report_renders_pdf_bytes() {
        let bytes = render_interview_report(&completed_session()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_wrap_respects_line_length() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap(text, 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 12, "line too long: {line}");
        }
    }

    #[test]
    fn test_wrap_keeps_overlong_word_whole() {
        let lines = wrap("supercalifragilisticexpialidocious", 10);
        assert_eq!(lines, vec!["supercalifragilisticexpialidocious"]);
    }

    #[test]
    fn test_wrap_empty_text_yields_one_blank_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
