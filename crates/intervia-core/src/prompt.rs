//! Prompt templates for the three interview tasks.
//!
//! Pure, deterministic text templating: identical inputs produce
//! byte-identical prompt text. No side effects, no failure modes.

use intervia_types::interview::{EvaluationRecord, InterviewMode, TOTAL_QUESTIONS};

/// Build the prompt for generating interview question `question_number`.
pub fn question_prompt(
    role: &str,
    domain: &str,
    mode: InterviewMode,
    question_number: u32,
) -> String {
    let focus = match mode {
        InterviewMode::Technical => "technical and problem-solving focused",
        InterviewMode::Behavioral => "behavioral and experience-based",
    };

    format!(
        "You are an expert interviewer conducting a {mode} interview for a {role} position in {domain}.\n\
         \n\
         Generate a single, well-structured interview question that:\n\
         1. Is appropriate for question {question_number} of {TOTAL_QUESTIONS}\n\
         2. Tests relevant skills for the {role} position\n\
         3. Is specific to the {domain} domain\n\
         4. Is {focus}\n\
         5. Is clear and concise\n\
         \n\
         Return only the question text, no additional formatting."
    )
}

/// Build the prompt for evaluating one answer to one question.
///
/// Instructs the model to emit a JSON object matching
/// [`EvaluationRecord`]; the parser treats that as a best-effort contract.
pub fn evaluation_prompt(question: &str, answer: &str, mode: InterviewMode) -> String {
    format!(
        "You are an expert interviewer evaluating a candidate's answer.\n\
         \n\
         Question: {question}\n\
         Answer: {answer}\n\
         Interview Type: {mode}\n\
         \n\
         Evaluate the answer on a scale of 1-10 based on:\n\
         - Clarity and communication\n\
         - Technical accuracy (for technical questions) or relevant experience (for behavioral)\n\
         - Completeness of response\n\
         - Problem-solving approach\n\
         - Professional presentation\n\
         \n\
         Return your evaluation as a JSON object with this structure:\n\
         {{\n\
           \"score\": <number 1-10>,\n\
           \"strengths\": [<array of positive aspects>],\n\
           \"weaknesses\": [<array of areas for improvement>],\n\
           \"suggestions\": [<array of specific recommendations>],\n\
           \"overall_feedback\": \"<brief summary of the evaluation>\"\n\
         }}"
    )
}

/// Build the prompt for the end-of-session summary.
///
/// Embeds the full question/answer transcript with per-answer scores so the
/// model can ground its assessment in what was actually said.
pub fn summary_prompt(
    questions: &[String],
    answers: &[String],
    evaluations: &[EvaluationRecord],
    role: &str,
    domain: &str,
    mode: InterviewMode,
    average_score: f64,
) -> String {
    let mut transcript = String::new();
    for (i, question) in questions.iter().enumerate() {
        transcript.push_str(&format!("Q{}: {question}\n", i + 1));
        if let Some(answer) = answers.get(i) {
            transcript.push_str(&format!("A{}: {answer}\n", i + 1));
        }
        if let Some(evaluation) = evaluations.get(i) {
            transcript.push_str(&format!("Score: {}/10\n", evaluation.score));
        }
    }

    format!(
        "You are an expert career coach providing a comprehensive interview summary.\n\
         \n\
         Interview Details:\n\
         - Role: {role}\n\
         - Domain: {domain}\n\
         - Type: {mode}\n\
         - Average Score: {average_score}/10\n\
         \n\
         Questions Asked: {count}\n\
         Transcript:\n\
         {transcript}\n\
         Generate a comprehensive summary as a JSON object:\n\
         {{\n\
           \"overall_score\": <average score>,\n\
           \"strengths\": [<array of key strengths demonstrated>],\n\
           \"weaknesses\": [<array of areas needing improvement>],\n\
           \"recommendations\": [<array of specific next steps>],\n\
           \"final_feedback\": \"<encouraging summary message>\",\n\
           \"key_insights\": [<array of important observations>]\n\
         }}",
        count = questions.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_is_deterministic() {
        let a = question_prompt("Software Engineer", "Finance", InterviewMode::Technical, 3);
        let b = question_prompt("Software Engineer", "Finance", InterviewMode::Technical, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_question_prompt_mentions_inputs() {
        let prompt = question_prompt("Data Scientist", "Healthcare", InterviewMode::Behavioral, 2);
        assert!(prompt.contains("Data Scientist"));
        assert!(prompt.contains("Healthcare"));
        assert!(prompt.contains("question 2 of 5"));
        assert!(prompt.contains("behavioral and experience-based"));
    }

    #[test]
    fn test_evaluation_prompt_embeds_question_and_answer() {
        let prompt = evaluation_prompt("What is a mutex?", "A lock.", InterviewMode::Technical);
        assert!(prompt.contains("Question: What is a mutex?"));
        assert!(prompt.contains("Answer: A lock."));
        assert!(prompt.contains("\"overall_feedback\""));
    }

    #[test]
    fn test_summary_prompt_embeds_transcript() {
        let questions = vec!["Q-one".to_string(), "Q-two".to_string()];
        let answers = vec!["A-one".to_string(), "A-two".to_string()];
        let evaluations = vec![
            EvaluationRecord {
                score: 7,
                strengths: Vec::new(),
                weaknesses: Vec::new(),
                suggestions: Vec::new(),
                overall_feedback: String::new(),
            },
            EvaluationRecord {
                score: 9,
                strengths: Vec::new(),
                weaknesses: Vec::new(),
                suggestions: Vec::new(),
                overall_feedback: String::new(),
            },
        ];
        let prompt = summary_prompt(
            &questions,
            &answers,
            &evaluations,
            "SE",
            "Tech",
            InterviewMode::Technical,
            8.0,
        );
        assert!(prompt.contains("Q1: Q-one"));
        assert!(prompt.contains("A2: A-two"));
        assert!(prompt.contains("Score: 9/10"));
        assert!(prompt.contains("Questions Asked: 2"));
        assert!(prompt.contains("Average Score: 8/10"));
    }
}
