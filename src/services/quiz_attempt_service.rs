use std::collections::HashMap;

use crate::models::domain::{GradedResult, QuizSummary};

/// Prefix of the hidden field carrying each rendered question's text.
pub const QUESTION_FIELD_PREFIX: &str = "question_";

pub fn question_field(number: usize) -> String {
    format!("{}{}", QUESTION_FIELD_PREFIX, number)
}

pub fn answer_field(number: usize) -> String {
    format!("q_{}", number)
}

pub fn correct_field(number: usize) -> String {
    format!("correct_full_{}", number)
}

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade a submitted quiz form at face value: the number of `question_*`
    /// fields is the total and `correct_full_<i>` is the key.
    pub fn grade_submission(form: &HashMap<String, String>) -> (Vec<GradedResult>, QuizSummary) {
        let total = form
            .keys()
            .filter(|k| k.starts_with(QUESTION_FIELD_PREFIX))
            .count();

        let results: Vec<GradedResult> = (1..=total)
            .map(|i| Self::grade_answer(form, i, field(form, &correct_field(i))))
            .collect();

        let summary = QuizSummary::from_results(&results);
        (results, summary)
    }

    /// Grade against a known answer key; submitted `correct_full_<i>` fields
    /// and the submitted question count are ignored.
    pub fn grade_against_key(
        form: &HashMap<String, String>,
        answers: &[String],
    ) -> (Vec<GradedResult>, QuizSummary) {
        let results: Vec<GradedResult> = answers
            .iter()
            .enumerate()
            .map(|(i, correct)| Self::grade_answer(form, i + 1, correct))
            .collect();

        let summary = QuizSummary::from_results(&results);
        (results, summary)
    }

    fn grade_answer(form: &HashMap<String, String>, number: usize, correct: &str) -> GradedResult {
        let user_answer = field(form, &answer_field(number));

        GradedResult {
            number,
            question_text: field(form, &question_field(number)).to_string(),
            user_answer_text: user_answer.to_string(),
            correct_answer_text: correct.to_string(),
            is_correct: answers_match(user_answer, correct),
        }
    }
}

/// Case-insensitive comparison of full option texts. An unanswered question
/// is never correct.
pub fn answers_match(user_answer: &str, correct: &str) -> bool {
    !user_answer.is_empty() && user_answer.to_lowercase() == correct.to_lowercase()
}

fn field<'a>(form: &'a HashMap<String, String>, name: &str) -> &'a str {
    form.get(name).map(String::as_str).unwrap_or("")
}
