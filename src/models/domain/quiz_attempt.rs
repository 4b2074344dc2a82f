use serde::{Deserialize, Serialize};

pub const MASTERED_FEEDBACK: &str = "Excellent! You've mastered this topic!";
pub const SOLID_FEEDBACK: &str = "Good job! You have a solid understanding of the material.";
pub const PRACTICE_FEEDBACK: &str = "Keep practicing! Review the lessons and try again.";

/// Outcome of one submitted answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GradedResult {
    pub number: usize,
    pub question_text: String,
    pub user_answer_text: String,
    pub correct_answer_text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub feedback: String,
}

impl QuizSummary {
    pub fn from_results(results: &[GradedResult]) -> Self {
        let score = results.iter().filter(|r| r.is_correct).count();
        let total = results.len();
        let percentage = percentage(score, total);

        Self {
            score,
            total,
            percentage,
            feedback: feedback_for(percentage).to_string(),
        }
    }
}

/// `floor(100 * score / total)`, zero for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score * 100 / total) as u32
}

pub fn feedback_for(percentage: u32) -> &'static str {
    match percentage {
        p if p >= 80 => MASTERED_FEEDBACK,
        p if p >= 60 => SOLID_FEEDBACK,
        _ => PRACTICE_FEEDBACK,
    }
}
