use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::QuizQuestion;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerKeyClaims {
    pub topic: String,
    pub answers: Vec<String>, // correct option text, in question order
    pub exp: usize,
    pub iat: usize,
}

impl AnswerKeyClaims {
    pub fn new(topic: &str, questions: &[QuizQuestion], expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            topic: topic.to_string(),
            answers: questions.iter().map(|q| q.correct_text.clone()).collect(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
