use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

pub const MAX_TOPIC_LENGTH: u64 = 200;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TopicForm {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub topic: String,
}

/// Query of `GET /quiz`: the topic and the lesson text rendered earlier.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuizQuery {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub topic: String,
    #[serde(default)]
    pub content: String,
}

/// Trims the topic and rejects blank input before anything else happens.
pub fn require_topic(topic: &str) -> AppResult<&str> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(AppError::MissingTopic);
    }
    Ok(topic)
}
