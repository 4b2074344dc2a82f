use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::domain::{Course, GradedResult, LessonSection, QuizQuestion, QuizSummary},
    services::quiz_attempt_service::{answer_field, correct_field, question_field},
};

/// Model of the main page. Empty on `GET /`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoursePage {
    pub topic: Option<String>,
    pub content: Option<String>,
    pub lessons: Vec<LessonSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub show_content: bool,
}

impl CoursePage {
    pub fn from_course(course: Course, notice: Option<String>) -> Self {
        CoursePage {
            topic: Some(course.topic),
            content: Some(course.content),
            lessons: course.lessons,
            notice,
            show_content: true,
        }
    }
}

/// One named form field the client must send back unchanged.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub text: String,
    pub options: Vec<String>,
    pub answer_field: String,
    pub hidden_fields: Vec<HiddenField>,
}

impl From<&QuizQuestion> for QuestionView {
    fn from(question: &QuizQuestion) -> Self {
        QuestionView {
            number: question.number,
            text: question.text.clone(),
            options: question.options.clone(),
            answer_field: answer_field(question.number),
            hidden_fields: vec![
                HiddenField {
                    name: question_field(question.number),
                    value: question.text.clone(),
                },
                HiddenField {
                    name: correct_field(question.number),
                    value: question.correct_text.clone(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizPage {
    pub topic: String,
    pub questions: Vec<QuestionView>,
    pub answer_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResultPage {
    pub topic: String,
    pub results: Vec<GradedResult>,
    #[serde(flatten)]
    pub summary: QuizSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: String,
    pub last_success: Option<DateTime<Utc>>,
}
