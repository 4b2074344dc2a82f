use std::{collections::HashMap, sync::Arc};

use crate::{
    answer_key::AnswerKeySigner,
    constants::prompts::{compose_lesson_prompt, compose_quiz_prompt, fallback_course, fallback_quiz},
    errors::{AppError, AppResult, ProviderError},
    models::{
        domain::Course,
        dto::{
            request::require_topic,
            response::{CoursePage, QuestionView, QuizPage, QuizResultPage},
        },
    },
    services::{
        model_service::ChatModel, quiz_attempt_service::QuizAttemptService,
        quiz_parser::parse_quiz, status_service::StatusService,
    },
};

pub const FALLBACK_NOTICE: &str =
    "The content service is unavailable right now, showing a starter course instead.";

/// Per-request orchestration: compose, call the model once, parse, grade.
pub struct CourseService {
    model: Arc<dyn ChatModel>,
    status: Arc<StatusService>,
    signer: AnswerKeySigner,
    fallback_content: bool,
    verify_answer_key: bool,
}

impl CourseService {
    pub fn new(
        model: Arc<dyn ChatModel>,
        status: Arc<StatusService>,
        signer: AnswerKeySigner,
        fallback_content: bool,
        verify_answer_key: bool,
    ) -> Self {
        Self {
            model,
            status,
            signer,
            fallback_content,
            verify_answer_key,
        }
    }

    pub fn status(&self) -> &StatusService {
        &self.status
    }

    pub async fn generate_course(&self, topic: &str) -> AppResult<CoursePage> {
        let topic = require_topic(topic)?;
        log::info!("Generating course for topic '{}'", topic);

        match self.generate(&compose_lesson_prompt(topic)).await? {
            Some(content) => Ok(CoursePage::from_course(Course::new(topic, &content), None)),
            None => Ok(CoursePage::from_course(
                Course::new(topic, &fallback_course(topic)),
                Some(FALLBACK_NOTICE.to_string()),
            )),
        }
    }

    pub async fn generate_quiz(&self, topic: &str, content: &str) -> AppResult<QuizPage> {
        let topic = require_topic(topic)?;
        log::info!("Generating quiz for topic '{}'", topic);

        let (text, notice) = match self.generate(&compose_quiz_prompt(topic, content)).await? {
            Some(text) => (text, None),
            None => (fallback_quiz(topic), Some(FALLBACK_NOTICE.to_string())),
        };

        let questions = parse_quiz(&text);
        if questions.is_empty() {
            log::warn!("No quiz questions could be parsed for topic '{}'", topic);
        }

        Ok(QuizPage {
            topic: topic.to_string(),
            answer_key: self.signer.sign(topic, &questions)?,
            questions: questions.iter().map(QuestionView::from).collect(),
            notice,
        })
    }

    pub fn grade_quiz(&self, form: &HashMap<String, String>) -> AppResult<QuizResultPage> {
        let topic = form.get("topic").cloned().unwrap_or_default();

        let (results, summary) = if self.verify_answer_key {
            let token = form
                .get("answer_key")
                .filter(|t| !t.is_empty())
                .ok_or_else(|| AppError::ValidationError("Missing answer key".to_string()))?;
            let claims = self.signer.verify(token)?;
            if claims.topic != topic.trim() {
                return Err(AppError::ValidationError(
                    "Answer key was issued for a different topic".to_string(),
                ));
            }
            QuizAttemptService::grade_against_key(form, &claims.answers)
        } else {
            QuizAttemptService::grade_submission(form)
        };

        log::info!(
            "Graded quiz for '{}': {}/{} ({}%)",
            topic,
            summary.score,
            summary.total,
            summary.percentage
        );

        Ok(QuizResultPage {
            topic,
            results,
            summary,
        })
    }

    /// `Ok(None)` means the provider was unreachable and fallback content
    /// should be shown instead.
    async fn generate(&self, prompt: &str) -> AppResult<Option<String>> {
        match self.model.complete(prompt).await {
            Ok(text) => {
                self.status.record_success().await;
                Ok(Some(text))
            }
            Err(err) if self.fallback_content && is_unavailable(&err) => {
                log::warn!("Provider unavailable, using fallback content: {}", err);
                Ok(None)
            }
            Err(err) => Err(self.with_hint(err.into()).await),
        }
    }

    async fn with_hint(&self, err: AppError) -> AppError {
        match err {
            AppError::ProviderUnavailable(msg) => match self.status.hint().await {
                Some(hint) => AppError::ProviderUnavailable(format!("{}. {}", msg, hint)),
                None => AppError::ProviderUnavailable(msg),
            },
            other => other,
        }
    }
}

fn is_unavailable(err: &ProviderError) -> bool {
    !matches!(err, ProviderError::MissingApiKey | ProviderError::AuthRejected)
}
