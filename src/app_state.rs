use std::sync::Arc;

use crate::{
    answer_key::AnswerKeySigner,
    config::Config,
    errors::{AppError, AppResult},
    services::{
        course_service::CourseService,
        model_service::{ChatModel, OpenAiCompatibleModel},
        status_service::{Clock, FileStatusStore, StatusService, StatusStore, SystemClock},
    },
};

const ANSWER_KEY_EXPIRATION_HOURS: i64 = 24;

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let model = OpenAiCompatibleModel::new(&config)
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;
        let store = FileStatusStore::new(config.status_file.clone());

        Ok(Self::with_parts(
            config,
            Arc::new(model),
            Arc::new(store),
            Arc::new(SystemClock),
        ))
    }

    /// Assembles the state from explicit collaborators; used by tests to
    /// swap out the model, the status store and the clock.
    pub fn with_parts(
        config: Config,
        model: Arc<dyn ChatModel>,
        store: Arc<dyn StatusStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let status = Arc::new(StatusService::new(store, clock));
        let signer = AnswerKeySigner::new(&config.secret_key, ANSWER_KEY_EXPIRATION_HOURS);
        let course_service = Arc::new(CourseService::new(
            model,
            status,
            signer,
            config.fallback_content,
            config.verify_answer_key,
        ));

        Self {
            course_service,
            config: Arc::new(config),
        }
    }
}
