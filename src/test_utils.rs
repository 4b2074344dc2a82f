#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::{
        app_state::AppState,
        config::Config,
        errors::ProviderError,
        services::{
            model_service::ChatModel,
            status_service::{InMemoryStatusStore, SystemClock},
        },
    };

    /// Two well-formed questions in the quiz grammar.
    pub const QUIZ_TEXT: &str = "Q1. What is the capital of France?\nA) London\nB) Paris\nC) Berlin\nD) Madrid\nAnswer: B\n\n\
Q2. Which planet is largest?\nA) Mars\nB) Venus\nC) Jupiter\nD) Earth\nAnswer: C";

    /// Model that answers every prompt with the same text.
    pub struct CannedModel(pub Result<String, ProviderError>);

    #[async_trait]
    impl ChatModel for CannedModel {
        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            self.0.clone()
        }
    }

    /// App state whose model always replies with `reply`.
    pub fn test_state(reply: &str) -> AppState {
        AppState::with_parts(
            Config::test_config(),
            Arc::new(CannedModel(Ok(reply.to_string()))),
            Arc::new(InMemoryStatusStore::default()),
            Arc::new(SystemClock),
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[actix_web::test]
    async fn test_canned_model_replies() {
        let state = test_state(QUIZ_TEXT);
        let quiz = state
            .course_service
            .generate_quiz("geography", "")
            .await
            .unwrap();

        assert_eq!(quiz.questions.len(), 2);
    }
}
