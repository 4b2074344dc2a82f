pub mod course_service;
pub mod model_service;
pub mod quiz_attempt_service;
pub mod quiz_parser;
pub mod status_service;
