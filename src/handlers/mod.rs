pub mod course_handler;
pub mod health_handler;
pub mod quiz_handler;

pub use course_handler::{create_course, index};
pub use health_handler::health_check;
pub use quiz_handler::{get_quiz, submit_quiz};

use actix_web::web;

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(create_course)
        .service(get_quiz)
        .service(submit_quiz)
        .service(health_check);
}
