use std::collections::HashMap;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::request::QuizQuery};

/// Generates a quiz from the lesson content rendered on the previous page.
#[get("/quiz")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    query: web::Query<QuizQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let page = state
        .course_service
        .generate_quiz(&query.topic, &query.content)
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Grades the answers posted back with the quiz's hidden fields.
#[post("/submit-quiz")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let page = state.course_service.grade_quiz(&form)?;
    Ok(HttpResponse::Ok().json(page))
}
