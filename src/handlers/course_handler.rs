use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::TopicForm, response::CoursePage},
};

/// Renders the empty topic form.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(CoursePage::default())
}

/// Generates a micro-course for the submitted topic.
#[post("/")]
pub async fn create_course(
    state: web::Data<AppState>,
    form: web::Form<TopicForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    form.validate()?;

    let page = state.course_service.generate_course(&form.topic).await?;
    Ok(HttpResponse::Ok().json(page))
}
