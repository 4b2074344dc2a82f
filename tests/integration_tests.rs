use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use secrecy::SecretString;

use upskillr::{
    app_state::AppState,
    config::{Config, Provider},
    errors::ProviderError,
    handlers,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    services::{
        model_service::ChatModel,
        status_service::{Clock, InMemoryStatusStore},
    },
};

const COURSE: &str = "### Lesson 1: Roots\n- Plants absorb water\n- Roots anchor\n- Minerals\nSummary: Roots feed the plant.\n\n\
### Lesson 2: Leaves\n- Photosynthesis\n- Stomata\n- Chlorophyll\nSummary: Leaves make food.";

const QUIZ: &str = "Q1. What do roots absorb?\nA) Light\nB) Water\nC) Sound\nD) Heat\nAnswer: B\n\n\
Q2. Where does photosynthesis happen?\nA) Roots\nB) Bark\nC) Leaves\nD) Seeds\nAnswer: C\n\n\
Q3 missing its period\nA) a\nB) b\nC) c\nD) d\nAnswer: A\n\n\
Q4. What gives leaves their colour?\nA) Chlorophyll\nB) Water\nC) Soil\nD) Wind\nAnswer: a";

/// Replies with course text to lesson prompts and quiz text to quiz prompts,
/// counting every call.
struct ScriptedModel {
    calls: AtomicUsize,
    failure: Option<ProviderError>,
}

impl ScriptedModel {
    fn ok() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            failure: None,
        })
    }

    fn failing(err: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            failure: Some(err),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if prompt.contains("multiple-choice quiz") {
            Ok(QUIZ.to_string())
        } else {
            Ok(COURSE.to_string())
        }
    }
}

struct FrozenClock(DateTime<Utc>);

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn config() -> Config {
    Config {
        provider: Provider::OpenRouter,
        api_key: Some(SecretString::from("integration-key".to_string())),
        api_url: "http://127.0.0.1:9/chat/completions".to_string(),
        model: "integration-model".to_string(),
        secret_key: SecretString::from("integration_secret".to_string()),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 5000,
        request_timeout_secs: 5,
        max_tokens: 500,
        temperature: 0.7,
        fallback_content: false,
        verify_answer_key: false,
        status_file: "unused.txt".into(),
    }
}

fn state_with(config: Config, model: Arc<ScriptedModel>) -> AppState {
    let clock = FrozenClock(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
    AppState::with_parts(
        config,
        model,
        Arc::new(InMemoryStatusStore::default()),
        Arc::new(clock),
    )
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .wrap(RequestIdMiddleware)
                .configure(handlers::configure),
        )
        .await
    };
}

#[actix_rt::test]
async fn missing_topic_makes_no_provider_call() {
    let model = ScriptedModel::ok();
    let app = app!(state_with(config(), model.clone()));

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("topic", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Please enter a topic");
    assert_eq!(model.calls(), 0);
}

#[actix_rt::test]
async fn course_quiz_and_grading_round_trip() {
    let model = ScriptedModel::ok();
    let app = app!(state_with(config(), model.clone()));

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("topic", "plants")])
        .to_request();
    let course: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(course["lessons"].as_array().unwrap().len(), 2);

    let content = course["content"].as_str().unwrap();
    let url = reqwest::Url::parse_with_params(
        "http://localhost/quiz",
        &[("topic", "plants"), ("content", content)],
    )
    .unwrap();
    let uri = format!("/quiz?{}", url.query().unwrap());
    let req = test::TestRequest::get().uri(&uri).to_request();
    let quiz: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let questions = quiz["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[2]["number"], 3);
    assert_eq!(questions[2]["text"], "What gives leaves their colour?");

    // Post the hidden fields back, answering the first two correctly.
    let mut form: Vec<(String, String)> = vec![("topic".into(), "plants".into())];
    for (i, question) in questions.iter().enumerate() {
        for field in question["hidden_fields"].as_array().unwrap() {
            form.push((
                field["name"].as_str().unwrap().to_string(),
                field["value"].as_str().unwrap().to_string(),
            ));
        }
        let answer = if i < 2 {
            question["hidden_fields"][1]["value"].as_str().unwrap().to_uppercase()
        } else {
            "Wind".to_string()
        };
        form.push((question["answer_field"].as_str().unwrap().to_string(), answer));
    }

    let req = test::TestRequest::post()
        .uri("/submit-quiz")
        .set_form(&form)
        .to_request();
    let result: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(result["score"], 2);
    assert_eq!(result["total"], 3);
    assert_eq!(result["percentage"], 66);
    assert_eq!(
        result["feedback"],
        "Good job! You have a solid understanding of the material."
    );
    assert_eq!(model.calls(), 2);
}

#[actix_rt::test]
async fn empty_submission_scores_zero() {
    let app = app!(state_with(config(), ScriptedModel::ok()));

    let req = test::TestRequest::post()
        .uri("/submit-quiz")
        .set_form([("topic", "plants")])
        .to_request();
    let result: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(result["total"], 0);
    assert_eq!(result["percentage"], 0);
    assert_eq!(
        result["feedback"],
        "Keep practicing! Review the lessons and try again."
    );
}

#[actix_rt::test]
async fn auth_rejection_is_reported_distinctly() {
    let app = app!(state_with(
        config(),
        ScriptedModel::failing(ProviderError::AuthRejected)
    ));

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("topic", "plants")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid API key"));
}

#[actix_rt::test]
async fn missing_key_is_service_unavailable() {
    let app = app!(state_with(
        config(),
        ScriptedModel::failing(ProviderError::MissingApiKey)
    ));

    let req = test::TestRequest::get()
        .uri("/quiz?topic=plants&content=x")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_rt::test]
async fn timeout_falls_back_when_enabled() {
    let mut cfg = config();
    cfg.fallback_content = true;
    let app = app!(state_with(cfg, ScriptedModel::failing(ProviderError::Timeout)));

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("topic", "plants")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["notice"].is_string());
    assert_eq!(body["lessons"][0]["title"], "Getting Started with plants");
}

#[actix_rt::test]
async fn timeout_without_fallback_is_provider_unavailable() {
    let app = app!(state_with(
        config(),
        ScriptedModel::failing(ProviderError::Timeout)
    ));

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("topic", "plants")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("timed out"));
}

#[actix_rt::test]
async fn verified_grading_ignores_tampered_fields() {
    let mut cfg = config();
    cfg.verify_answer_key = true;
    let app = app!(state_with(cfg, ScriptedModel::ok()));

    let req = test::TestRequest::get()
        .uri("/quiz?topic=plants&content=roots")
        .to_request();
    let quiz: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let key = quiz["answer_key"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/submit-quiz")
        .set_form([
            ("topic", "plants"),
            ("answer_key", key.as_str()),
            ("q_1", "Light"),
            ("correct_full_1", "Light"),
            ("question_9", "extra"),
        ])
        .to_request();
    let result: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(result["total"], 3);
    assert_eq!(result["score"], 0);

    let req = test::TestRequest::post()
        .uri("/submit-quiz")
        .set_form([("topic", "plants"), ("answer_key", "forged")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn health_reports_last_success() {
    let app = app!(state_with(config(), ScriptedModel::ok()));

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("topic", "plants")])
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(health["provider"], "openrouter");
    assert_eq!(health["last_success"], "2024-01-01T08:00:00Z");
}
