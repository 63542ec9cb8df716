use axum::http::{Method, StatusCode};

mod common;

#[tokio::test]
async fn test_health_root() {
    let app = common::create_test_app().await;

    let (status, body) = app.request(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_health_live() {
    let app = common::create_test_app().await;

    let (status, body) = app.request(Method::GET, "/health/live", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_info() {
    let app = common::create_test_app().await;

    let (status, body) = app.request(Method::GET, "/health/info", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "wordquiz-backend");
    assert_eq!(body["database"], "sqlite");
}

#[tokio::test]
async fn test_client_config() {
    let app = common::create_test_app_with(|config| {
        config.api_base_url = "https://quiz.example.com".to_string();
        config.quiz_size = 7;
    })
    .await;

    let (status, body) = app.request(Method::GET, "/api/config", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["apiBaseUrl"], "https://quiz.example.com");
    assert_eq!(body["sourceLang"], "tr");
    assert_eq!(body["translationLang"], "en");
    assert_eq!(body["quizSize"], 7);
}

#[tokio::test]
async fn test_404_not_found() {
    let app = common::create_test_app().await;

    let (status, body) = app.request(Method::GET, "/nonexistent/path", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_wrong_method() {
    let app = common::create_test_app().await;

    let (status, body) = app.request(Method::DELETE, "/api/quiz", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
}
