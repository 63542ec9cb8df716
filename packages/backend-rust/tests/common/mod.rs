#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use wordquiz_backend::config::Config;
use wordquiz_backend::db::config::DbConfig;

/// Router over a throwaway SQLite file; the directory lives as long as this value
pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(|_| {}).await
}

pub async fn create_test_app_with(tweak: impl FnOnce(&mut Config)) -> TestApp {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db_path = dir.path().join("words.db");

    let mut config = Config::from_vars(|_| None);
    config.db = DbConfig::with_url(format!("sqlite://{}?mode=rwc", db_path.display()));
    tweak(&mut config);

    let router = wordquiz_backend::create_app(config)
        .await
        .expect("failed to build app");

    TestApp { router, _dir: dir }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.request_raw(method, uri, body.map(|b| b.to_string())).await;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };
        (status, json)
    }

    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Vec<u8>) {
        let (status, _, bytes) = self.request_full(method, uri, body).await;
        (status, bytes)
    }

    pub async fn request_full(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Option<String>, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(body) => {
                builder = builder.header("content-type", "application/json");
                Body::from(body)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, content_type, bytes)
    }

    pub async fn add_word(&self, source: &str, translation: &str) -> Value {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/words",
                Some(serde_json::json!({ "source": source, "translation": translation })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body
    }
}
