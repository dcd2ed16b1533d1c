//! Shared setup for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vitrine::{
    AppState,
    config::{Config, ContactConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use vitrine_contact::{Ack, FormFields, SubmissionFailed, SubmissionTransport};

/// Instant transport that records every delivery.
#[derive(Clone, Default)]
pub struct FakeTransport {
    pub fail: bool,
    pub delivered: Arc<Mutex<Vec<FormFields>>>,
}

impl FakeTransport {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn delivered(&self) -> Vec<FormFields> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionTransport for FakeTransport {
    async fn submit(&self, fields: FormFields) -> Result<Ack, SubmissionFailed> {
        self.delivered.lock().unwrap().push(fields);

        if self.fail {
            return Err(SubmissionFailed::msg("relay unavailable"));
        }

        Ok(Ack::new())
    }
}

/// English by default, so assertions read against `locales/en.yml`.
pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig {
            default_language: "en".to_owned(),
            ..Default::default()
        },
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app(transport: FakeTransport) -> Router {
    vitrine::app(AppState::with_transport(config(), Arc::new(transport)))
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, form: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(form).unwrap();

    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ana Souza"),
        ("email", "ana@example.com"),
        ("phone", "+55 11 91234-5678"),
        ("subject", "ecommerce"),
        ("message", "We want to move our catalog to an online store."),
    ]
}
