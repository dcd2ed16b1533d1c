use std::time::Duration;

use axum::http::StatusCode;
use strum::VariantArray;
use vitrine::AppState;
use vitrine_contact::Subject;

mod helpers;

use helpers::{FakeTransport, body_string, get, post_form, valid_form};

#[tokio::test]
async fn test_contact_page_lists_every_subject() {
    let app = helpers::app(FakeTransport::default());

    let response = get(&app, "/contact").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    for subject in Subject::VARIANTS {
        assert!(
            body.contains(&format!(r#"<option value="{subject}">"#)),
            "missing subject {subject}"
        );
    }
    assert!(body.contains("Online store"));
    assert!(body.contains(r#"maxlength="500""#));
    assert!(body.contains(r#"id="contact-status""#));
}

#[tokio::test]
async fn test_contact_page_shows_channels_and_faq() {
    let app = helpers::app(FakeTransport::default());

    let body = body_string(get(&app, "/contact").await).await;

    assert!(body.contains("mailto:contato@vitrine.dev"));
    assert!(body.contains("https://wa.me/5511998765432?text="));
    assert!(body.contains("tel:+551140028922"));
    assert!(body.contains("Frequently asked questions"));
    assert!(body.contains("How long does a project take?"));
    assert!(body.contains("<iframe"));
}

#[tokio::test]
async fn test_contact_page_ships_offline_banner() {
    let app = helpers::app(FakeTransport::default());

    let body = body_string(get(&app, "/contact").await).await;
    let (_, offline) = body.split_once(r#"<template id="contact-offline">"#).unwrap();
    let (offline, _) = offline.split_once("</template>").unwrap();

    assert!(offline.contains(r#"class="status status-error""#));
    assert!(offline.contains(r#"data-reset-after="5000""#));
    assert!(offline.contains("Connection lost."));
    assert!(offline.contains("mailto:contato@vitrine.dev"));
    assert!(offline.contains("https://wa.me/5511998765432"));
}

#[tokio::test]
async fn test_submit_valid_form_succeeds() {
    let transport = FakeTransport::default();
    let app = helpers::app(transport.clone());

    let response = post_form(&app, "/contact", &valid_form()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#"data-status="success""#));
    assert!(body.contains(r#"data-reset-after="5000""#));
    assert!(body.contains("Message sent!"));

    let delivered = transport.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Ana Souza");
    assert_eq!(delivered[0].subject, Some(Subject::Ecommerce));
}

#[tokio::test]
async fn test_submit_without_phone_succeeds() {
    let transport = FakeTransport::default();
    let app = helpers::app(transport.clone());

    let form = valid_form()
        .into_iter()
        .filter(|(key, _)| *key != "phone")
        .collect::<Vec<_>>();

    let response = post_form(&app, "/contact", &form).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(transport.delivered()[0].phone, "");
}

#[tokio::test]
async fn test_submit_missing_fields_is_rejected() {
    let transport = FakeTransport::default();
    let app = helpers::app(transport.clone());

    let response = post_form(&app, "/contact", &[("phone", "123")]).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_string(response).await;
    assert!(body.contains("Please review the highlighted fields."));
    assert!(body.contains("E-mail, Message, Name, Subject"));
    assert!(transport.delivered().is_empty());
}

#[tokio::test]
async fn test_submit_invalid_email_is_rejected() {
    let transport = FakeTransport::default();
    let app = helpers::app(transport.clone());

    let form = valid_form()
        .into_iter()
        .map(|(key, value)| match key {
            "email" => (key, "ana.example.com"),
            _ => (key, value),
        })
        .collect::<Vec<_>>();

    let response = post_form(&app, "/contact", &form).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(transport.delivered().is_empty());
}

#[tokio::test]
async fn test_submit_overlong_email_is_rejected() {
    let transport = FakeTransport::default();
    let app = helpers::app(transport.clone());

    let email = format!("{}@example.com", "b".repeat(243));
    assert_eq!(email.len(), 255);

    let form = valid_form()
        .into_iter()
        .map(|(key, value)| match key {
            "email" => (key, email.as_str()),
            _ => (key, value),
        })
        .collect::<Vec<_>>();

    let response = post_form(&app, "/contact", &form).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_string(response).await;
    assert!(body.contains("E-mail"));
    assert!(transport.delivered().is_empty());
}

#[tokio::test]
async fn test_submit_unknown_subject_is_rejected() {
    let transport = FakeTransport::default();
    let app = helpers::app(transport.clone());

    let form = valid_form()
        .into_iter()
        .map(|(key, value)| match key {
            "subject" => (key, "crypto"),
            _ => (key, value),
        })
        .collect::<Vec<_>>();

    let response = post_form(&app, "/contact", &form).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_string(response).await;
    assert!(body.contains("Please pick a subject from the list."));
    assert!(transport.delivered().is_empty());
}

#[tokio::test]
async fn test_submit_long_message_is_truncated() {
    let transport = FakeTransport::default();
    let app = helpers::app(transport.clone());

    let message = "a".repeat(650);
    let form = valid_form()
        .into_iter()
        .map(|(key, value)| match key {
            "message" => (key, message.as_str()),
            _ => (key, value),
        })
        .collect::<Vec<_>>();

    let response = post_form(&app, "/contact", &form).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(transport.delivered()[0].message.len(), 500);
}

#[tokio::test]
async fn test_submit_transport_failure_offers_other_channels() {
    let app = helpers::app(FakeTransport::failing());

    let response = post_form(&app, "/contact", &valid_form()).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_string(response).await;
    assert!(body.contains(r#"data-status="error""#));
    assert!(body.contains("We could not send your message."));
    assert!(body.contains("mailto:contato@vitrine.dev"));
    assert!(body.contains("https://wa.me/5511998765432"));
}

#[tokio::test]
async fn test_submit_status_follows_language() {
    let app = helpers::app(FakeTransport::default());

    let response = post_form(&app, "/contact?lang=pt", &valid_form()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Mensagem enviada!"));
}

#[tokio::test(start_paused = true)]
async fn test_submit_through_simulated_transport() {
    let app = vitrine::app(AppState::new(helpers::config()));
    let start = tokio::time::Instant::now();

    let response = post_form(&app, "/contact", &valid_form()).await;

    assert!(start.elapsed() >= Duration::from_millis(1500));
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#"data-status="success""#));
    assert!(body.contains("Message sent!"));
}
