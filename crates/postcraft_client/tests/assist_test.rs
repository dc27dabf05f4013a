mod common;

use common::{Recorded, ScriptedTransport, network_error, ok, ok_json};
use postcraft_client::{AssistOutcome, AssistState, Composer, NotificationLevel};
use postcraft_core::{FormConfig, Platform};
use postcraft_error::HttpErrorKind;
use serde_json::json;
use std::sync::Arc;
use url::Url;

const ENDPOINT: &str = "https://ai.example.com/webhook/generate";

fn composer(transport: Arc<ScriptedTransport>) -> Composer<ScriptedTransport> {
    Composer::new(
        FormConfig::default(),
        transport,
        Some(Url::parse(ENDPOINT).unwrap()),
    )
    .unwrap()
}

async fn prepare(composer: &Composer<ScriptedTransport>, prompt: &str) {
    composer
        .with_form(|form| {
            form.set_title("Launch");
            form.set_caption("old caption");
            form.set_hashtags("#old");
            form.toggle_platform(Platform::Instagram);
            form.set_scheduled_at("2031-01-01T08:00:00Z");
            form.set_webhook_url("https://example.com/hook");
            form.open_assist();
            form.set_prompt(prompt);
        })
        .await;
}

#[tokio::test]
async fn generated_text_overwrites_caption_and_hashtags_only() {
    let transport = Arc::new(ScriptedTransport::new(vec![ok_json(
        200,
        json!({ "caption": "Fresh caption", "hashtags": "#fresh #new" }),
    )]));
    let composer = composer(transport.clone());
    prepare(&composer, "announce our launch").await;

    let outcome = composer.generate().await;

    assert!(outcome.is_generated());
    assert_eq!(
        *outcome.notification().unwrap().level(),
        NotificationLevel::Success
    );

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let Recorded::Json { url, body } = &requests[0] else {
        panic!("expected a JSON request");
    };
    assert_eq!(url.as_str(), ENDPOINT);
    assert_eq!(body, &json!({ "prompt": "announce our launch" }));

    composer
        .with_form(|form| {
            let draft = form.draft();
            assert_eq!(draft.caption(), "Fresh caption");
            assert_eq!(draft.hashtags(), "#fresh #new");
            assert_eq!(draft.title(), "Launch");
            assert_eq!(draft.webhook_url(), "https://example.com/hook");
            assert_eq!(draft.scheduled_at(), "2031-01-01T08:00:00Z");
            assert!(draft.platforms().contains(&Platform::Instagram));
            assert!(!form.assist().is_open());
            assert_eq!(form.assist().prompt(), "");
        })
        .await;
    assert_eq!(composer.assist_state(), AssistState::Idle);
}

#[tokio::test]
async fn content_key_is_used_when_caption_is_absent() {
    let transport = Arc::new(ScriptedTransport::new(vec![ok_json(
        200,
        json!({ "content": "From content", "hashtags": ["#a", "#b"] }),
    )]));
    let composer = composer(transport);
    prepare(&composer, "go").await;

    let AssistOutcome::Generated(content) = composer.generate().await else {
        panic!("expected generated content");
    };
    assert_eq!(content.caption(), "From content");
    assert_eq!(content.hashtags(), "#a #b");
}

#[tokio::test]
async fn caption_key_wins_over_content() {
    let transport = Arc::new(ScriptedTransport::new(vec![ok_json(
        200,
        json!({ "caption": "first", "content": "second" }),
    )]));
    let composer = composer(transport);
    prepare(&composer, "go").await;

    let AssistOutcome::Generated(content) = composer.generate().await else {
        panic!("expected generated content");
    };
    assert_eq!(content.caption(), "first");
    assert_eq!(content.hashtags(), "");
}

#[tokio::test]
async fn missing_fields_fall_back_to_empty_strings() {
    let transport = Arc::new(ScriptedTransport::new(vec![ok_json(200, json!({}))]));
    let composer = composer(transport);
    prepare(&composer, "go").await;

    assert!(composer.generate().await.is_generated());
    composer
        .with_form(|form| {
            assert_eq!(form.draft().caption(), "");
            assert_eq!(form.draft().hashtags(), "");
        })
        .await;
}

#[tokio::test]
async fn blank_prompt_is_rejected_without_a_request() {
    let transport = Arc::new(ScriptedTransport::new(vec![ok(200)]));
    let composer = composer(transport.clone());
    prepare(&composer, "   \n\t").await;

    let outcome = composer.generate().await;

    assert!(matches!(outcome, AssistOutcome::EmptyPrompt));
    assert_eq!(
        *outcome.notification().unwrap().level(),
        NotificationLevel::Warning
    );
    assert_eq!(transport.request_count(), 0);
    assert!(composer.with_form(|form| form.assist().is_open()).await);
}

#[tokio::test]
async fn failure_keeps_dialog_open_and_prompt_intact() {
    let transport = Arc::new(ScriptedTransport::new(vec![ok(502), network_error()]));
    let composer = composer(transport.clone());
    prepare(&composer, "try again later").await;

    for _ in 0..2 {
        let outcome = composer.generate().await;
        assert!(matches!(outcome, AssistOutcome::Failed(_)));
        assert_eq!(
            *outcome.notification().unwrap().level(),
            NotificationLevel::Failure
        );
        composer
            .with_form(|form| {
                assert!(form.assist().is_open());
                assert_eq!(form.assist().prompt(), "try again later");
                assert_eq!(form.draft().caption(), "old caption");
                assert_eq!(form.draft().hashtags(), "#old");
            })
            .await;
    }
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn non_json_body_is_a_failure() {
    let transport = Arc::new(ScriptedTransport::new(vec![Ok(
        postcraft_client::TransportResponse::new(200, "<html>oops</html>"),
    )]));
    let composer = composer(transport);
    prepare(&composer, "go").await;

    let AssistOutcome::Failed(error) = composer.generate().await else {
        panic!("expected failure");
    };
    assert!(matches!(error.kind, HttpErrorKind::Body(_)));
}

#[tokio::test]
async fn second_generate_while_in_flight_is_a_no_op() {
    let transport = Arc::new(ScriptedTransport::gated(vec![ok_json(
        200,
        json!({ "caption": "c", "hashtags": "h" }),
    )]));
    let composer = Arc::new(composer(transport.clone()));
    prepare(&composer, "go").await;

    let first = tokio::spawn({
        let composer = composer.clone();
        async move { composer.generate().await }
    });
    while composer.assist_state() != AssistState::Generating {
        tokio::task::yield_now().await;
    }

    assert!(matches!(composer.generate().await, AssistOutcome::Busy));

    transport.release();
    assert!(first.await.unwrap().is_generated());
    assert_eq!(transport.request_count(), 1);
    assert_eq!(composer.assist_state(), AssistState::Idle);
}

#[tokio::test]
async fn disabled_assist_is_unavailable() {
    let transport = Arc::new(ScriptedTransport::new(vec![]));
    let config = FormConfig::builder().ai_assist(false).build().unwrap();
    let composer = Composer::new(config, transport.clone(), None).unwrap();
    composer.with_form(|form| form.set_prompt("hello")).await;

    let outcome = composer.generate().await;

    assert!(matches!(outcome, AssistOutcome::Unavailable));
    assert!(!composer.has_assist());
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn enabled_assist_requires_an_endpoint() {
    let transport = Arc::new(ScriptedTransport::new(vec![]));
    let err = Composer::new(FormConfig::default(), transport, None).unwrap_err();
    assert!(err.message.contains("assist endpoint"));
}
