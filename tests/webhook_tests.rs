//! Webhook integration tests against a local mock server

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notificator::application::ports::{NotificationError, Notifier};
use notificator::infrastructure::{DiscordNotifier, SlackNotifier};

#[tokio::test]
async fn slack_posts_text_payload_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/hook"))
        .and(body_json(json!({ "text": "Hi" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/services/hook", server.uri());
    SlackNotifier::new("Hi", url).unwrap().notify().await.unwrap();
}

#[tokio::test]
async fn discord_posts_json_content_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/webhooks/1/token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "content": "Hi" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/api/webhooks/1/token", server.uri());
    DiscordNotifier::new("Hi", url).unwrap().notify().await.unwrap();
}

#[tokio::test]
async fn error_status_is_not_retried_or_raised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let slack = SlackNotifier::new("Hi", server.uri()).unwrap();
    assert!(slack.notify().await.is_ok());
}

#[tokio::test]
async fn setters_change_the_next_delivery() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/second"))
        .and(body_json(json!({ "content": "Bye" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut discord = DiscordNotifier::new("Hi", format!("{}/first", server.uri())).unwrap();
    discord.set_message("Bye").unwrap();
    discord.set_url(format!("{}/second", server.uri())).unwrap();
    discord.notify().await.unwrap();
}

#[tokio::test]
async fn unreachable_host_is_a_request_failure() {
    // Port 9 (discard) is not listening on loopback in test environments
    let slack = SlackNotifier::new("Hi", "http://127.0.0.1:9/hook").unwrap();
    let err = slack.notify().await.unwrap_err();
    assert!(matches!(err, NotificationError::RequestFailed(_)));
}

#[tokio::test]
async fn wrong_typed_url_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert!(matches!(
        SlackNotifier::new("Hi", 42),
        Err(NotificationError::TypeMismatch(_))
    ));
    assert!(DiscordNotifier::new(true, server.uri()).is_err());
}
