// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tests for token caching and single-flight acquisition.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use intra_companion::services::{IntraClient, TokenProvider};
use intra_companion::{Config, TokenError};

mod common;
use common::{detail_json, mount_token, service_for, user_json};

fn provider_for(server: &MockServer) -> TokenProvider {
    let config = Config::new("test_client_id", "test_secret").with_base_url(server.uri());
    TokenProvider::new(IntraClient::new(&config))
}

#[tokio::test]
async fn token_is_exchanged_once_across_sequential_fetches() {
    let server = MockServer::start().await;
    // `.expect(1)` fails the test on a second exchange.
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v2/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(42, "jdoe")])))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/users/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_json()))
        .expect(2)
        .mount(&server)
        .await;

    let service = service_for(&server);
    service.fetch("jdoe").await.unwrap();
    service.fetch("jdoe").await.unwrap();
}

#[tokio::test]
async fn concurrent_acquires_share_one_inflight_exchange() {
    let server = MockServer::start().await;

    // Delay the exchange so every task is in flight before it completes.
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "abc", "expires_in": 7200 }))
                .set_delay(std::time::Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let provider = provider.clone();
            tokio::spawn(async move { provider.acquire().await })
        })
        .collect();

    for task in tasks {
        let token = task.await.unwrap().unwrap();
        assert_eq!(token.bearer(), "abc");
    }
}

#[tokio::test]
async fn failed_exchange_is_not_cached() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let provider = provider_for(&server);

    // Both calls hit the endpoint: failure leaves the cache empty.
    assert!(matches!(
        provider.acquire().await,
        Err(TokenError::Http(401))
    ));
    assert!(matches!(
        provider.acquire().await,
        Err(TokenError::Http(401))
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind then drop a listener so the port is known to refuse connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config =
        Config::new("test_client_id", "test_secret").with_base_url(format!("http://{}", addr));
    let provider = TokenProvider::new(IntraClient::new(&config));

    assert!(matches!(
        provider.acquire().await,
        Err(TokenError::Transport(_))
    ));
}

#[tokio::test]
async fn acquired_token_reports_metadata() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    let before = chrono::Utc::now();
    let token = provider_for(&server).acquire().await.unwrap();

    assert_eq!(token.bearer(), "abc");
    assert_eq!(token.expires_in(), Some(7200));
    assert!(token.acquired_at() >= before);
}
