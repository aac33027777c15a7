// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for integration tests: a mock upstream and canned
//! payloads shaped like real 42 intranet API responses.

use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use intra_companion::{Config, ProfileService};

/// Build a service pointed at a mock upstream.
pub fn service_for(server: &MockServer) -> ProfileService {
    let config = Config::new("test_client_id", "test_secret").with_base_url(server.uri());
    ProfileService::new(&config)
}

/// Mount a successful token exchange responding to the client-credentials
/// grant. `expect` pins how many times the exchange may be hit.
pub async fn mount_token(server: &MockServer, expect: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc",
            "token_type": "bearer",
            "expires_in": 7200
        })))
        .expect(expect)
        .mount(server)
        .await;
}

/// One search-result user object.
pub fn user_json(id: u64, login: &str) -> Value {
    json!({
        "id": id,
        "login": login,
        "displayname": "Jane Doe",
        "correction_point": 5,
        "pool_month": "july",
        "pool_year": 2021,
        "wallet": 120
    })
}

/// A detail payload with one active cursus and one finished project,
/// matching the happy-path scenario.
pub fn detail_json() -> Value {
    json!({
        "image": {
            "link": "https://cdn.example/jdoe.jpg",
            "versions": { "small": "https://cdn.example/jdoe_small.jpg" }
        },
        "cursus_users": [
            {
                "level": "5.42",
                "grade": "Member",
                "cursus_id": 1,
                "cursus": { "name": "42cursus" },
                "skills": [ { "name": "Algorithms", "level": 3.1 } ]
            }
        ],
        "projects_users": [
            {
                "final_mark": 100,
                "status": "finished",
                "validated": true,
                "project": { "name": "libft" },
                "cursus_ids": [1]
            }
        ]
    })
}
