//! Integration tests for the console API.

use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use reqwest::Client;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::Config;
use crate::{create_router, AppState};

fn test_config(psk: Option<String>) -> Config {
    Config {
        api_psk: psk,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        log_level: "warn".to_string(),
        log_json: false,
        mock_latency: Duration::ZERO,
        seed_fixtures: true,
    }
}

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_psk(Some("test-api-key".to_string())).await
    }

    async fn with_psk(psk: Option<String>) -> Self {
        let state = AppState::new(test_config(psk.clone()));
        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        let mut client_builder = Client::builder();
        if let Some(key) = psk {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert("x-api-key", key.parse().unwrap());
            client_builder = client_builder.default_headers(headers);
        }

        TestFixture {
            client: client_builder.build().unwrap(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn send_json(&self, method: reqwest::Method, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .request(method, self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }
}

fn ids(view: &Value) -> Vec<String> {
    view["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_auth_missing_psk() {
    let app = create_router(AppState::new(test_config(Some("secret-key".to_string()))));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/roles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_auth_invalid_psk() {
    let fixture = TestFixture::with_psk(Some("correct-key".to_string())).await;

    let resp = Client::new()
        .get(fixture.url("/api/roles"))
        .header("x-api-key", "wrong-key")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_auth_disabled_without_psk() {
    let fixture = TestFixture::with_psk(None).await;

    let (status, body) = fixture.get_json("/api/roles").await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_search_ethnic_groups() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/ethnic-groups?search=akan").await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["totalMatched"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "Akan");
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["totalPages"], 1);
    assert_eq!(body["data"]["pageSize"], 5);
}

#[tokio::test]
async fn test_roles_paginate_by_five() {
    let fixture = TestFixture::new().await;

    let mut sizes = Vec::new();
    for page in 1..=3 {
        let (_, body) = fixture.get_json(&format!("/api/roles?page={}", page)).await;
        assert_eq!(body["data"]["totalPages"], 3);
        sizes.push(body["data"]["items"].as_array().unwrap().len());
    }
    assert_eq!(sizes, vec![5, 5, 2]);

    // past the end serves the last page
    let (_, body) = fixture.get_json("/api/roles?page=7").await;
    assert_eq!(body["data"]["page"], 3);
}

#[tokio::test]
async fn test_list_field_filters() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/clans?ethnicGroup=Akan&status=all").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["totalMatched"], 4);

    let (_, body) = fixture.get_json("/api/clans?ethnicGroup=Akan&status=active").await;
    assert_eq!(body["data"]["totalMatched"], 3);

    let (status, body) = fixture.get_json("/api/clans?colour=red").await;
    assert_eq!(status, 422);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = fixture.get_json("/api/clans?page=first").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_ethnic_group_crud() {
    let fixture = TestFixture::new().await;

    // Create
    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/ethnic-groups",
            json!({ "name": "Gurunsi", "region": "Upper East" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["clansCount"], 0);
    assert_eq!(body["data"]["status"], "active");
    assert_eq!(body["notification"]["title"], "Ethnic group created");
    assert_eq!(body["notification"]["variant"], "default");
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let revision_after_create = body["revisionId"].as_i64().unwrap();

    // Get
    let (status, body) = fixture.get_json(&format!("/api/ethnic-groups/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "Gurunsi");

    // Update
    let (status, body) = fixture
        .send_json(
            reqwest::Method::PUT,
            &format!("/api/ethnic-groups/{}", id),
            json!({ "description": "Peoples of the upper east" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["description"], "Peoples of the upper east");
    assert_eq!(body["data"]["name"], "Gurunsi");
    assert!(body["revisionId"].as_i64().unwrap() > revision_after_create);

    // Appended at the end of the second page
    let (_, body) = fixture.get_json("/api/ethnic-groups?page=2").await;
    assert_eq!(ids(&body["data"]), vec![id.clone()]);

    // Delete
    let resp = fixture
        .client
        .delete(fixture.url(&format!("/api/ethnic-groups/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["notification"]["variant"], "destructive");

    let (status, body) = fixture.get_json(&format!("/api/ethnic-groups/{}", id)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_validation_error() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/admins",
            json!({ "name": "Jo", "email": "jo@kinship.org", "role": "Viewer" }),
        )
        .await;
    assert_eq!(status, 422);
    assert_eq!(body["success"], false);

    let (_, body) = fixture.get_json("/api/admins").await;
    assert_eq!(body["data"]["totalMatched"], 5);
    assert_eq!(body["revisionId"], 0);
}

#[tokio::test]
async fn test_delete_keeps_order() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .delete(fixture.url("/api/ethnic-groups/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let (_, body) = fixture.get_json("/api/ethnic-groups").await;
    assert_eq!(ids(&body["data"]), vec!["1", "2", "4", "5"]);

    // Deleting again reports the missing record
    let resp = fixture
        .client
        .delete(fixture.url("/api/ethnic-groups/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::PUT,
            "/api/communities/99",
            json!({ "name": "Nowhere" }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_toggle_status_with_reason() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/events/2/status",
            json!({ "reason": "Postponed by the council" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["status"], "inactive");
    assert_eq!(body["data"]["statusReason"], "Postponed by the council");
    assert_eq!(body["notification"]["variant"], "destructive");

    let (_, body) = fixture
        .send_json(reqwest::Method::POST, "/api/events/2/status", json!({}))
        .await;
    assert_eq!(body["data"]["status"], "active");
    assert_eq!(body["data"]["statusReason"], Value::Null);
    assert_eq!(body["notification"]["variant"], "default");
}

#[tokio::test]
async fn test_toggle_status_without_body() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/roles/1/status"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["status"], "inactive");
    assert_eq!(body["revisionId"], 1);
}

#[tokio::test]
async fn test_status_only_changes_through_toggle() {
    let fixture = TestFixture::new().await;

    fixture
        .send_json(
            reqwest::Method::POST,
            "/api/events/2/status",
            json!({ "reason": "Postponed" }),
        )
        .await;

    let (status, body) = fixture
        .send_json(
            reqwest::Method::PUT,
            "/api/events/2",
            json!({ "status": "active" }),
        )
        .await;
    assert_eq!(status, 422);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (_, body) = fixture.get_json("/api/events/2").await;
    assert_eq!(body["data"]["status"], "inactive");
    assert_eq!(body["data"]["statusReason"], "Postponed");
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let fixture = TestFixture::new().await;

    // Missing required name
    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/roles",
            json!({ "description": "x" }),
        )
        .await;
    assert_eq!(status, 422);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let resp = fixture
        .client
        .put(fixture.url("/api/roles/1"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["revisionId"], 0);
}

#[tokio::test]
async fn test_verification_review() {
    let fixture = TestFixture::new().await;

    // Blank reason is refused and nothing changes
    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/verifications/1/reject",
            json!({ "reason": "  " }),
        )
        .await;
    assert_eq!(status, 422);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (_, body) = fixture.get_json("/api/verifications/1").await;
    assert_eq!(body["data"]["status"], "pending");

    // Unknown id is reported before the missing reason
    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/verifications/404/reject",
            json!({ "reason": "" }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    // Reject with a reason
    let (status, body) = fixture
        .send_json(
            reqwest::Method::POST,
            "/api/verifications/1/reject",
            json!({ "reason": "Birth record missing" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["status"], "rejected");
    assert_eq!(body["data"]["rejectionReason"], "Birth record missing");

    // Rejected is terminal
    let resp = fixture
        .client
        .post(fixture.url("/api/verifications/1/approve"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    // Approve another
    let resp = fixture
        .client
        .post(fixture.url("/api/verifications/2/approve"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["status"], "approved");

    let (_, body) = fixture.get_json("/api/verifications?status=pending").await;
    assert_eq!(body["data"]["totalMatched"], 1);
}

#[tokio::test]
async fn test_overview() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/overview").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["pendingVerifications"], 3);
    let collections = body["data"]["collections"].as_array().unwrap();
    assert_eq!(collections.len(), 10);
    let admins = collections
        .iter()
        .find(|c| c["collection"] == "admins")
        .unwrap();
    assert_eq!(admins["total"], 5);
    assert_eq!(admins["active"], 4);
}
