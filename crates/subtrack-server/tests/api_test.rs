//! Integration tests for subtrack-server.
//!
//! These tests verify the complete HTTP flow including:
//! - Request validation and error envelopes
//! - Renewal continuity on creation
//! - Status-by-date queries
//! - History listing

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use serde_json::Value;
use subtrack_core::{defaults, today, PlanCatalog};
use subtrack_server::{app, AppState, SubscriptionService};
use subtrack_store::MemoryStore;

/// Start the app on an ephemeral port with a seeded in-memory store.
/// Returns the base URL.
async fn spawn_server() -> String {
    let store = Arc::new(MemoryStore::with_users(["alice", "bob"]));
    let catalog = PlanCatalog::new(defaults::default_plans(), defaults::FREE_PLAN_ID);
    let service = SubscriptionService::new(store.clone(), store, catalog);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(AppState::new(service)))
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

async fn create(
    client: &reqwest::Client,
    base: &str,
    body: Value,
) -> (reqwest::StatusCode, Value) {
    let resp = client
        .post(format!("{base}/subscription"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

async fn get(client: &reqwest::Client, url: String) -> (reqwest::StatusCode, Value) {
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn health_endpoint_reports_up() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = get(&client, format!("{base}/health")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["status"], "UP");
}

#[tokio::test]
async fn creates_subscription_and_lists_it() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let start = today().checked_add_days(Days::new(5)).unwrap();

    let (status, body) = create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "LITE_1M",
            "user_name": "alice",
            "start_date": iso(start),
        }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::CREATED);
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["amount"], -100);

    let (status, body) = get(&client, format!("{base}/subscription/alice")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["status"], "SUCCESS");

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["plan_id"], "LITE_1M");
    assert_eq!(data[0]["start_date"], iso(start));
    assert_eq!(
        data[0]["valid_till"],
        iso(start.checked_add_days(Days::new(30)).unwrap())
    );
    // Internal identifiers stay internal.
    assert!(data[0].get("user_name").is_none());
    assert!(data[0].get("id").is_none());
}

#[tokio::test]
async fn renewal_defers_overlapping_request() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let start = today();

    let (status, _) = create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "PRO_1M",
            "user_name": "alice",
            "start_date": iso(start),
        }),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::CREATED);

    // Requested inside the running period: stored period starts the day
    // after the running one ends.
    let overlap = start.checked_add_days(Days::new(5)).unwrap();
    let (status, _) = create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "LITE_1M",
            "user_name": "alice",
            "start_date": iso(overlap),
        }),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::CREATED);

    let (_, body) = get(&client, format!("{base}/subscription/alice")).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    let first_till = start.checked_add_days(Days::new(30)).unwrap();
    assert_eq!(data[0]["plan_id"], "PRO_1M");
    assert_eq!(data[0]["valid_till"], iso(first_till));
    assert_eq!(data[1]["plan_id"], "LITE_1M");
    assert_eq!(
        data[1]["start_date"],
        iso(first_till.checked_add_days(Days::new(1)).unwrap())
    );
}

#[tokio::test]
async fn free_plan_history_never_defers_paid_start() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let start = today();

    let (status, body) = create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "FREE",
            "user_name": "bob",
            "start_date": iso(start),
        }),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::CREATED);
    assert_eq!(body["amount"], 0);

    let paid_start = start.checked_add_days(Days::new(3)).unwrap();
    let (status, _) = create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "PRO_1M",
            "user_name": "bob",
            "start_date": iso(paid_start),
        }),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::CREATED);

    let (_, body) = get(&client, format!("{base}/subscription/bob")).await;
    let paid = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["plan_id"] == "PRO_1M")
        .unwrap()
        .clone();
    assert_eq!(paid["start_date"], iso(paid_start));
}

#[tokio::test]
async fn status_by_date_reports_active_plan() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let start = today();

    create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "PRO_6M",
            "user_name": "alice",
            "start_date": iso(start),
        }),
    )
    .await;

    let query = start.checked_add_days(Days::new(10)).unwrap();
    let (status, body) = get(
        &client,
        format!("{base}/subscription/alice/{}", iso(query)),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["data"]["plan_id"], "PRO_6M");
    assert_eq!(body["data"]["days_left"], 170);
}

#[tokio::test]
async fn status_without_covering_plan_is_not_found() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    // No subscriptions at all.
    let (status, body) = get(
        &client,
        format!("{base}/subscription/alice/{}", iso(today())),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "FAILURE");

    // Only a free record covering the date: still not found.
    create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "FREE",
            "user_name": "alice",
            "start_date": iso(today()),
        }),
    )
    .await;
    let (status, _) = get(
        &client,
        format!("{base}/subscription/alice/{}", iso(today())),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_validation_failures() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let start = iso(today());

    // Missing fields, one at a time.
    for body in [
        serde_json::json!({ "plan_id": "LITE_1M", "start_date": start }),
        serde_json::json!({ "user_name": "alice", "start_date": start }),
        serde_json::json!({ "plan_id": "LITE_1M", "user_name": "alice" }),
    ] {
        let (status, resp) = create(&client, &base, body).await;
        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(resp["status"], "FAILURE");
        assert!(resp["msg"].as_str().unwrap().starts_with("enter a"));
    }

    // Unknown plan code: message lists the valid ones.
    let (status, resp) = create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "MEGA_9Y",
            "user_name": "alice",
            "start_date": start,
        }),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    assert!(resp["msg"].as_str().unwrap().contains("FREE"));

    // Malformed and past dates.
    for bad_date in ["2024/01/01", "yesterday"] {
        let (status, _) = create(
            &client,
            &base,
            serde_json::json!({
                "plan_id": "LITE_1M",
                "user_name": "alice",
                "start_date": bad_date,
            }),
        )
        .await;
        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    }
    let yesterday = today().pred_opt().unwrap();
    let (status, _) = create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "LITE_1M",
            "user_name": "alice",
            "start_date": iso(yesterday),
        }),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_user_is_not_found_everywhere() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = create(
        &client,
        &base,
        serde_json::json!({
            "plan_id": "LITE_1M",
            "user_name": "mallory",
            "start_date": iso(today()),
        }),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert!(body["msg"].as_str().unwrap().contains("mallory"));

    let (status, _) = get(
        &client,
        format!("{base}/subscription/mallory/{}", iso(today())),
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);

    let (status, _) = get(&client, format!("{base}/subscription/mallory")).await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_history_lists_successfully() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = get(&client, format!("{base}/subscription/alice")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
