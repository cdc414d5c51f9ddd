mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use biolink_shortener::AppState;
use biolink_shortener::domain::entities::ClickEvent;
use biolink_shortener::routes::app_router;
use chrono::Utc;
use serde_json::{Value, json};

fn server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

fn event(link_id: &str, ip: Option<&str>, country: Option<&str>, device: Option<&str>) -> ClickEvent {
    ClickEvent {
        link_id: link_id.to_string(),
        clicker_ip: ip.map(str::to_string),
        country: country.map(str::to_string),
        device: device.map(str::to_string),
        clicked_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_stats_unknown_code_is_null() {
    let (state, _repo) = common::create_test_state(vec![]);
    let server = server(state);

    let response = server.get("/api/stats/ghost1").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "null");
}

#[tokio::test]
async fn test_stats_without_linked_analytics_is_null() {
    let (state, _repo) = common::create_test_state(vec![]);
    let server = server(state);

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();

    let code = created["short_code"].as_str().unwrap();

    let response = server.get(&format!("/api/stats/{code}")).await;

    response.assert_status_ok();
    assert_eq!(response.text(), "null");
}

#[tokio::test]
async fn test_stats_aggregates_click_events() {
    let events = vec![
        event("lnk_1", Some("1.1.1.1"), Some("US"), Some("mobile")),
        event("lnk_1", Some("1.1.1.1"), Some("US"), Some("desktop")),
        event("lnk_1", Some("2.2.2.2"), Some("DE"), Some("mobile")),
        // Metadata-free event; must not break aggregation.
        event("lnk_1", None, None, None),
        // Different link; must not leak in.
        event("lnk_2", Some("3.3.3.3"), Some("FR"), Some("tablet")),
    ];

    let (state, _repo) = common::create_test_state(events);
    let server = server(state);

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "link_id": "lnk_1" }))
        .await
        .json::<Value>();

    let code = created["short_code"].as_str().unwrap().to_string();

    // One real resolution so the counter is non-zero.
    server
        .get(&format!("/s/{code}"))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    let response = server.get(&format!("/api/stats/{code}")).await;
    response.assert_status_ok();

    let stats = response.json::<Value>();

    assert_eq!(stats["clicks"], 1);
    assert_eq!(stats["unique_clicks"], 2);

    let countries = stats["top_countries"].as_array().unwrap();
    assert_eq!(countries[0]["country"], "US");
    assert_eq!(countries[0]["clicks"], 2);
    assert_eq!(countries[1]["country"], "DE");

    let devices = stats["top_devices"].as_array().unwrap();
    assert_eq!(devices[0]["device"], "mobile");
    assert_eq!(devices[0]["clicks"], 2);

    let histogram = stats["clicks_by_date"].as_array().unwrap();
    assert_eq!(histogram.len(), 30);
    // All sampled events landed today, the final bucket.
    assert_eq!(histogram[29]["clicks"], 4);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (state, _repo) = common::create_test_state(vec![]);
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}
