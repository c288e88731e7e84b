//! HTTP-level integration tests for the dashboard, activity feed and
//! technician endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use serde_json::json;
use solar_db::Store;

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_reports_seed_kpis() {
    let app = common::seeded_app();
    let response = get(app, "/api/v1/dashboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = &body_json(response).await["data"];
    assert_eq!(data["stats"]["openTickets"], 4);
    assert_eq!(data["stats"]["scheduledVisits"], 4);
    assert_eq!(data["stats"]["activeInstallations"], 2);
    // (2.5 + 1.0) / 2 rounded to one decimal.
    assert_eq!(data["stats"]["avgResolutionTime"], 1.8);
    assert_eq!(data["recentActivity"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn empty_store_dashboard_is_all_zero() {
    let app = common::build_test_app(Store::new());
    let data = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();

    assert_eq!(data["stats"]["openTickets"], 0);
    assert_eq!(data["stats"]["avgResolutionTime"], 0.0);
    assert_eq!(data["recentActivity"], json!([]));
}

#[tokio::test]
async fn closing_a_ticket_lowers_open_count() {
    let app = common::seeded_app();
    put_json(
        app.clone(),
        "/api/v1/tickets/ticket-2/status",
        json!({ "status": "closed" }),
    )
    .await;

    let data = body_json(get(app, "/api/v1/dashboard").await).await["data"].clone();
    assert_eq!(data["stats"]["openTickets"], 3);
}

// ---------------------------------------------------------------------------
// Activity feed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn recent_activity_respects_limit_and_order() {
    let app = common::seeded_app();

    let response = get(app.clone(), "/api/v1/activities?limit=3").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    let stamps: Vec<&str> = entries
        .iter()
        .map(|a| a["createdAt"].as_str().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));

    let json = body_json(get(app.clone(), "/api/v1/activities").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 13);

    let response = get(app, "/api/v1/activities?limit=500").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn new_ticket_appears_at_top_of_feed() {
    let app = common::seeded_app();
    let created = body_json(
        post_json(
            app.clone(),
            "/api/tickets",
            json!({
                "installationId": "inst-3",
                "type": "inspection",
                "priority": "low",
                "title": "Annual check",
                "description": ""
            }),
        )
        .await,
    )
    .await;

    let json = body_json(get(app.clone(), "/api/v1/activities?limit=1").await).await;
    assert_eq!(json["data"][0]["type"], "ticket_created");
    assert_eq!(json["data"][0]["entityId"], created["id"]);
    assert_eq!(json["data"][0]["userName"], "System");

    let path = format!("/api/v1/activities/ticket/{}", created["id"].as_str().unwrap());
    let json = body_json(get(app, &path).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_entity_type_returns_400() {
    let app = common::seeded_app();
    let response = get(app, "/api/v1/activities/widget/w-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Technicians
// ---------------------------------------------------------------------------

#[tokio::test]
async fn technicians_list_and_active_filter() {
    let app = common::seeded_app();

    let all = body_json(get(app.clone(), "/api/v1/technicians").await).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 3);

    let active = body_json(get(app, "/api/v1/technicians?active=true").await).await;
    assert_eq!(active["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn technician_summary_lists_open_work() {
    let app = common::seeded_app();
    let response = get(app.clone(), "/api/v1/technicians/tech-1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = &body_json(response).await["data"];
    assert_eq!(data["technician"]["name"], "Carlos Mendoza");
    assert_eq!(data["installations"][0]["id"], "inst-1");
    // ticket-3 is resolved, so only ticket-1 is still open.
    let open: Vec<&str> = data["openTickets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(open, ["ticket-1"]);

    let response = get(app, "/api/v1/technicians/tech-404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
