//! HTTP-level integration tests for ticket endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{act_as, body_json, get, post_json, post_raw, put_json};
use serde_json::json;

fn leak_ticket() -> serde_json::Value {
    json!({
        "installationId": "inst-1",
        "type": "repair",
        "priority": "high",
        "title": "Leak",
        "description": "Water ingress at the junction box"
    })
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_ticket_returns_201_with_bare_ticket() {
    let app = common::seeded_app();
    let response = post_json(app, "/api/tickets", leak_ticket()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "open");
    assert!(json["assignedTechnicianId"].is_null());
    assert!(json["id"].as_str().is_some_and(|id| id.starts_with("ticket-")));
    assert_eq!(json["createdAt"], json["updatedAt"]);
    assert_eq!(json["internalNotes"], json!([]));
    assert_eq!(json["partsUsed"], json!([]));
}

#[tokio::test]
async fn create_ignores_client_status_and_assignee() {
    let app = common::seeded_app();
    let mut body = leak_ticket();
    body["status"] = json!("closed");
    body["assignedTechnicianId"] = json!("tech-1");

    let response = post_json(app, "/api/tickets", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "open");
    assert!(json["assignedTechnicianId"].is_null());
}

#[tokio::test]
async fn versioned_create_wraps_in_data() {
    let app = common::seeded_app();
    let response = post_json(app.clone(), "/api/v1/tickets", leak_ticket()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["data"]["id"].as_str().unwrap().to_string();

    let response = get(app, &format!("/api/v1/tickets/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["ticket"]["title"], "Leak");
    assert_eq!(json["data"]["installation"]["id"], "inst-1");
    assert!(json["data"]["technician"].is_null());
}

#[tokio::test]
async fn create_for_unknown_installation_returns_400() {
    let app = common::seeded_app();
    let mut body = leak_ticket();
    body["installationId"] = json!("inst-404");

    let response = post_json(app, "/api/tickets", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("inst-404"));
}

#[tokio::test]
async fn create_with_missing_field_returns_400() {
    let app = common::seeded_app();
    let response = post_json(app, "/api/tickets", json!({ "installationId": "inst-1" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_with_malformed_json_returns_400() {
    let app = common::seeded_app();
    let response = post_raw(app, "/api/tickets", "{ not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_filters_compose_and_sort_newest_first() {
    let app = common::seeded_app();

    let response = get(app.clone(), "/api/v1/tickets?status=open").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ids: Vec<String> = body_json(response).await["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["ticket-6", "ticket-5", "ticket-2"]);

    let response = get(app, "/api/v1/tickets?status=open&installationId=inst-2").await;
    let json = body_json(response).await;
    let ids: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["ticket-6", "ticket-2"]);
}

#[tokio::test]
async fn invalid_filter_value_returns_400() {
    let app = common::seeded_app();
    let response = get(app, "/api/v1/tickets?status=bogus").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn technician_role_sees_only_own_tickets() {
    let app = common::seeded_app();
    act_as(&app, "technician").await;

    let response = get(app.clone(), "/api/v1/tickets").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/api/v1/tickets?actingTechnicianId=tech-1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tickets = json["data"].as_array().unwrap();
    assert_eq!(tickets.len(), 2);
    assert!(tickets.iter().all(|t| t["assignedTechnicianId"] == "tech-1"));
}

#[tokio::test]
async fn get_missing_ticket_returns_404() {
    let app = common::seeded_app();
    let response = get(app, "/api/v1/tickets/ticket-404").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Ticket with id ticket-404 not found");
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_merges_fields_and_bumps_updated_at() {
    let app = common::seeded_app();
    let response = put_json(
        app,
        "/api/v1/tickets/ticket-5",
        json!({ "priority": "urgent", "assignedTechnicianId": "tech-2" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let ticket = &body_json(response).await["data"];
    assert_eq!(ticket["priority"], "urgent");
    assert_eq!(ticket["assignedTechnicianId"], "tech-2");
    assert_eq!(ticket["status"], "open");
    assert_ne!(ticket["updatedAt"], ticket["createdAt"]);
}

#[tokio::test]
async fn status_change_to_resolved_stamps_resolved_at() {
    let app = common::seeded_app();
    let response = put_json(
        app,
        "/api/v1/tickets/ticket-2/status",
        json!({ "status": "resolved" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let ticket = &body_json(response).await["data"];
    assert_eq!(ticket["status"], "resolved");
    assert!(ticket["resolvedAt"].is_string());
}

#[tokio::test]
async fn notes_and_parts_append() {
    let app = common::seeded_app();

    let response = post_json(
        app.clone(),
        "/api/v1/tickets/ticket-2/notes",
        json!({ "authorId": "tech-2", "content": "Replaced fuse" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let ticket = &body_json(response).await["data"];
    assert_eq!(ticket["internalNotes"].as_array().unwrap().len(), 1);
    assert_eq!(ticket["internalNotes"][0]["content"], "Replaced fuse");

    let response = post_json(
        app,
        "/api/v1/tickets/ticket-2/parts",
        json!({ "name": "DC fuse 15A", "qty": 2, "cost": 4.5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let ticket = &body_json(response).await["data"];
    assert_eq!(ticket["partsUsed"][0]["qty"], 2);
    assert_eq!(ticket["internalNotes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn mutations_on_missing_ticket_return_404() {
    let app = common::seeded_app();

    let response = put_json(app.clone(), "/api/v1/tickets/nope", json!({ "title": "x" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(
        app.clone(),
        "/api/v1/tickets/nope/notes",
        json!({ "authorId": "tech-1", "content": "hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(
        app,
        "/api/v1/tickets/nope/parts",
        json!({ "name": "Fuse", "qty": 1, "cost": 1.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn zero_quantity_part_is_rejected() {
    let app = common::seeded_app();
    let response = post_json(
        app,
        "/api/v1/tickets/ticket-2/parts",
        json!({ "name": "Fuse", "qty": 0, "cost": 1.0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
