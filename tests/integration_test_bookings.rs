mod common;

use axum::http::StatusCode;
use common::{weekday_after, TestApp};
use serde_json::{json, Value};

async fn set_status(app: &TestApp, id: &str, status: &str) -> (StatusCode, Value) {
    app.put(&format!("/api/v1/admin/bookings/{}/status", id), json!({ "status": status })).await
}

#[tokio::test]
async fn test_status_lifecycle() {
    let app = TestApp::new().await;
    let day = weekday_after(app.today(), 2);
    let slot_id = app.create_slot(day, "09:00", "10:00", 1).await;

    let (_, body) = app.reserve(&slot_id, "Dorothy Vaughan").await;
    let id = body["booking"]["id"].as_str().unwrap().to_string();

    let (status, _) = set_status(&app, &id, "completed").await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "pending cannot skip to completed");

    let (status, body) = set_status(&app, &id, "confirmed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "confirmed");

    let (status, _) = set_status(&app, &id, "confirmed").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = set_status(&app, &id, "pending").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = set_status(&app, &id, "completed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");

    let (status, _) = set_status(&app, &id, "cancelled").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = set_status(&app, &id, "confirmed").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = set_status(&app, &id, "archived").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = set_status(&app, "missing", "confirmed").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancellation_keeps_capacity_claimed() {
    let app = TestApp::new().await;
    let day = weekday_after(app.today(), 2);
    let slot_id = app.create_slot(day, "09:00", "10:00", 1).await;

    let (_, body) = app.reserve(&slot_id, "Cancelling Customer").await;
    let id = body["booking"]["id"].as_str().unwrap().to_string();

    let (status, _) = set_status(&app, &id, "cancelled").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/api/v1/admin/slots?start={}&end={}", day, day)).await;
    assert_eq!(body[0]["current_bookings"], 1);

    let (status, _) = app.reserve(&slot_id, "Next Customer").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_bookings_filters_by_status() {
    let app = TestApp::new().await;
    let day = weekday_after(app.today(), 3);
    let early = app.create_slot(day, "09:00", "10:00", 2).await;
    let late = app.create_slot(day, "14:00", "15:00", 2).await;

    let (_, body) = app.reserve(&late, "Late Customer").await;
    let late_id = body["booking"]["id"].as_str().unwrap().to_string();
    app.reserve(&early, "Early Customer").await;
    app.reserve(&early, "Another Early").await;

    set_status(&app, &late_id, "confirmed").await;

    let (status, body) = app.get("/api/v1/admin/bookings").await;
    assert_eq!(status, StatusCode::OK);
    let all = body.as_array().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[2]["id"], late_id.as_str(), "ordered by slot time");

    let (_, body) = app.get("/api/v1/admin/bookings?status=pending").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = app.get("/api/v1/admin/bookings?status=CONFIRMED").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = app.get("/api/v1/admin/bookings?status=lost").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/v1/admin/bookings/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/admin/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_bookings"], 0);
    assert_eq!(body["upcoming_slots"], 0);

    let day = weekday_after(app.today(), 2);
    let a = app.create_slot(day, "09:00", "10:00", 3).await;
    app.create_slot(day, "10:00", "11:00", 2).await;
    let past = app.create_slot(app.today().pred_opt().unwrap(), "09:00", "10:00", 4).await;
    assert!(!past.is_empty());

    let (_, body) = app.reserve(&a, "Stat One").await;
    let first = body["booking"]["id"].as_str().unwrap().to_string();
    app.reserve(&a, "Stat Two").await;
    set_status(&app, &first, "cancelled").await;

    let (_, body) = app.get("/api/v1/admin/stats").await;
    assert_eq!(body["total_bookings"], 2);
    assert_eq!(body["pending_bookings"], 1);
    assert_eq!(body["cancelled_bookings"], 1);
    assert_eq!(body["confirmed_bookings"], 0);
    assert_eq!(body["upcoming_slots"], 2);
    assert_eq!(body["upcoming_capacity"], 5);
    assert_eq!(body["upcoming_booked"], 2);
}
