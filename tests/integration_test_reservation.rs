mod common;

use axum::http::StatusCode;
use common::{weekday_after, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_reserve_end_to_end() {
    let app = TestApp::new().await;
    let day = weekday_after(app.today(), 2);

    app.put("/api/v1/admin/settings", json!({ "max_bookings_per_slot": 2 })).await;
    let (_, body) = app.post("/api/v1/admin/slots/generate", json!({
        "start_date": day.to_string(), "end_date": day.to_string()
    })).await;
    let slot_id = body["slots"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = app.post(&format!("/api/v1/slots/{}/reserve", slot_id), json!({
        "name": "  Jane Doe ",
        "email": "jane@example.com",
        "phone": "",
        "notes": "Third floor, no elevator"
    })).await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["current_bookings"], 1);
    assert_eq!(body["slot"]["current_bookings"], 1);
    assert_eq!(body["slot"]["max_bookings"], 2);

    let booking = &body["booking"];
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["customer_name"], "Jane Doe");
    assert_eq!(booking["slot_id"], slot_id.as_str());
    assert_eq!(booking["date"], day.to_string());
    assert_eq!(booking["start_time"], "09:00:00");
    assert!(booking["customer_phone"].is_null());
    let token = booking["reference_token"].as_str().unwrap().to_string();
    assert_eq!(token.len(), 48);
    let booking_id = booking["id"].as_str().unwrap().to_string();

    let (status, body) = app.get(&format!("/api/v1/bookings/lookup/{}", token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], booking_id.as_str());
    assert_eq!(body["notes"], "Third floor, no elevator");

    let (status, body) = app.get(&format!("/api/v1/admin/bookings/{}", booking_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer_email"], "jane@example.com");

    let (_, body) = app.get(&format!("/api/v1/slots?start={}&end={}", day, day)).await;
    let first = &body[0];
    assert_eq!(first["id"], slot_id.as_str());
    assert_eq!(first["remaining_capacity"], 1);
}

#[tokio::test]
async fn test_full_slot_is_rejected() {
    let app = TestApp::new().await;
    let day = weekday_after(app.today(), 2);
    let id = app.create_slot(day, "09:00", "10:00", 1).await;

    let (status, _) = app.reserve(&id, "First Customer").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.reserve(&id, "Second Customer").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("no longer available"));

    let (_, body) = app.get("/api/v1/admin/bookings").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = app.get(&format!("/api/v1/slots?start={}&end={}", day, day)).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_disabled_slot_is_rejected() {
    let app = TestApp::new().await;
    let day = weekday_after(app.today(), 2);
    let id = app.create_slot(day, "09:00", "10:00", 3).await;

    app.put(&format!("/api/v1/admin/slots/{}", id), json!({ "is_available": false })).await;

    let (status, _) = app.reserve(&id, "Late Customer").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = app.get(&format!("/api/v1/admin/slots?start={}&end={}", day, day)).await;
    assert_eq!(body[0]["current_bookings"], 0);
}

#[tokio::test]
async fn test_past_slot_is_rejected() {
    let app = TestApp::new().await;
    let yesterday = app.today().pred_opt().unwrap();
    let id = app.create_slot(yesterday, "09:00", "10:00", 1).await;

    let (status, _) = app.reserve(&id, "Time Traveller").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = app.get(&format!("/api/v1/slots?start={}&end={}", yesterday, app.today())).await;
    assert!(body.as_array().unwrap().iter().all(|s| s["id"] != id.as_str()));
}

#[tokio::test]
async fn test_slot_beyond_advance_window_is_rejected() {
    let app = TestApp::new().await;
    app.put("/api/v1/admin/settings", json!({ "advance_booking_days": 2 })).await;

    let far = weekday_after(app.today(), 10);
    let id = app.create_slot(far, "09:00", "10:00", 1).await;

    let (status, body) = app.reserve(&id, "Early Bird").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("2 days"));

    let (_, body) = app.get(&format!("/api/v1/slots?start={}&end={}", app.today(), far)).await;
    assert!(body.as_array().unwrap().is_empty());

    let (_, body) = app.get(&format!("/api/v1/admin/slots?start={}&end={}", far, far)).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_maintenance_mode_blocks_reservations() {
    let app = TestApp::new().await;
    let day = weekday_after(app.today(), 2);
    let id = app.create_slot(day, "09:00", "10:00", 1).await;

    app.put("/api/v1/admin/settings", json!({ "maintenance_mode": true })).await;

    let (status, _) = app.reserve(&id, "Blocked Customer").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (_, body) = app.get(&format!("/api/v1/admin/slots?start={}&end={}", day, day)).await;
    assert_eq!(body[0]["current_bookings"], 0);

    app.put("/api/v1/admin/settings", json!({ "maintenance_mode": false })).await;
    let (status, _) = app.reserve(&id, "Patient Customer").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_details_and_unknown_slot() {
    let app = TestApp::new().await;
    let day = weekday_after(app.today(), 2);
    let id = app.create_slot(day, "09:00", "10:00", 1).await;

    let (status, _) = app.post(&format!("/api/v1/slots/{}/reserve", id), json!({
        "name": "   ", "email": "someone@example.com"
    })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post(&format!("/api/v1/slots/{}/reserve", id), json!({
        "name": "No Email", "email": "not-an-email"
    })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.reserve("no-such-slot", "Lost Customer").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get(&format!("/api/v1/admin/slots?start={}&end={}", day, day)).await;
    assert_eq!(body[0]["current_bookings"], 0);

    let (status, _) = app.get("/api/v1/bookings/lookup/unknown-token").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_customer_listing_requires_valid_range() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/v1/slots?start=2030-13-01&end=2030-12-31").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/v1/slots?start=2030-01-01").await;
    assert!(status.is_client_error());
}
