mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: &TestApp, uri: &str, body: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())).unwrap()
    ).await.unwrap()
}

async fn create_zone(app: &TestApp, walk_in: bool) -> String {
    let res = post_json(app, "/api/v1/zones", json!({
        "name": if walk_in { "Sauna" } else { "Pool" },
        "hourly_rate": 45.0,
        "min_duration": 1.0,
        "max_duration": 6.0,
        "available_start": "07:00",
        "available_end": "21:00",
        "is_walk_in": walk_in
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

fn next_weekday(target: Weekday, min_days_ahead: i64) -> NaiveDate {
    let mut date = Local::now().date_naive() + Duration::days(min_days_ahead);
    while date.weekday() != target {
        date += Duration::days(1);
    }
    date
}

fn slot_status<'a>(slots: &'a [Value], time: &str) -> &'a Value {
    slots.iter().find(|s| s["time"] == time).unwrap_or_else(|| panic!("no slot {time}"))
}

#[tokio::test]
async fn test_future_date_grid_is_open() {
    let app = TestApp::new().await;
    let zone_id = create_zone(&app, false).await;
    let date = Local::now().date_naive() + Duration::days(7);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/zones/{}/slots?date={}", zone_id, date))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    // future dates carry no lead-time banner
    assert!(body["minimum_bookable_time"].is_null());

    let slots = body["slots"].as_array().unwrap();
    // 07:00 .. 20:30 on a 30-minute grid
    assert_eq!(slots.len(), 28);
    assert_eq!(slots[0]["time"], "7:00 AM");
    assert_eq!(slots[0]["status"], "available");

    // the last cell's 1h default duration would run past close
    let last = slot_status(slots, "8:30 PM");
    assert_eq!(last["status"], "unavailable");
    assert_eq!(last["reason"], "past_close");

    let ok_count = slots.iter().filter(|s| s["status"] == "available").count();
    assert_eq!(ok_count, 27);
}

#[tokio::test]
async fn test_booked_cells_and_tail_conflicts() {
    let app = TestApp::new().await;
    let zone_id = create_zone(&app, false).await;
    let date = Local::now().date_naive() + Duration::days(7);

    let res = post_json(&app, &format!("/api/v1/zones/{}/book", zone_id), json!({
        "date": date.to_string(),
        "time": "15:00",
        "duration_hours": 2.0,
        "name": "Dana",
        "email": "dana@example.com"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/zones/{}/slots?date={}", zone_id, date))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();

    // cells whose start minute falls inside [15:00, 17:00)
    for time in ["3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM"] {
        let cell = slot_status(slots, time);
        assert_eq!(cell["status"], "booked", "{time}");
        assert_eq!(cell["booking"]["customer_name"], "Dana");
    }

    // 2:30 PM starts free but a 1h booking from there runs into 15:00
    let tail = slot_status(slots, "2:30 PM");
    assert_eq!(tail["status"], "unavailable");
    assert_eq!(tail["reason"], "conflict");

    // 5:00 PM is adjacent, half-open intervals do not collide
    assert_eq!(slot_status(slots, "5:00 PM")["status"], "available");
    assert_eq!(slot_status(slots, "2:00 PM")["status"], "available");
}

#[tokio::test]
async fn test_global_friday_block_surfaces_reason() {
    let app = TestApp::new().await;
    let zone_id = create_zone(&app, false).await;

    let res = post_json(&app, "/api/v1/blocked-times", json!({
        "day_of_week": 5,
        "start_time": "12:00",
        "end_time": "15:00",
        "reason": "Staff Training"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let friday = next_weekday(Weekday::Fri, 2);
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/zones/{}/slots?date={}", zone_id, friday))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();

    let blocked = slot_status(slots, "1:00 PM");
    assert_eq!(blocked["status"], "blocked");
    assert_eq!(blocked["reason"], "Staff Training");

    // 11:30 AM at 1h overlaps the block's first half hour
    assert_eq!(slot_status(slots, "11:30 AM")["status"], "blocked");
    // 3:00 PM merely touches the block's end
    assert_eq!(slot_status(slots, "3:00 PM")["status"], "available");

    // the day after is unaffected
    let saturday = friday + Duration::days(1);
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/zones/{}/slots?date={}", zone_id, saturday))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(slot_status(body["slots"].as_array().unwrap(), "1:00 PM")["status"], "available");
}

#[tokio::test]
async fn test_block_can_be_reset_to_global() {
    let app = TestApp::new().await;
    let pool_id = create_zone(&app, false).await;
    // a second reservable zone, distinct from the blocked one
    let res = post_json(&app, "/api/v1/zones", json!({
        "name": "Gym",
        "hourly_rate": 20.0,
        "min_duration": 1.0,
        "max_duration": 4.0,
        "available_start": "07:00",
        "available_end": "21:00"
    })).await;
    let gym_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = post_json(&app, "/api/v1/blocked-times", json!({
        "zone_id": pool_id,
        "day_of_week": 5,
        "start_time": "12:00",
        "end_time": "15:00",
        "reason": "Swim Meet"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let block_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    // zone-specific block leaves the other zone open
    let friday = next_weekday(Weekday::Fri, 2);
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/zones/{}/slots?date={}", gym_id, friday))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(slot_status(body["slots"].as_array().unwrap(), "1:00 PM")["status"], "available");

    // an explicit null resets the block to global
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT")
            .uri(format!("/api/v1/blocked-times/{}", block_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"zone_id": null}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(parse_body(res).await["zone_id"].is_null());

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/zones/{}/slots?date={}", gym_id, friday))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(slot_status(body["slots"].as_array().unwrap(), "1:00 PM")["status"], "blocked");

    // omitting the field still leaves the zone untouched
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT")
            .uri(format!("/api/v1/blocked-times/{}", block_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"reason": "Deep Clean"}).to_string())).unwrap()
    ).await.unwrap();
    let updated = parse_body(res).await;
    assert!(updated["zone_id"].is_null());
    assert_eq!(updated["reason"], "Deep Clean");
}

#[tokio::test]
async fn test_walk_in_zone_is_exempt_from_everything() {
    let app = TestApp::new().await;
    let zone_id = create_zone(&app, true).await;

    post_json(&app, "/api/v1/blocked-times", json!({
        "day_of_week": 5,
        "start_time": "07:00",
        "end_time": "21:00",
        "reason": "Closed"
    })).await;

    let friday = next_weekday(Weekday::Fri, 2);
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/zones/{}/slots?date={}", zone_id, friday))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();
    assert!(slots.iter().all(|s| s["status"] == "walk_in"));

    // and the aggregate predicate agrees
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/zones/{}/availability?date={}&time=13:00&duration=1.0", zone_id, friday))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["available"], true);
}

#[tokio::test]
async fn test_past_date_reports_past() {
    let app = TestApp::new().await;
    let zone_id = create_zone(&app, false).await;
    let yesterday = Local::now().date_naive() - Duration::days(1);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/zones/{}/slots?date={}", zone_id, yesterday))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();
    assert!(slots.iter().all(|s| s["status"] == "past_date"));
}
