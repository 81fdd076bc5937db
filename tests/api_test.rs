use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{Datelike, Local};
use padel_checker::api::router;
use padel_checker::clubs::ClubRegistry;
use padel_checker::provider::{BookingProvider, NoopBookingProvider};
use padel_checker::services::{AvailabilityService, CheckScheduler};
use padel_checker::state::AppState;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn spawn_app() -> SocketAddr {
    let provider: Arc<dyn BookingProvider> = Arc::new(NoopBookingProvider);
    let clubs = Arc::new(ClubRegistry::builtin());
    let service = AvailabilityService::new(provider.clone(), clubs.clone());
    let scheduler = Arc::new(CheckScheduler::new(service, 3600));
    let state = AppState {
        provider,
        clubs,
        scheduler,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn health_reports_ok() {
    let addr = spawn_app().await;

    for path in ["/health", "/api/health"] {
        let body: Value = reqwest::get(format!("http://{addr}{path}"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "padel-checker");
        assert!(body["timestamp"].is_string());
    }
}

#[tokio::test]
async fn clubs_returns_the_static_registry_with_keys() {
    let addr = spawn_app().await;

    let body: Value = reqwest::get(format!("http://{addr}/api/clubs"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let clubs = body["clubs"].as_array().unwrap();
    assert_eq!(body["total"], clubs.len() as u64);
    assert_eq!(clubs.len(), 4);
    assert_eq!(clubs[0]["key"], "mouratoglou");
    for club in clubs {
        assert_eq!(club["key"], club["id"]);
        assert!(club["bookingUrl"].as_str().unwrap().starts_with("https://"));
        assert!(club["clubId"].is_string());
    }
}

#[tokio::test]
async fn rejects_an_unparseable_date() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/api/check-availability/not-a-date"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid date format. Use YYYY-MM-DD");
}

#[tokio::test]
async fn rejects_an_unknown_club_listing_valid_keys() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!(
        "http://{addr}/api/check-availability/2026-09-01?club=nowhere"
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid club."));
    assert!(message.contains("mouratoglou"));
    assert!(message.contains("padelriviera"));
}

#[tokio::test]
async fn single_date_check_defaults_to_the_first_club() {
    let addr = spawn_app().await;

    let body: Value = reqwest::get(format!("http://{addr}/api/check-availability/2026-09-01"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["available"], false);
    assert_eq!(body["slots"], json!([]));
}

#[tokio::test]
async fn eight_day_window_returns_one_entry_per_day() {
    let addr = spawn_app().await;

    let body: Value = reqwest::get(format!("http://{addr}/api/check-availability"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 8);
    for day in days {
        assert_eq!(day["available"], false);
    }
}

async fn post_filtered(addr: SocketAddr, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{addr}/api/check-availability/filtered"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

fn filter_body() -> Value {
    json!({
        "daysOfWeek": [1, 3],
        "weeksAhead": 2,
        "timeStart": "18:00",
        "timeEnd": "20:30",
        "includePriorWeeks": false
    })
}

#[tokio::test]
async fn filtered_rejects_weeks_out_of_range() {
    let addr = spawn_app().await;

    for weeks in [0, 5] {
        let mut body = filter_body();
        body["weeksAhead"] = json!(weeks);
        let response = post_filtered(addr, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "weeksAhead must be between 1 and 4");
    }
}

#[tokio::test]
async fn filtered_rejects_empty_days() {
    let addr = spawn_app().await;

    let mut body = filter_body();
    body["daysOfWeek"] = json!([]);
    let response = post_filtered(addr, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "daysOfWeek must be a non-empty array");
}

#[tokio::test]
async fn filtered_rejects_empty_time_bounds() {
    let addr = spawn_app().await;

    let mut body = filter_body();
    body["timeEnd"] = json!("");
    let response = post_filtered(addr, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "timeStart and timeEnd are required");
}

#[tokio::test]
async fn filtered_reports_checked_days_and_echoes_the_criteria() {
    let addr = spawn_app().await;

    let today_weekday = Local::now().date_naive().weekday().num_days_from_sunday();
    let body = json!({
        "daysOfWeek": [today_weekday],
        "weeksAhead": 1,
        "timeStart": "18:00",
        "timeEnd": "20:30",
        "includePriorWeeks": false
    });

    let response = post_filtered(addr, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["totalSlots"], 0);
    assert_eq!(body["searchCriteria"]["weeksAhead"], 1);
    assert_eq!(body["searchCriteria"]["daysOfWeek"], json!([today_weekday]));

    let by_club = body["resultsByClub"].as_object().unwrap();
    assert_eq!(by_club.len(), 4);
    for club in by_club.values() {
        // the noop provider never has slots, so the one matching day is
        // checked and bucketed as slotless
        assert_eq!(club["results"], json!([]));
        assert_eq!(club["daysWithNoSlots"].as_array().unwrap().len(), 1);
        assert_eq!(club["totalSlots"], 0);
    }
}

#[tokio::test]
async fn cron_endpoints_acknowledge() {
    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    for (path, message) in [
        ("start", "Automatic checks started"),
        ("stop", "Automatic checks stopped"),
        ("manual", "Manual check completed"),
    ] {
        let body: Value = client
            .post(format!("http://{addr}/api/cron/{path}"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["message"], message);
    }
}

#[tokio::test]
async fn unmatched_routes_return_a_json_404() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Resource not found");
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["path"], "/api/nope");
}
