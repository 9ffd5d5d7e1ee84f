//! Integration tests for schedule HTTP endpoints.
//!
//! The full `/api` router is driven with in-memory storage, a pinned clock,
//! and a canned quote provider.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use class_calendar::adapters::http::{api_router, ScheduleHandlers};
use class_calendar::adapters::{FixedClock, InMemorySessionRepository};
use class_calendar::domain::foundation::{CalendarDate, DomainError, WeekdayLocale};
use class_calendar::domain::reminder::Quote;
use class_calendar::ports::QuoteProvider;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct CannedQuote;

#[async_trait]
impl QuoteProvider for CannedQuote {
    async fn fetch(&self) -> Result<Quote, DomainError> {
        Ok(Quote::new("Aprender es crecer.", "Anónimo"))
    }
}

struct TestApp {
    router: Router,
    repository: Arc<InMemorySessionRepository>,
}

fn app(today: &str) -> TestApp {
    let repository = Arc::new(InMemorySessionRepository::new());
    let clock = Arc::new(FixedClock::new(today.parse::<CalendarDate>().unwrap()));
    let handlers = ScheduleHandlers::new(
        repository.clone(),
        clock,
        Arc::new(CannedQuote),
        WeekdayLocale::Spanish,
    );
    TestApp {
        router: api_router(handlers),
        repository,
    }
}

impl TestApp {
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(&self, body: Value) -> Value {
        let (status, value) = self.send(Method::POST, "/api/sessions", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", value);
        value
    }
}

fn algebra() -> Value {
    json!({
        "name": "Álgebra",
        "time_label": "8:00 - 10:00",
        "link": "https://meet.example.com/algebra",
        "start_date": "2024-01-01",
        "end_date": "2024-01-31",
        "weekdays": ["Lunes", "miércoles"]
    })
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let app = app("2024-01-15");
    let (status, body) = app.send(Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_returns_canonical_session() {
    let app = app("2024-01-15");
    let body = app.create(algebra()).await;

    assert_eq!(body["name"], "Álgebra");
    assert_eq!(body["weekdays"], json!(["monday", "wednesday"]));
    assert!(body["id"].as_str().is_some());
    assert_eq!(app.repository.len().await, 1);
}

#[tokio::test]
async fn create_with_unknown_weekday_is_rejected() {
    let app = app("2024-01-15");
    let mut body = algebra();
    body["weekdays"] = json!(["Funday"]);

    let (status, error) = app.send(Method::POST, "/api/sessions", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "UNRECOGNIZED_WEEKDAY");
    assert_eq!(error["details"]["fields"], json!(["weekdays"]));
    assert!(app.repository.is_empty().await);
}

#[tokio::test]
async fn create_reports_every_missing_field() {
    let app = app("2024-01-15");
    let (status, error) = app
        .send(Method::POST, "/api/sessions", Some(json!({ "name": "Solo nombre" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_FAILED");
    assert_eq!(
        error["details"]["fields"],
        json!(["time_label", "link", "start_date", "end_date", "weekdays"])
    );
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app("2024-01-15");
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/sessions")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["code"], "INVALID_FORMAT");
    assert_eq!(error["details"]["fields"], json!(["body"]));
}

#[tokio::test]
async fn create_with_out_of_range_or_non_iso_dates_is_rejected() {
    let app = app("2024-01-15");
    let mut body = algebra();
    body["start_date"] = json!("-200000-01-01");
    body["end_date"] = json!("+12345-01-01");

    let (status, error) = app.send(Method::POST, "/api/sessions", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_FAILED");
    assert_eq!(error["details"]["fields"], json!(["start_date", "end_date"]));
    assert!(app.repository.is_empty().await);

    let created = app.create(algebra()).await;
    let mut changed = algebra();
    changed["end_date"] = json!("2024-1-31");
    let (status, error) = app
        .send(
            Method::PUT,
            &format!("/api/sessions/{}", created["id"].as_str().unwrap()),
            Some(changed),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_FORMAT");
    assert_eq!(error["details"]["fields"], json!(["end_date"]));
}

#[tokio::test]
async fn malformed_day_path_is_bad_request() {
    let app = app("2024-01-15");

    for uri in ["/api/sessions/day/2024-13-01", "/api/sessions/day/2024-1-5", "/api/sessions/day/0000-01-01"] {
        let (status, error) = app.send(Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(error["code"], "INVALID_FORMAT", "{}", uri);
        assert_eq!(error["details"]["fields"], json!(["date"]), "{}", uri);
    }
}

#[tokio::test]
async fn highlights_for_january() {
    let app = app("2024-01-15");
    app.create(algebra()).await;

    let (status, body) = app
        .send(Method::GET, "/api/sessions/highlights/2024/1", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            "2024-01-01", "2024-01-03", "2024-01-08", "2024-01-10", "2024-01-15",
            "2024-01-17", "2024-01-22", "2024-01-24", "2024-01-29", "2024-01-31"
        ])
    );
}

#[tokio::test]
async fn invalid_month_is_bad_request() {
    let app = app("2024-01-15");

    let (status, error) = app
        .send(Method::GET, "/api/sessions/highlights/2024/13", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["fields"], json!(["month"]));

    let (status, _) = app.send(Method::GET, "/api/sessions/month/year/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn month_listing_includes_overlapping_sessions() {
    let app = app("2024-01-15");
    app.create(algebra()).await;

    let (status, body) = app.send(Method::GET, "/api/sessions/month/2024/01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["month"], "2024-01");
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    let (_, body) = app.send(Method::GET, "/api/sessions/month/2024/02", None).await;
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn day_and_today_views_use_the_predicate() {
    let app = app("2024-01-03");
    app.create(algebra()).await;

    let (status, body) = app.send(Method::GET, "/api/sessions/day/2024-01-02", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["items"].as_array().unwrap().is_empty());

    let (status, body) = app.send(Method::GET, "/api/sessions/today", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-01-03");
    assert_eq!(body["items"][0]["name"], "Álgebra");

    let (status, _) = app.send(Method::GET, "/api/sessions/day/2024-02-30", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_then_delete_lifecycle() {
    let app = app("2024-01-15");
    let created = app.create(algebra()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut changed = algebra();
    changed["end_date"] = json!("2024-03-31");
    changed["weekdays"] = json!(["viernes"]);
    let (status, updated) = app
        .send(Method::PUT, &format!("/api/sessions/{}", id), Some(changed))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["weekdays"], json!(["friday"]));

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/sessions/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, error) = app
        .send(Method::DELETE, &format!("/api/sessions/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn update_unknown_session_is_not_found() {
    let app = app("2024-01-15");
    let uri = format!("/api/sessions/{}", uuid::Uuid::new_v4());

    let (status, _) = app.send(Method::PUT, &uri, Some(algebra())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, error) = app.send(Method::PUT, "/api/sessions/not-a-uuid", Some(algebra())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_FORMAT");
    assert_eq!(error["details"]["fields"], json!(["id"]));

    let (status, error) = app.send(Method::DELETE, "/api/sessions/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["fields"], json!(["id"]));
}

#[tokio::test]
async fn sweep_deletes_ended_sessions() {
    let app = app("2024-02-01");
    app.create(algebra()).await;
    let mut ongoing = algebra();
    ongoing["end_date"] = json!("2024-02-01");
    app.create(ongoing).await;

    let (status, body) = app.send(Method::POST, "/api/sweep", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "today": "2024-02-01", "candidates": 1, "deleted": 1 }));
    assert_eq!(app.repository.len().await, 1);
}

#[tokio::test]
async fn reminder_contains_session_and_quote() {
    let app = app("2024-01-15");
    let created = app.create(algebra()).await;
    let uri = format!("/api/sessions/{}/reminder", created["id"].as_str().unwrap());

    let (status, body) = app.send(Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("*Álgebra*"));
    assert!(message.contains("8:00 - 10:00"));
    assert!(message.contains("Aprender es crecer."));
    assert!(body["share_link"].as_str().unwrap().starts_with("https://wa.me/?text="));
}

#[tokio::test]
async fn quote_endpoint_returns_provider_quote() {
    let app = app("2024-01-15");
    let (status, body) = app.send(Method::GET, "/api/quote", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "quote": "Aprender es crecer.", "author": "Anónimo" }));
}
