//! # Booking Routes
//!
//! The HTML form page and the JSON handlers over the ledger operations.
//! Every mutation persists a snapshot (warn-and-continue) and the create
//! path schedules the detached confirmation task.

use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use confbook_core::BookingId;
use confbook_ledger::Booking;

use crate::error::AppError;
use crate::state::AppState;

/// Simulated hand-off delay before the confirmation is logged.
const CONFIRMATION_DELAY: Duration = Duration::from_secs(2);

/// Build the bookings router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(booking_form))
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/:id", get(get_booking).delete(cancel_booking))
}

/// Form fields for creating a booking.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    /// Attendee first name.
    pub first: String,
    /// Attendee last name.
    pub last: String,
    /// Attendee email address.
    pub email: String,
    /// Number of tickets.
    pub tickets: u32,
}

/// Query parameters for the booking list.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the list to bookings with this email (case-insensitive).
    pub email: Option<String>,
}

/// `GET /` — the minimal booking form.
async fn booking_form(State(state): State<AppState>) -> Html<String> {
    let (name, remaining, total) = state.ledger.read(|l| {
        (
            l.conference().name().to_string(),
            l.conference().remaining_tickets(),
            l.conference().total_tickets(),
        )
    });

    Html(format!(
        r#"<!doctype html>
<html>
<head><title>{name} — Tickets</title></head>
<body>
<h1>{name}</h1>
<p>{remaining} of {total} tickets remaining</p>
<form method="post" action="/bookings">
  <label>First name <input name="first" required></label>
  <label>Last name <input name="last" required></label>
  <label>Email <input name="email" type="email" required></label>
  <label>Tickets <input name="tickets" type="number" value="1" min="1"></label>
  <button type="submit">Book</button>
</form>
</body>
</html>
"#
    ))
}

/// `POST /bookings` — create a booking from form data.
async fn create_booking(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<BookingForm>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = state
        .ledger
        .book(&form.first, &form.last, &form.email, form.tickets)?;
    state.persist_or_warn();

    let conference = state.ledger.read(|l| l.conference().name().to_string());
    spawn_confirmation(booking.clone(), conference);

    Ok((StatusCode::CREATED, Json(booking)))
}

/// `GET /bookings` — list bookings, optionally filtered by email.
async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Booking>> {
    let bookings = state.ledger.read(|l| match &query.email {
        Some(email) => l.find_by_email(email).into_iter().cloned().collect(),
        None => l.bookings().to_vec(),
    });
    Json(bookings)
}

/// `GET /bookings/:id` — fetch one booking.
async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Booking>, AppError> {
    let id = BookingId::new(id);
    state
        .ledger
        .read(|l| l.find_by_id(id).cloned())
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}

/// `DELETE /bookings/:id` — cancel a booking.
async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.ledger.cancel(BookingId::new(id))?;
    state.persist_or_warn();
    Ok(StatusCode::NO_CONTENT)
}

/// Schedule the confirmation notification as a detached task.
///
/// The task owns a copy of the committed booking; it never re-reads live
/// ledger state.
fn spawn_confirmation(booking: Booking, conference: String) {
    tokio::spawn(async move {
        tokio::time::sleep(CONFIRMATION_DELAY).await;
        tracing::info!(
            booking = %booking.id,
            email = %booking.email,
            tickets = %booking.tickets,
            conference = %conference,
            "confirmation sent"
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use confbook_ledger::{Conference, Ledger};
    use confbook_store::SnapshotStore;

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        let store = SnapshotStore::new(dir.path().join("bookings.json"));
        let ledger = Ledger::new(Conference::new("RustConf", 10).unwrap());
        AppState::new(ledger, store)
    }

    fn test_app(state: AppState) -> Router {
        crate::app(state)
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/bookings")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn form_page_shows_remaining_count() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(test_state(&dir));

        let resp = app.oneshot(get("/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("RustConf"));
        assert!(html.contains("10 of 10 tickets remaining"));
        assert!(html.contains("<form"));
    }

    #[tokio::test]
    async fn create_booking_returns_201_with_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(test_state(&dir));

        let resp = app
            .oneshot(post_form("first=Ann&last=Lee&email=ann%40x.com&tickets=3"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let booking: Booking = body_json(resp).await;
        assert_eq!(booking.id, BookingId::new(1));
        assert_eq!(booking.email.as_str(), "ann@x.com");
    }

    #[tokio::test]
    async fn create_booking_persists_a_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let app = test_app(state.clone());

        app.oneshot(post_form("first=Ann&last=Lee&email=ann%40x.com&tickets=3"))
            .await
            .unwrap();

        let restored = state.store.load().unwrap().expect("snapshot should exist");
        assert_eq!(restored.bookings().len(), 1);
        assert_eq!(restored.conference().remaining_tickets(), 7);
    }

    #[tokio::test]
    async fn invalid_email_is_422() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(test_state(&dir));

        let resp = app
            .oneshot(post_form("first=Ann&last=Lee&email=bad-email&tickets=1"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: crate::error::ErrorBody = body_json(resp).await;
        assert_eq!(body.error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn over_capacity_is_409() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(test_state(&dir));

        let resp = app
            .oneshot(post_form("first=Ann&last=Lee&email=ann%40x.com&tickets=11"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: crate::error::ErrorBody = body_json(resp).await;
        assert_eq!(body.error.code, "CAPACITY_EXCEEDED");
    }

    #[tokio::test]
    async fn list_returns_bookings_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let app = test_app(state);

        app.clone()
            .oneshot(post_form("first=Ann&last=Lee&email=ann%40x.com&tickets=1"))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_form("first=Bo&last=Li&email=bo%40x.com&tickets=1"))
            .await
            .unwrap();

        let resp = app.oneshot(get("/bookings")).await.unwrap();
        let bookings: Vec<Booking> = body_json(resp).await;
        assert_eq!(bookings.len(), 2);
        assert!(bookings[0].id < bookings[1].id);
    }

    #[tokio::test]
    async fn list_filter_by_email_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(test_state(&dir));

        app.clone()
            .oneshot(post_form("first=Ann&last=Lee&email=ann%40x.com&tickets=1"))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_form("first=Bo&last=Li&email=bo%40x.com&tickets=1"))
            .await
            .unwrap();

        let resp = app
            .oneshot(get("/bookings?email=ANN%40X.COM"))
            .await
            .unwrap();
        let bookings: Vec<Booking> = body_json(resp).await;
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].email.as_str(), "ann@x.com");
    }

    #[tokio::test]
    async fn get_booking_hits_and_misses() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(test_state(&dir));

        app.clone()
            .oneshot(post_form("first=Ann&last=Lee&email=ann%40x.com&tickets=1"))
            .await
            .unwrap();

        let resp = app.clone().oneshot(get("/bookings/1")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app.oneshot(get("/bookings/42")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cancel_restores_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let app = test_app(state.clone());

        app.clone()
            .oneshot(post_form("first=Ann&last=Lee&email=ann%40x.com&tickets=4"))
            .await
            .unwrap();

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/bookings/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        assert_eq!(state.ledger.read(|l| l.conference().remaining_tickets()), 10);
    }

    #[tokio::test]
    async fn cancel_unknown_id_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(test_state(&dir));

        let resp = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/bookings/9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
