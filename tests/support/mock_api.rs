use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pass_in::config::Config;
use reqwest::Url;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const EVENT_ID: &str = "9e9bd979-9d10-4915-b339-3786b1634f33";

type Received = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Local stand-in for the attendees API.
///
/// Serves 25 attendees for `EVENT_ID`, 10 per page. The search term
/// `broken` returns an invalid body and `slow` answers after two seconds.
pub struct MockApi {
    addr: SocketAddr,
    received: Received,
}

impl MockApi {
    pub async fn start() -> Self {
        let received = Received::default();
        let app = Router::new()
            .route("/events/:event_id/attendees", get(list_attendees))
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, received }
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: Url::parse(&format!("http://{}", self.addr)).unwrap(),
            event_id: EVENT_ID.to_string(),
            ..Config::default()
        }
    }

    /// Query parameters of every request received so far
    pub fn received(&self) -> Vec<HashMap<String, String>> {
        self.received.lock().unwrap().clone()
    }
}

async fn list_attendees(
    State(received): State<Received>,
    Path(event_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    received.lock().unwrap().push(params.clone());

    if event_id != EVENT_ID {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "Event not found" })))
            .into_response();
    }

    let query = params.get("query").cloned().unwrap_or_default();
    match query.as_str() {
        "broken" => return (StatusCode::OK, "<html>oops</html>").into_response(),
        "slow" => tokio::time::sleep(Duration::from_secs(2)).await,
        _ => {}
    }

    let page_index: usize = params
        .get("pageIndex")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);

    let matching: Vec<_> = (1..=25)
        .map(|n| {
            let name = if n % 5 == 0 {
                format!("Ana {}", n)
            } else {
                format!("Participante {}", n)
            };
            let checked_in_at = (n % 2 == 0).then_some("2024-04-02T09:00:00.000Z");
            json!({
                "id": n,
                "name": name,
                "email": format!("p{}@example.com", n),
                "createdAt": "2024-04-01T12:00:00.000Z",
                "checkedInAt": checked_in_at,
            })
        })
        .filter(|attendee| {
            query.is_empty()
                || attendee["name"]
                    .as_str()
                    .is_some_and(|name| name.to_lowercase().contains(&query.to_lowercase()))
        })
        .collect();

    let total = matching.len();
    let attendees: Vec<_> = matching.into_iter().skip(page_index * 10).take(10).collect();

    Json(json!({ "attendees": attendees, "total": total })).into_response()
}
