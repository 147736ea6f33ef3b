mod support;

use crate::support::{tracing_init, MockApi};
use pass_in::attendee_list::AttendeeListController;
use pass_in::attendees::{AttendeeClient, AttendeeError, PageRequest};
use pass_in::location::{LocationStore, UrlLocation};
use std::time::Duration;

#[tokio::test]
async fn test_fetch_first_page() {
    tracing_init();
    let api = MockApi::start().await;
    let client = AttendeeClient::new(&api.config()).unwrap();

    let page = client.fetch_page(&PageRequest::new(1, "")).await.unwrap();

    assert_eq!(page.total, 25);
    assert_eq!(page.attendees.len(), 10);
    assert_eq!(page.attendees[0].id, "1");
    assert!(page.attendees[0].checked_in_at.is_none());
    assert!(page.attendees[1].checked_in_at.is_some());

    let received = api.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].get("pageIndex").map(String::as_str), Some("0"));
    assert!(!received[0].contains_key("query"));
}

#[tokio::test]
async fn test_fetch_last_page_and_search() {
    tracing_init();
    let api = MockApi::start().await;
    let client = AttendeeClient::new(&api.config()).unwrap();

    let last = client.fetch_page(&PageRequest::new(3, "")).await.unwrap();
    assert_eq!(last.total, 25);
    assert_eq!(last.attendees.len(), 5);
    assert_eq!(last.attendees[0].id, "21");

    let search = client.fetch_page(&PageRequest::new(1, "ana")).await.unwrap();
    assert_eq!(search.total, 5);
    assert!(search.attendees.iter().all(|a| a.name.starts_with("Ana")));

    let received = api.received();
    assert_eq!(received[1].get("pageIndex").map(String::as_str), Some("0"));
    assert_eq!(received[1].get("query").map(String::as_str), Some("ana"));
}

#[tokio::test]
async fn test_unknown_event() {
    tracing_init();
    let api = MockApi::start().await;
    let mut config = api.config();
    config.event_id = "missing-event".to_string();
    let client = AttendeeClient::new(&config).unwrap();

    let result = client.fetch_page(&PageRequest::new(1, "")).await;
    assert!(matches!(result, Err(AttendeeError::EventNotFound)));
}

#[tokio::test]
async fn test_malformed_body() {
    tracing_init();
    let api = MockApi::start().await;
    let client = AttendeeClient::new(&api.config()).unwrap();

    let result = client.fetch_page(&PageRequest::new(1, "broken")).await;
    assert!(matches!(result, Err(AttendeeError::Serialization(_))));
}

#[tokio::test]
async fn test_request_timeout() {
    tracing_init();
    let api = MockApi::start().await;
    let mut config = api.config();
    config.request_timeout = Duration::from_millis(200);
    let client = AttendeeClient::new(&config).unwrap();

    let error = client
        .fetch_page(&PageRequest::new(1, "slow"))
        .await
        .unwrap_err();
    assert!(error.is_timeout(), "unexpected error: {}", error);
}

#[tokio::test]
async fn test_controller_with_client() {
    tracing_init();
    let api = MockApi::start().await;
    let client = AttendeeClient::new(&api.config()).unwrap();
    let location = UrlLocation::parse("http://localhost:5173/?page=2").unwrap();
    let mut list = AttendeeListController::mount(location);

    let ticket = list.begin_fetch();
    let result = client.fetch_page(&ticket.request).await;
    assert!(list.complete_fetch(&ticket, result));

    assert_eq!(list.state().attendees.len(), 10);
    assert_eq!(list.state().attendees[0].id, "11");
    assert_eq!(list.state().summary(), "Mostrando 10 de 25 itens");
    assert_eq!(list.state().page_label(), "Página 2 de 3");

    assert!(list.go_to_last_page());
    assert_eq!(list.location().get("page"), Some("3".to_string()));

    list.set_search_page("ana");
    let ticket = list.begin_fetch();
    let result = client.fetch_page(&ticket.request).await;
    assert!(list.complete_fetch(&ticket, result));

    assert_eq!(list.state().page, 1);
    assert_eq!(list.state().total, 5);
    assert_eq!(list.state().total_pages(), 1);
    assert!(!list.go_to_next_page());
}
