//! End-to-end: App → dispatcher → mock service → AppEvent → App.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, free_port, type_text};
use e180r::generate::{run_dispatcher, REQUEST_FAILED_MESSAGE};
use e180r::ui::app::App;
use e180r::ui::composer::RequestState;
use e180r::ui::events::AppEvent;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};
use tokio::sync::mpsc as tokio_mpsc;

async fn next_event(events: &Receiver<AppEvent>) -> AppEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(event) = events.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for AppEvent");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

async fn settle(app: &mut App, events: &Receiver<AppEvent>) {
    match next_event(events).await {
        AppEvent::Generation {
            request_id,
            outcome,
        } => app.on_generation_finished(request_id, outcome),
        _ => panic!("expected a generation event"),
    }
}

fn wire(base_url: &str) -> (App, Receiver<AppEvent>) {
    let (event_tx, event_rx) = mpsc::channel();
    let (command_tx, command_rx) = tokio_mpsc::channel(4);
    tokio::spawn(run_dispatcher(client_for(base_url), command_rx, event_tx));

    let mut app = App::new(base_url);
    app.set_command_sender(command_tx);
    (app, event_rx)
}

#[tokio::test]
async fn successful_round_trip() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::reply("Hello back")).await;
    let (mut app, events) = wire(&backend.base_url());

    type_text(&mut app, "Hello");
    app.submit();
    assert!(app.composer.is_in_flight());
    settle(&mut app, &events).await;

    assert_eq!(app.composer.request, RequestState::Idle);
    assert_eq!(app.composer.response(), Some("Hello back"));
    assert_eq!(app.composer.error(), None);
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn server_error_round_trip() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::error(500, "boom")).await;
    let (mut app, events) = wire(&backend.base_url());

    type_text(&mut app, "Hello");
    app.submit();
    settle(&mut app, &events).await;

    assert_eq!(app.composer.request, RequestState::Idle);
    assert_eq!(app.composer.error(), Some(REQUEST_FAILED_MESSAGE));
    assert_eq!(app.composer.response(), None);
}

#[tokio::test]
async fn network_failure_round_trip() {
    let (mut app, events) = wire(&format!("http://127.0.0.1:{}", free_port()));

    type_text(&mut app, "Hello");
    app.submit();
    settle(&mut app, &events).await;

    assert_eq!(app.composer.request, RequestState::Idle);
    assert_eq!(app.composer.error(), Some(REQUEST_FAILED_MESSAGE));
}

#[tokio::test]
async fn slow_request_blocks_second_dispatch() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::reply("slow").with_delay(200))
        .await;
    let (mut app, events) = wire(&backend.base_url());

    type_text(&mut app, "Hello");
    app.submit();
    app.submit();
    type_text(&mut app, "!");
    app.submit();
    settle(&mut app, &events).await;

    assert_eq!(app.composer.response(), Some("slow"));
    assert_eq!(app.composer.draft.text(), "Hello!");
    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].json()["email_content"], "Hello");
}

#[tokio::test]
async fn dropped_dispatcher_still_reports_completion() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::reply("never seen").with_delay(2_000))
        .await;

    let (event_tx, events) = mpsc::channel();
    let (command_tx, command_rx) = tokio_mpsc::channel(4);
    let worker = tokio::spawn(run_dispatcher(
        client_for(&backend.base_url()),
        command_rx,
        event_tx,
    ));
    let mut app = App::new(backend.base_url());
    app.set_command_sender(command_tx);

    type_text(&mut app, "Hello");
    app.submit();
    // Let the request reach the server before aborting.
    let deadline = Instant::now() + Duration::from_secs(5);
    while backend.captured_requests().await.is_empty() {
        assert!(Instant::now() < deadline, "request never arrived");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    worker.abort();
    settle(&mut app, &events).await;

    assert_eq!(app.composer.request, RequestState::Idle);
    assert_eq!(app.composer.error(), Some(REQUEST_FAILED_MESSAGE));
}
