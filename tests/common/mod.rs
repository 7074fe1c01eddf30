//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_backend;

use e180r::config::ApiConfig;
use e180r::generate::GenerateClient;
use e180r::ui::app::{App, UiCommand};
use std::net::TcpListener;
use tokio::sync::mpsc;

/// A port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn client_for(base_url: &str) -> GenerateClient {
    GenerateClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    })
    .expect("Failed to build client")
}

/// App wired to a command channel the test can inspect.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new("http://localhost:8000/api/generate");
    let (tx, rx) = mpsc::channel(8);
    app.set_command_sender(tx);
    (app, rx)
}

pub fn type_text(app: &mut App, text: &str) {
    app.on_paste(text);
}
