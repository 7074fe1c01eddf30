//! Async worker that turns `UiCommand::Generate` into HTTP calls.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

use super::client::GenerateClient;
use super::error::GenerateError;

/// Spawn the dispatcher on `handle`. It runs until every command sender is dropped.
pub fn spawn_dispatcher(
    handle: &Handle,
    client: GenerateClient,
    commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) -> JoinHandle<()> {
    handle.spawn(run_dispatcher(client, commands, events))
}

pub async fn run_dispatcher(
    client: GenerateClient,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Generate {
                request_id,
                email_content,
            } => {
                let span = tracing::info_span!("dispatch", %request_id);
                dispatch(&client, request_id, &email_content, &events)
                    .instrument(span)
                    .await;
            }
        }
    }
    tracing::debug!("Command channel closed, dispatcher exiting");
}

/// Run one request. A completion event is emitted on every exit path,
/// including when the future is dropped mid-flight.
async fn dispatch(
    client: &GenerateClient,
    request_id: Uuid,
    email_content: &str,
    events: &Sender<AppEvent>,
) {
    let events = events.clone();
    let mut outcome = scopeguard::guard(
        Err(GenerateError::Interrupted),
        move |outcome: Result<String, GenerateError>| {
            if let Err(err) = &outcome {
                tracing::warn!(%request_id, error = %err.details(), "Dispatch failed");
            }
            if events
                .send(AppEvent::Generation {
                    request_id,
                    outcome,
                })
                .is_err()
            {
                tracing::debug!(%request_id, "UI gone, dropping completion");
            }
        },
    );

    *outcome = client.generate(email_content).await;
}
