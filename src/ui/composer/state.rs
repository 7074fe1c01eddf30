//! State for the response generator view.

use crate::ui::mvi::UiState;
use uuid::Uuid;

use super::draft::Draft;

/// Whether a dispatch is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    /// A request has been handed to the dispatcher and not yet resolved.
    InFlight {
        request_id: Uuid,
        animation_tick: u8,
    },
}

/// What the response panel shows. A result and an error are never shown together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Response(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposerState {
    pub draft: Draft,
    pub request: RequestState,
    pub outcome: Outcome,
}

impl UiState for ComposerState {}

impl ComposerState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self.request, RequestState::InFlight { .. })
    }

    /// The trigger is disabled while a request is outstanding.
    pub fn can_dispatch(&self) -> bool {
        !self.is_in_flight()
    }

    pub fn in_flight_id(&self) -> Option<Uuid> {
        match self.request {
            RequestState::InFlight { request_id, .. } => Some(request_id),
            RequestState::Idle => None,
        }
    }

    pub fn response(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Response(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error(message) => Some(message),
            _ => None,
        }
    }
}
