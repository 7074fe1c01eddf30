//! Client side of the reply generation endpoint.
//!
//! ```text
//! App ──UiCommand::Generate──→ dispatcher ──POST /api/generate──→ service
//!  ↑                               │
//!  └──────AppEvent::Generation─────┘
//! ```

mod client;
mod dispatcher;
mod error;
mod types;

pub use client::{GenerateClient, GENERATE_PATH};
pub use dispatcher::{run_dispatcher, spawn_dispatcher};
pub use error::{GenerateError, EMPTY_INPUT_MESSAGE, REQUEST_FAILED_MESSAGE};
pub use types::{GenerateRequest, GenerateResponse};
