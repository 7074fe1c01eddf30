use crate::generate::{GenerateError, REQUEST_FAILED_MESSAGE};
use crate::ui::composer::{
    max_response_scroll, response_viewport, ComposerIntent, ComposerReducer, ComposerState,
};
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Commands from the UI thread to the async dispatcher.
#[derive(Debug)]
pub enum UiCommand {
    Generate {
        request_id: Uuid,
        email_content: String,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Lines moved per PageUp/PageDown.
const RESPONSE_PAGE: u16 = 10;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    endpoint: String,
    /// Draft, request lifecycle and outcome (MVI pattern).
    pub composer: ComposerState,
    command_sender: Option<UiCommandSender>,
    response_scroll: u16,
    /// Last known terminal size; `None` until the first resize.
    screen: Option<Rect>,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            endpoint: endpoint.into(),
            composer: ComposerState::default(),
            command_sender: None,
            response_scroll: 0,
            screen: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// URL requests are posted to, shown in the header.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn response_scroll(&self) -> u16 {
        self.response_scroll
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn dispatch_composer(&mut self, intent: ComposerIntent) {
        dispatch_mvi!(self, composer, ComposerReducer, intent);
    }

    pub fn on_tick(&mut self) {
        if self.composer.is_in_flight() {
            self.dispatch_composer(ComposerIntent::AnimationTick);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        self.dispatch_composer(ComposerIntent::Paste(text.to_string()));
    }

    pub fn scroll_response_up(&mut self) {
        self.response_scroll = self.response_scroll.saturating_sub(RESPONSE_PAGE);
    }

    pub fn scroll_response_down(&mut self) {
        self.response_scroll = self
            .response_scroll
            .saturating_add(RESPONSE_PAGE)
            .min(self.max_response_scroll());
    }

    /// Record the terminal size so scrolling stops at the last response row.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.screen = Some(Rect::new(0, 0, cols, rows));
        self.response_scroll = self.response_scroll.min(self.max_response_scroll());
    }

    fn max_response_scroll(&self) -> u16 {
        match (self.screen, self.composer.response()) {
            (Some(screen), Some(text)) => max_response_scroll(text, response_viewport(screen)),
            _ => 0,
        }
    }

    /// Dispatch the current draft.
    ///
    /// Does nothing while a request is in flight. A blank draft only sets
    /// the empty-input message. Otherwise exactly one `UiCommand::Generate`
    /// is queued with the untrimmed draft text.
    pub fn submit(&mut self) {
        if !self.composer.can_dispatch() {
            return;
        }

        let request_id = Uuid::new_v4();
        self.dispatch_composer(ComposerIntent::Submit { request_id });
        if self.composer.in_flight_id() != Some(request_id) {
            return;
        }

        self.response_scroll = 0;
        tracing::info!(%request_id, "Dispatching draft");
        let command = UiCommand::Generate {
            request_id,
            email_content: self.composer.draft.text().to_string(),
        };
        if !self.send_command(command) {
            self.dispatch_composer(ComposerIntent::Failed {
                request_id,
                message: REQUEST_FAILED_MESSAGE.to_string(),
            });
        }
    }

    /// Apply a completion reported by the dispatcher.
    pub fn on_generation_finished(
        &mut self,
        request_id: Uuid,
        outcome: Result<String, GenerateError>,
    ) {
        match outcome {
            Ok(response) => {
                self.dispatch_composer(ComposerIntent::Completed {
                    request_id,
                    response,
                });
            }
            Err(err) => {
                tracing::warn!(%request_id, error = %err.details(), "Generation failed");
                self.dispatch_composer(ComposerIntent::Failed {
                    request_id,
                    message: err.user_message().to_string(),
                });
            }
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::error!("No dispatcher attached");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "Failed to queue generate command");
                false
            }
        }
    }
}
