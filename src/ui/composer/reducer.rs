//! Reducer for the response generator view.

use crate::generate::EMPTY_INPUT_MESSAGE;
use crate::ui::mvi::Reducer;

use super::intent::ComposerIntent;
use super::state::{ComposerState, Outcome, RequestState};

/// Pure state transitions. Sending the request is done by the caller
/// when `Submit` moves the state to `InFlight`.
pub struct ComposerReducer;

impl Reducer for ComposerReducer {
    type State = ComposerState;
    type Intent = ComposerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposerIntent::InsertChar(ch) => state.draft.insert_char(ch),
            ComposerIntent::Paste(text) => state.draft.insert_str(&text),
            ComposerIntent::Backspace => state.draft.backspace(),
            ComposerIntent::Delete => state.draft.delete(),
            ComposerIntent::CursorLeft => state.draft.move_left(),
            ComposerIntent::CursorRight => state.draft.move_right(),
            ComposerIntent::CursorHome => state.draft.move_home(),
            ComposerIntent::CursorEnd => state.draft.move_end(),
            ComposerIntent::ClearDraft => state.draft.clear(),

            ComposerIntent::Submit { request_id } => {
                if state.is_in_flight() {
                    return state;
                }
                if state.draft.is_blank() {
                    state.outcome = Outcome::Error(EMPTY_INPUT_MESSAGE.to_string());
                    return state;
                }
                state.outcome = Outcome::Empty;
                state.request = RequestState::InFlight {
                    request_id,
                    animation_tick: 0,
                };
            }

            ComposerIntent::AnimationTick => {
                if let RequestState::InFlight {
                    request_id,
                    animation_tick,
                } = state.request
                {
                    state.request = RequestState::InFlight {
                        request_id,
                        animation_tick: animation_tick.wrapping_add(1),
                    };
                }
            }

            ComposerIntent::Completed {
                request_id,
                response,
            } => {
                if state.in_flight_id() == Some(request_id) {
                    state.request = RequestState::Idle;
                    state.outcome = Outcome::Response(response);
                }
            }

            ComposerIntent::Failed {
                request_id,
                message,
            } => {
                if state.in_flight_id() == Some(request_id) {
                    state.request = RequestState::Idle;
                    state.outcome = Outcome::Error(message);
                }
            }
        }
        state
    }
}
