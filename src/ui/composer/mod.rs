//! Response generator view.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `draft.rs` - Editable draft buffer
//! - `state.rs` - Request lifecycle and outcome
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering

mod draft;
mod intent;
mod reducer;
mod state;
mod view;

pub use draft::Draft;
pub use intent::ComposerIntent;
pub use reducer::ComposerReducer;
pub use state::{ComposerState, Outcome, RequestState};
pub use view::{
    draft_cursor, draft_rows, max_response_scroll, panel_regions, render_composer,
    response_lines, response_row_count, response_viewport, trigger_label, DRAFT_PLACEHOLDER,
    RESPONSE_PLACEHOLDER, TRIGGER_BUSY_LABEL, TRIGGER_LABEL,
};
