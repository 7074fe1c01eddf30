use crate::ui::app::App;
use crate::ui::composer::ComposerIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'g') || key.code == KeyCode::F(5) {
        app.submit();
        return;
    }

    if is_ctrl_char(key, 'l') {
        app.dispatch_composer(ComposerIntent::ClearDraft);
        return;
    }

    let intent = match key.code {
        KeyCode::PageUp => {
            app.scroll_response_up();
            return;
        }
        KeyCode::PageDown => {
            app.scroll_response_down();
            return;
        }
        KeyCode::Enter => ComposerIntent::InsertChar('\n'),
        KeyCode::Tab => ComposerIntent::InsertChar('\t'),
        KeyCode::Backspace => ComposerIntent::Backspace,
        KeyCode::Delete => ComposerIntent::Delete,
        KeyCode::Left => ComposerIntent::CursorLeft,
        KeyCode::Right => ComposerIntent::CursorRight,
        KeyCode::Home => ComposerIntent::CursorHome,
        KeyCode::End => ComposerIntent::CursorEnd,
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            ComposerIntent::InsertChar(ch)
        }
        _ => return,
    };
    app.dispatch_composer(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
