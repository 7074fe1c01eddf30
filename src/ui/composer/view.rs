//! Rendering for the draft and response panels.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    BRAND_BLUE, DISABLED, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_ERROR, STATUS_OK,
};

use super::draft::Draft;
use super::state::{ComposerState, RequestState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Below this width the panels stack vertically.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Columns a tab occupies on screen. The draft keeps the raw `\t`.
const TAB_WIDTH: usize = 4;

pub const DRAFT_PLACEHOLDER: &str = "Paste the email content here...";
pub const RESPONSE_PLACEHOLDER: &str = "Generated response will appear here...";
pub const TRIGGER_LABEL: &str = "[ Generate Response ]";
pub const TRIGGER_BUSY_LABEL: &str = "[ Generating... ]";

/// Split the body into the draft panel and the response panel.
pub fn panel_regions(area: Rect) -> (Rect, Rect) {
    let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn render_composer(frame: &mut Frame, area: Rect, state: &ComposerState, response_scroll: u16) {
    let (draft_area, response_area) = panel_regions(area);
    render_draft_panel(frame, draft_area, state);
    render_response_panel(frame, response_area, state, response_scroll);
}

pub fn trigger_label(state: &ComposerState) -> &'static str {
    if state.is_in_flight() {
        TRIGGER_BUSY_LABEL
    } else {
        TRIGGER_LABEL
    }
}

/// One `Line` per `\n`-separated segment. Blank lines and trailing
/// whitespace are kept; tabs are expanded to spaces.
pub fn response_lines(text: &str) -> Vec<Line<'static>> {
    text.split('\n')
        .map(|line| Line::raw(expand_tabs(line)))
        .collect()
}

/// Inner area of the response panel for a terminal of the given size.
pub fn response_viewport(screen: Rect) -> Rect {
    let (_, body, _) = layout_regions(screen);
    let (_, response) = panel_regions(body);
    Block::default().borders(Borders::ALL).inner(response)
}

/// Rows the response occupies once wrapped to `width` columns.
pub fn response_row_count(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    Paragraph::new(response_lines(text))
        .wrap(Wrap { trim: false })
        .line_count(width)
}

/// Largest useful scroll offset for `text` shown in `viewport`.
pub fn max_response_scroll(text: &str, viewport: Rect) -> u16 {
    let rows = response_row_count(text, viewport.width);
    rows.saturating_sub(viewport.height as usize)
        .min(u16::MAX as usize) as u16
}

/// Screen rows of the draft hard-wrapped at `width` columns.
///
/// Every `\n`-separated line yields at least one row, so blank lines stay
/// visible.
pub fn draft_rows(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    text.split('\n')
        .flat_map(|line| wrap_row(&expand_tabs(line), width))
        .collect()
}

/// (row, column) of the draft cursor within [`draft_rows`] for `width`.
pub fn draft_cursor(draft: &Draft, width: u16) -> (usize, u16) {
    let width = width.max(1) as usize;
    let before = &draft.text()[..draft.cursor()];
    let (done, current) = match before.rsplit_once('\n') {
        Some((done, current)) => (Some(done), current),
        None => (None, before),
    };

    let full_rows: usize = done
        .map(|done| {
            done.split('\n')
                .map(|line| wrap_row(&expand_tabs(line), width).len())
                .sum()
        })
        .unwrap_or(0);

    let current_rows = wrap_row(&expand_tabs(current), width);
    let row = full_rows + current_rows.len() - 1;
    let col = current_rows.last().map(|r| r.width()).unwrap_or(0);
    if col >= width {
        (row + 1, 0)
    } else {
        (row, col as u16)
    }
}

fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Greedy char wrap of one line. Never returns an empty vec.
fn wrap_row(line: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if row_width + ch_width > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(ch);
        row_width += ch_width;
    }
    rows.push(row);
    rows
}

fn panel_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
}

fn render_draft_panel(frame: &mut Frame, area: Rect, state: &ComposerState) {
    let block = panel_block("Incoming Email");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    let (editor, trigger, error) = (chunks[0], chunks[1], chunks[2]);

    let draft = &state.draft;
    if draft.text().is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            DRAFT_PLACEHOLDER,
            Style::default().fg(MUTED_TEXT),
        ));
        frame.render_widget(placeholder, editor);
    } else {
        let (cursor_row, _) = draft_cursor(draft, editor.width);
        let scroll = cursor_row.saturating_sub(editor.height.saturating_sub(1) as usize);
        let rows: Vec<Line> = draft_rows(draft.text(), editor.width)
            .into_iter()
            .skip(scroll)
            .take(editor.height as usize)
            .map(Line::raw)
            .collect();
        let paragraph = Paragraph::new(rows).style(Style::default().fg(HEADER_TEXT));
        frame.render_widget(paragraph, editor);
    }
    place_cursor(frame, editor, draft);

    let trigger_style = if state.can_dispatch() {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(BRAND_BLUE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED).add_modifier(Modifier::DIM)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(trigger_label(state), trigger_style)),
        trigger,
    );

    if let Some(message) = state.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(STATUS_ERROR))),
            error,
        );
    }
}

fn place_cursor(frame: &mut Frame, editor: Rect, draft: &Draft) {
    if editor.width == 0 || editor.height == 0 {
        return;
    }
    let (row, col) = draft_cursor(draft, editor.width);
    let visible_row = row.min(editor.height.saturating_sub(1) as usize) as u16;
    frame.set_cursor_position((editor.x + col, editor.y + visible_row));
}

fn render_response_panel(frame: &mut Frame, area: Rect, state: &ComposerState, scroll: u16) {
    let block = panel_block("Generated Response");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let RequestState::InFlight { animation_tick, .. } = state.request {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled("Generating response...", Style::default().fg(HEADER_TEXT)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    match state.response() {
        Some(text) => {
            let scroll = scroll.min(max_response_scroll(text, inner));
            let paragraph = Paragraph::new(response_lines(text))
                .style(Style::default().fg(HEADER_TEXT))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0));
            frame.render_widget(paragraph, inner);
        }
        None => {
            let placeholder = Paragraph::new(Span::styled(
                RESPONSE_PLACEHOLDER,
                Style::default().fg(MUTED_TEXT),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(placeholder, inner);
        }
    }
}
