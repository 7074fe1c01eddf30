use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const PRODUCT_NAME: &str = "E-180R";
pub const TAGLINE: &str = "AI-Powered Email Automation";

pub struct Header;

impl Header {
    pub fn widget(endpoint: &str) -> Paragraph<'_> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                PRODUCT_NAME,
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(TAGLINE, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint, separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
