use ratatui::layout::Rect;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        height: header_height,
        ..area
    };
    let footer = Rect {
        y: area.y + area.height.saturating_sub(footer_height),
        height: footer_height,
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: area.height.saturating_sub(header_height + footer_height),
        ..area
    };
    (header, body, footer)
}
