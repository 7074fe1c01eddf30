use crate::ui::app::App;
use crate::ui::composer::render_composer;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::widget(app.endpoint()), header);
    frame.render_widget(Clear, body);
    render_composer(frame, body, &app.composer, app.response_scroll());
    frame.render_widget(Footer::widget(footer), footer);
}
