use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screen::render_screen;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.palette()).widget(), header);
    frame.render_widget(Clear, body);
    render_screen(frame, body, app.screen(), app.palette());
    Footer::new(app.screen().is_modal_open()).render(frame, footer);

    // Hidden dialogs render nothing.
    app.verdict_dialog()
        .render(frame, area, app.screen().action_cursor);
    app.feedback_dialog()
        .render(frame, area, app.screen().action_cursor);
}
