use crate::ui::app::App;
use ratatui::layout::Position;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let model = app.screen_model();
    let screen = app.screen(&model);

    frame.render_widget(Clear, area);
    frame.render_widget(&screen, area);

    if let Some((x, y)) = screen.cursor_position(area) {
        frame.set_cursor_position(Position::new(x, y));
    }
}
