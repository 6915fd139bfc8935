mod loading;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Loading => loading::render(frame, area, None),
        Screen::Failed(reason) => loading::render(frame, area, Some(reason)),
        Screen::Question => quiz::render(frame, area, app),
        Screen::Finished(summary) => result::render(frame, area, app, *summary),
    }
}
