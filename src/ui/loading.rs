use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Loading screen, or the load failure with its restart hint.
pub fn render(frame: &mut Frame, area: Rect, failure: Option<&str>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TRIVIA QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    match failure {
        None => content.push(Line::from("Now loading...".fg(Color::DarkGray))),
        Some(reason) => {
            content.push(Line::from(Span::styled(
                format!("Failed to load questions ({})", reason),
                Style::default().fg(Color::Red),
            )));
            content.push(Line::from(""));
            content.push(Line::from(""));
            content.push(Line::from(vec![
                Span::styled("r", Style::default().fg(Color::Green).bold()),
                " retry  ·  q quit".fg(Color::DarkGray),
            ]));
        }
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, chunks[1]);
}
