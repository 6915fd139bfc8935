use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::{App, Feedback, PresentedQuestion};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_feedback(frame, chunks[0], app.feedback());
    render_progress(frame, chunks[1], question);
    render_context(frame, chunks[2], question);
    render_question_text(frame, chunks[3], &question.prompt);
    render_options(frame, chunks[4], &question.choices, app.selected_option());
    render_controls(frame, chunks[5]);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<&Feedback>) {
    let Some(feedback) = feedback else {
        return;
    };
    let color = if feedback.was_correct {
        Color::Green
    } else {
        Color::Red
    };
    let widget = Paragraph::new(feedback.message()).fg(color);
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, question: &PresentedQuestion) {
    let progress = format!("{}/{}", question.number, question.total);
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_context(frame: &mut Frame, area: Rect, question: &PresentedQuestion) {
    let context = [question.category.as_deref(), question.difficulty.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("  ·  ");
    let widget = Paragraph::new(context).fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_label(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter or 1-9 select  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
