use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::{InteractiveApp, Screen};
use crate::interactive::layout::centered_popup;

/// Draw the keyboard shortcuts overlay.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width: u16 = 64;
    let height: u16 = 16;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let separator_style = Style::default().fg(Color::DarkGray);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let current = match app.screen {
        Screen::Home => "Home",
        Screen::Settings => "Settings",
    };

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("{:<30}", "Settings"), header_style),
            Span::styled("General", header_style),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<30}", "\u{2500}".repeat(8)), separator_style),
            Span::styled("\u{2500}".repeat(7), separator_style),
        ]),
        build_help_row("j/k", "Move up/down", "Tab", "Home / Settings", key_style, desc_style),
        build_help_row("Enter", "Open or toggle", "b", "Background picker", key_style, desc_style),
        build_help_row("h/l", "Adjust slider", "x", "Dismiss toast", key_style, desc_style),
        build_help_row("+/-", "Adjust slider", "?", "This help", key_style, desc_style),
        build_help_row("Esc", "Back to home", "q", "Quit", key_style, desc_style),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:<30}", "Background picker"), header_style),
        ]),
        Line::from(Span::styled("\u{2500}".repeat(17), separator_style)),
        build_help_row("Arrows", "Move in grid", "Tab", "Images / Colors", key_style, desc_style),
        build_help_row("Enter", "Apply", "Esc", "Close", key_style, desc_style),
    ];

    let content = Paragraph::new(lines);
    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    frame.render_widget(content, content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        format!("On {} screen. Press ? or Esc to close", current),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, footer_area);
}

/// Build a single row across the two columns.
fn build_help_row<'a>(
    left_key: &'a str,
    left_desc: &'a str,
    right_key: &'a str,
    right_desc: &'a str,
    key_style: Style,
    desc_style: Style,
) -> Line<'a> {
    let mut spans = vec![
        Span::styled(format!("{:<8}", left_key), key_style),
        Span::styled(format!("{:<22}", left_desc), desc_style),
    ];

    if !right_key.is_empty() {
        spans.push(Span::styled(format!("{:<6}", right_key), key_style));
        spans.push(Span::styled(right_desc, desc_style));
    }

    Line::from(spans)
}
