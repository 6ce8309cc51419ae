use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::catalog::method_label;
use crate::constants::APP_NAME;
use crate::formatting::{format_location, truncate};
use crate::interactive::app::{InteractiveApp, Screen};
use crate::interactive::palette::{color, Palette};

pub fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let width = area.width as usize;
    let settings = app.store.settings();

    let title = match app.screen {
        Screen::Home => APP_NAME.to_string(),
        Screen::Settings => format!("{} · Settings", APP_NAME),
    };
    let left = vec![Span::styled(
        format!(" {}", title),
        Style::default().fg(color(palette.accent)).add_modifier(Modifier::BOLD),
    )];

    // Right: where and how the schedule applies
    let right_text = format!(
        "{} · {} ",
        truncate(&format_location(settings.location.as_ref()), 28),
        truncate(&method_label(settings.calculation_method), 30)
    );
    let right = Span::styled(right_text, Style::default().fg(color(palette.muted)));

    let right_len = right.content.chars().count();
    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + right_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(right);

    let header = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(color(palette.background)));
    frame.render_widget(header, area);
}
